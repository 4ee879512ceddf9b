// Application layer - Polling use cases and session control
pub mod mac_poller;
pub mod session;
pub mod stats_poller;
pub mod status_repository;
