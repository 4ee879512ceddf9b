// Terminal dashboard client for a local access point's status endpoints
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
