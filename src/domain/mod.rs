// Domain layer - Core models shared by the pollers and widgets
pub mod clients;
pub mod stats;
