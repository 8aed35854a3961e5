pub mod config;
pub mod events;
pub mod snapshot;
pub mod turn_engine;
