// Global state

pub mod config_store;
