pub mod config;
pub mod dimension;
pub mod neighborhood;
pub mod preferences;
