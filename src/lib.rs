pub mod assignment;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod output;
pub mod population;
pub mod sampling;
pub mod state;
pub mod stats;
