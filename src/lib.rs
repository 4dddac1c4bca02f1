// Library modules for integration tests
pub mod cli;
pub mod config;
pub mod conversion;
pub mod error;
pub mod lexicon;
pub mod logging;
pub mod models;
