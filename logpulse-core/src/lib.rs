pub mod conf;
pub mod engine;
pub mod error;
pub mod event;
pub mod logging;
pub mod metrics;
pub mod parser;
pub mod report;
