pub mod config;
pub mod grading;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod request;
pub mod shell;
