pub mod apis;
pub mod constants;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod pipeline;
pub mod types;
