pub mod app_config;
pub mod error;
pub mod report;

pub use app_config::{Config, OutputFormat};
pub use error::{DemoError, DemoResult};
pub use report::run;
