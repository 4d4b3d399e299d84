pub mod config;
pub mod task;

pub use config::AppConfig;
pub use task::{MAX_DESCRIPTION_BYTES, Task, clamp_description};
