pub mod db;
pub mod paths;

pub use db::{DB_FILE_NAME, StoreError, TaskStore};
