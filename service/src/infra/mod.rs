//! Infrastructure layer.

pub mod database;
pub mod storage;

pub use self::{database::Database, storage::Storage};
