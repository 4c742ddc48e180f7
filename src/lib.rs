pub mod client;
pub mod comic;
pub mod config;
pub mod database;
pub mod download;
pub mod error;
mod imports;
pub mod sync;
#[cfg(test)]
mod test_util;

pub use error::{Error, Result};
