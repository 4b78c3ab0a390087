//! File-backed diary: a list of `(date, content)` entries kept in one JSON file.
pub mod config;
pub mod diary;
pub mod entries;
pub mod entry;
pub mod error;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use diary::Diary;
pub use entry::Entry;
pub use error::DiaryError;
pub use store::Store;
