use crate::Config;
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(data_dir: PathBuf) -> Config {
    Config {
        data_file: data_dir.join("diary.json"),
        static_dir: data_dir.join("static"),
        bind: "127.0.0.1:0".to_string(),
        date_format: "%Y-%m-%d".to_string(),
        atomic_writes: true,
    }
}
