use clap::Parser;
use diary_core::Config;
use std::path::PathBuf;

/// diary — a tiny web diary backed by a JSON file
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Cli {
    /// Prints the path of the diary file and exits
    #[arg(long, short)]
    pub path: bool,
    /// JSON file holding the entries. Overrides `data_file` from config.toml.
    #[arg(long, env = "DIARY_DATA_FILE")]
    pub data_file: Option<PathBuf>,
    /// Directory served under `/static/`.
    #[arg(long, env = "DIARY_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
    /// Address to listen on (e.g. `127.0.0.1:8080`, `0.0.0.0:80`).
    #[arg(long, short, env = "DIARY_BIND")]
    pub bind: Option<String>,
    /// Truncate and rewrite the diary file in place instead of replacing it atomically.
    #[arg(long)]
    pub in_place_writes: bool,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }

    /// Overlays the flags that were given on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(data_file) = &self.data_file {
            config.data_file = data_file.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(bind) = &self.bind {
            config.bind = bind.clone();
        }
        if self.in_place_writes {
            config.atomic_writes = false;
        }
        config
    }
}
