use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding every entry. Relative paths resolve against the working directory.
    pub data_file: PathBuf,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
    /// Address the web server binds to, e.g. `127.0.0.1:8080`.
    pub bind: String,
    /// chrono format used to pre-fill the date field of the add form. Default is `%Y-%m-%d`.
    pub date_format: String,
    /// Save through a temp file + rename. Set to `false` to truncate and rewrite the file in place.
    pub atomic_writes: bool,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_file: Option<PathBuf>,
    static_dir: Option<PathBuf>,
    bind: Option<String>,
    date_format: Option<String>,
    atomic_writes: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data").join("diary.json"),
            static_dir: PathBuf::from("static"),
            bind: "127.0.0.1:8080".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            atomic_writes: true,
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A config file that exists but cannot be read or parsed is an error.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            data_file: file_config.data_file.unwrap_or(defaults.data_file),
            static_dir: file_config.static_dir.unwrap_or(defaults.static_dir),
            bind: file_config.bind.unwrap_or(defaults.bind),
            date_format: file_config.date_format.unwrap_or(defaults.date_format),
            atomic_writes: file_config.atomic_writes.unwrap_or(defaults.atomic_writes),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("diary").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("diary").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            log::debug!("reading config from {}", path.display());
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("diary").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert!(c.iter().all(|p| p.ends_with("diary/config.toml")));
        }
    }

    #[test]
    fn empty_file_gives_defaults() {
        let fc = Config::parse_file("").unwrap();
        let config = Config::from_file_config(fc);
        assert_eq!(config.data_file, Path::new("data/diary.json"));
        assert_eq!(config.static_dir, Path::new("static"));
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert!(config.atomic_writes);
    }

    #[test]
    fn parse_file_overrides_fields() {
        let toml = r#"
            data_file = "/tmp/my-diary.json"
            bind = "0.0.0.0:9000"
            atomic_writes = false
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.data_file, Path::new("/tmp/my-diary.json"));
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert!(!config.atomic_writes);
        assert_eq!(config.static_dir, Path::new("static"));
    }

    #[test]
    fn parse_file_rejects_wrong_types() {
        assert!(Config::parse_file("atomic_writes = \"yes\"").is_err());
    }
}
