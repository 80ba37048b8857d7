//! Server configuration
//!
//! Configuration is layered: built-in defaults, then an optional
//! `work-manager.toml` (or an explicit file passed on the command line),
//! then `WORK_MANAGER_*` environment variables. CLI flags override the
//! result last, in `main`.

use crate::error::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime settings for the board server
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// Path of the JSON board file
    pub data_file: PathBuf,
    /// Directory of static board assets served at `/`, if any
    pub public_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            data_file: PathBuf::from("tickets.json"),
            public_dir: Some(PathBuf::from("public")),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from defaults, file and environment.
    ///
    /// With no explicit path, a `work-manager.toml` in the working directory
    /// is used when present and silently skipped otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3000)?
            .set_default("data_file", "tickets.json")?
            .set_default("public_dir", "public")?;

        builder = match path {
            Some(file) => builder.add_source(File::from(file)),
            None => builder.add_source(File::with_name("work-manager").required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix("WORK_MANAGER"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_file, PathBuf::from("tickets.json"));
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("server.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "port = 8080\ndata_file = \"/var/lib/board/tickets.json\"").unwrap();

        let config = ServerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.data_file,
            PathBuf::from("/var/lib/board/tickets.json")
        );
        // Untouched keys keep their defaults
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_load_missing_explicit_file_is_an_error() {
        let err = ServerConfig::load(Some(Path::new("/nonexistent/server.toml"))).unwrap_err();
        assert_eq!(err.kind(), "config_error");
    }
}
