//! Configuration management for staffgraph services.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (STAFFGRAPH__ prefix, `__` between sections)
//! 2. Legacy environment variables (MOVIE_DATABASE_URL, MOVIE_DATABASE_USERNAME,
//!    MOVIE_DATABASE_PASSWORD, SECRET_KEY)
//! 3. Config file (staffgraph.toml)
//! 4. Defaults
//!
//! A `.env` file found in the working directory or one of its parents is
//! merged into the environment first; variables already set in the process
//! take precedence over its entries.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::StaffError;

/// Legacy variable names and the keys they populate.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("MOVIE_DATABASE_URL", "neo4j.uri"),
    ("MOVIE_DATABASE_USERNAME", "neo4j.user"),
    ("MOVIE_DATABASE_PASSWORD", "neo4j.password"),
    ("SECRET_KEY", "secret_key"),
];

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub neo4j: Neo4jConfig,

    /// Process secret. Required at startup, never logged.
    #[serde(default)]
    pub secret_key: Option<String>,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (default: "0.0.0.0:5000").
    #[serde(default = "default_bind")]
    pub bind: String,
}

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jConfig {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Upper bound on pooled connections shared by all requests.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

fn default_bind() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "neo4j".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `<file_prefix>.toml` (optional) and the
    /// process environment.
    pub fn load(file_prefix: &str) -> Result<Self, StaffError> {
        let mut env: HashMap<String, String> = std::env::vars().collect();
        if let Some(path) = find_dotenv(&std::env::current_dir()?) {
            merge_dotenv(&path, &mut env)?;
        }
        Self::load_with_env(file_prefix, env)
    }

    /// Load configuration against an explicit environment map.
    pub fn load_with_env(
        file_prefix: &str,
        env: HashMap<String, String>,
    ) -> Result<Self, StaffError> {
        let mut legacy = Config::builder();
        for (var, key) in LEGACY_ENV {
            let value = env.get(*var).cloned();
            if value.is_some() {
                tracing::debug!(var, key, "Using legacy environment variable");
            }
            legacy = legacy.set_override_option(*key, value)?;
        }

        let cfg = Config::builder()
            .add_source(File::with_name(file_prefix).required(false))
            .add_source(legacy.build()?)
            .add_source(
                Environment::with_prefix("STAFFGRAPH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(env)),
            )
            .build()?;

        Ok(cfg.try_deserialize()?)
    }

    /// Reject configurations the service cannot start with.
    pub fn validate(&self) -> Result<(), StaffError> {
        match self.secret_key.as_deref() {
            Some(s) if !s.is_empty() => {}
            _ => {
                return Err(StaffError::Config(
                    "missing required setting 'secret_key' (set SECRET_KEY or STAFFGRAPH__SECRET_KEY)"
                        .to_string(),
                ))
            }
        }
        if self.neo4j.uri.is_empty() {
            return Err(StaffError::Config("neo4j.uri must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Search `start` and its ancestors for a `.env` file.
pub fn find_dotenv(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}

/// Add the entries of a dotenv file to `env`. Keys already in `env` keep
/// their value.
pub fn merge_dotenv(path: &Path, env: &mut HashMap<String, String>) -> Result<(), StaffError> {
    let entries = dotenvy::from_path_iter(path)
        .map_err(|e| StaffError::Config(format!("failed to read {}: {e}", path.display())))?;

    for entry in entries {
        let (key, value) = entry
            .map_err(|e| StaffError::Config(format!("invalid entry in {}: {e}", path.display())))?;
        env.entry(key).or_insert(value);
    }

    tracing::info!(path = %path.display(), "Loaded .env file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_sources() {
        let cfg = AppConfig::load_with_env("does-not-exist", HashMap::new()).unwrap();
        assert_eq!(cfg.server.bind, "0.0.0.0:5000");
        assert_eq!(cfg.neo4j.uri, "bolt://localhost:7687");
        assert_eq!(cfg.neo4j.user, "neo4j");
        assert_eq!(cfg.neo4j.max_connections, 16);
        assert!(cfg.secret_key.is_none());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_legacy_variables() {
        let cfg = AppConfig::load_with_env(
            "does-not-exist",
            env(&[
                ("MOVIE_DATABASE_URL", "bolt://db:7687"),
                ("MOVIE_DATABASE_USERNAME", "admin"),
                ("MOVIE_DATABASE_PASSWORD", "hunter2"),
                ("SECRET_KEY", "s3cret"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.neo4j.uri, "bolt://db:7687");
        assert_eq!(cfg.neo4j.user, "admin");
        assert_eq!(cfg.neo4j.password, "hunter2");
        assert_eq!(cfg.secret_key.as_deref(), Some("s3cret"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_prefixed_variables_win_over_legacy() {
        let cfg = AppConfig::load_with_env(
            "does-not-exist",
            env(&[
                ("MOVIE_DATABASE_URL", "bolt://legacy:7687"),
                ("STAFFGRAPH__NEO4J__URI", "bolt://primary:7687"),
                ("STAFFGRAPH__NEO4J__MAX_CONNECTIONS", "4"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.neo4j.uri, "bolt://primary:7687");
        assert_eq!(cfg.neo4j.max_connections, 4);
    }

    #[test]
    fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staffgraph.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "secret_key = \"from-file\"\n\n[server]\nbind = \"127.0.0.1:8080\"\n\n[neo4j]\nuser = \"reader\""
        )
        .unwrap();

        let prefix = dir.path().join("staffgraph");
        let cfg = AppConfig::load_with_env(
            prefix.to_str().unwrap(),
            env(&[("MOVIE_DATABASE_USERNAME", "writer")]),
        )
        .unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:8080");
        assert_eq!(cfg.neo4j.user, "writer");
        assert_eq!(cfg.secret_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_empty_secret_rejected() {
        let cfg = AppConfig::load_with_env("does-not-exist", env(&[("SECRET_KEY", "")])).unwrap();
        assert!(matches!(cfg.validate(), Err(StaffError::Config(_))));
    }

    #[test]
    fn test_dotenv_supplies_legacy_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "MOVIE_DATABASE_URL=bolt://dotenv:7687\nMOVIE_DATABASE_PASSWORD=123\nSECRET_KEY=from-dotenv\n",
        )
        .unwrap();

        let mut vars = env(&[("SECRET_KEY", "from-process")]);
        merge_dotenv(&path, &mut vars).unwrap();

        let cfg = AppConfig::load_with_env("does-not-exist", vars).unwrap();
        assert_eq!(cfg.neo4j.uri, "bolt://dotenv:7687");
        assert_eq!(cfg.neo4j.password, "123");
        assert_eq!(cfg.secret_key.as_deref(), Some("from-process"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_find_dotenv_searches_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".env"), "SECRET_KEY=x\n").unwrap();

        let found = find_dotenv(&nested).unwrap();
        assert_eq!(found, dir.path().join(".env"));
    }

    #[test]
    fn test_malformed_dotenv_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "NOT A VALID LINE\n").unwrap();

        let mut vars = HashMap::new();
        assert!(matches!(
            merge_dotenv(&path, &mut vars),
            Err(StaffError::Config(_))
        ));
    }
}
