//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.canvas-instructor/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover all options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::logging::Logger;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InstructorConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub course: CourseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CourseConfig {
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub directory: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// ============================================================================
// Overrides (env vars and CLI flags, already collected)
// ============================================================================

/// Values that win over the config file. `main` fills these from the
/// environment and from clap.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub port: Option<u16>,
    pub course_id: Option<String>,
    pub log_dir: Option<String>,
}

impl Overrides {
    /// Reads `CANVAS_BASE_URL`, `PORT`, `COURSE_ID` and `CANVAS_LOG_DIR`.
    ///
    /// An unparsable `PORT` is ignored rather than fatal.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CANVAS_BASE_URL").ok(),
            port: std::env::var("PORT").ok().and_then(|p| p.parse().ok()),
            course_id: std::env::var("COURSE_ID").ok(),
            log_dir: std::env::var("CANVAS_LOG_DIR").ok(),
        }
    }

    /// `self` wins, `fallback` fills the gaps.
    pub fn or(self, fallback: Overrides) -> Overrides {
        Overrides {
            base_url: self.base_url.or(fallback.base_url),
            port: self.port.or(fallback.port),
            course_id: self.course_id.or(fallback.course_id),
            log_dir: self.log_dir.or(fallback.log_dir),
        }
    }
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub course_id: String,
    pub log_dir: PathBuf,
    pub log_level: log::LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingCourseId,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::MissingCourseId => write!(
                f,
                "no course id configured (use --course, COURSE_ID or [course] id in the config file)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.canvas-instructor/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".canvas-instructor").join("config.toml"))
}

/// Load config from `~/.canvas-instructor/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `InstructorConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(log: &Logger) -> Result<InstructorConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            log.warn("Could not determine home directory, using default config");
            return Ok(InstructorConfig::default());
        }
    };
    load_config_from(&path, log)
}

pub fn load_config_from(path: &Path, log: &Logger) -> Result<InstructorConfig, ConfigError> {
    if !path.exists() {
        log.info(format_args!(
            "No config file found, generating default at {}",
            path.display()
        ));
        generate_default_config(path, log);
        return Ok(InstructorConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: InstructorConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    log.info(format_args!("Loaded config from {}", path.display()));
    log.debug(format_args!("Config: {config:?}"));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, log: &Logger) {
    let default_content = r#"# canvas-instructor configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [backend]
# host = "localhost"
# port = 3000                        # Or set PORT env var
# base_url = "http://localhost:3000" # Wins over host/port. Or set CANVAS_BASE_URL

# [course]
# id = "12345"                       # Or set COURSE_ID env var

# [logging]
# directory = "logs"                 # Or set CANVAS_LOG_DIR env var
# level = "info"                     # "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        log.warn(format_args!("Failed to create config directory: {e}"));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        log.warn(format_args!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → overrides.
pub fn resolve(config: &InstructorConfig, overrides: Overrides) -> Result<ResolvedConfig, ConfigError> {
    // Base URL: explicit URL always wins over host/port
    let base_url = match overrides.base_url.or_else(|| config.backend.base_url.clone()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => {
            let host = config.backend.host.as_deref().unwrap_or(DEFAULT_HOST);
            let port = overrides.port.or(config.backend.port).unwrap_or(DEFAULT_PORT);
            format!("http://{host}:{port}")
        }
    };

    let course_id = overrides
        .course_id
        .or_else(|| config.course.id.clone())
        .filter(|id| !id.trim().is_empty())
        .ok_or(ConfigError::MissingCourseId)?;

    let log_dir = overrides
        .log_dir
        .or_else(|| config.logging.directory.clone())
        .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string());

    let log_level = config
        .logging
        .level
        .as_deref()
        .and_then(|level| level.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    Ok(ResolvedConfig {
        base_url,
        course_id,
        log_dir: PathBuf::from(log_dir),
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_course(id: &str) -> Overrides {
        Overrides {
            course_id: Some(id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = InstructorConfig::default();
        let resolved = resolve(&config, with_course("42")).unwrap();
        assert_eq!(resolved.base_url, "http://localhost:3000");
        assert_eq!(resolved.course_id, "42");
        assert_eq!(resolved.log_dir, PathBuf::from("logs"));
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_resolve_missing_course_id_is_error() {
        let config = InstructorConfig::default();
        let err = resolve(&config, Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCourseId));
    }

    #[test]
    fn test_resolve_blank_course_id_is_error() {
        let config = InstructorConfig::default();
        assert!(resolve(&config, with_course("  ")).is_err());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = InstructorConfig {
            backend: BackendConfig {
                host: Some("10.0.0.5".to_string()),
                port: Some(8080),
                base_url: None,
            },
            course: CourseConfig {
                id: Some("777".to_string()),
            },
            logging: LoggingConfig {
                directory: Some("/tmp/ci-logs".to_string()),
                level: Some("debug".to_string()),
            },
        };
        let resolved = resolve(&config, Overrides::default()).unwrap();
        assert_eq!(resolved.base_url, "http://10.0.0.5:8080");
        assert_eq!(resolved.course_id, "777");
        assert_eq!(resolved.log_dir, PathBuf::from("/tmp/ci-logs"));
        assert_eq!(resolved.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn test_override_port_wins_over_file() {
        let config = InstructorConfig {
            backend: BackendConfig {
                port: Some(8080),
                ..Default::default()
            },
            ..Default::default()
        };
        let overrides = Overrides {
            port: Some(4000),
            ..with_course("1")
        };
        let resolved = resolve(&config, overrides).unwrap();
        assert_eq!(resolved.base_url, "http://localhost:4000");
    }

    #[test]
    fn test_base_url_wins_over_host_and_port() {
        let config = InstructorConfig {
            backend: BackendConfig {
                host: Some("ignored".to_string()),
                port: Some(1),
                base_url: Some("https://lms.example.edu/api/".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, with_course("1")).unwrap();
        assert_eq!(resolved.base_url, "https://lms.example.edu/api");
    }

    #[test]
    fn test_cli_overrides_win_over_env() {
        let cli = Overrides {
            course_id: Some("cli".to_string()),
            ..Default::default()
        };
        let env = Overrides {
            course_id: Some("env".to_string()),
            port: Some(5000),
            ..Default::default()
        };
        let merged = cli.or(env);
        assert_eq!(merged.course_id.as_deref(), Some("cli"));
        assert_eq!(merged.port, Some(5000));
    }

    #[test]
    fn test_bad_level_falls_back_to_default() {
        let config = InstructorConfig {
            logging: LoggingConfig {
                level: Some("chatty".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, with_course("1")).unwrap();
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[backend]
host = "127.0.0.1"
port = 3100

[course]
id = "9876"

[logging]
directory = "var/log"
level = "warn"
"#;
        let config: InstructorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.backend.port, Some(3100));
        assert_eq!(config.course.id.as_deref(), Some("9876"));
        assert_eq!(config.logging.level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[course]
id = "5"
"#;
        let config: InstructorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.course.id.as_deref(), Some("5"));
        assert!(config.backend.port.is_none());
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("canvas-instructor-cfg-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path, &Logger::discard()).unwrap();
        assert!(config.course.id.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [course]"));
        // Everything is commented out, so it parses to the defaults.
        let reparsed: InstructorConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.backend.host.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("canvas-instructor-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[backend\nport = ").unwrap();

        let err = load_config_from(&path, &Logger::discard()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        fs::remove_dir_all(&dir).unwrap();
    }
}
