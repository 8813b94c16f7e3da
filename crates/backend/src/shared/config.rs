use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory with the built frontend
    pub static_dir: String,
    /// Entry page served for client-side routes
    pub index_file: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 5000
static_dir = "build"
index_file = "index.html"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `PORT` from the environment wins over either source.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match exe_dir().map(|dir| dir.join("config.toml")) {
        Some(config_path) if config_path.exists() => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents)?
        }
        Some(config_path) => {
            tracing::warn!("config.toml not found at: {}", config_path.display());
            default_config()?
        }
        None => default_config()?,
    };

    apply_port_override(&mut config, std::env::var("PORT").ok().as_deref());
    Ok(config)
}

fn default_config() -> anyhow::Result<Config> {
    tracing::info!("Using default embedded configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

fn apply_port_override(config: &mut Config, port: Option<&str>) {
    let Some(raw) = port else {
        return;
    };
    match raw.trim().parse::<u16>() {
        Ok(port) => config.server.port = port,
        Err(e) => tracing::warn!("Ignoring PORT={:?}: {}", raw, e),
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Resolves the static directory. Relative paths are tried next to the
/// executable first, then relative to the working directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Some(exe_dir) = exe_dir() {
        let candidate = exe_dir.join(dir);
        if candidate.is_dir() {
            return candidate;
        }
    }

    PathBuf::from(&config.server.static_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.static_dir, "build");
        assert_eq!(config.server.index_file, "index.html");
    }

    #[test]
    fn test_port_override() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_port_override(&mut config, None);
        assert_eq!(config.server.port, 5000);

        apply_port_override(&mut config, Some("8080"));
        assert_eq!(config.server.port, 8080);

        apply_port_override(&mut config, Some("not-a-port"));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_absolute_static_dir_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            server: ServerConfig {
                port: 1,
                static_dir: dir.path().display().to_string(),
                index_file: "index.html".into(),
            },
        };
        assert_eq!(get_static_dir(&config), dir.path());
    }
}
