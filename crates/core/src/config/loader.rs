use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "QUINI_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "quini.toml";

/// Load configuration with environment variable overrides.
///
/// An explicit `path` must exist. Without one, `quini.toml` is read if it is
/// there and built-in defaults apply otherwise. `QUINI_`-prefixed variables
/// override file values (`QUINI_SCRAPER__TIMEOUT_SECS=5`), and the plain
/// `PORT` variable wins over everything for `server.port`.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            Toml::file(path)
        }
        None => Toml::file(DEFAULT_CONFIG_FILE),
    };

    let config: Config = Figment::new()
        .merge(file)
        .merge(Env::prefixed("QUINI_").split("__"))
        .merge(Env::raw().filter_map(|key| {
            key.as_str()
                .eq_ignore_ascii_case("port")
                .then(|| "server.port".into())
        }))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[server]
port = 9000
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.scraper.sources.len(), 3);
    }

    #[test]
    fn test_load_config_from_str_invalid_port() {
        let toml = r#"
[server]
port = "not-a-port"
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Some(Path::new("/nonexistent/quini.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[server]
host = "127.0.0.1"
port = 3000

[scraper]
timeout_secs = 4
"#
        )
        .unwrap();

        Jail::expect_with(|_jail| {
            let config = load_config(Some(temp_file.path())).unwrap();
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.server.host.to_string(), "127.0.0.1");
            assert_eq!(config.scraper.timeout_secs, 4);
            Ok(())
        });
    }

    #[test]
    fn test_load_config_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = load_config(None).unwrap();
            assert_eq!(config.server.port, 5000);
            assert_eq!(config.scraper.timeout_secs, 10);
            Ok(())
        });
    }

    #[test]
    fn test_port_env_var_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
[server]
port = 7000
"#,
            )?;
            jail.set_env("PORT", "8123");

            let config = load_config(None).unwrap();
            assert_eq!(config.server.port, 8123);
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env_overrides_nested_keys() {
        Jail::expect_with(|jail| {
            jail.set_env("QUINI_SCRAPER__TIMEOUT_SECS", "3");
            jail.set_env("QUINI_SERVER__HOST", "127.0.0.1");

            let config = load_config(None).unwrap();
            assert_eq!(config.scraper.timeout_secs, 3);
            assert_eq!(config.server.host.to_string(), "127.0.0.1");
            Ok(())
        });
    }
}
