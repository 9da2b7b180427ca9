use super::{types::Config, ConfigError};
use crate::source::ExtractionStrategy;

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Scraper timeout is not 0
/// - At least one source, each with a name, a URL and a usable strategy
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.scraper.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "scraper.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.scraper.sources.is_empty() {
        return Err(ConfigError::ValidationError(
            "scraper.sources must list at least one source".to_string(),
        ));
    }

    for (i, source) in config.scraper.sources.iter().enumerate() {
        if source.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "scraper.sources[{}].name cannot be empty",
                i
            )));
        }
        if source.url.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "scraper.sources[{}] ({}) has no url",
                i, source.name
            )));
        }
        match &source.strategy {
            ExtractionStrategy::SelectorScan { selectors } if selectors.is_empty() => {
                return Err(ConfigError::ValidationError(format!(
                    "scraper.sources[{}] ({}) has no selectors",
                    i, source.name
                )));
            }
            ExtractionStrategy::FixedTableRow { number_rows, .. } if number_rows.is_empty() => {
                return Err(ConfigError::ValidationError(format!(
                    "scraper.sources[{}] ({}) has no number rows",
                    i, source.name
                )));
            }
            ExtractionStrategy::PermissiveDedup { cap, .. } if *cap == 0 => {
                return Err(ConfigError::ValidationError(format!(
                    "scraper.sources[{}] ({}) cap cannot be 0",
                    i, source.name
                )));
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScraperConfig, ServerConfig, SourceConfig};

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                port: 0,
                ..Default::default()
            },
            scraper: ScraperConfig::default(),
        };
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_timeout_zero_fails() {
        let mut config = Config::default();
        config.scraper.timeout_secs = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_no_sources_fails() {
        let mut config = Config::default();
        config.scraper.sources.clear();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("at least one source"));
    }

    #[test]
    fn test_validate_empty_selectors_fails() {
        let mut config = Config::default();
        config.scraper.sources = vec![SourceConfig {
            name: "empty".to_string(),
            url: "http://localhost/".to_string(),
            strategy: ExtractionStrategy::SelectorScan { selectors: vec![] },
        }];
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("no selectors"));
    }

    #[test]
    fn test_validate_blank_url_fails() {
        let mut config = Config::default();
        config.scraper.sources[1].url = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("LotoFacil"));
    }
}
