use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::source::ExtractionStrategy;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scraper: ScraperConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    5000
}

/// Outbound scraping configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScraperConfig {
    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
    /// Sources in fallback priority order
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            sources: default_sources(),
        }
    }
}

fn default_timeout() -> u32 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_accept_language() -> String {
    "es-AR,es;q=0.9".to_string()
}

/// A single upstream results page and how to read it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    pub name: String,
    pub url: String,
    pub strategy: ExtractionStrategy,
}

fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig {
            name: "Quini-6-Resultados".to_string(),
            url: "https://www.quini-6-resultados.com.ar/".to_string(),
            strategy: ExtractionStrategy::fixed_table_row(),
        },
        SourceConfig {
            name: "LotoFacil".to_string(),
            url: "https://www.lotofacil.com.ar/quini-6".to_string(),
            strategy: ExtractionStrategy::selector_scan(),
        },
        SourceConfig {
            name: "TuJugada".to_string(),
            url: "https://www.tujugada.com.ar/quini6.asp".to_string(),
            strategy: ExtractionStrategy::permissive_dedup(),
        },
    ]
}
