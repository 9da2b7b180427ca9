pub mod config;
pub mod draw;
pub mod metrics;
pub mod orchestrator;
pub mod source;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ScraperConfig,
    ServerConfig, SourceConfig, CONFIG_PATH_ENV,
};
pub use draw::{example_results, Category, DrawEntry, DrawMeta, ResultSet};
pub use orchestrator::{FallbackOrchestrator, FetchOutcome, SourceAttempt};
pub use source::{
    build_sources, ExtractionStrategy, HttpFetcher, PageFetcher, ScrapedSource, Source,
    SourceError,
};
