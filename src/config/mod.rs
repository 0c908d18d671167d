mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides};
pub use types::{
    Config, SourceConfig, ViewConfig, DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
