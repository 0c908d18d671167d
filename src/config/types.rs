use serde::{Deserialize, Serialize};

/// Endpoint the screen fetches users from when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://6799ee3d747b09cdcccd06bc.mockapi.io/api/v1/users";

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// Remote data source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL returning the JSON array of users.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Initial view settings for the user list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Rows per page when the screen opens. Must be one of `page_size_options`.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Values the page-size selector cycles through.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    /// Jump back to page 1 whenever filter, sort, search or page size change.
    #[serde(default)]
    pub reset_page_on_change: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    PAGE_SIZE_OPTIONS.to_vec()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            reset_page_on_change: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_sections_fill_missing_fields() {
        let config: Config = toml::from_str(
            r#"
[source]
endpoint = "http://localhost:3000/users"

[view]
reset_page_on_change = true
"#,
        )
        .unwrap();
        assert_eq!(config.source.endpoint, "http://localhost:3000/users");
        assert_eq!(config.source.timeout_seconds, 30);
        assert_eq!(config.view.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.view.page_size_options, PAGE_SIZE_OPTIONS.to_vec());
        assert!(config.view.reset_page_on_change);
    }
}
