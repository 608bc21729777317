//! Configuration builder
//!
//! Merges configuration from files and CLI arguments. Later sources win:
//! built-in defaults, then the config file, then CLI flags.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// locations are searched and a missing file is not an error.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI site list
    pub fn with_site_name(mut self, sites: Option<String>) -> Self {
        if let Some(s) = sites {
            self.config.search.site_name = s;
        }
        self
    }

    /// Override with CLI search term
    pub fn with_search_term(mut self, term: Option<String>) -> Self {
        if let Some(t) = term {
            self.config.search.search_term = t;
        }
        self
    }

    /// Override with CLI Google search term
    pub fn with_google_search_term(mut self, term: Option<String>) -> Self {
        if let Some(t) = term {
            self.config.search.google_search_term = t;
        }
        self
    }

    /// Override with CLI location
    pub fn with_location(mut self, location: Option<String>) -> Self {
        if let Some(l) = location {
            self.config.search.location = l;
        }
        self
    }

    /// Override with CLI result count
    pub fn with_results_wanted(mut self, count: Option<i64>) -> Self {
        if let Some(c) = count {
            self.config.search.results_wanted = c;
        }
        self
    }

    /// Override with CLI recency window
    pub fn with_hours_old(mut self, hours: Option<i64>) -> Self {
        if let Some(h) = hours {
            self.config.search.hours_old = h;
        }
        self
    }

    /// Override with CLI country
    pub fn with_country_indeed(mut self, country: Option<String>) -> Self {
        if let Some(c) = country {
            self.config.search.country_indeed = c;
        }
        self
    }

    /// Override with CLI LinkedIn description flag
    ///
    /// The flag can only switch fetching on; absence keeps the file value.
    pub fn with_linkedin_fetch_description(mut self, fetch: bool) -> Self {
        if fetch {
            self.config.search.linkedin_fetch_description = true;
        }
        self
    }

    /// Override with CLI proxies
    pub fn with_proxies(mut self, proxies: Option<String>) -> Self {
        if let Some(p) = proxies {
            self.config.search.proxies = Some(p);
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_site_name(Some("linkedin,google".to_string()))
            .with_search_term(Some("platform engineer".to_string()))
            .with_results_wanted(Some(5))
            .with_hours_old(Some(12))
            .with_linkedin_fetch_description(true)
            .with_proxies(Some("p1,p2".to_string()))
            .build();

        assert_eq!(config.search.site_name, "linkedin,google");
        assert_eq!(config.search.search_term, "platform engineer");
        assert_eq!(config.search.results_wanted, 5);
        assert_eq!(config.search.hours_old, 12);
        assert!(config.search.linkedin_fetch_description);
        assert_eq!(config.search.proxies.as_deref(), Some("p1,p2"));
    }

    #[test]
    fn test_none_keeps_existing_value() {
        let config = ConfigBuilder::new()
            .with_location(None)
            .with_country_indeed(None)
            .with_linkedin_fetch_description(false)
            .build();

        assert_eq!(config.search.location, "San Francisco, CA");
        assert_eq!(config.search.country_indeed, "USA");
        assert!(!config.search.linkedin_fetch_description);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[search]\nsite_name = \"glassdoor\"\nlocation = \"Austin, TX\""
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ConfigBuilder::new()
            .with_file(Some(&path))
            .unwrap()
            .with_site_name(Some("indeed".to_string()))
            .build();

        assert_eq!(config.search.site_name, "indeed");
        assert_eq!(config.search.location, "Austin, TX");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = ConfigBuilder::new().with_file(Some("/nonexistent/jobspy.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
