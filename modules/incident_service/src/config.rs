//! Configuration for incident service module

use serde::{Deserialize, Serialize};

/// Incident service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of incidents per search results page
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Incident types registered at startup when missing
    #[serde(default)]
    pub seed_incident_types: Vec<String>,

    /// Log every reported/updated incident as a domain event
    #[serde(default = "default_true")]
    pub publish_events: bool,

    /// Run schema migrations at startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            seed_incident_types: Vec::new(),
            publish_events: true,
            run_migrations: true,
        }
    }
}

fn default_page_size() -> u64 {
    crate::domain::service::DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}
