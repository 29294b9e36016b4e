use crate::params::{Params, StorageArea};

/// Bridge configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_area: StorageArea,
    pub skip_repeats: bool,
    pub log_level: log::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_area: Params::STORAGE_AREA,
            skip_repeats: Params::SKIP_REPEATS,
            log_level: Params::LOG_LEVEL,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a keydown notification should reach the handler
    pub fn forwards(&self, repeat: bool) -> bool {
        !(self.skip_repeats && repeat)
    }
}

impl StorageArea {
    /// Parse an area name (for JS interop)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "local" | "LOCAL" | "localStorage" => Some(StorageArea::Local),
            "session" | "SESSION" | "sessionStorage" => Some(StorageArea::Session),
            _ => None,
        }
    }
}
