/// Bridge defaults
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Keyboard
    pub const SKIP_REPEATS: bool = false; // forward auto-repeat keydowns

    // Storage
    pub const STORAGE_AREA: StorageArea = StorageArea::Local;

    // Logging
    pub const LOG_LEVEL: log::Level = log::Level::Info;
}

/// Which Web Storage area backs the facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageArea {
    /// `window.localStorage`, survives restarts
    #[default]
    Local,
    /// `window.sessionStorage`, lives as long as the tab
    Session,
}
