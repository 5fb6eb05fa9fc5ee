//! String constants shared by the view layer and the configuration defaults.

/// Labels shown on chart rows and per-item controls
pub mod labels {
    pub const ALL: &str = "All";
    pub const TOP: &str = "Top";
    pub const SHOW: &str = "Show:";
    pub const RECOMMENDATIONS: &str = "recommendations";
    pub const CHART_TITLE: &str = "Most Popular Comments";
    pub const CHART_HEADING: &str = "Minimum # of recommendations";
    pub const CHART_LINK: &str = "> > Comment filter";
}

/// Element id conventions used by renderers
pub mod element_ids {
    pub const ROW_PREFIX: &str = "summary_id_";
    pub const CHART_ID: &str = "CHART_ID";
    pub const CHART_LINK_ID: &str = "CHART_LINK_ID";
}

/// Default colors
pub mod colors {
    pub const CHART_BACKGROUND: &str = "#CCC";
    pub const CHART_SELECTED: &str = "#F2A175";
    pub const FAVORITE: &str = "#FF7617";
}

/// Default keyboard shortcuts
pub mod shortcuts {
    pub const SHOW_ALL: &str = "alt+g";
    pub const JUMP_TO_CHART: &str = "alt+c";
}

/// Environment variables read at startup
pub mod env_vars {
    pub const CONFIG_DIR: &str = "RECFILTER_CONFIG_DIR";
    pub const LOG: &str = "RECFILTER_LOG";
}

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const APP_DIR_NAME: &str = "recfilter";
