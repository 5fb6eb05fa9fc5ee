//! Configuration validation for recfilter

use super::FilterConfig;
use crate::core::errors::ConfigError;
use crate::view::color::hex_rgb;
use crate::view::shortcuts::KeyChord;

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Checks every field of a [`FilterConfig`] and collects all findings
#[derive(Debug, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, config: &FilterConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.validate_chart(config, &mut report);
        self.validate_highlight(config, &mut report);
        self.validate_watcher(config, &mut report);
        self.validate_logging(config, &mut report);
        self.validate_shortcuts(config, &mut report);

        report
    }

    fn validate_chart(&self, config: &FilterConfig, report: &mut ValidationReport) {
        let chart = &config.chart;
        if !(1..=100).contains(&chart.bar_max_width_percent) {
            report.add_error(ConfigError::invalid(
                "chart.bar_max_width_percent",
                format!("{} is outside 1..=100", chart.bar_max_width_percent),
            ));
        }

        for (field, value) in [
            ("chart.background", &chart.background),
            ("chart.selected", &chart.selected),
        ] {
            check_color(field, value, report);
        }

        if chart.row_prefix.is_empty() {
            report.add_warning("chart.row_prefix is empty; row ids will be bare numbers".to_string());
        }
    }

    fn validate_highlight(&self, config: &FilterConfig, report: &mut ValidationReport) {
        check_color("highlight.color", &config.highlight.color, report);
        if config.highlight.min_count == 0 {
            report.add_warning("highlight.min_count is 0; every item will be highlighted".to_string());
        }
    }

    fn validate_watcher(&self, config: &FilterConfig, report: &mut ValidationReport) {
        if config.watcher.max_coalesced_rebuilds == 0 {
            report.add_error(ConfigError::invalid(
                "watcher.max_coalesced_rebuilds",
                "must be greater than 0",
            ));
        }
        if config.watcher.debounce_ms == 0 {
            report.add_warning("watcher.debounce_ms is 0; every file event triggers a rebuild".to_string());
        }
    }

    fn validate_logging(&self, config: &FilterConfig, report: &mut ValidationReport) {
        let level = config.logging.level.to_ascii_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            report.add_error(ConfigError::invalid(
                "logging.level",
                format!(
                    "Invalid log level '{}', must be one of: {VALID_LOG_LEVELS:?}",
                    config.logging.level
                ),
            ));
        }
    }

    fn validate_shortcuts(&self, config: &FilterConfig, report: &mut ValidationReport) {
        for (field, value) in [
            ("shortcuts.show_all", &config.shortcuts.show_all),
            ("shortcuts.jump_to_chart", &config.shortcuts.jump_to_chart),
        ] {
            if let Err(reason) = KeyChord::parse(value) {
                report.add_error(ConfigError::invalid(field, reason));
            }
        }
    }
}

fn check_color(field: &str, value: &str, report: &mut ValidationReport) {
    if hex_rgb(value).is_none() {
        report.add_error(ConfigError::invalid(
            field,
            format!("'{value}' is not a #RGB or #RRGGBB color"),
        ));
    }
}

/// Validation report containing all findings
#[derive(Debug)]
pub struct ValidationReport {
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn add_error(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn print_summary(&self) {
        println!("Configuration Validation Report");
        println!("==============================");

        if !self.warnings.is_empty() {
            println!("\nWarnings:");
            for warning in &self.warnings {
                println!("   {warning}");
            }
        }

        if !self.errors.is_empty() {
            println!("\nErrors:");
            for error in &self.errors {
                println!("   {error}");
            }
        }

        println!("\nSummary: {} errors, {} warnings", self.errors.len(), self.warnings.len());
    }
}
