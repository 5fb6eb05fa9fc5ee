use super::chart::{build_rows, ChartRow};
use super::color::hex_rgb;
use super::controls::{Highlight, ShowControls};
use crate::config::FilterConfig;
use crate::core::traits::{FilterSnapshot, View};
use colored::Colorize;
use std::fmt::Write as _;

/// Renders the chart and the visible items as plain text.
///
/// Each redraw replaces the last frame; the CLI prints whatever is current.
pub struct TextRenderer {
    config: FilterConfig,
    use_color: bool,
    bar_columns: usize,
    last_frame: Option<String>,
    frames_drawn: usize,
}

impl TextRenderer {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            use_color: false,
            bar_columns: 40,
            last_frame: None,
            frames_drawn: 0,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Characters available for a 100% wide bar
    pub fn with_bar_columns(mut self, columns: usize) -> Self {
        self.bar_columns = columns;
        self
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.last_frame.as_deref()
    }

    pub fn take_frame(&mut self) -> Option<String> {
        self.last_frame.take()
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    pub fn render(&self, snapshot: &FilterSnapshot) -> String {
        let mut out = String::new();
        let rows = build_rows(&snapshot.chart, snapshot.selection, &self.config.chart);

        let _ = writeln!(out, "{}", self.config.chart.title);
        let _ = writeln!(out, "{:>10}  {}", "", self.config.chart.heading);
        for row in &rows {
            let _ = writeln!(out, "{}", self.render_row(row));
        }

        let visible = snapshot.visible_items().count();
        let _ = writeln!(
            out,
            "\nShowing {visible} of {} items (minimum {})",
            snapshot.items.len(),
            snapshot.selection
        );
        let _ = writeln!(
            out,
            "{} [{}]",
            self.config.chart.link_text, self.config.shortcuts.jump_to_chart
        );

        for item in snapshot.visible_items() {
            let controls = ShowControls::for_item(item, &snapshot.chart, snapshot.selection);
            let marker = match Highlight::for_item(item, &self.config.highlight) {
                Some(h) => "|".repeat(h.border_px as usize),
                None => String::new(),
            };
            let _ = writeln!(
                out,
                "{marker:>6} {} ({}) {}",
                item.id,
                item.recommended_count,
                controls.text()
            );
        }

        out
    }

    fn render_row(&self, row: &ChartRow) -> String {
        let columns = (row.bar_width_percent as usize * self.bar_columns) / 100;
        let bar = format!("{}{}", "#".repeat(columns), row.threshold);

        if !self.use_color {
            let line = format!("{:>10}  {}", row.count_text(), bar);
            return if row.selected { format!("{line}  <") } else { line };
        }

        let chart = &self.config.chart;
        if row.selected {
            let line = format!("{:>10}  {}", row.count_text(), bar);
            match hex_rgb(&chart.selected) {
                Some((r, g, b)) => line.bold().on_truecolor(r, g, b).to_string(),
                None => line.bold().to_string(),
            }
        } else {
            let bar = match hex_rgb(&chart.background) {
                Some((r, g, b)) => bar.on_truecolor(r, g, b).to_string(),
                None => bar,
            };
            format!("{:>10}  {}", row.count_text(), bar)
        }
    }
}

impl View for TextRenderer {
    fn redraw(&mut self, snapshot: &FilterSnapshot) {
        self.last_frame = Some(self.render(snapshot));
        self.frames_drawn += 1;
    }
}
