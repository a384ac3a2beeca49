// src/config/options.rs
use std::path::PathBuf;

/// Which upstream chart variant to request. Passed through to the page
/// URL unchanged; the two variants share one table format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Singles,
    Albums,
}

impl ChartKind {
    /// Path segment on the upstream site.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::Singles => "singles",
            ChartKind::Albums => "albums",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub chart: ChartKind,     // which chart to scrape
    pub out: Option<PathBuf>, // write JSON here instead of stdout
    pub pretty: bool,         // indent the JSON output
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            chart: ChartKind::Singles,
            out: None,
            pretty: false,
        }
    }
}
