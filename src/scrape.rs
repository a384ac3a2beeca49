// src/scrape.rs
//! Top-level pipeline: fetch one chart page, parse it, assemble the
//! snapshot. One synchronous pass per invocation; no state survives
//! between calls.

use chrono::Utc;
use log::{debug, info};

use crate::config::options::{ChartKind, ScrapeOptions};
use crate::core::html::Document;
use crate::core::net::{Fetch, HttpFetcher};
use crate::data::ChartSnapshot;
use crate::error::ScrapeError;
use crate::specs;

/// Fetch and assemble the requested chart with the real HTTP fetcher.
pub fn run(opts: &ScrapeOptions) -> Result<ChartSnapshot, ScrapeError> {
    let fetcher = HttpFetcher::new()?;
    collect_chart(opts.chart, &fetcher)
}

/// Fetch and assemble one chart. The fetcher is injected so tests can
/// feed canned pages; everything from the raw text on is deterministic.
pub fn collect_chart(kind: ChartKind, fetcher: &dyn Fetch) -> Result<ChartSnapshot, ScrapeError> {
    info!("fetching {} chart", kind.slug());
    let text = fetcher.fetch(&format!("{}/print", kind.slug()))?;

    let retrieved = Utc::now().timestamp();
    let doc = Document::parse(&text)?;
    let snapshot = specs::chart::parse_chart(&doc, retrieved)?;

    debug!("assembled {} entries", snapshot.entries.len());
    Ok(snapshot)
}
