// src/error.rs
//! Failure taxonomy for the scrape pipeline.
//!
//! Every failure keeps its specific kind so callers and logs can tell a
//! dead upstream from a malformed page title. Nothing here is retried.

use std::{error::Error, fmt};

#[derive(Debug)]
pub enum ScrapeError {
    /// Connection or transport failure while fetching the page.
    Fetch(String),
    /// Upstream answered with a non-success HTTP status.
    UpstreamHttp { status: u16, url: String },
    /// The fetched text is not parseable markup.
    MarkupParse(String),
    /// The page has no title text.
    TitleMissing,
    /// Title present but missing the `-` between chart name and date phrase.
    TitleMalformed,
    /// Date phrase after the separator matches neither accepted pattern.
    DateUnparsable(String),
    /// An integer column held non-empty, non-numeric text.
    CellTypeMismatch { field: &'static str, value: String },
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(msg) => write!(f, "fetch failed: {msg}"),
            Self::UpstreamHttp { status, url } => {
                write!(f, "upstream returned HTTP {status} for {url}")
            }
            Self::MarkupParse(msg) => write!(f, "could not parse page markup: {msg}"),
            Self::TitleMissing => write!(f, "no title was found in the document"),
            Self::TitleMalformed => write!(f, "page title incorrectly formed (no '-' separator)"),
            Self::DateUnparsable(phrase) => {
                write!(f, "could not parse chart date from title phrase {phrase:?}")
            }
            Self::CellTypeMismatch { field, value } => {
                write!(f, "column {field:?} expected an integer, got {value:?}")
            }
        }
    }
}

impl Error for ScrapeError {}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(code) => Self::UpstreamHttp {
                status: code.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => Self::Fetch(e.to_string()),
        }
    }
}
