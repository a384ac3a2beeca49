// src/specs/mod.rs
//! Page-specific scraping specs.
//!
//! Each spec knows *where the ground truth lives in the HTML* of one
//! upstream page and how to extract it tolerantly via `core::html`.
//! Specs never fetch and never decide output formatting: they take a
//! parsed `Document` and return typed data.
pub mod chart;
