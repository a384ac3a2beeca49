// src/core/html.rs
//! Tolerant tag-block scanning over raw markup.
//!
//! Not a general HTML parser: the upstream chart pages are flat and
//! machine-generated, so case-insensitive block slicing is enough.
//! `Document` finds tag blocks by name; `Node::text()` yields the
//! cleaned inner text.

use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::error::ScrapeError;

pub struct Document {
    text: String,
}

impl Document {
    /// Wrap raw page text for navigation.
    ///
    /// Input with no markup at all (error page served as plain text,
    /// empty body) is rejected as `MarkupParse`.
    pub fn parse(text: &str) -> Result<Document, ScrapeError> {
        if !text.contains('<') {
            return Err(ScrapeError::MarkupParse(s!("no markup in document")));
        }
        Ok(Document { text: s!(text) })
    }

    /// First `<tag ...>...</tag>` block, if any.
    pub fn find_first(&self, tag: &str) -> Option<Node<'_>> {
        next_block_ci(&self.text, tag, 0).map(|(s, e)| Node {
            block: &self.text[s..e],
        })
    }

    /// All `<tag ...>...</tag>` blocks, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<Node<'_>> {
        find_all_in(&self.text, tag, 0)
    }
}

/// One tag block, opener through closing tag.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    block: &'a str,
}

impl<'a> Node<'a> {
    /// Blocks of `tag` nested inside this node.
    pub fn find_all(&self, tag: &str) -> Vec<Node<'a>> {
        // Start past our own opener so a node never matches itself.
        let from = self.block.find('>').map(|i| i + 1).unwrap_or(0);
        find_all_in(self.block, tag, from)
    }

    /// Inner text: nested tags stripped, entities decoded, whitespace
    /// collapsed and trimmed.
    pub fn text(&self) -> String {
        strip_tags(normalize_entities(&inner_after_open_tag(self.block)))
    }
}

/* ---------------- scanning helpers ---------------- */

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

fn find_all_in<'a>(s: &'a str, tag: &str, from: usize) -> Vec<Node<'a>> {
    let mut out = Vec::new();
    let mut pos = from;
    while let Some((bs, be)) = next_block_ci(s, tag, pos) {
        out.push(Node { block: &s[bs..be] });
        pos = be;
    }
    out
}

/// Find `<tag ...> ... </tag>` starting at `from`. Case-insensitive and
/// tolerant of attributes in the opener.
fn next_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let open = format!("<{}", to_lower(tag));
    let close = format!("</{}>", to_lower(tag));
    let lc = to_lower(s);

    let start = find_tag_open(&lc, &open, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&close)?;
    Some((start, open_end + end_rel + close.len()))
}

/// Next opener position whose tag name ends at the pattern, so `<tr`
/// does not match `<track` and `<th` does not match `<thead`.
fn find_tag_open(lc: &str, open: &str, from: usize) -> Option<usize> {
    let mut at = from;
    loop {
        let pos = lc.get(at..)?.find(open)? + at;
        match lc.as_bytes().get(pos + open.len()) {
            Some(b'>') | Some(b'/') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n')
            | None => return Some(pos),
            _ => at = pos + 1,
        }
    }
}

fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return s!(&block[oe + 1..cs]);
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}
