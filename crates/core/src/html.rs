//! Paragraph and heading extraction from HTML.
//!
//! # Example
//!
//! ```rust
//! use glean_core::{HeadingLevel, extract_headings, extract_paragraphs};
//!
//! let html = b"<h2>Intro</h2><p>Hello world</p><p>Goodbye</p>";
//!
//! assert_eq!(extract_paragraphs(html), "Hello world\nGoodbye");
//! assert_eq!(extract_headings(html).get(HeadingLevel::H2), ["Intro".to_string()]);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::parse::Document;

/// One of the six HTML heading levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// All levels, outermost first.
    pub const ALL: [HeadingLevel; 6] =
        [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3, HeadingLevel::H4, HeadingLevel::H5, HeadingLevel::H6];

    /// The lowercase tag name used to select this level.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Heading text grouped by level.
///
/// Every level is always present; levels with no matching elements map to
/// an empty list. Within a level, entries keep document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HeadingMap {
    levels: BTreeMap<HeadingLevel, Vec<String>>,
}

impl HeadingMap {
    /// Creates a map with all six levels present and empty.
    pub fn new() -> Self {
        Self { levels: HeadingLevel::ALL.iter().map(|level| (*level, Vec::new())).collect() }
    }

    /// Headings found at `level`, in document order.
    pub fn get(&self, level: HeadingLevel) -> &[String] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or_default()
    }

    /// Appends a heading at `level`.
    pub fn push(&mut self, level: HeadingLevel, text: String) {
        self.levels.entry(level).or_default().push(text);
    }

    /// Iterates over every level from H1 to H6, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (HeadingLevel, &[String])> {
        self.levels.iter().map(|(level, texts)| (*level, texts.as_slice()))
    }

    /// Total number of headings across all levels.
    pub fn len(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }

    /// Returns `true` when no level holds a heading.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for HeadingMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the text of every `<p>` element, joined by single newlines.
///
/// Returns an empty string when the document holds no paragraphs.
pub fn extract_paragraphs(html: &[u8]) -> String {
    let doc = Document::from_bytes(html);
    paragraphs_of(&doc)
}

/// Collects heading text per level in document order.
pub fn extract_headings(html: &[u8]) -> HeadingMap {
    let doc = Document::from_bytes(html);
    headings_of(&doc)
}

pub(crate) fn paragraphs_of(doc: &Document) -> String {
    doc.select("p")
        .map(|elements| elements.iter().map(|el| el.text()).collect::<Vec<_>>().join("\n"))
        .unwrap_or_default()
}

pub(crate) fn headings_of(doc: &Document) -> HeadingMap {
    let mut headings = HeadingMap::new();

    for level in HeadingLevel::ALL {
        if let Ok(elements) = doc.select(level.tag()) {
            for element in elements {
                headings.push(level, element.text());
            }
        }
    }

    headings
}
