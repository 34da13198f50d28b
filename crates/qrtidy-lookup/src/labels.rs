//! Extraction of `■Label:value` segments from merchant description text.
//!
//! Yahoo! Shopping listings for media and games usually carry a details block
//! such as `■タイトル:Foo<br>■機種:Nintendo Switch<br>■メーカー:Bar<br>`.
//! A segment starts at `■`, the label runs to the first `:` (or full-width
//! `：`), and the value runs to the next line break (`<br>`, `<br/>`,
//! `<br />`, newline) or the next `■`, whichever comes first.

use std::sync::LazyLock;

use regex::Regex;

const SEGMENT_MARKER: char = '■';

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>|\r?\n").expect("valid line-break regex"));

/// Labeled segments found in one description, in document order.
#[derive(Debug, Default)]
pub struct LabeledSegments<'a> {
    segments: Vec<(&'a str, &'a str)>,
}

impl<'a> LabeledSegments<'a> {
    /// Parses every `■Label:value` segment in `text`. Never fails; text
    /// without markers yields no segments.
    #[must_use]
    pub fn parse(text: &'a str) -> Self {
        let segments = text
            .split(SEGMENT_MARKER)
            .skip(1)
            .filter_map(|chunk| {
                let (label, rest) = chunk.split_once([':', '：'])?;
                let value = LINE_BREAK.split(rest).next().unwrap_or_default();
                Some((label.trim(), value.trim()))
            })
            .collect();
        Self { segments }
    }

    /// Value of the first segment labeled `label`, or `""` if there is none.
    #[must_use]
    pub fn get(&self, label: &str) -> &'a str {
        self.segments
            .iter()
            .find(|(l, _)| *l == label)
            .map_or("", |(_, v)| *v)
    }

    /// First non-empty value among `labels`, tried in order.
    #[must_use]
    pub fn get_any(&self, labels: &[&str]) -> &'a str {
        labels
            .iter()
            .map(|label| self.get(label))
            .find(|v| !v.is_empty())
            .unwrap_or("")
    }
}
