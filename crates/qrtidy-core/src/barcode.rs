//! Classification of raw scanned strings into lookup-ready code types.
//!
//! The scan layer hands over already-decoded strings. A two-tier book barcode
//! (ISBN plus the supplementary book JAN printed beside it) arrives as the two
//! values joined by `-`, ISBN first. Everything here is pure: the same input
//! always yields the same classification.

use std::fmt;

use serde::Serialize;

const ISBN_PREFIXES: [&str; 2] = ["978", "979"];
const MAGAZINE_PREFIX: &str = "491";
const TWO_TIER_SEPARATOR: char = '-';

/// Semantic type of a scanned code, carrying the identifier used for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CodeClassification {
    /// A book, identified by its ISBN (EAN-13 with a `978`/`979` prefix).
    Book { isbn: String },
    /// A periodical, identified by a JAN starting with `491`.
    Magazine { jan: String },
    /// Any other 8 or 13 digit JAN.
    GeneralProduct { jan: String },
    /// Nothing recognisable. No lookup is attempted for these.
    Unknown { raw: String },
}

impl CodeClassification {
    /// The identifier providers are queried with, or `None` for [`Self::Unknown`].
    #[must_use]
    pub fn lookup_key(&self) -> Option<&str> {
        match self {
            Self::Book { isbn } => Some(isbn),
            Self::Magazine { jan } | Self::GeneralProduct { jan } => Some(jan),
            Self::Unknown { .. } => None,
        }
    }

    /// Short machine-friendly label, used as a structured log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Book { .. } => "book",
            Self::Magazine { .. } => "magazine",
            Self::GeneralProduct { .. } => "general_product",
            Self::Unknown { .. } => "unknown",
        }
    }
}

/// Classifies a raw scanned string.
///
/// 1. Split on `-`. The first segment starting with `978`/`979` is the ISBN.
/// 2. Otherwise an unhyphenated, all-digit value of length 13 or 8 is a JAN:
///    `491...` is a magazine, anything else a general product.
/// 3. Everything else is [`CodeClassification::Unknown`].
///
/// A hyphenated value without an ISBN segment stays `Unknown` even if one of
/// its halves would pass as a JAN on its own.
#[must_use]
pub fn classify(raw: &str) -> CodeClassification {
    if let Some(isbn) = raw.split(TWO_TIER_SEPARATOR).find(|seg| has_isbn_prefix(seg)) {
        return CodeClassification::Book {
            isbn: isbn.to_owned(),
        };
    }

    if !raw.contains(TWO_TIER_SEPARATOR) && is_jan_shaped(raw) {
        let jan = raw.to_owned();
        return if raw.starts_with(MAGAZINE_PREFIX) {
            CodeClassification::Magazine { jan }
        } else {
            CodeClassification::GeneralProduct { jan }
        };
    }

    CodeClassification::Unknown {
        raw: raw.to_owned(),
    }
}

fn has_isbn_prefix(segment: &str) -> bool {
    ISBN_PREFIXES.iter().any(|p| segment.starts_with(p))
}

/// EAN-13 or EAN-8 shape: exactly 13 or 8 ASCII digits.
fn is_jan_shaped(value: &str) -> bool {
    matches!(value.len(), 8 | 13) && value.bytes().all(|b| b.is_ascii_digit())
}

/// Finer-grained description of a scanned value, for diagnostics only.
///
/// [`describe`] never feeds back into [`classify`] or the lookup cascade; it
/// exists so logs can say *what* was scanned, including second-tier book JANs
/// (`192`/`191`) that carry no lookup value of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeKind {
    /// ISBN paired with its `192`/`191` second-tier book JAN.
    TwoTierBook,
    /// Two segments, one of which is an ISBN.
    TwoTierWithIsbn,
    /// Two segments, neither an ISBN.
    TwoTierUnrecognized,
    Isbn,
    MagazineJan,
    /// Second-tier JAN of a book (`192`): classification code and price.
    BookSecondTier,
    /// Second-tier JAN of a magazine-format book (`191`).
    MagazineSecondTier,
    /// Japanese product JAN (`49`/`45` prefix).
    JapaneseProductJan,
    Ean13,
    Ean8,
    Unrecognized { len: usize },
}

impl fmt::Display for BarcodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoTierBook => f.write_str("two-tier book barcode (ISBN + book JAN)"),
            Self::TwoTierWithIsbn => f.write_str("two-tier barcode with ISBN"),
            Self::TwoTierUnrecognized => f.write_str("two-tier barcode (unrecognized)"),
            Self::Isbn => f.write_str("ISBN (book)"),
            Self::MagazineJan => f.write_str("magazine JAN (491)"),
            Self::BookSecondTier => f.write_str("book JAN second tier (192)"),
            Self::MagazineSecondTier => f.write_str("magazine-book JAN second tier (191)"),
            Self::JapaneseProductJan => f.write_str("Japanese product JAN"),
            Self::Ean13 => f.write_str("EAN-13 (other)"),
            Self::Ean8 => f.write_str("EAN-8"),
            Self::Unrecognized { len } => write!(f, "unrecognized ({len} chars)"),
        }
    }
}

/// Describes a scanned value for logging. Total and pure, like [`classify`].
#[must_use]
pub fn describe(raw: &str) -> BarcodeKind {
    let parts: Vec<&str> = raw.split(TWO_TIER_SEPARATOR).collect();

    if let [first, second] = parts.as_slice() {
        let has_isbn = has_isbn_prefix(first) || has_isbn_prefix(second);
        let has_second_tier = [first, second]
            .iter()
            .any(|p| p.starts_with("192") || p.starts_with("191"));
        return match (has_isbn, has_second_tier) {
            (true, true) => BarcodeKind::TwoTierBook,
            (true, false) => BarcodeKind::TwoTierWithIsbn,
            _ => BarcodeKind::TwoTierUnrecognized,
        };
    }

    let code = parts[0];
    if has_isbn_prefix(code) {
        BarcodeKind::Isbn
    } else if code.starts_with(MAGAZINE_PREFIX) {
        BarcodeKind::MagazineJan
    } else if code.starts_with("192") {
        BarcodeKind::BookSecondTier
    } else if code.starts_with("191") {
        BarcodeKind::MagazineSecondTier
    } else if code.starts_with("49") || code.starts_with("45") {
        BarcodeKind::JapaneseProductJan
    } else {
        match code.chars().count() {
            13 => BarcodeKind::Ean13,
            8 => BarcodeKind::Ean8,
            len => BarcodeKind::Unrecognized { len },
        }
    }
}

#[cfg(test)]
#[path = "barcode_test.rs"]
mod tests;
