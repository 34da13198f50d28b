//! Normalized product metadata and provenance tags.
//!
//! Every provider adapter maps its own response schema into [`ProductInfo`].
//! String fields are never optional: an absent value is `""`, which keeps
//! the supplementation merge a plain emptiness check.

use std::fmt;

use serde::{Serialize, Serializer};

/// External product-data provider. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// openBD, the primary Japanese book database.
    OpenBd,
    /// Google Books volumes API, the secondary book database.
    GoogleBooks,
    /// Rakuten Books magazine search.
    RakutenBooks,
    /// Yahoo! Shopping item search (general commerce).
    YahooShopping,
    /// Rakuten Ichiba item search (general marketplace).
    RakutenIchiba,
}

impl Provider {
    /// Display tag, as written into the record store.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::OpenBd => "OpenBD",
            Self::GoogleBooks => "GoogleBooks",
            Self::RakutenBooks => "楽天ブックス",
            Self::YahooShopping => "Yahoo!ショッピング",
            Self::RakutenIchiba => "楽天市場",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Where a [`ProductInfo`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductSource {
    Single(Provider),
    /// `primary` supplied the record, `secondary` filled some of its gaps.
    Supplemented {
        primary: Provider,
        secondary: Provider,
    },
}

impl ProductSource {
    /// The provider that produced the base record.
    #[must_use]
    pub fn primary(self) -> Provider {
        match self {
            Self::Single(p) | Self::Supplemented { primary: p, .. } => p,
        }
    }
}

impl From<Provider> for ProductSource {
    fn from(provider: Provider) -> Self {
        Self::Single(provider)
    }
}

impl fmt::Display for ProductSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(p) => write!(f, "{p}"),
            Self::Supplemented { primary, secondary } => write!(f, "{primary}+{secondary}"),
        }
    }
}

impl Serialize for ProductSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fields the secondary book provider may fill in on a primary result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplementField {
    CoverImageUrl,
    Description,
    PublishedDate,
    Author,
}

impl SupplementField {
    pub const ALL: [Self; 4] = [
        Self::CoverImageUrl,
        Self::Description,
        Self::PublishedDate,
        Self::Author,
    ];

    fn get(self, info: &ProductInfo) -> &str {
        match self {
            Self::CoverImageUrl => &info.cover_image_url,
            Self::Description => &info.description,
            Self::PublishedDate => &info.published_date,
            Self::Author => &info.author,
        }
    }
}

/// A single normalized product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductInfo {
    /// ISBN for books, JAN for everything else.
    pub identifier: String,
    pub title: String,
    /// Author names for books; device/category label for general commerce.
    pub author: String,
    /// Publisher, manufacturer, or shop name depending on the provider.
    pub publisher: String,
    /// Price as a decimal string, e.g. `"1980"`. Empty when unknown.
    pub price: String,
    pub cover_image_url: String,
    pub description: String,
    /// Table of contents for books; a synthesized details block for commerce hits.
    pub supplemental_text: String,
    pub published_date: String,
    pub source: ProductSource,
}

impl ProductInfo {
    /// Creates an empty record attributed to `provider`.
    #[must_use]
    pub fn empty(identifier: impl Into<String>, provider: Provider) -> Self {
        Self {
            identifier: identifier.into(),
            title: String::new(),
            author: String::new(),
            publisher: String::new(),
            price: String::new(),
            cover_image_url: String::new(),
            description: String::new(),
            supplemental_text: String::new(),
            published_date: String::new(),
            source: ProductSource::Single(provider),
        }
    }

    /// Supplementable fields that are currently empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<SupplementField> {
        SupplementField::ALL
            .into_iter()
            .filter(|f| f.get(self).is_empty())
            .collect()
    }

    /// Returns a new record with this record's empty cover, description,
    /// published date and author taken from `secondary` where it has them.
    ///
    /// Identifier, title, publisher, price and supplemental text always stay
    /// as they are. The source becomes `self.primary + secondary.primary`.
    #[must_use]
    pub fn supplemented_with(&self, secondary: &ProductInfo) -> ProductInfo {
        let pick = |own: &str, other: &str| -> String {
            if own.is_empty() && !other.is_empty() {
                other.to_owned()
            } else {
                own.to_owned()
            }
        };

        ProductInfo {
            cover_image_url: pick(&self.cover_image_url, &secondary.cover_image_url),
            description: pick(&self.description, &secondary.description),
            published_date: pick(&self.published_date, &secondary.published_date),
            author: pick(&self.author, &secondary.author),
            source: ProductSource::Supplemented {
                primary: self.source.primary(),
                secondary: secondary.source.primary(),
            },
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
