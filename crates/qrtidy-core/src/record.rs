//! Mapping from a resolved [`ProductInfo`] to the item record the filing
//! workflow writes to the record store.

use serde::Serialize;

use crate::product::{ProductInfo, Provider};

/// Category written for general-commerce hits that carry no device/category label.
pub const DEFAULT_CATEGORY: &str = "その他";

/// Field values for one item record. `None` means "leave the field unset".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFields {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub details: Option<String>,
    pub notes: Option<String>,
    /// External cover URL. The caller tries download-then-upload first and
    /// stores this URL as a reference only if the upload fails.
    pub cover_image_url: Option<String>,
    /// Provenance tag, e.g. `"OpenBD+GoogleBooks"`.
    pub source: String,
}

impl RecordFields {
    #[must_use]
    pub fn from_product(info: &ProductInfo) -> Self {
        let category = if info.source.primary() == Provider::YahooShopping && info.author.is_empty()
        {
            Some(DEFAULT_CATEGORY.to_owned())
        } else {
            non_empty(&info.author)
        };

        Self {
            item_name: non_empty(&info.title),
            category,
            details: non_empty(&info.description),
            notes: non_empty(&info.supplemental_text),
            cover_image_url: non_empty(&info.cover_image_url),
            source: info.source.to_string(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
