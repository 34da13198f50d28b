//! Provider adapters. Each one builds its request, decodes the provider's
//! own response shape, and maps it into a [`qrtidy_core::ProductInfo`].
//!
//! Adapters return `Ok(None)` for a clean miss and `Err` for a failure;
//! the resolver treats both as "nothing from this provider".

mod google_books;
mod openbd;
mod rakuten;
mod rakuten_books;
mod rakuten_ichiba;
mod yahoo_shopping;

pub use google_books::GoogleBooksClient;
pub use openbd::OpenBdClient;
pub use rakuten_books::RakutenBooksClient;
pub use rakuten_ichiba::RakutenIchibaClient;
pub use yahoo_shopping::YahooShoppingClient;

use serde::{Deserialize, Deserializer};

/// Production origins for every provider. Override to point at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub openbd: String,
    pub google_books: String,
    /// Shared by Rakuten Books and Rakuten Ichiba.
    pub rakuten: String,
    pub yahoo_shopping: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            openbd: "https://api.openbd.jp/".to_owned(),
            google_books: "https://www.googleapis.com/".to_owned(),
            rakuten: "https://openapi.rakuten.co.jp/".to_owned(),
            yahoo_shopping: "https://shopping.yahooapis.jp/".to_owned(),
        }
    }
}

impl Endpoints {
    /// Every provider served from one origin. Paths never collide, so a
    /// single mock server can stand in for all of them.
    #[must_use]
    pub fn uniform(base_url: &str) -> Self {
        Self {
            openbd: base_url.to_owned(),
            google_books: base_url.to_owned(),
            rakuten: base_url.to_owned(),
            yahoo_shopping: base_url.to_owned(),
        }
    }
}

/// Treats an explicit JSON `null` like an absent field.
///
/// Provider payloads mix both for "no value"; with this every field can be a
/// plain `String`/`Vec` with `#[serde(default)]`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// First non-empty candidate, or `""`.
pub(crate) fn first_non_empty<'a>(candidates: impl IntoIterator<Item = &'a str>) -> &'a str {
    candidates
        .into_iter()
        .find(|c| !c.trim().is_empty())
        .unwrap_or("")
}
