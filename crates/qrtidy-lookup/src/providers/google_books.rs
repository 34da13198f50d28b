//! Google Books volumes search (`books/v1/volumes?q=isbn:...`).
//!
//! Works without a key at a low daily quota; a configured key is appended
//! when present. No yen pricing is available, so `price` is always empty.

use qrtidy_core::{ProductInfo, Provider};
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{first_non_empty, nullable};
use crate::error::LookupError;
use crate::http::{endpoint_url, get_json};

const PATH: &str = "books/v1/volumes";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VolumesResponse {
    total_items: u32,
    #[serde(deserialize_with = "nullable")]
    items: Vec<Volume>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Volume {
    volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VolumeInfo {
    #[serde(deserialize_with = "nullable")]
    title: String,
    #[serde(deserialize_with = "nullable")]
    authors: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    publisher: String,
    #[serde(deserialize_with = "nullable")]
    published_date: String,
    #[serde(deserialize_with = "nullable")]
    description: String,
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ImageLinks {
    #[serde(deserialize_with = "nullable")]
    small_thumbnail: String,
    #[serde(deserialize_with = "nullable")]
    thumbnail: String,
}

/// Secondary book provider; also the sole source when openBD has nothing.
#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl GoogleBooksClient {
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidBaseUrl`] if `base_url` is not a valid base URL.
    pub fn new(
        client: Client,
        base_url: &str,
        api_key: Option<String>,
    ) -> Result<Self, LookupError> {
        Ok(Self {
            client,
            endpoint: endpoint_url(base_url, PATH)?,
            api_key,
        })
    }

    /// Looks up a volume by ISBN and maps the first hit.
    ///
    /// # Errors
    ///
    /// Any transport, status or decoding failure as a [`LookupError`].
    pub async fn lookup(&self, isbn: &str) -> Result<Option<ProductInfo>, LookupError> {
        let url = self.build_url(isbn);
        tracing::debug!(provider = %Provider::GoogleBooks, isbn, "querying provider");

        let response: VolumesResponse =
            get_json(self.client.get(url), &format!("Google Books volumes(isbn={isbn})")).await?;

        Ok(normalize(response, isbn))
    }

    fn build_url(&self, isbn: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &format!("isbn:{isbn}"));
            if let Some(key) = &self.api_key {
                pairs.append_pair("key", key);
            }
        }
        url
    }
}

fn normalize(response: VolumesResponse, isbn: &str) -> Option<ProductInfo> {
    if response.total_items == 0 {
        return None;
    }
    let info = response.items.into_iter().next()?.volume_info?;

    let cover_image_url = info
        .image_links
        .map(|links| first_non_empty([links.thumbnail.as_str(), links.small_thumbnail.as_str()]).to_owned())
        .unwrap_or_default();

    Some(ProductInfo {
        title: info.title,
        author: info.authors.join(", "),
        publisher: info.publisher,
        cover_image_url,
        description: info.description,
        published_date: info.published_date,
        ..ProductInfo::empty(isbn, Provider::GoogleBooks)
    })
}
