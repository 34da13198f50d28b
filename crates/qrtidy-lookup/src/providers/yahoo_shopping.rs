//! Yahoo! Shopping item search (`ShoppingWebService/V3/itemSearch`).
//!
//! Structured fields on a hit are thin; the useful metadata sits in the
//! merchant's free-text `description` as a `■Label:value` block, which is
//! parsed with [`LabeledSegments`].

use qrtidy_core::record::DEFAULT_CATEGORY;
use qrtidy_core::{ProductInfo, Provider};
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{first_non_empty, nullable};
use crate::error::LookupError;
use crate::http::{endpoint_url, get_json};
use crate::labels::LabeledSegments;

const PATH: &str = "ShoppingWebService/V3/itemSearch";

const TITLE_LABELS: &[&str] = &["タイトル", "商品名"];
const CATEGORY_LABELS: &[&str] = &["機種", "対応機種", "形態"];
const JAN_LABELS: &[&str] = &["JAN/EAN", "JANコード", "JAN"];
const MANUFACTURER_LABELS: &[&str] = &["メーカー", "発売元"];
const SIZE_LABELS: &[&str] = &["サイズ"];
const RELEASE_DATE_LABELS: &[&str] = &["発売日"];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ItemSearchResponse {
    #[serde(deserialize_with = "nullable")]
    hits: Vec<Hit>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Hit {
    #[serde(deserialize_with = "nullable")]
    name: String,
    #[serde(deserialize_with = "nullable")]
    description: String,
    price: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    jan_code: String,
    image: Option<Image>,
    brand: Option<Brand>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Image {
    #[serde(deserialize_with = "nullable")]
    small: String,
    #[serde(deserialize_with = "nullable")]
    medium: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Brand {
    #[serde(deserialize_with = "nullable")]
    name: String,
}

/// General-commerce provider.
#[derive(Debug, Clone)]
pub struct YahooShoppingClient {
    client: Client,
    endpoint: Url,
    app_id: String,
}

impl YahooShoppingClient {
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidBaseUrl`] if `base_url` is not a valid base URL.
    pub fn new(client: Client, base_url: &str, app_id: String) -> Result<Self, LookupError> {
        Ok(Self {
            client,
            endpoint: endpoint_url(base_url, PATH)?,
            app_id,
        })
    }

    /// Searches by `jan_code`. Also used with a raw ISBN as the last book fallback.
    ///
    /// # Errors
    ///
    /// Any transport, status or decoding failure as a [`LookupError`].
    pub async fn lookup(&self, key: &str) -> Result<Option<ProductInfo>, LookupError> {
        let url = self.build_url(key);
        tracing::debug!(provider = %Provider::YahooShopping, key, "querying provider");

        let response: ItemSearchResponse = get_json(
            self.client.get(url),
            &format!("Yahoo! Shopping item search(jan_code={key})"),
        )
        .await?;

        Ok(response.hits.into_iter().next().map(|hit| normalize(hit, key)))
    }

    fn build_url(&self, key: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("appid", &self.app_id)
            .append_pair("jan_code", key)
            .append_pair("results", "1");
        url
    }
}

fn normalize(hit: Hit, key: &str) -> ProductInfo {
    let segments = LabeledSegments::parse(&hit.description);
    let brand = hit.brand.unwrap_or_default().name;
    let image = hit.image.unwrap_or_default();

    let title = first_non_empty([segments.get_any(TITLE_LABELS), hit.name.as_str()]);
    let category = first_non_empty([segments.get_any(CATEGORY_LABELS), DEFAULT_CATEGORY]);
    let manufacturer = first_non_empty([segments.get_any(MANUFACTURER_LABELS), brand.as_str()]);
    let jan = first_non_empty([segments.get_any(JAN_LABELS), hit.jan_code.as_str()]);
    let size = segments.get_any(SIZE_LABELS);
    let release_date = segments.get_any(RELEASE_DATE_LABELS);

    let details_block = [
        ("JAN/EAN", jan),
        ("メーカー", manufacturer),
        ("サイズ", size),
        ("発売日", release_date),
    ]
    .into_iter()
    .filter(|(_, v)| !v.is_empty())
    .map(|(label, v)| format!("{label}: {v}"))
    .collect::<Vec<_>>()
    .join("\n");

    ProductInfo {
        title: title.to_owned(),
        author: category.to_owned(),
        publisher: manufacturer.to_owned(),
        price: hit.price.map(|p| p.to_string()).unwrap_or_default(),
        cover_image_url: first_non_empty([image.medium.as_str(), image.small.as_str()]).to_owned(),
        // Left empty on purpose: the listing text goes to a separate details
        // field that the filing workflow fills itself.
        description: String::new(),
        supplemental_text: details_block,
        published_date: release_date.to_owned(),
        ..ProductInfo::empty(key, Provider::YahooShopping)
    }
}
