//! Rakuten Ichiba item search (`IchibaItem/Search/20220601`).
//!
//! There is no JAN parameter on this endpoint; the JAN goes in as a keyword
//! and the top hit is taken.

use qrtidy_core::{ProductInfo, Provider, RakutenCredentials};
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{nullable, rakuten};
use crate::error::LookupError;
use crate::http::{endpoint_url, get_json};

const PATH: &str = "ichibams/api/IchibaItem/Search/20220601";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ItemSearchResponse {
    count: u32,
    #[serde(rename = "Items", deserialize_with = "nullable")]
    items: Vec<IchibaItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct IchibaItem {
    #[serde(deserialize_with = "nullable")]
    item_name: String,
    item_price: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    item_caption: String,
    #[serde(deserialize_with = "nullable")]
    shop_name: String,
    #[serde(deserialize_with = "nullable")]
    medium_image_urls: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    small_image_urls: Vec<String>,
}

/// General marketplace provider, keyed by JAN.
#[derive(Debug, Clone)]
pub struct RakutenIchibaClient {
    client: Client,
    endpoint: Url,
    credentials: RakutenCredentials,
}

impl RakutenIchibaClient {
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidBaseUrl`] if `base_url` is not a valid base URL.
    pub fn new(
        client: Client,
        base_url: &str,
        credentials: RakutenCredentials,
    ) -> Result<Self, LookupError> {
        Ok(Self {
            client,
            endpoint: endpoint_url(base_url, PATH)?,
            credentials,
        })
    }

    /// Searches marketplace listings with the JAN as keyword.
    ///
    /// # Errors
    ///
    /// Any transport, status or decoding failure as a [`LookupError`].
    pub async fn lookup(&self, jan: &str) -> Result<Option<ProductInfo>, LookupError> {
        let url = rakuten::build_url(&self.endpoint, &self.credentials, &[("keyword", jan)]);
        tracing::debug!(provider = %Provider::RakutenIchiba, jan, "querying provider");

        let response: ItemSearchResponse = get_json(
            rakuten::request(&self.client, url, &self.credentials),
            &format!("Rakuten Ichiba item search(keyword={jan})"),
        )
        .await?;

        Ok(normalize(response, jan))
    }
}

fn normalize(response: ItemSearchResponse, jan: &str) -> Option<ProductInfo> {
    if response.count == 0 {
        return None;
    }
    let item = response.items.into_iter().next()?;

    let cover_image_url = item
        .medium_image_urls
        .into_iter()
        .chain(item.small_image_urls)
        .find(|u| !u.is_empty())
        .unwrap_or_default();

    Some(ProductInfo {
        title: item.item_name,
        // Listings have no publisher; the shop stands in for it.
        publisher: item.shop_name,
        price: item.item_price.map(|p| p.to_string()).unwrap_or_default(),
        cover_image_url,
        description: item.item_caption,
        ..ProductInfo::empty(jan, Provider::RakutenIchiba)
    })
}
