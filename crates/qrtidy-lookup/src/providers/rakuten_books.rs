//! Rakuten Books magazine search (`BooksMagazine/Search/20170404`).

use qrtidy_core::{ProductInfo, Provider, RakutenCredentials};
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{first_non_empty, nullable, rakuten};
use crate::error::LookupError;
use crate::http::{endpoint_url, get_json};

const PATH: &str = "services/api/BooksMagazine/Search/20170404";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MagazineSearchResponse {
    count: u32,
    #[serde(rename = "Items", deserialize_with = "nullable")]
    items: Vec<MagazineItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MagazineItem {
    #[serde(deserialize_with = "nullable")]
    title: String,
    #[serde(deserialize_with = "nullable")]
    publisher_name: String,
    #[serde(deserialize_with = "nullable")]
    jan: String,
    #[serde(deserialize_with = "nullable")]
    item_caption: String,
    #[serde(deserialize_with = "nullable")]
    sales_date: String,
    item_price: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    large_image_url: String,
    #[serde(deserialize_with = "nullable")]
    medium_image_url: String,
}

/// Magazine-specialised provider, keyed by JAN.
#[derive(Debug, Clone)]
pub struct RakutenBooksClient {
    client: Client,
    endpoint: Url,
    credentials: RakutenCredentials,
}

impl RakutenBooksClient {
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

    /// Looks up a magazine by JAN. Out-of-print issues are included.
    ///
    /// # Errors
    ///
    /// Any transport, status or decoding failure as a [`LookupError`].
    pub async fn lookup(&self, jan: &str) -> Result<Option<ProductInfo>, LookupError> {
        let url = self.build_url(jan);
        tracing::debug!(provider = %Provider::RakutenBooks, jan, "querying provider");

        let response: MagazineSearchResponse = get_json(
            rakuten::request(&self.client, url, &self.credentials),
            &format!("Rakuten Books magazine search(jan={jan})"),
        )
        .await?;

        Ok(normalize(response, jan))
    }

    fn build_url(&self, jan: &str) -> Url {
        rakuten::build_url(
            &self.endpoint,
            &self.credentials,
            &[("jan", jan), ("outOfStockFlag", "1")],
        )
    }
}

fn normalize(response: MagazineSearchResponse, jan: &str) -> Option<ProductInfo> {
    if response.count == 0 {
        return None;
    }
    let item = response.items.into_iter().next()?;

    let identifier = first_non_empty([item.jan.as_str(), jan]).to_owned();
    let cover_image_url =
        first_non_empty([item.large_image_url.as_str(), item.medium_image_url.as_str()]).to_owned();

    Some(ProductInfo {
        title: item.title,
        publisher: item.publisher_name,
        price: item.item_price.map(|p| p.to_string()).unwrap_or_default(),
        cover_image_url,
        description: item.item_caption,
        published_date: item.sales_date,
        ..ProductInfo::empty(identifier, Provider::RakutenBooks)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::rakuten::test_credentials;

    fn parse(json: serde_json::Value) -> MagazineSearchResponse {
        serde_json::from_value(json).expect("fixture should deserialize")
    }

    #[test]
    fn build_url_carries_credentials_and_search_params() {
        let client =
            RakutenBooksClient::new(Client::new(), "https://openapi.rakuten.co.jp", test_credentials())
                .unwrap();
        assert_eq!(
            client.build_url("4910012345678").as_str(),
            "https://openapi.rakuten.co.jp/services/api/BooksMagazine/Search/20170404\
             ?applicationId=app&accessKey=secret&jan=4910012345678&outOfStockFlag=1\
             &formatVersion=2&format=json&hits=1"
        );
    }

    #[test]
    fn normalize_maps_magazine_fields() {
        let response = parse(serde_json::json!({
            "count": 1,
            "Items": [{
                "title": "週刊少年ジャンプ",
                "publisherName": "集英社",
                "jan": "4910200110344",
                "itemCaption": "今週号",
                "salesDate": "2024年03月04日",
                "itemPrice": 290,
                "largeImageUrl": "https://thumbnail.image.rakuten.co.jp/large.jpg",
                "mediumImageUrl": "https://thumbnail.image.rakuten.co.jp/medium.jpg"
            }]
        }));
        let info = normalize(response, "4910200110344").unwrap();

        assert_eq!(info.identifier, "4910200110344");
        assert_eq!(info.title, "週刊少年ジャンプ");
        assert_eq!(info.author, "");
        assert_eq!(info.publisher, "集英社");
        assert_eq!(info.price, "290");
        assert_eq!(info.cover_image_url, "https://thumbnail.image.rakuten.co.jp/large.jpg");
        assert_eq!(info.description, "今週号");
        assert_eq!(info.supplemental_text, "");
        assert_eq!(info.published_date, "2024年03月04日");
        assert_eq!(info.source.to_string(), "楽天ブックス");
    }

    #[test]
    fn normalize_zero_count_is_miss() {
        assert!(normalize(parse(serde_json::json!({ "count": 0, "Items": [] })), "491").is_none());
    }

    #[test]
    fn normalize_missing_items_is_miss() {
        assert!(normalize(parse(serde_json::json!({ "count": 1 })), "491").is_none());
    }

    #[test]
    fn normalize_falls_back_to_queried_jan() {
        let response = parse(serde_json::json!({
            "count": 1,
            "Items": [{ "title": "T", "jan": "" }]
        }));
        let info = normalize(response, "4910012345678").unwrap();
        assert_eq!(info.identifier, "4910012345678");
        assert_eq!(info.price, "");
    }
}
