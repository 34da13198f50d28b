//! openBD book database (`https://api.openbd.jp/v1/get`).
//!
//! The endpoint always answers with a JSON array, one element per requested
//! ISBN. Unknown ISBNs come back as `[null]`. Long-form text lives in the ONIX
//! `CollateralDetail.TextContent` list, tagged by ONIX text type code.

use qrtidy_core::{ProductInfo, Provider};
use reqwest::{Client, Url};
use serde::Deserialize;

use super::nullable;
use crate::error::LookupError;
use crate::http::{endpoint_url, get_json};

const PATH: &str = "v1/get";

/// ONIX text types folded into `description`: short and long description.
const SUMMARY_TEXT_TYPES: [&str; 2] = ["02", "03"];
/// ONIX text type for the table of contents.
const TOC_TEXT_TYPE: &str = "04";

#[derive(Debug, Deserialize)]
struct OpenBdBook {
    #[serde(default)]
    onix: Option<Onix>,
    #[serde(default)]
    summary: Option<Summary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Summary {
    #[serde(deserialize_with = "nullable")]
    isbn: String,
    #[serde(deserialize_with = "nullable")]
    title: String,
    #[serde(deserialize_with = "nullable")]
    publisher: String,
    #[serde(deserialize_with = "nullable")]
    pubdate: String,
    #[serde(deserialize_with = "nullable")]
    cover: String,
    #[serde(deserialize_with = "nullable")]
    author: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct Onix {
    collateral_detail: Option<CollateralDetail>,
    product_supply: Option<ProductSupply>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct CollateralDetail {
    #[serde(deserialize_with = "nullable")]
    text_content: Vec<TextContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct TextContent {
    #[serde(deserialize_with = "nullable")]
    text_type: String,
    #[serde(deserialize_with = "nullable")]
    text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ProductSupply {
    supply_detail: Option<SupplyDetail>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct SupplyDetail {
    #[serde(deserialize_with = "nullable")]
    price: Vec<Price>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct Price {
    #[serde(deserialize_with = "nullable")]
    price_amount: String,
}

/// Primary book provider.
#[derive(Debug, Clone)]
pub struct OpenBdClient {
    client: Client,
    endpoint: Url,
}

impl OpenBdClient {
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidBaseUrl`] if `base_url` is not a valid base URL.
    pub fn new(client: Client, base_url: &str) -> Result<Self, LookupError> {
        Ok(Self {
            client,
            endpoint: endpoint_url(base_url, PATH)?,
        })
    }

    /// Looks up a book by ISBN.
    ///
    /// Returns `Ok(None)` when openBD has no record, or the record has no
    /// `summary` section.
    ///
    /// # Errors
    ///
    /// Any transport, status or decoding failure as a [`LookupError`].
    pub async fn lookup(&self, isbn: &str) -> Result<Option<ProductInfo>, LookupError> {
        let url = self.build_url(isbn);
        tracing::debug!(provider = %Provider::OpenBd, isbn, "querying provider");

        let books: Vec<Option<OpenBdBook>> =
            get_json(self.client.get(url), &format!("openBD get(isbn={isbn})")).await?;

        Ok(books
            .into_iter()
            .next()
            .flatten()
            .and_then(|book| normalize(book, isbn)))
    }

    fn build_url(&self, isbn: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("isbn", isbn);
        url
    }
}

fn normalize(book: OpenBdBook, isbn: &str) -> Option<ProductInfo> {
    let summary = book.summary?;
    let onix = book.onix.unwrap_or_default();

    let texts = onix.collateral_detail.unwrap_or_default().text_content;
    let description = join_texts(&texts, |t| SUMMARY_TEXT_TYPES.iter().any(|s| *s == t));
    let toc = join_texts(&texts, |t| t == TOC_TEXT_TYPE);

    let price = onix
        .product_supply
        .and_then(|s| s.supply_detail)
        .and_then(|d| d.price.into_iter().next())
        .map(|p| p.price_amount)
        .unwrap_or_default();

    let identifier = if summary.isbn.is_empty() {
        isbn.to_owned()
    } else {
        summary.isbn
    };

    Some(ProductInfo {
        title: summary.title,
        author: summary.author,
        publisher: summary.publisher,
        price,
        cover_image_url: summary.cover,
        description,
        supplemental_text: toc,
        published_date: summary.pubdate,
        ..ProductInfo::empty(identifier, Provider::OpenBd)
    })
}

fn join_texts(texts: &[TextContent], wanted: impl Fn(&str) -> bool) -> String {
    texts
        .iter()
        .filter(|t| wanted(&t.text_type))
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
