//! Cascade orchestration: picks the provider sequence for a classified code
//! and returns the first usable result.
//!
//! | Classification   | Cascade                                                      |
//! |------------------|--------------------------------------------------------------|
//! | Book             | openBD (+ Google Books supplementation) → Google Books → Yahoo! Shopping |
//! | Magazine         | Rakuten Books → Yahoo! Shopping → Rakuten Ichiba             |
//! | General product  | Yahoo! Shopping → Rakuten Ichiba                             |
//! | Unknown          | nothing                                                      |
//!
//! Providers run one at a time; each step only runs if every earlier step
//! came back empty. Provider failures are logged and treated as a miss, so
//! [`ProductResolver::resolve`] itself never fails. Dropping the returned
//! future cancels the in-flight request and nothing else.

use std::future::Future;

use qrtidy_core::{classify, describe, AppConfig, CodeClassification, ProductInfo, Provider};

use crate::error::LookupError;
use crate::http::build_http_client;
use crate::providers::{
    Endpoints, GoogleBooksClient, OpenBdClient, RakutenBooksClient, RakutenIchibaClient,
    YahooShoppingClient,
};

/// Resolves classified codes to product metadata. Stateless between calls;
/// share it freely across tasks.
#[derive(Debug, Clone)]
pub struct ProductResolver {
    openbd: OpenBdClient,
    google_books: GoogleBooksClient,
    rakuten_books: Option<RakutenBooksClient>,
    rakuten_ichiba: Option<RakutenIchibaClient>,
    yahoo_shopping: Option<YahooShoppingClient>,
}

impl ProductResolver {
    /// Creates a resolver against the production provider endpoints.
    ///
    /// Rakuten and Yahoo! providers are enabled only when their credentials
    /// are configured.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, LookupError> {
        Self::with_endpoints(config, &Endpoints::default())
    }

    /// Creates a resolver against custom provider origins (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the HTTP client cannot be built, or
    /// [`LookupError::InvalidBaseUrl`] if an endpoint is not a valid base URL.
    pub fn with_endpoints(config: &AppConfig, endpoints: &Endpoints) -> Result<Self, LookupError> {
        let client = build_http_client(config)?;

        let rakuten_books = config
            .rakuten
            .clone()
            .map(|creds| RakutenBooksClient::new(client.clone(), &endpoints.rakuten, creds))
            .transpose()?;
        let rakuten_ichiba = config
            .rakuten
            .clone()
            .map(|creds| RakutenIchibaClient::new(client.clone(), &endpoints.rakuten, creds))
            .transpose()?;
        let yahoo_shopping = config
            .yahoo_app_id
            .clone()
            .map(|app_id| {
                YahooShoppingClient::new(client.clone(), &endpoints.yahoo_shopping, app_id)
            })
            .transpose()?;

        Ok(Self {
            openbd: OpenBdClient::new(client.clone(), &endpoints.openbd)?,
            google_books: GoogleBooksClient::new(
                client,
                &endpoints.google_books,
                config.google_books_api_key.clone(),
            )?,
            rakuten_books,
            rakuten_ichiba,
            yahoo_shopping,
        })
    }

    /// Classifies `raw` and resolves it.
    pub async fn lookup(&self, raw: &str) -> Option<ProductInfo> {
        tracing::debug!(raw, barcode = %describe(raw), "classifying scanned code");
        self.resolve(&classify(raw)).await
    }

    /// Runs the cascade for `classification`.
    ///
    /// Returns `None` for [`CodeClassification::Unknown`] without any network
    /// call, and when every provider in the cascade comes back empty.
    pub async fn resolve(&self, classification: &CodeClassification) -> Option<ProductInfo> {
        let result = match classification {
            CodeClassification::Book { isbn } => self.resolve_book(isbn).await,
            CodeClassification::Magazine { jan } => self.resolve_magazine(jan).await,
            CodeClassification::GeneralProduct { jan } => self.resolve_general_product(jan).await,
            CodeClassification::Unknown { raw } => {
                tracing::info!(raw, "unrecognized code; skipping product lookup");
                return None;
            }
        };

        match &result {
            Some(info) => tracing::info!(
                kind = classification.kind(),
                key = classification.lookup_key(),
                source = %info.source,
                title = %info.title,
                "product resolved"
            ),
            None => tracing::info!(
                kind = classification.kind(),
                key = classification.lookup_key(),
                "no provider returned data"
            ),
        }
        result
    }

    async fn resolve_book(&self, isbn: &str) -> Option<ProductInfo> {
        // openBD is trusted over everything else: once it answers, its
        // result is final apart from filling gaps from Google Books.
        if let Some(base) = attempt(Provider::OpenBd, isbn, self.openbd.lookup(isbn)).await {
            return Some(self.supplement_from_google_books(base, isbn).await);
        }

        let google_books = self.google_books.lookup(isbn);
        if let Some(info) = attempt(Provider::GoogleBooks, isbn, google_books).await {
            return Some(info);
        }

        // Keyed by the ISBN itself, not a JAN.
        self.yahoo_shopping(isbn).await
    }

    async fn resolve_magazine(&self, jan: &str) -> Option<ProductInfo> {
        if let Some(info) = self.rakuten_books(jan).await {
            return Some(info);
        }
        if let Some(info) = self.yahoo_shopping(jan).await {
            return Some(info);
        }
        self.rakuten_ichiba(jan).await
    }

    async fn resolve_general_product(&self, jan: &str) -> Option<ProductInfo> {
        if let Some(info) = self.yahoo_shopping(jan).await {
            return Some(info);
        }
        self.rakuten_ichiba(jan).await
    }

    /// Fills empty cover/description/date/author fields of an openBD result.
    /// Google Books is not called at all when nothing is missing.
    async fn supplement_from_google_books(&self, base: ProductInfo, isbn: &str) -> ProductInfo {
        let missing = base.missing_fields();
        if missing.is_empty() {
            tracing::debug!(isbn, "primary result complete; supplementation skipped");
            return base;
        }

        tracing::debug!(isbn, ?missing, "supplementing primary result");
        match attempt(Provider::GoogleBooks, isbn, self.google_books.lookup(isbn)).await {
            Some(secondary) => base.supplemented_with(&secondary),
            None => base,
        }
    }

    async fn rakuten_books(&self, jan: &str) -> Option<ProductInfo> {
        let Some(client) = &self.rakuten_books else {
            return not_configured(Provider::RakutenBooks);
        };
        attempt(Provider::RakutenBooks, jan, client.lookup(jan)).await
    }

    async fn rakuten_ichiba(&self, jan: &str) -> Option<ProductInfo> {
        let Some(client) = &self.rakuten_ichiba else {
            return not_configured(Provider::RakutenIchiba);
        };
        attempt(Provider::RakutenIchiba, jan, client.lookup(jan)).await
    }

    async fn yahoo_shopping(&self, key: &str) -> Option<ProductInfo> {
        let Some(client) = &self.yahoo_shopping else {
            return not_configured(Provider::YahooShopping);
        };
        attempt(Provider::YahooShopping, key, client.lookup(key)).await
    }
}

/// Awaits one provider call and folds failure into absence.
async fn attempt<F>(provider: Provider, key: &str, call: F) -> Option<ProductInfo>
where
    F: Future<Output = Result<Option<ProductInfo>, LookupError>>,
{
    match call.await {
        Ok(Some(info)) => {
            tracing::debug!(provider = %provider, key, title = %info.title, "provider hit");
            Some(info)
        }
        Ok(None) => {
            tracing::debug!(provider = %provider, key, "provider miss");
            None
        }
        Err(e) => {
            tracing::warn!(
                provider = %provider,
                key,
                error = %e,
                "provider lookup failed; continuing cascade"
            );
            None
        }
    }
}

fn not_configured(provider: Provider) -> Option<ProductInfo> {
    tracing::debug!(provider = %provider, "provider credentials not configured; skipping");
    None
}
