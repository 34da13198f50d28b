//! Request plumbing shared by the Rakuten Web Service adapters.
//!
//! Both searches take the same credential and format parameters and both
//! sit behind a referrer allow-list, so every call carries `Origin` and
//! `Referer` headers.

use qrtidy_core::RakutenCredentials;
use reqwest::header::{ORIGIN, REFERER};
use reqwest::{Client, RequestBuilder, Url};

/// Builds the URL for a Rakuten search call with `extra` search parameters.
///
/// `formatVersion=2` flattens `Items` into plain objects and image URL lists
/// into plain strings; the response types in the adapters rely on it.
pub(super) fn build_url(
    endpoint: &Url,
    credentials: &RakutenCredentials,
    extra: &[(&str, &str)],
) -> Url {
    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("applicationId", &credentials.app_id);
        pairs.append_pair("accessKey", &credentials.access_key);
        for (k, v) in extra {
            pairs.append_pair(k, v);
        }
        pairs.append_pair("formatVersion", "2");
        pairs.append_pair("format", "json");
        pairs.append_pair("hits", "1");
    }
    url
}

pub(super) fn request(client: &Client, url: Url, credentials: &RakutenCredentials) -> RequestBuilder {
    let origin = credentials.referer.trim_end_matches('/');
    client
        .get(url)
        .header(ORIGIN, origin)
        .header(REFERER, credentials.referer.as_str())
}

#[cfg(test)]
pub(super) fn test_credentials() -> RakutenCredentials {
    RakutenCredentials {
        app_id: "app".to_owned(),
        access_key: "secret".to_owned(),
        referer: "https://github.com/".to_owned(),
    }
}
