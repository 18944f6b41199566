//! Remote placeholder endpoint provider.
//!
//! Two read-only `GET`s against a base address: `todos` for schedule records
//! and `posts` for resource records.  Both return JSON arrays.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{DataProvider, RawResourceItem, RawScheduleItem};
use crate::error::DataError;

/// Base address used when no other is configured.  It does not resolve.
pub const PLACEHOLDER_BASE_URL: &str = "https://fake.api/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpProvider {
    client: Client,
    base_url: String,
}

impl HttpProvider {
    /// Create a provider rooted at `base_url`.  A trailing `/` is added when
    /// missing so endpoint paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Result<Self, DataError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: normalize_base(base_url.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DataError> {
        let url = self.endpoint(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Status { status, url });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| DataError::Json { name: url, source })
    }
}

fn normalize_base(mut base: String) -> String {
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}

#[async_trait]
impl DataProvider for HttpProvider {
    async fn fetch_course_records(&self) -> Result<Vec<RawScheduleItem>, DataError> {
        self.get_json("todos").await
    }

    async fn fetch_resource_records(&self) -> Result<Vec<RawResourceItem>, DataError> {
        self.get_json("posts").await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
