//! Data provider abstraction layer.
//!
//! A [`DataProvider`] fetches *raw* records from wherever they live.  The raw
//! shapes belong to the remote placeholder API and do not match the domain
//! models; turning them into [`crate::model::Course`] and
//! [`crate::model::Resource`] values is the job of
//! [`crate::repository::AdapterRepository`].
//!
//! ## For contributors — adding a new provider
//!
//! 1. Create a new file in this directory (e.g. `fixture.rs`).
//! 2. Define a struct and implement [`DataProvider`] for it.
//! 3. Add `mod fixture;` below and re-export your struct.
//! 4. Select it in `main.rs` when building the repository.
//!
//! Providers never retry; failures propagate as [`DataError`].

mod http;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::DataError;

pub use http::{HttpProvider, PLACEHOLDER_BASE_URL};

/// Raw schedule entry, shaped like a placeholder-API "todo".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScheduleItem {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Raw resource entry, shaped like a placeholder-API "post".  The post
/// `body` is not needed and is skipped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResourceItem {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
}

/// Anything that can hand back raw course-like and resource-like records.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_course_records(&self) -> Result<Vec<RawScheduleItem>, DataError>;

    async fn fetch_resource_records(&self) -> Result<Vec<RawResourceItem>, DataError>;
}
