//! Raw-record → domain-model translation.
//!
//! The mapping never filters: output length always equals input length, and
//! order is preserved.  Provider failures pass through untouched.

use async_trait::async_trait;
use tracing::debug;

use super::Repository;
use crate::error::DataError;
use crate::model::{Course, Resource};
use crate::source::{DataProvider, RawResourceItem, RawScheduleItem};

pub struct AdapterRepository<P> {
    provider: P,
}

impl<P: DataProvider> AdapterRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Pure mapping, kept separate from I/O so tests can call it directly.
    pub fn course_from_raw(item: RawScheduleItem) -> Course {
        Course {
            id: item.id.to_string(),
            name: item.title,
            doctor_name: format!("API User {}", item.user_id),
            time: if item.completed { "Completed" } else { "Pending" }.to_string(),
            location: "Online".to_string(),
        }
    }

    pub fn resource_from_raw(item: RawResourceItem) -> Resource {
        Resource {
            course_name: format!("Course ID: {}", item.user_id),
            resource_name: item.title,
            url: format!("https://example.com/post/{}", item.id),
        }
    }
}

#[async_trait]
impl<P: DataProvider> Repository for AdapterRepository<P> {
    async fn get_courses(&self) -> Result<Vec<Course>, DataError> {
        let raw = self.provider.fetch_course_records().await?;
        debug!(count = raw.len(), "adapting schedule records");
        Ok(raw.into_iter().map(Self::course_from_raw).collect())
    }

    async fn get_resources(&self) -> Result<Vec<Resource>, DataError> {
        let raw = self.provider.fetch_resource_records().await?;
        debug!(count = raw.len(), "adapting resource records");
        Ok(raw.into_iter().map(Self::resource_from_raw).collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
