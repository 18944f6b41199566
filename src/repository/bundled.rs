//! Repository backed by JSON files in a local asset directory.
//!
//! The files already hold domain-shaped records, so no adaptation happens
//! here.  The only failure classes are a missing file, an unreadable file,
//! and malformed JSON.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::Repository;
use crate::error::DataError;
use crate::model::{Course, Resource};

pub const COURSES_FILE: &str = "courses.json";
pub const RESOURCES_FILE: &str = "resources.json";

pub struct BundledRepository {
    dir: PathBuf,
}

impl BundledRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_list<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, DataError> {
        let path = self.dir.join(name);
        debug!(path = %path.display(), "reading asset");

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DataError::MissingAsset { path });
            }
            Err(source) => return Err(DataError::Io { path, source }),
        };

        serde_json::from_slice(&bytes).map_err(|source| DataError::Json {
            name: name.to_string(),
            source,
        })
    }
}

#[async_trait]
impl Repository for BundledRepository {
    async fn get_courses(&self) -> Result<Vec<Course>, DataError> {
        self.read_list(COURSES_FILE).await
    }

    async fn get_resources(&self) -> Result<Vec<Resource>, DataError> {
        self.read_list(RESOURCES_FILE).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
