//! Repositories hand strongly-typed domain lists to the screen controllers.
//!
//! Two implementations exist:
//!
//! * [`AdapterRepository`] wraps a [`crate::source::DataProvider`] and maps
//!   its raw records onto [`Course`] / [`Resource`], inventing the fields the
//!   raw shape lacks.
//! * [`BundledRepository`] reads domain-shaped JSON files from a local asset
//!   directory.
//!
//! The composition root in `main.rs` builds exactly one repository and hands
//! it to every controller.

mod adapter;
mod bundled;

use async_trait::async_trait;

use crate::error::DataError;
use crate::model::{Course, Resource};

pub use adapter::AdapterRepository;
pub use bundled::BundledRepository;

#[async_trait]
pub trait Repository: Send + Sync {
    async fn get_courses(&self) -> Result<Vec<Course>, DataError>;

    async fn get_resources(&self) -> Result<Vec<Resource>, DataError>;
}
