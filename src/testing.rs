//! Shared fixtures for unit tests.

use async_trait::async_trait;

use crate::error::DataError;
use crate::model::{Course, Resource};
use crate::repository::Repository;

/// Answers immediately with fixed data, or with `DataError::Other(msg)`.
pub struct StaticRepository {
    pub courses: Result<Vec<Course>, &'static str>,
    pub resources: Result<Vec<Resource>, &'static str>,
}

impl StaticRepository {
    pub fn ok(courses: Vec<Course>, resources: Vec<Resource>) -> Self {
        Self {
            courses: Ok(courses),
            resources: Ok(resources),
        }
    }
}

#[async_trait]
impl Repository for StaticRepository {
    async fn get_courses(&self) -> Result<Vec<Course>, DataError> {
        self.courses.clone().map_err(|m| DataError::Other(m.into()))
    }

    async fn get_resources(&self) -> Result<Vec<Resource>, DataError> {
        self.resources.clone().map_err(|m| DataError::Other(m.into()))
    }
}

pub fn course(id: &str, name: &str, doctor: &str) -> Course {
    Course {
        id: id.into(),
        name: name.into(),
        doctor_name: doctor.into(),
        time: "Mon 10-12".into(),
        location: "Hall A".into(),
    }
}

pub fn intro_course() -> Course {
    course("CS101", "Intro to CS", "Ahmed")
}

pub fn resource(course: &str, name: &str) -> Resource {
    Resource {
        course_name: course.into(),
        resource_name: name.into(),
        url: format!("https://example.com/{name}"),
    }
}
