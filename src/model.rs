//! Domain records shown by the schedule and resources screens.
//!
//! Both records are plain immutable data.  Repositories build fresh values on
//! every fetch; nothing in the application edits them afterwards.
//!
//! The JSON field names are camelCase (`doctorName`, `courseName`, …) so that
//! the bundled asset files can be deserialized straight into these types.

use std::collections::HashMap;

use serde::Deserialize;

/// A single course in the student's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course code, unique within one fetch result (e.g. "CS101").
    pub id: String,
    /// Full course title.
    pub name: String,
    /// Instructor name, rendered with a "Dr." prefix.
    pub doctor_name: String,
    /// Free-text meeting time (e.g. "Mon 10-12").
    pub time: String,
    /// Lecture hall or "Online".
    pub location: String,
}

/// A link to some course material.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Grouping key on the resources screen.
    pub course_name: String,
    /// Display title (e.g. "Lecture 1 Slides").
    pub resource_name: String,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Group resources by [`Resource::course_name`].
///
/// Groups appear in the order their key is first seen, and each group keeps
/// the input order of its members.  Every input element lands in exactly one
/// group.
pub fn group_by_course(resources: &[Resource]) -> Vec<(String, Vec<Resource>)> {
    let mut groups: Vec<(String, Vec<Resource>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for resource in resources {
        match index.get(resource.course_name.as_str()) {
            Some(&i) => groups[i].1.push(resource.clone()),
            None => {
                index.insert(&resource.course_name, groups.len());
                groups.push((resource.course_name.clone(), vec![resource.clone()]));
            }
        }
    }

    groups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
