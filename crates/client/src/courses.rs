use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Client, Result};

/// The slice of a course record surfaced to tools.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseSummary {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub term: Option<String>,
}

#[derive(Deserialize)]
struct RawCourse {
    id: Option<i64>,
    name: Option<String>,
    #[serde(rename = "course_code")]
    code: Option<String>,
    term: Option<RawTerm>,
}

#[derive(Deserialize)]
struct RawTerm {
    name: Option<String>,
}

/// Reduce raw course records to their summaries.
///
/// A missing or null `term` object just leaves the term empty.
pub fn summarize(records: Vec<Value>) -> Vec<CourseSummary> {
    records
        .into_iter()
        .filter_map(|record| serde_json::from_value::<RawCourse>(record).ok())
        .map(|course| CourseSummary {
            id: course.id,
            name: course.name,
            code: course.code,
            term: course.term.and_then(|term| term.name),
        })
        .collect()
}

impl Client {
    /// Every course the caller is actively enrolled in, raw.
    pub fn courses_raw(&self) -> Result<Vec<Value>> {
        self.collect(
            "/api/v1/courses",
            &[
                ("per_page", "100"),
                ("include[]", "term"),
                ("include[]", "enrollments"),
                ("enrollment_state", "active"),
            ],
        )
    }

    /// Active courses, one summary per course.
    pub fn list_courses(&self) -> Result<Vec<CourseSummary>> {
        Ok(summarize(self.courses_raw()?))
    }
}
