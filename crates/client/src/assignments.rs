use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{timestamp, Client, Result};

/// Window applied when the caller doesn't ask for one.
pub const DEFAULT_DUE_WINDOW_DAYS: i64 = 14;

/// The slice of an assignment record surfaced to tools.
///
/// `due_at` echoes the raw Canvas timestamp string.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssignmentSummary {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub due_at: String,
    pub points_possible: Option<f64>,
    pub html_url: Option<String>,
}

#[derive(Deserialize)]
struct RawAssignment {
    id: Option<i64>,
    name: Option<String>,
    due_at: Option<String>,
    points_possible: Option<f64>,
    html_url: Option<String>,
}

/// Keep the assignments due by `now + due_within_days`, soonest first.
///
/// A record whose `due_at` is absent or unparseable is dropped entirely,
/// not treated as "no due date".
pub fn upcoming(
    records: Vec<Value>,
    now: DateTime<Utc>,
    due_within_days: i64,
) -> Vec<AssignmentSummary> {
    let cutoff = now + Duration::days(due_within_days);

    let mut due_soon: Vec<(DateTime<Utc>, AssignmentSummary)> = records
        .into_iter()
        .filter_map(|record| {
            let raw: RawAssignment = serde_json::from_value(record).ok()?;
            let due_at = raw.due_at?;
            let due = timestamp::parse_utc(&due_at)?;
            if due > cutoff {
                return None;
            }

            Some((
                due,
                AssignmentSummary {
                    id: raw.id,
                    name: raw.name,
                    due_at,
                    points_possible: raw.points_possible,
                    html_url: raw.html_url,
                },
            ))
        })
        .collect();
    due_soon.sort_by_key(|(due, _)| *due);

    due_soon.into_iter().map(|(_, summary)| summary).collect()
}

impl Client {
    /// Every assignment in a course, raw.
    pub fn assignments_raw(&self, course_id: u64) -> Result<Vec<Value>> {
        self.collect(&format!("/api/v1/courses/{}/assignments", course_id), &[])
    }

    /// Assignments in a course due within the window, soonest first.
    pub fn list_assignments(
        &self,
        course_id: u64,
        due_within_days: i64,
    ) -> Result<Vec<AssignmentSummary>> {
        Ok(upcoming(
            self.assignments_raw(course_id)?,
            Utc::now(),
            due_within_days,
        ))
    }
}
