use serde_json::Value;

use crate::{Client, Result};

impl Client {
    /// The caller's own submissions for one assignment, raw.
    pub fn submissions_raw(&self, course_id: u64, assignment_id: u64) -> Result<Vec<Value>> {
        let assignment_id = assignment_id.to_string();

        self.collect(
            &format!("/api/v1/courses/{}/students/submissions", course_id),
            &[
                ("student_ids[]", "self"),
                ("assignment_ids[]", assignment_id.as_str()),
                ("per_page", "100"),
            ],
        )
    }
}
