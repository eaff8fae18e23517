use serde_json::Value;

use crate::{Client, Result};

impl Client {
    /// Assignment-type calendar events, optionally bounded by ISO dates
    /// (`YYYY-MM-DD`), raw.
    pub fn calendar_events_raw(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<Value>> {
        let mut query = vec![("type", "assignment")];
        if let Some(start) = start_date {
            query.push(("start_date", start));
        }
        if let Some(end) = end_date {
            query.push(("end_date", end));
        }

        self.collect("/api/v1/calendar_events", &query)
    }
}
