//! Course search results shared between the header and listing pages.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::error::ApiError;
use crate::net::types::Course;

/// Latest course search: query, results, and request status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoursesState {
    pub query: Option<String>,
    pub items: Vec<Course>,
    pub loading: bool,
    pub error: Option<String>,
    /// Sequence number of the most recent search request.
    request_seq: u64,
}

impl CoursesState {
    /// Mark a new search as in flight and return its sequence number.
    /// Previous results stay visible.
    pub fn begin(&mut self, query: &str) -> u64 {
        self.request_seq += 1;
        self.query = Some(query.to_owned());
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply the result of request `seq`. Anything but the latest request is dropped.
    pub fn finish(&mut self, seq: u64, result: Result<Vec<Course>, ApiError>) {
        if seq != self.request_seq {
            return;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message().map_or_else(|| e.to_string(), str::to_owned)),
        }
    }
}
