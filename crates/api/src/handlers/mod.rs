pub mod project;
pub mod task;

use serde::Serialize;

/// Body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
