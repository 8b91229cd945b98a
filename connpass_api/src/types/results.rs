use serde::{Deserialize, Serialize};

use super::Event;

/// Response envelope returned by the `/event/` endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Results {
    /// Number of events in this response.
    pub results_returned: i64,
    /// Total number of events matching the query.
    pub results_available: i64,
    /// Offset of the first returned event.
    pub results_start: i64,
    #[serde(default)]
    pub events: Vec<Event>,
}
