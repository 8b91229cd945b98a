//! Event-related types returned by the API.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Unique identifier for an event.
pub type EventID = i64;

/// Unique identifier for a series (a connpass group).
pub type SeriesID = i64;

/// A single event listing.
///
/// Timestamps keep the offset the API sends (JST in practice) so records
/// serialize back to the same wire values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub event_id: EventID,

    pub title: String,

    /// Subtitle shown under the title.
    pub catch: Option<String>,

    /// Event description (HTML).
    pub description: String,

    pub event_url: String,

    /// Twitter hashtag, without the leading `#`.
    pub hash_tag: Option<String>,

    pub started_at: DateTime<FixedOffset>,

    pub ended_at: Option<DateTime<FixedOffset>>,

    /// Capacity. `None` when the event has no participant limit.
    pub limit: Option<i64>,

    /// `participation` for connpass-managed signup, `advertisement` for external listings.
    pub event_type: String,

    /// Series the event belongs to, if any.
    pub series: Option<Series>,

    pub address: Option<String>,

    /// Venue name.
    pub place: Option<String>,

    /// Latitude, as a decimal string.
    pub lat: Option<String>,

    /// Longitude, as a decimal string.
    pub lon: Option<String>,

    pub owner_id: i64,

    pub owner_nickname: String,

    pub owner_display_name: String,

    /// Number of accepted participants.
    pub accepted: i64,

    /// Number of participants on the waitlist.
    pub waiting: i64,

    pub updated_at: DateTime<FixedOffset>,
}

/// A recurring event group.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Series {
    pub id: SeriesID,
    pub title: String,
    pub url: String,
}
