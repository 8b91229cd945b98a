//! Shared query infrastructure: [`Order`], [`Format`], and comma-joined list encoding.

use std::str::FromStr;

use url::Url;

use crate::{client::BASE_URL, Error};

use super::EventQuery;

/// Sort order for search results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// By last update time.
    Update = 1,
    /// By event start time.
    Start = 2,
    /// Newest events first.
    Create = 3,
}
impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
impl FromStr for Order {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "update" => Ok(Order::Update),
            "2" | "start" => Ok(Order::Start),
            "3" | "create" => Ok(Order::Create),
            _ => Err(()),
        }
    }
}

/// Response format requested from the API. Only JSON is defined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
}
impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Format::Json => "json",
            }
        )
    }
}

/// Builds the full search URL for `query` against the public connpass endpoint.
pub fn build_url(query: &EventQuery) -> Result<String, Error> {
    let url = Url::parse(BASE_URL).map_err(|e| {
        tracing::error!("Invalid base URL {}: {}", BASE_URL, e);
        Error::InvalidUrl(e)
    })?;
    Ok(query.add_to_url(&url).to_string())
}

/// Joins the stringified items with commas, or `None` when there is nothing to send.
pub(super) fn join_values<T: ToString>(values: &[T]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(","),
    )
}
