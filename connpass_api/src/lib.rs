mod client;
mod errors;
mod query;
pub mod types;
mod user_agent;
pub use self::client::{Client, BASE_URL};
pub use self::errors::Error;
pub use self::query::{build_url, EventDate, EventQuery, Format, MonthRule, Order};
