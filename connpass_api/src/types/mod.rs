mod results;
pub use self::results::Results;

mod event;
pub use self::event::{Event, EventID, Series, SeriesID};
