mod common;
pub use self::common::{build_url, Format, Order};

mod date;
pub use self::date::{EventDate, MonthRule};

mod event;
pub use self::event::EventQuery;
