//! Value objects - immutable types that represent domain concepts

mod alias_list;
mod dashboard_query;
mod date_window;
mod entity_id;
mod filters;
mod page;
mod time_range;

pub use alias_list::{AliasList, ALIAS_SEPARATOR};
pub use dashboard_query::DashboardQuery;
pub use date_window::{parse_date, DateWindow, DateWindowError, DATE_FORMAT};
pub use entity_id::{EntityId, EntityIdParseError};
pub use filters::{SentimentFilter, TopicFilter, ALL};
pub use page::Page;
pub use time_range::{TimeRange, UnknownTimeRange};
