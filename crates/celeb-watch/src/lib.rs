//! # celeb-watch
//!
//! Terminal client for the celebrity dashboard: fetches the panels from the
//! API on a cancellable schedule and renders them as text.

pub mod client;
pub mod config;
pub mod poller;
pub mod render;
pub mod snapshot;

pub use client::{ClientError, DashboardClient, SnapshotSource};
pub use config::{WatchConfig, WatchConfigError, WatchFilters};
pub use poller::Poller;
pub use render::render_dashboard;
pub use snapshot::{CelebrityRow, DashboardSnapshot, ReactionRow, Stats};
