//! # statusboard-core
//!
//! IO-free building blocks for the status page: the status model, the
//! overall roll-up, synthetic uptime history and display time formatting.
//! Nothing in here touches the filesystem, a clock or a global.

pub mod error;
pub mod history;
pub mod model;
pub mod status;
pub mod time;

pub use error::{StatusError, StatusResult};
pub use history::{
    DEFAULT_HISTORY_DAYS, MAX_HISTORY_DAYS, RngSource, SeededSource, ThreadSource, UnitSource,
    generate_history,
};
pub use model::{HistoryEntry, Incident, IncidentUpdate, Service};
pub use status::{OverallStatus, Status, compute_overall_status, overall_for_services};
pub use time::{format_date, format_relative, format_time};
