//! # Status: Severity Model and Roll-up
//!
//! A service is always in exactly one [`Status`]. The page banner shows a
//! single [`OverallStatus`] derived from all services by severity precedence.

use crate::error::StatusError;
use crate::model::Service;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-service (and per-day) status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Running normally
    Operational,
    /// Slow or partially failing
    Degraded,
    /// Unavailable
    Outage,
    /// Planned downtime
    Maintenance,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Operational,
        Status::Degraded,
        Status::Outage,
        Status::Maintenance,
    ];

    /// Aggregation rank: outage > degraded > maintenance > operational.
    pub fn severity(&self) -> u8 {
        match self {
            Status::Operational => 0,
            Status::Maintenance => 1,
            Status::Degraded => 2,
            Status::Outage => 3,
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Operational => "Operational",
            Status::Degraded => "Degraded",
            Status::Outage => "Outage",
            Status::Maintenance => "Maintenance",
        }
    }

    /// Wire / CSS name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Operational => "operational",
            Status::Degraded => "degraded",
            Status::Outage => "outage",
            Status::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "operational" => Ok(Status::Operational),
            "degraded" => Ok(Status::Degraded),
            "outage" => Ok(Status::Outage),
            "maintenance" => Ok(Status::Maintenance),
            other => Err(StatusError::UnknownStatus(other.to_string())),
        }
    }
}

/// Banner content for the whole system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallStatus {
    pub status: Status,
    pub title: String,
    pub description: String,
}

impl OverallStatus {
    fn for_status(status: Status) -> Self {
        let (title, description) = match status {
            Status::Outage => (
                "System Outage",
                "One or more services are experiencing an outage",
            ),
            Status::Degraded => (
                "Partial System Degradation",
                "Some services are experiencing degraded performance",
            ),
            Status::Maintenance => (
                "Scheduled Maintenance",
                "Some services are undergoing maintenance",
            ),
            Status::Operational => (
                "All Systems Operational",
                "All services are operating normally",
            ),
        };
        Self {
            status,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Rolls a set of statuses up into one overall status.
///
/// This is an any-of scan in fixed precedence order, not a count: a single
/// degraded service among many operational ones yields `Degraded`. An empty
/// input yields `Operational`.
pub fn compute_overall_status<I>(statuses: I) -> OverallStatus
where
    I: IntoIterator<Item = Status>,
{
    let (mut outage, mut degraded, mut maintenance) = (false, false, false);
    for status in statuses {
        match status {
            Status::Outage => outage = true,
            Status::Degraded => degraded = true,
            Status::Maintenance => maintenance = true,
            Status::Operational => {}
        }
    }

    let overall = if outage {
        Status::Outage
    } else if degraded {
        Status::Degraded
    } else if maintenance {
        Status::Maintenance
    } else {
        Status::Operational
    };
    OverallStatus::for_status(overall)
}

pub fn overall_for_services(services: &[Service]) -> OverallStatus {
    compute_overall_status(services.iter().map(|s| s.status))
}
