use crate::error::{StatusError, StatusResult};
use crate::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Services
// ============================================================================

/// A monitored component shown as one card on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub status: Status,
    /// Uptime percentage (0 ~ 100)
    pub uptime: f64,
    pub response_time_ms: u32,
    /// One entry per day, oldest first
    pub history: Vec<Status>,
}

impl Service {
    pub fn validate(&self) -> StatusResult<()> {
        if !self.uptime.is_finite() || !(0.0..=100.0).contains(&self.uptime) {
            return Err(StatusError::InvalidUptime(self.uptime));
        }
        Ok(())
    }
}

// ============================================================================
// Incidents
// ============================================================================

/// An ongoing disruption with its update log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub status: Status,
    /// Display names of the affected services
    #[serde(default)]
    pub affected_services: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub description: String,
    /// Newest first
    #[serde(default)]
    pub updates: Vec<IncidentUpdate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentUpdate {
    pub at: DateTime<Utc>,
    pub text: String,
}

/// A past incident in the history feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
    pub status: Status,
    pub date: DateTime<Utc>,
    /// Free-form, e.g. "2 hours"
    pub duration: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(uptime: f64) -> Service {
        Service {
            id: "api-gateway".to_string(),
            name: "API Gateway".to_string(),
            status: Status::Operational,
            uptime,
            response_time_ms: 67,
            history: vec![Status::Operational; 3],
        }
    }

    #[test]
    fn test_uptime_bounds() {
        assert!(service(99.97).validate().is_ok());
        assert!(service(0.0).validate().is_ok());
        assert!(service(100.0).validate().is_ok());
        assert_eq!(
            service(100.5).validate(),
            Err(StatusError::InvalidUptime(100.5))
        );
        assert!(service(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_incident_deserialization() {
        let json = r#"{
            "id": "inc-001",
            "title": "Data Sync Service Degraded Performance",
            "status": "degraded",
            "started_at": "2026-10-17T12:00:00Z",
            "description": "Investigating latency."
        }"#;
        let incident: Incident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.status, Status::Degraded);
        assert!(incident.updates.is_empty());
        assert!(incident.affected_services.is_empty());
    }
}
