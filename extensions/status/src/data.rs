//! Status Page 데이터 모델
//!
//! status.json 형식과 기본 샘플 카탈로그를 정의합니다.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use statusboard_core::{
    HistoryEntry, Incident, IncidentUpdate, OverallStatus, Service, Status, StatusResult,
    UnitSource, generate_history, overall_for_services,
};

// ============================================================================
// Status Data (status.json)
// ============================================================================

/// status.json 형식 - 페이지 한 장을 그리는 데 필요한 모든 데이터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusData {
    /// 사이트(조직) 이름
    pub site_name: String,
    /// 스냅샷 생성 시각
    pub generated_at: DateTime<Utc>,
    /// 서비스 목록
    pub services: Vec<Service>,
    /// 진행 중인 Incident
    pub incidents: Vec<Incident>,
    /// 지난 Incident 기록
    pub history: Vec<HistoryEntry>,
}

impl StatusData {
    /// 빈 스냅샷 생성
    pub fn new(site_name: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            site_name: site_name.into(),
            generated_at,
            services: Vec::new(),
            incidents: Vec::new(),
            history: Vec::new(),
        }
    }

    /// 샘플 카탈로그로 채운 스냅샷 생성
    pub fn sample<S>(
        site_name: impl Into<String>,
        now: DateTime<Utc>,
        history_days: usize,
        source: &mut S,
    ) -> StatusResult<Self>
    where
        S: UnitSource + ?Sized,
    {
        let mut data = Self::new(site_name, now);
        for spec in sample_services() {
            data.add_service(&spec, history_days, source)?;
        }
        data.incidents = sample_incidents(now);
        data.history = sample_history(now);
        Ok(data)
    }

    /// 서비스 추가 (uptime 히스토리는 spec.base_uptime 기준으로 생성)
    pub fn add_service<S>(
        &mut self,
        spec: &ServiceSpec,
        history_days: usize,
        source: &mut S,
    ) -> StatusResult<()>
    where
        S: UnitSource + ?Sized,
    {
        let service = Service {
            id: spec.id.clone(),
            name: spec.name.clone(),
            status: spec.status,
            uptime: spec.uptime,
            response_time_ms: spec.response_time_ms,
            history: generate_history(history_days, spec.base_uptime, source)?,
        };
        service.validate()?;
        self.services.push(service);
        Ok(())
    }

    /// 전체 상태
    pub fn overall(&self) -> OverallStatus {
        overall_for_services(&self.services)
    }
}

/// 서비스 정의 - 설정 파일과 샘플 카탈로그가 공유
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSpec {
    pub id: String,
    pub name: String,
    pub status: Status,
    /// Uptime 퍼센트 (0 ~ 100)
    pub uptime: f64,
    pub response_time_ms: u32,
    /// 히스토리 생성용 기본 가동 확률 (0.0 ~ 1.0)
    pub base_uptime: f64,
}

impl ServiceSpec {
    fn new(
        id: &str,
        name: &str,
        status: Status,
        uptime: f64,
        response_time_ms: u32,
        base_uptime: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            status,
            uptime,
            response_time_ms,
            base_uptime,
        }
    }
}

// ============================================================================
// Sample Catalog
// ============================================================================

/// 기본 서비스 목록 (데모)
pub fn sample_services() -> Vec<ServiceSpec> {
    vec![
        ServiceSpec::new("payment-gateway", "Payment Gateway", Status::Operational, 99.98, 145, 0.998),
        ServiceSpec::new("user-auth", "User Authentication", Status::Operational, 99.99, 89, 0.999),
        ServiceSpec::new("data-sync", "Data Sync", Status::Degraded, 99.91, 342, 0.995),
        ServiceSpec::new("database-cluster", "Database Cluster", Status::Operational, 99.99, 23, 0.999),
        ServiceSpec::new("api-gateway", "API Gateway", Status::Operational, 99.97, 67, 0.998),
    ]
}

/// 진행 중인 Incident (now 기준 상대 시각)
pub fn sample_incidents(now: DateTime<Utc>) -> Vec<Incident> {
    let minutes_ago = |m: i64| now - Duration::minutes(m);

    vec![Incident {
        id: "inc-001".to_string(),
        title: "Data Sync Service Degraded Performance".to_string(),
        status: Status::Degraded,
        affected_services: vec!["Data Sync".to_string()],
        started_at: minutes_ago(45),
        description: "We are investigating increased latency in the Data Sync service. \
                      Some users may experience slower sync operations."
            .to_string(),
        updates: vec![
            IncidentUpdate {
                at: minutes_ago(5),
                text: "Our engineers have identified the root cause and are implementing a fix."
                    .to_string(),
            },
            IncidentUpdate {
                at: minutes_ago(20),
                text: "We have identified elevated response times in the Data Sync service."
                    .to_string(),
            },
            IncidentUpdate {
                at: minutes_ago(45),
                text: "Investigating reports of slow sync operations.".to_string(),
            },
        ],
    }]
}

/// 지난 Incident 기록 (now 기준 상대 날짜)
pub fn sample_history(now: DateTime<Utc>) -> Vec<HistoryEntry> {
    let entry = |id: &str, title: &str, status: Status, days_ago: i64, duration: &str| {
        HistoryEntry {
            id: id.to_string(),
            title: title.to_string(),
            status,
            date: now - Duration::days(days_ago),
            duration: duration.to_string(),
        }
    };

    vec![
        entry("hist-001", "Payment Gateway Maintenance", Status::Maintenance, 3, "2 hours"),
        entry("hist-002", "API Gateway Outage", Status::Outage, 7, "15 minutes"),
        entry("hist-003", "Database Cluster Performance Issue", Status::Degraded, 14, "45 minutes"),
        entry("hist-004", "User Authentication Service Update", Status::Maintenance, 21, "30 minutes"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use statusboard_core::{DEFAULT_HISTORY_DAYS, SeededSource, StatusError};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_catalog() {
        let mut source = SeededSource::from_seed(1);
        let data = StatusData::sample("Acme Corp", now(), DEFAULT_HISTORY_DAYS, &mut source).unwrap();

        assert_eq!(data.services.len(), 5);
        assert!(data.services.iter().all(|s| s.history.len() == 90));
        assert_eq!(data.incidents.len(), 1);
        assert_eq!(data.incidents[0].started_at, now() - Duration::minutes(45));
        assert_eq!(data.history.len(), 4);
    }

    #[test]
    fn test_sample_overall_is_degraded() {
        let mut source = SeededSource::from_seed(1);
        let data = StatusData::sample("Acme Corp", now(), 90, &mut source).unwrap();
        let overall = data.overall();
        assert_eq!(overall.status, Status::Degraded);
        assert_eq!(overall.title, "Partial System Degradation");
    }

    #[test]
    fn test_add_service_rejects_bad_probability() {
        let mut data = StatusData::new("Acme Corp", now());
        let mut spec = sample_services().remove(0);
        spec.base_uptime = 1.2;
        let err = data
            .add_service(&spec, 90, &mut SeededSource::from_seed(1))
            .unwrap_err();
        assert_eq!(err, StatusError::InvalidProbability(1.2));
        assert!(data.services.is_empty());
    }

    #[test]
    fn test_status_json_shape() {
        let data = StatusData::new("Acme Corp", now());
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["site_name"], "Acme Corp");
        assert!(json["services"].as_array().unwrap().is_empty());
    }
}
