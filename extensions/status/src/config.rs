//! 사이트 설정 (statusboard.toml)
//!
//! 모든 항목은 선택 사항입니다. `services`가 비어 있으면 샘플 서비스를 사용하고,
//! `incidents`/`history`는 설정된 경우 그대로 유지합니다.

use crate::data::{ServiceSpec, StatusData, sample_history, sample_incidents, sample_services};
use crate::refresh::RefreshSettings;
use crate::render::RenderContext;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use statusboard_core::{
    DEFAULT_HISTORY_DAYS, HistoryEntry, Incident, MAX_HISTORY_DAYS, SeededSource, StatusError,
    ThreadSource, UnitSource,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] StatusError),
    #[error("duplicate service id: {0}")]
    DuplicateService(String),
    #[error("incident {incident} references unknown service {service:?}")]
    UnknownService { incident: String, service: String },
    #[error("refresh interval must be at least one second")]
    InvalidInterval,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub output_dir: PathBuf,
    pub history_days: usize,
    /// Uptime 그리드에 표시할 최근 일수
    pub grid_days: usize,
    /// 이 값 이상이면 uptime을 `good`으로 표시
    pub good_uptime_threshold: f64,
    pub refresh_interval_secs: u64,
    pub refresh_delay_ms: u64,
    /// 지정하면 uptime 히스토리가 재현 가능해집니다
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub services: Vec<ServiceSpec>,
    pub incidents: Vec<Incident>,
    pub history: Vec<HistoryEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Acme Corp".to_string(),
            output_dir: PathBuf::from("./dist/status"),
            history_days: DEFAULT_HISTORY_DAYS,
            grid_days: 30,
            good_uptime_threshold: 99.9,
            refresh_interval_secs: 60,
            refresh_delay_ms: 1000,
            seed: None,
            services: Vec::new(),
            incidents: Vec::new(),
            history: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// 파일에서 로드 후 검증
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), services = config.services.len(), "Loaded site config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 샘플 카탈로그를 그대로 담은 설정 (`sample-config` 명령용)
    pub fn sample(now: DateTime<Utc>) -> Self {
        Self {
            services: sample_services(),
            incidents: sample_incidents(now),
            history: sample_history(now),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_days > MAX_HISTORY_DAYS {
            return Err(StatusError::InvalidDayCount(self.history_days).into());
        }
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidInterval);
        }

        let mut ids = HashSet::new();
        for spec in &self.services {
            if !ids.insert(spec.id.as_str()) {
                return Err(ConfigError::DuplicateService(spec.id.clone()));
            }
            if !spec.base_uptime.is_finite() || !(0.0..=1.0).contains(&spec.base_uptime) {
                return Err(StatusError::InvalidProbability(spec.base_uptime).into());
            }
            if !spec.uptime.is_finite() || !(0.0..=100.0).contains(&spec.uptime) {
                return Err(StatusError::InvalidUptime(spec.uptime).into());
            }
        }

        // services가 비어 있으면 샘플 카탈로그 기준으로 검사
        let fallback = if self.services.is_empty() {
            sample_services()
        } else {
            Vec::new()
        };
        let names: HashSet<&str> = self
            .services
            .iter()
            .chain(&fallback)
            .map(|s| s.name.as_str())
            .collect();
        for incident in &self.incidents {
            if let Some(unknown) = incident
                .affected_services
                .iter()
                .find(|name| !names.contains(name.as_str()))
            {
                return Err(ConfigError::UnknownService {
                    incident: incident.id.clone(),
                    service: unknown.clone(),
                });
            }
        }

        Ok(())
    }

    /// 설정에 맞는 난수 소스 (seed가 있으면 재현 가능)
    pub fn unit_source(&self) -> Box<dyn UnitSource + Send> {
        match self.seed {
            Some(seed) => Box::new(SeededSource::from_seed(seed)),
            None => Box::new(ThreadSource),
        }
    }

    /// StatusData 스냅샷 생성
    pub fn build_data<S>(&self, now: DateTime<Utc>, source: &mut S) -> Result<StatusData, ConfigError>
    where
        S: UnitSource + ?Sized,
    {
        if self.services.is_empty() {
            tracing::warn!("No services configured, using the sample services");
            let mut data =
                StatusData::sample(self.site_name.clone(), now, self.history_days, source)?;
            if !self.incidents.is_empty() {
                data.incidents = self.incidents.clone();
            }
            if !self.history.is_empty() {
                data.history = self.history.clone();
            }
            return Ok(data);
        }

        let mut data = StatusData::new(self.site_name.clone(), now);
        for spec in &self.services {
            data.add_service(spec, self.history_days, source)?;
        }
        data.incidents = self.incidents.clone();
        data.history = self.history.clone();
        Ok(data)
    }

    pub fn render_context(&self, now: DateTime<Utc>, offset: FixedOffset) -> RenderContext {
        RenderContext::new(now, offset)
            .with_grid_days(self.grid_days)
            .with_history_days(self.history_days)
            .with_good_uptime_threshold(self.good_uptime_threshold)
    }

    pub fn refresh_settings(&self) -> RefreshSettings {
        RefreshSettings {
            interval: Duration::from_secs(self.refresh_interval_secs),
            delay: Duration::from_millis(self.refresh_delay_ms),
        }
    }
}
