//! 렌더 트리
//!
//! `StatusData` + 현재 시각 → `PageView`. IO와 전역 상태가 없는 순수 함수이며,
//! HTML 출력은 generator가 담당합니다.

use crate::data::StatusData;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use statusboard_core::{
    DEFAULT_HISTORY_DAYS, HistoryEntry, Incident, Service, Status, format_date, format_relative,
    format_time,
};

/// 렌더링 시점 정보
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub now: DateTime<Utc>,
    /// 표시용 시간대
    pub offset: FixedOffset,
    pub grid_days: usize,
    /// 빈 history 안내문에 쓰는 기간
    pub history_days: usize,
    pub good_uptime_threshold: f64,
}

impl RenderContext {
    pub fn new(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self {
            now,
            offset,
            grid_days: 30,
            history_days: DEFAULT_HISTORY_DAYS,
            good_uptime_threshold: 99.9,
        }
    }

    pub fn with_grid_days(mut self, days: usize) -> Self {
        self.grid_days = days;
        self
    }

    pub fn with_history_days(mut self, days: usize) -> Self {
        self.history_days = days;
        self
    }

    pub fn with_good_uptime_threshold(mut self, threshold: f64) -> Self {
        self.good_uptime_threshold = threshold;
        self
    }

    /// 같은 설정으로 시각만 바꾼 컨텍스트
    pub fn at(&self, now: DateTime<Utc>) -> Self {
        Self { now, ..self.clone() }
    }

    fn time(&self, ts: &DateTime<Utc>) -> String {
        format_time(&ts.with_timezone(&self.offset))
    }

    fn date(&self, ts: &DateTime<Utc>) -> String {
        format_date(&ts.with_timezone(&self.offset))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub site_name: String,
    pub banner: BannerView,
    pub services: Vec<ServiceCardView>,
    pub uptime_grid: Vec<UptimeCardView>,
    /// `None`이면 섹션 자체를 숨김
    pub active_incidents: Option<Vec<IncidentCardView>>,
    pub history: HistoryView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerView {
    pub status: Status,
    pub title: String,
    pub description: String,
    /// operational이 아닐 때만 붙는 CSS modifier
    pub modifier: Option<&'static str>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub status: Status,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCardView {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub status_label: &'static str,
    pub uptime: String,
    pub uptime_good: bool,
    pub response_time: String,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UptimeCardView {
    pub name: String,
    pub uptime: String,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentCardView {
    pub id: String,
    pub title: String,
    pub status: Status,
    pub started: String,
    pub description: String,
    pub affected: Vec<String>,
    pub timeline: Vec<TimelineRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow {
    pub time: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HistoryView {
    Empty { message: String },
    Entries { rows: Vec<HistoryRow> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub date: String,
    pub status: Status,
    pub status_label: &'static str,
    pub title: String,
    pub duration: String,
}

/// 페이지 전체 렌더 트리 생성
pub fn render_page(data: &StatusData, ctx: &RenderContext) -> PageView {
    let active_incidents = if data.incidents.is_empty() {
        None
    } else {
        Some(data.incidents.iter().map(|i| incident_card(i, ctx)).collect())
    };

    PageView {
        site_name: data.site_name.clone(),
        banner: banner(data, ctx),
        services: data.services.iter().map(|s| service_card(s, ctx)).collect(),
        uptime_grid: data.services.iter().map(|s| uptime_card(s, ctx)).collect(),
        active_incidents,
        history: history(&data.history, ctx),
    }
}

fn banner(data: &StatusData, ctx: &RenderContext) -> BannerView {
    let overall = data.overall();
    let modifier = match overall.status {
        Status::Operational => None,
        other => Some(other.as_str()),
    };

    BannerView {
        status: overall.status,
        title: overall.title,
        description: overall.description,
        modifier,
        last_updated: ctx.time(&ctx.now),
    }
}

fn service_card(service: &Service, ctx: &RenderContext) -> ServiceCardView {
    ServiceCardView {
        id: service.id.clone(),
        name: service.name.clone(),
        status: service.status,
        status_label: service.status.label(),
        uptime: format_uptime(service.uptime),
        uptime_good: service.uptime >= ctx.good_uptime_threshold,
        response_time: format!("{}ms", service.response_time_ms),
        days: day_cells(&service.history),
    }
}

fn uptime_card(service: &Service, ctx: &RenderContext) -> UptimeCardView {
    let start = service.history.len().saturating_sub(ctx.grid_days);
    UptimeCardView {
        name: service.name.clone(),
        uptime: format_uptime(service.uptime),
        days: day_cells(&service.history[start..]),
    }
}

fn day_cells(days: &[Status]) -> Vec<DayCell> {
    days.iter()
        .enumerate()
        .map(|(idx, status)| DayCell {
            status: *status,
            tooltip: format!("Day {}: {}", idx + 1, status.label()),
        })
        .collect()
}

fn format_uptime(uptime: f64) -> String {
    format!("{uptime:.2}%")
}

fn incident_card(incident: &Incident, ctx: &RenderContext) -> IncidentCardView {
    IncidentCardView {
        id: incident.id.clone(),
        title: incident.title.clone(),
        status: incident.status,
        started: format!("Started {}", format_relative(&incident.started_at, &ctx.now)),
        description: incident.description.clone(),
        affected: incident.affected_services.clone(),
        timeline: incident
            .updates
            .iter()
            .map(|u| TimelineRow {
                time: ctx.time(&u.at),
                text: u.text.clone(),
            })
            .collect(),
    }
}

fn history(entries: &[HistoryEntry], ctx: &RenderContext) -> HistoryView {
    if entries.is_empty() {
        return HistoryView::Empty {
            message: format!("No incidents in the past {} days", ctx.history_days),
        };
    }

    HistoryView::Entries {
        rows: entries
            .iter()
            .map(|e| HistoryRow {
                date: ctx.date(&e.date),
                status: e.status,
                status_label: e.status.label(),
                title: e.title.clone(),
                duration: format!("Duration: {}", e.duration),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use statusboard_core::SeededSource;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 14, 30, 0).unwrap()
    }

    fn ctx() -> RenderContext {
        RenderContext::new(now(), FixedOffset::east_opt(0).unwrap())
    }

    fn sample() -> StatusData {
        StatusData::sample("Acme Corp", now(), 90, &mut SeededSource::from_seed(3)).unwrap()
    }

    #[test]
    fn test_banner() {
        let view = render_page(&sample(), &ctx());
        assert_eq!(view.banner.status, Status::Degraded);
        assert_eq!(view.banner.title, "Partial System Degradation");
        assert_eq!(view.banner.modifier, Some("degraded"));
        assert_eq!(view.banner.last_updated, "02:30 PM");
    }

    #[test]
    fn test_operational_banner_has_no_modifier() {
        let mut data = sample();
        for service in &mut data.services {
            service.status = Status::Operational;
        }
        let view = render_page(&data, &ctx());
        assert_eq!(view.banner.modifier, None);
        assert_eq!(view.banner.title, "All Systems Operational");
    }

    #[test]
    fn test_service_cards() {
        let view = render_page(&sample(), &ctx());
        let sync = &view.services[2];
        assert_eq!(sync.name, "Data Sync");
        assert_eq!(sync.status_label, "Degraded");
        assert_eq!(sync.uptime, "99.91%");
        assert!(sync.uptime_good);
        assert_eq!(sync.response_time, "342ms");
        assert_eq!(sync.days.len(), 90);
        assert!(sync.days[0].tooltip.starts_with("Day 1: "));

        let strict = render_page(&sample(), &ctx().with_good_uptime_threshold(99.95));
        assert!(!strict.services[2].uptime_good);
    }

    #[test]
    fn test_uptime_grid_shows_recent_days() {
        let data = sample();
        let view = render_page(&data, &ctx());
        let card = &view.uptime_grid[0];
        assert_eq!(card.days.len(), 30);
        assert_eq!(card.days[0].status, data.services[0].history[60]);
        assert!(card.days[29].tooltip.starts_with("Day 30: "));

        let short = render_page(&data, &ctx().with_grid_days(365));
        assert_eq!(short.uptime_grid[0].days.len(), 90);
    }

    #[test]
    fn test_incidents() {
        let view = render_page(&sample(), &ctx());
        let incidents = view.active_incidents.unwrap();
        assert_eq!(incidents[0].started, "Started 45 minutes ago");
        assert_eq!(incidents[0].timeline.len(), 3);
        assert_eq!(incidents[0].timeline[0].time, "02:25 PM");

        let later = render_page(&sample(), &ctx().at(now() + Duration::minutes(75)));
        assert_eq!(later.active_incidents.unwrap()[0].started, "Started 2 hours ago");
    }

    #[test]
    fn test_no_incidents_hides_section() {
        let mut data = sample();
        data.incidents.clear();
        data.history.clear();
        let view = render_page(&data, &ctx());
        assert!(view.active_incidents.is_none());
        assert_eq!(
            view.history,
            HistoryView::Empty {
                message: "No incidents in the past 90 days".to_string()
            }
        );
    }

    #[test]
    fn test_empty_history_names_configured_window() {
        let mut data = sample();
        data.history.clear();

        let view = render_page(&data, &ctx().with_history_days(30));
        assert_eq!(
            view.history,
            HistoryView::Empty {
                message: "No incidents in the past 30 days".to_string()
            }
        );
    }

    #[test]
    fn test_history_rows() {
        let view = render_page(&sample(), &ctx());
        let HistoryView::Entries { rows } = view.history else {
            panic!("expected history rows");
        };
        assert_eq!(rows[0].date, "Oct 14, 2026");
        assert_eq!(rows[0].status_label, "Maintenance");
        assert_eq!(rows[1].duration, "Duration: 15 minutes");
    }
}
