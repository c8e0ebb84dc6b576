//! Status Page Generator
//!
//! StatusData를 렌더 트리로 변환한 뒤 정적 HTML/JSON 파일을 생성합니다.

use crate::data::StatusData;
use crate::render::{
    BannerView, DayCell, HistoryView, IncidentCardView, PageView, RenderContext,
    ServiceCardView, UptimeCardView, render_page,
};
use crate::templates::{self, escape};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Status Page 생성기
#[derive(Debug, Clone)]
pub struct StatusPageGenerator {
    /// 출력 디렉토리
    output_dir: PathBuf,
}

impl StatusPageGenerator {
    /// 새 생성기 생성
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// StatusData로부터 Status Page 생성
    pub fn generate(&self, status: &StatusData, ctx: &RenderContext) -> Result<GeneratedFiles> {
        // 출력 디렉토리 생성
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {}", self.output_dir.display())
        })?;

        // 1. status.json 저장
        let status_json =
            serde_json::to_string_pretty(status).context("Failed to serialize status data")?;
        let status_file = self.output_dir.join("status.json");
        fs::write(&status_file, &status_json).context("Failed to write status.json")?;

        // 2. HTML 생성
        let view = render_page(status, ctx);
        let html = self.render_html(&view, ctx.grid_days);
        let html_file = self.output_dir.join("index.html");
        fs::write(&html_file, &html).context("Failed to write index.html")?;

        tracing::info!(
            html = %html_file.display(),
            status = %view.banner.status,
            services = view.services.len(),
            "Status page generated"
        );

        Ok(GeneratedFiles {
            html_path: html_file,
            status_json_path: status_file,
        })
    }

    /// HTML 렌더링
    pub fn render_html(&self, view: &PageView, grid_days: usize) -> String {
        tracing::debug!(site = %view.site_name, "Rendering page view");

        templates::generate_html(
            &view.site_name,
            &self.render_banner(&view.banner),
            &self.render_services(&view.services),
            &self.render_uptime_grid(&view.uptime_grid),
            grid_days,
            &self.render_incidents(view.active_incidents.as_deref()),
            &self.render_history(&view.history),
        )
    }

    fn render_banner(&self, banner: &BannerView) -> String {
        let class = match banner.modifier {
            Some(modifier) => format!("status-banner {modifier}"),
            None => "status-banner".to_string(),
        };

        format!(
            r#"<section class="{class}">
  <div class="status-indicator">{icon}</div>
  <div>
    <h1>{title}</h1>
    <p>{description}</p>
  </div>
  <div class="last-updated">Last updated: {last_updated}</div>
</section>"#,
            icon = templates::status_icon(banner.status),
            title = escape(&banner.title),
            description = escape(&banner.description),
            last_updated = escape(&banner.last_updated),
        )
    }

    /// 서비스 카드 목록 렌더링
    fn render_services(&self, services: &[ServiceCardView]) -> String {
        services
            .iter()
            .map(|s| {
                let good = if s.uptime_good { " good" } else { "" };
                format!(
                    r#"<div class="service-card" data-service-id="{id}">
  <div class="service-header">
    <span class="service-name">{name}</span>
    {badge}
  </div>
  <div class="service-metrics">
    <div class="metric">
      <div class="metric-label">Uptime (30d)</div>
      <div class="metric-value{good}">{uptime}</div>
    </div>
    <div class="metric">
      <div class="metric-label">Response Time</div>
      <div class="metric-value">{response_time}</div>
    </div>
  </div>
  <div class="uptime-chart" title="{count}-day uptime history">{days}</div>
</div>"#,
                    id = escape(&s.id),
                    name = escape(&s.name),
                    badge = status_badge(s.status.as_str(), s.status_label),
                    uptime = s.uptime,
                    response_time = s.response_time,
                    count = s.days.len(),
                    days = render_days(&s.days),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_uptime_grid(&self, cards: &[UptimeCardView]) -> String {
        cards
            .iter()
            .map(|c| {
                format!(
                    r#"<div class="uptime-card">
  <div class="uptime-card-header">
    <span class="uptime-card-name">{name}</span>
    <span class="uptime-percentage">{uptime}</span>
  </div>
  <div class="uptime-chart">{days}</div>
</div>"#,
                    name = escape(&c.name),
                    uptime = c.uptime,
                    days = render_days(&c.days),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Incident 목록 렌더링 (없으면 섹션 생략)
    fn render_incidents(&self, incidents: Option<&[IncidentCardView]>) -> String {
        let Some(incidents) = incidents else {
            return String::new();
        };

        let cards: String = incidents
            .iter()
            .map(|i| self.render_incident(i))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<section class="section" id="active-incidents">
  <h2 class="section-title">Active Incidents</h2>
  <div class="incident-list">{cards}</div>
</section>"#
        )
    }

    /// 단일 Incident 렌더링
    fn render_incident(&self, incident: &IncidentCardView) -> String {
        let timeline: String = incident
            .timeline
            .iter()
            .map(|row| {
                format!(
                    r#"<div class="timeline-event">
  <div class="timeline-event-time">{}</div>
  <div class="timeline-event-text">{}</div>
</div>"#,
                    escape(&row.time),
                    escape(&row.text)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let affected = if incident.affected.is_empty() {
            String::new()
        } else {
            format!(
                r#"<p class="incident-affected">Affects: {}</p>"#,
                escape(&incident.affected.join(", "))
            )
        };

        format!(
            r#"<div class="incident-card {status}">
  <div class="incident-header">
    <span class="incident-title">{title}</span>
    <span class="incident-time">{started}</span>
  </div>
  <p class="incident-description">{description}</p>
  {affected}
  <details class="incident-timeline" id="timeline-{id}">
    <summary>View Timeline</summary>
    <div class="timeline-events">
      {timeline}
    </div>
  </details>
</div>"#,
            status = incident.status.as_str(),
            title = escape(&incident.title),
            started = escape(&incident.started),
            description = escape(&incident.description),
            id = escape(&incident.id),
        )
    }

    fn render_history(&self, history: &HistoryView) -> String {
        match history {
            HistoryView::Empty { message } => format!(
                r#"<div class="no-incidents">
  {icon}
  <p>{message}</p>
</div>"#,
                icon = templates::status_icon(statusboard_core::Status::Operational),
                message = escape(message),
            ),
            HistoryView::Entries { rows } => rows
                .iter()
                .map(|row| {
                    format!(
                        r#"<div class="history-item">
  <div class="history-info">
    <span class="history-date">{date}</span>
    {badge}
    <span class="history-title">{title}</span>
  </div>
  <span class="history-duration">{duration}</span>
</div>"#,
                        date = escape(&row.date),
                        badge = status_badge(row.status.as_str(), row.status_label),
                        title = escape(&row.title),
                        duration = escape(&row.duration),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn status_badge(class: &str, label: &str) -> String {
    format!(
        r#"<span class="status-badge {class}"><span class="status-dot"></span>{}</span>"#,
        escape(label)
    )
}

fn render_days(days: &[DayCell]) -> String {
    days.iter()
        .map(|d| {
            format!(
                r#"<div class="uptime-day {}" title="{}"></div>"#,
                d.status.as_str(),
                escape(&d.tooltip)
            )
        })
        .collect()
}

/// 생성된 파일 경로
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub html_path: PathBuf,
    pub status_json_path: PathBuf,
}
