//! HTML 템플릿
//!
//! 정적 Status Page 생성에 필요한 CSS/SVG/HTML 템플릿

use statusboard_core::Status;

/// 기본 CSS 스타일
pub const DEFAULT_CSS: &str = r#"
:root {
  --bg-primary: #0f0f0f;
  --bg-secondary: #1a1a1a;
  --bg-tertiary: #252525;
  --text-primary: #ffffff;
  --text-secondary: #a0a0a0;
  --text-muted: #666666;
  --border-color: #333333;
  --accent-green: #22c55e;
  --accent-yellow: #eab308;
  --accent-red: #ef4444;
  --accent-blue: #3b82f6;
}

@media (prefers-color-scheme: light) {
  :root {
    --bg-primary: #ffffff;
    --bg-secondary: #f8f9fa;
    --bg-tertiary: #e9ecef;
    --text-primary: #1a1a1a;
    --text-secondary: #495057;
    --text-muted: #868e96;
    --border-color: #dee2e6;
  }
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
  background-color: var(--bg-primary);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

.container { max-width: 960px; margin: 0 auto; padding: 2rem 1.5rem; }

header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 2rem; }
.logo { font-size: 1.5rem; font-weight: 700; }

.status-banner {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1.5rem;
  border-radius: 12px;
  margin-bottom: 2.5rem;
  background-color: rgba(34, 197, 94, 0.15);
  color: var(--accent-green);
}
.status-banner.degraded { background-color: rgba(234, 179, 8, 0.15); color: var(--accent-yellow); }
.status-banner.outage { background-color: rgba(239, 68, 68, 0.15); color: var(--accent-red); }
.status-banner.maintenance { background-color: rgba(59, 130, 246, 0.15); color: var(--accent-blue); }
.status-banner h1 { font-size: 1.25rem; }
.status-banner p { color: var(--text-secondary); font-size: 0.875rem; }
.icon-large { width: 40px; height: 40px; flex-shrink: 0; }
.last-updated { margin-left: auto; color: var(--text-muted); font-size: 0.875rem; }

.section { margin-bottom: 2.5rem; }
.section-title {
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-muted);
  margin-bottom: 1rem;
}

.services-grid, .uptime-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; }
.service-card, .uptime-card, .incident-card, .history-item, .no-incidents {
  background-color: var(--bg-secondary);
  border: 1px solid var(--border-color);
  border-radius: 12px;
  padding: 1.25rem;
}
.service-header, .uptime-card-header, .incident-header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 0.75rem; }
.service-name, .uptime-card-name, .incident-title { font-weight: 600; }

.status-badge { display: inline-flex; align-items: center; gap: 0.4rem; font-size: 0.75rem; font-weight: 500; }
.status-dot { width: 10px; height: 10px; border-radius: 50%; background-color: var(--accent-green); }
.status-badge.degraded .status-dot { background-color: var(--accent-yellow); }
.status-badge.outage .status-dot { background-color: var(--accent-red); }
.status-badge.maintenance .status-dot { background-color: var(--accent-blue); }

.service-metrics { display: flex; gap: 2rem; margin-bottom: 0.75rem; }
.metric-label { font-size: 0.75rem; color: var(--text-muted); }
.metric-value { font-weight: 600; }
.metric-value.good { color: var(--accent-green); }

.uptime-chart { display: flex; gap: 1px; height: 28px; }
.uptime-day { flex: 1; border-radius: 1px; background-color: var(--accent-green); }
.uptime-day.degraded { background-color: var(--accent-yellow); }
.uptime-day.outage { background-color: var(--accent-red); }
.uptime-day.maintenance { background-color: var(--accent-blue); }
.uptime-percentage { font-size: 0.875rem; color: var(--text-secondary); }

.incident-list, .history-list { display: flex; flex-direction: column; gap: 1rem; }
.incident-card { border-left: 4px solid var(--accent-green); }
.incident-card.degraded { border-left-color: var(--accent-yellow); }
.incident-card.outage { border-left-color: var(--accent-red); }
.incident-card.maintenance { border-left-color: var(--accent-blue); }
.incident-time, .incident-affected { font-size: 0.875rem; color: var(--text-muted); }
.incident-description { font-size: 0.875rem; color: var(--text-secondary); margin-bottom: 0.75rem; }
.incident-timeline summary { cursor: pointer; font-size: 0.875rem; color: var(--text-secondary); }
.timeline-events { border-left: 2px solid var(--border-color); padding-left: 1rem; margin: 0.75rem 0 0 0.5rem; }
.timeline-event { padding-bottom: 0.75rem; }
.timeline-event:last-child { padding-bottom: 0; }
.timeline-event-time { font-size: 0.75rem; color: var(--text-muted); }
.timeline-event-text { font-size: 0.875rem; color: var(--text-secondary); }

.history-item { display: flex; align-items: center; justify-content: space-between; }
.history-info { display: flex; align-items: center; gap: 1rem; }
.history-date, .history-duration { font-size: 0.875rem; color: var(--text-muted); }
.no-incidents { text-align: center; color: var(--text-muted); }

footer {
  text-align: center;
  padding: 2rem 0;
  color: var(--text-muted);
  font-size: 0.75rem;
  border-top: 1px solid var(--border-color);
  margin-top: 2rem;
}
"#;

const SVG_OPEN: &str = r#"<svg class="icon-large" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#;

/// 상태별 배너 아이콘
pub fn status_icon(status: Status) -> String {
    let body = match status {
        Status::Operational => {
            r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"></path><polyline points="22 4 12 14.01 9 11.01"></polyline>"#
        }
        Status::Degraded => {
            r#"<path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"></path><line x1="12" y1="9" x2="12" y2="13"></line><line x1="12" y1="17" x2="12.01" y2="17"></line>"#
        }
        Status::Outage => {
            r#"<circle cx="12" cy="12" r="10"></circle><line x1="15" y1="9" x2="9" y2="15"></line><line x1="9" y1="9" x2="15" y2="15"></line>"#
        }
        Status::Maintenance => {
            r#"<circle cx="12" cy="12" r="3"></circle><path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-2.82 1.18V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-2.82-1.18l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 3.09 14H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.18-2.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 10 3.09V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 2.82 1.18l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 20.91 10H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"></path>"#
        }
    };
    format!("{SVG_OPEN}{body}</svg>")
}

/// HTML 텍스트/속성 이스케이프
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// HTML 문서 생성
pub fn generate_html(
    site_name: &str,
    banner_html: &str,
    services_html: &str,
    uptime_html: &str,
    uptime_days: usize,
    incidents_html: &str,
    history_html: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="description" content="{site_name} System Status - Current service status and incidents">
  <title>{site_name} System Status</title>
  <style>{css}</style>
</head>
<body>
  <div class="container">
    <header>
      <div class="logo">{site_name} Status</div>
    </header>

    {banner_html}

    {incidents_html}

    <section class="section">
      <h2 class="section-title">Services</h2>
      <div class="services-grid">
        {services_html}
      </div>
    </section>

    <section class="section">
      <h2 class="section-title">Uptime ({uptime_days} days)</h2>
      <div class="uptime-grid">
        {uptime_html}
      </div>
    </section>

    <section class="section">
      <h2 class="section-title">Incident History</h2>
      <div class="history-list">
        {history_html}
      </div>
    </section>

    <footer>
      <p>Generated with statusboard</p>
    </footer>
  </div>
</body>
</html>"#,
        site_name = escape(site_name),
        css = DEFAULT_CSS,
    )
}
