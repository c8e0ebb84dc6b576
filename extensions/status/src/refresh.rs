//! Refresh Driver
//!
//! 순수 렌더러 바깥에서 일정 간격으로 페이지를 다시 생성합니다.
//! 스냅샷은 시작 시 한 번 만들어지고, 매 tick마다 현재 시각만 바뀝니다.

use crate::data::StatusData;
use crate::generator::{GeneratedFiles, StatusPageGenerator};
use crate::render::RenderContext;
use anyhow::{Context, Result};
use chrono::Utc;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSettings {
    /// 자동 재생성 간격
    pub interval: Duration,
    /// 수동 refresh 완료 전 인위적 지연
    pub delay: Duration,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            delay: Duration::from_millis(1000),
        }
    }
}

pub struct RefreshDriver {
    generator: StatusPageGenerator,
    data: Arc<StatusData>,
    context: RenderContext,
    settings: RefreshSettings,
}

impl RefreshDriver {
    pub fn new(
        generator: StatusPageGenerator,
        data: StatusData,
        context: RenderContext,
        settings: RefreshSettings,
    ) -> Self {
        Self {
            generator,
            data: Arc::new(data),
            context,
            settings,
        }
    }

    /// 지연 후 현재 시각으로 한 번 재생성
    pub async fn refresh_once(&self) -> Result<GeneratedFiles> {
        tokio::time::sleep(self.settings.delay).await;
        self.render_now().await
    }

    /// `shutdown`이 끝날 때까지 interval마다 재생성. 생성한 횟수를 반환합니다.
    ///
    /// 첫 tick은 즉시 실행됩니다. 개별 tick 실패는 로그만 남기고 계속 진행합니다.
    pub async fn run_until<F>(&self, shutdown: F) -> u64
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(self.settings.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut rendered = 0u64;
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!(rendered, "Refresh loop stopped");
                    return rendered;
                }
                _ = ticker.tick() => {
                    match self.render_now().await {
                        Ok(files) => {
                            rendered += 1;
                            tracing::debug!(tick = rendered, html = %files.html_path.display(), "Status page refreshed");
                        }
                        Err(e) => {
                            tracing::error!(error = ?e, "Status page refresh failed");
                        }
                    }
                }
            }
        }
    }

    /// 파일 쓰기는 blocking pool에서 실행
    async fn render_now(&self) -> Result<GeneratedFiles> {
        let generator = self.generator.clone();
        let data = Arc::clone(&self.data);
        let ctx = self.context.at(Utc::now());

        tokio::task::spawn_blocking(move || generator.generate(&data, &ctx))
            .await
            .context("Refresh task panicked")?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use statusboard_core::SeededSource;
    use tempfile::tempdir;

    fn driver(dir: &std::path::Path) -> RefreshDriver {
        let now = Utc::now();
        let data = StatusData::sample("Acme Corp", now, 90, &mut SeededSource::from_seed(5)).unwrap();
        RefreshDriver::new(
            StatusPageGenerator::new(dir),
            data,
            RenderContext::new(now, FixedOffset::east_opt(0).unwrap()),
            RefreshSettings::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_once_waits_for_delay() {
        let temp_dir = tempdir().unwrap();
        let driver = driver(temp_dir.path());

        let start = tokio::time::Instant::now();
        let files = driver.refresh_once().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert!(files.html_path.exists());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_until_ticks_every_interval() {
        let temp_dir = tempdir().unwrap();
        let driver = driver(temp_dir.path());

        // ticks at 0s, 60s, 120s
        let rendered = driver
            .run_until(tokio::time::sleep(Duration::from_secs(125)))
            .await;
        assert_eq!(rendered, 3);
        assert!(temp_dir.path().join("index.html").exists());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_ticks_are_not_counted() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let driver = driver(&blocker.join("out"));

        let rendered = driver
            .run_until(tokio::time::sleep(Duration::from_secs(90)))
            .await;
        assert_eq!(rendered, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_refresh_on_multi_thread_runtime() {
        let temp_dir = tempdir().unwrap();
        let mut driver = driver(temp_dir.path());
        driver.settings.delay = Duration::from_millis(10);

        let files = driver.refresh_once().await.unwrap();
        let json = std::fs::read_to_string(&files.status_json_path).unwrap();
        let parsed: StatusData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, *driver.data);
    }
}
