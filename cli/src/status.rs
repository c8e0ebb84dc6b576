//! Status Page CLI Commands
//!
//! `statusboard build` / `watch` / `sample-config`

use anyhow::{Context, Result};
use chrono::{FixedOffset, Local, Offset, Utc};
use statusboard_page::{RefreshDriver, SiteConfig, StatusPageGenerator};
use std::path::{Path, PathBuf};

/// 설정 로드 (파일이 없으면 기본값 + 샘플 카탈로그)
fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

/// 호스트의 로컬 시간대
fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

/// Status Page 빌드 실행
pub fn run_status_build(
    config_path: Option<&Path>,
    out: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(out) = out {
        config.output_dir = out;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    println!("Building Status Page...");
    println!("  Output: {}", config.output_dir.display());

    let now = Utc::now();
    let data = config
        .build_data(now, &mut config.unit_source())
        .context("Failed to build status data")?;

    let generator = StatusPageGenerator::new(config.output_dir.clone());
    let result = generator.generate(&data, &config.render_context(now, local_offset()))?;

    println!("\n✓ Status Page generated successfully!");
    println!("  HTML: {}", result.html_path.display());
    println!("  JSON: {}", result.status_json_path.display());
    println!("\nOpen {} in a browser to preview.", result.html_path.display());

    Ok(())
}

/// interval마다 Status Page 재생성 (Ctrl-C로 종료)
pub async fn run_status_watch(
    config_path: Option<&Path>,
    out: Option<PathBuf>,
    interval: Option<u64>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(out) = out {
        config.output_dir = out;
    }
    if let Some(secs) = interval {
        config.refresh_interval_secs = secs;
    }
    config.validate().context("Invalid watch settings")?;

    let now = Utc::now();
    let data = config
        .build_data(now, &mut config.unit_source())
        .context("Failed to build status data")?;

    let settings = config.refresh_settings();
    println!(
        "Watching: regenerating {} every {}s (Ctrl-C to stop)",
        config.output_dir.display(),
        settings.interval.as_secs()
    );

    let driver = RefreshDriver::new(
        StatusPageGenerator::new(config.output_dir.clone()),
        data,
        config.render_context(now, local_offset()),
        settings,
    );

    let rendered = driver
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "Failed to listen for Ctrl-C, stopping");
            }
        })
        .await;

    println!("\nStopped after {} refreshes.", rendered);
    Ok(())
}

/// 샘플 카탈로그를 TOML 설정으로 출력
pub fn run_sample_config(output: Option<&Path>) -> Result<()> {
    let toml = SiteConfig::sample(Utc::now())
        .to_toml_string()
        .context("Failed to serialize sample config")?;

    match output {
        Some(path) => {
            std::fs::write(path, toml)
                .with_context(|| format!("Failed to write config file: {}", path.display()))?;
            println!("Sample config saved to: {}", path.display());
        }
        None => {
            println!("{}", toml);
        }
    }

    Ok(())
}
