//! # statusboard-page
//!
//! 정적 Status Page 생성기. 서비스/Incident 스냅샷을 렌더 트리(`PageView`)로
//! 변환한 뒤 HTML/JSON 파일로 출력합니다.
//!
//! ## 핵심 개념
//!
//! - **StatusData**: 한 번 만들어지면 변하지 않는 서비스/Incident 스냅샷
//! - **PageView**: 스냅샷 + 현재 시각으로부터 계산된 순수 렌더 트리
//! - **index.html / status.json**: 생성기가 출력하는 정적 파일
//! - **RefreshDriver**: 일정 간격으로 페이지를 다시 생성하는 외부 드라이버

pub mod config;
pub mod data;
pub mod generator;
pub mod refresh;
pub mod render;
mod templates;

pub use config::{ConfigError, SiteConfig};
pub use data::{ServiceSpec, StatusData};
pub use generator::{GeneratedFiles, StatusPageGenerator};
pub use refresh::{RefreshDriver, RefreshSettings};
pub use render::{PageView, RenderContext, render_page};
