//! 부품 TCO 비교 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면에서도 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod report;
pub mod scenario;
pub mod tco;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 로그 구독자를 초기화한다. `RUST_LOG`가 없으면 `info` 수준을 쓴다. 한 번만 호출해야 한다.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
