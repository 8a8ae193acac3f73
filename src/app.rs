use std::path::Path;

use thiserror::Error;

use crate::config::{self, Config, ConfigError};
use crate::report;
use crate::scenario::{self, ParameterOverrides, ScenarioError};
use crate::tco::{self, ComponentCostInput, TcoError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 시나리오 로드 오류
    #[error("시나리오 오류: {0}")]
    Scenario(#[from] ScenarioError),
    /// TCO 계산 오류
    #[error("TCO 계산 오류: {0}")]
    Tco(#[from] TcoError),
}

/// 시나리오 파일을 비교 계산하고 리포트 문자열을 돌려준다.
///
/// 파라미터 우선순위: 설정 기본값 < 시나리오 `[parameters]` < 명령행 인자.
pub fn run_compare(
    scenario_path: &Path,
    config_path: &Path,
    cli_overrides: &ParameterOverrides,
) -> Result<String, AppError> {
    let cfg = config::load_or_default(config_path)?;
    let scenario = scenario::load_scenario(scenario_path)?;
    let params = scenario
        .parameters
        .merged_with(cli_overrides)
        .apply(cfg.default_parameters);

    let result = tco::compare(&scenario.baseline, &scenario.alternatives, &params)?;
    if let Some(best) = result.best_alternative() {
        tracing::info!(
            best = %best.component.identifier,
            delta = best.breakdown.annual_cost_delta,
            "최적 대체 부품을 찾았습니다"
        );
    }

    let mut out = report::format_parameters(&params);
    out.push('\n');
    out.push_str(&report::format_comparison(&result, &cfg.report));
    Ok(out)
}

/// 부품 하나를 단독 평가하고 리포트 문자열을 돌려준다.
pub fn run_evaluate(
    component: &ComponentCostInput,
    config_path: &Path,
    cli_overrides: &ParameterOverrides,
) -> Result<String, AppError> {
    let cfg = config::load_or_default(config_path)?;
    let params = cli_overrides.apply(cfg.default_parameters);
    let breakdown = tco::evaluate(component, &params)?;

    let mut out = report::format_parameters(&params);
    out.push('\n');
    out.push_str(&report::format_breakdown(
        &component.identifier,
        &breakdown,
        &cfg.report,
    ));
    Ok(out)
}

/// 기본 설정 파일을 새로 쓴다. 기존 파일은 덮어쓴다.
pub fn init_config(config_path: &Path) -> Result<Config, AppError> {
    let cfg = Config::default();
    cfg.save(config_path)?;
    tracing::info!(path = %config_path.display(), "기본 설정을 저장했습니다");
    Ok(cfg)
}
