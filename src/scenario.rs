//! 비교 시나리오(TOML) 로드. 카탈로그/견적 화면의 가격·MOQ 표기를 계산 입력으로 옮긴다.
//!
//! ```toml
//! [parameters]
//! builds_per_year = 24
//!
//! [baseline]
//! identifier = "LM317T"
//! unit_price = "$1.00"
//! moq = 0
//!
//! [[alternatives]]
//! identifier = "LM317-ALT"
//! unit_price = 0.90
//! moq = 500
//! ```

use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

use crate::tco::{ComponentCostInput, CostParameters};

/// 시나리오 로드 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("시나리오 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("시나리오 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// 한 비교 안에서 식별자가 겹치는 경우
    #[error("중복된 부품 식별자: {0}")]
    DuplicateIdentifier(String),
}

/// 가격 필드. 숫자 또는 화면 표기 문자열("$1,234.50")을 받는다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Number(f64),
    Text(String),
}

impl PriceField {
    /// 숫자로 해석한다. 해석할 수 없는 문자열이면 `None`.
    pub fn to_price(&self) -> Option<f64> {
        match self {
            PriceField::Number(v) => Some(*v),
            PriceField::Text(s) => parse_price_text(s),
        }
    }
}

/// 가격 표기에서 첫 번째 숫자 토큰. 음수 부호는 문자열 처음이나 공백·기호 뒤에서만 인정한다.
static PRICE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\w.,-])(-?(?:\d[\d,]*(?:\.\d+)?|\.\d+))")
        .expect("PRICE_TOKEN_RE regex should compile")
});

/// 통화 기호와 단위 문구 속에서 첫 번째 숫자만 읽고 천 단위 구분자(,)를 걷어낸다.
///
/// 숫자가 없거나, 글자에 붙은 숫자("Rev-2")이거나, 버전처럼 점이 이어지면("1.2.3") `None`.
pub fn parse_price_text(text: &str) -> Option<f64> {
    let token = PRICE_TOKEN_RE.captures(text)?.get(1)?;
    if text[token.end()..].starts_with('.') {
        return None;
    }
    token.as_str().replace(',', "").parse::<f64>().ok()
}

/// 시나리오 파일의 부품 레코드.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentRecord {
    pub identifier: String,
    #[serde(default)]
    pub unit_price: Option<PriceField>,
    #[serde(default, alias = "minimum_order_quantity")]
    pub moq: Option<u64>,
}

impl ComponentRecord {
    pub fn to_cost_input(&self) -> ComponentCostInput {
        let unit_price = match &self.unit_price {
            Some(field) => {
                let price = field.to_price();
                if price.is_none() {
                    tracing::warn!(
                        component = %self.identifier,
                        raw = ?field,
                        "가격 표기를 해석할 수 없어 누락으로 처리합니다"
                    );
                }
                price
            }
            None => None,
        };
        ComponentCostInput {
            identifier: self.identifier.clone(),
            unit_price,
            minimum_order_quantity: self.moq,
        }
    }
}

/// 일부 파라미터만 덮어쓰기 위한 값. 비어 있는 항목은 기본값을 유지한다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ParameterOverrides {
    pub quantity_per_build: Option<u32>,
    pub builds_per_year: Option<u32>,
    pub scrap_percent: Option<f64>,
    pub shipping_cost_per_order: Option<f64>,
    pub lead_time_buffer_days: Option<u32>,
    pub inventory_carrying_cost_rate: Option<f64>,
}

impl ParameterOverrides {
    pub fn apply(&self, base: CostParameters) -> CostParameters {
        CostParameters {
            quantity_per_build: self.quantity_per_build.unwrap_or(base.quantity_per_build),
            builds_per_year: self.builds_per_year.unwrap_or(base.builds_per_year),
            scrap_percent: self.scrap_percent.unwrap_or(base.scrap_percent),
            shipping_cost_per_order: self
                .shipping_cost_per_order
                .unwrap_or(base.shipping_cost_per_order),
            lead_time_buffer_days: self
                .lead_time_buffer_days
                .unwrap_or(base.lead_time_buffer_days),
            inventory_carrying_cost_rate: self
                .inventory_carrying_cost_rate
                .unwrap_or(base.inventory_carrying_cost_rate),
        }
    }

    /// `other`에 값이 있는 항목으로 덮어쓴 새 값을 돌려준다.
    pub fn merged_with(&self, other: &ParameterOverrides) -> ParameterOverrides {
        ParameterOverrides {
            quantity_per_build: other.quantity_per_build.or(self.quantity_per_build),
            builds_per_year: other.builds_per_year.or(self.builds_per_year),
            scrap_percent: other.scrap_percent.or(self.scrap_percent),
            shipping_cost_per_order: other
                .shipping_cost_per_order
                .or(self.shipping_cost_per_order),
            lead_time_buffer_days: other.lead_time_buffer_days.or(self.lead_time_buffer_days),
            inventory_carrying_cost_rate: other
                .inventory_carrying_cost_rate
                .or(self.inventory_carrying_cost_rate),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    parameters: ParameterOverrides,
    baseline: ComponentRecord,
    #[serde(default)]
    alternatives: Vec<ComponentRecord>,
}

/// 계산에 바로 넘길 수 있는 비교 시나리오.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub parameters: ParameterOverrides,
    pub baseline: ComponentCostInput,
    pub alternatives: Vec<ComponentCostInput>,
}

/// TOML 문자열에서 시나리오를 읽는다.
pub fn parse_scenario(content: &str) -> Result<Scenario, ScenarioError> {
    let file: ScenarioFile = toml::from_str(content)?;

    let mut seen = HashSet::new();
    for record in std::iter::once(&file.baseline).chain(file.alternatives.iter()) {
        if !seen.insert(record.identifier.as_str()) {
            return Err(ScenarioError::DuplicateIdentifier(record.identifier.clone()));
        }
    }

    Ok(Scenario {
        parameters: file.parameters,
        baseline: file.baseline.to_cost_input(),
        alternatives: file
            .alternatives
            .iter()
            .map(ComponentRecord::to_cost_input)
            .collect(),
    })
}

/// 시나리오 파일을 읽는다.
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let content = fs::read_to_string(path)?;
    let scenario = parse_scenario(&content)?;
    tracing::info!(
        path = %path.display(),
        alternatives = scenario.alternatives.len(),
        "시나리오를 읽었습니다"
    );
    Ok(scenario)
}
