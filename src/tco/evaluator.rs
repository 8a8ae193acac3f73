use serde::{Deserialize, Serialize};

use super::error::TcoError;

/// 재고 평가 기간 환산에 쓰는 연간 일수.
const DAYS_PER_YEAR: f64 = 365.0;

/// 단일 부품의 비용 계산 입력.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentCostInput {
    /// 비교 실행 내에서 유일한 부품 식별자
    pub identifier: String,
    /// 해당 수량 구간의 단가. `None`이면 0으로 간주한다.
    pub unit_price: Option<f64>,
    /// 최소 주문 수량(MOQ). `None` 또는 0이면 제약 없음.
    pub minimum_order_quantity: Option<u64>,
}

impl ComponentCostInput {
    pub fn new(identifier: impl Into<String>, unit_price: f64, moq: u64) -> Self {
        Self {
            identifier: identifier.into(),
            unit_price: Some(unit_price),
            minimum_order_quantity: Some(moq),
        }
    }
}

/// 비교 실행 전체에서 공유하는 운영 가정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    /// 빌드 1회당 소요 수량 (0 불가)
    pub quantity_per_build: u32,
    /// 연간 빌드 횟수
    pub builds_per_year: u32,
    /// 스크랩률 [%] (2 → 2%)
    pub scrap_percent: f64,
    /// 빌드 1회 주문당 운송비
    pub shipping_cost_per_order: f64,
    /// 리드타임 대비 안전 재고 일수
    pub lead_time_buffer_days: u32,
    /// 연간 재고 유지비율 (0.15 → 15%/년)
    pub inventory_carrying_cost_rate: f64,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            quantity_per_build: 100,
            builds_per_year: 12,
            scrap_percent: 2.0,
            shipping_cost_per_order: 50.0,
            lead_time_buffer_days: 30,
            inventory_carrying_cost_rate: 0.15,
        }
    }
}

impl CostParameters {
    /// 연간 소요 수량 = 빌드당 수량 × 연간 빌드 횟수.
    pub fn annual_quantity(&self) -> u64 {
        u64::from(self.quantity_per_build) * u64::from(self.builds_per_year)
    }

    /// 계산 전에 파라미터 전제 조건을 검사한다. 첫 번째 위반 항목을 오류로 반환한다.
    pub fn validate(&self) -> Result<(), TcoError> {
        if self.quantity_per_build == 0 {
            return Err(TcoError::parameters(
                "quantity_per_build",
                "빌드당 수량은 0보다 커야 합니다.",
            ));
        }
        check_real_parameter("scrap_percent", self.scrap_percent)?;
        check_real_parameter("shipping_cost_per_order", self.shipping_cost_per_order)?;
        check_real_parameter(
            "inventory_carrying_cost_rate",
            self.inventory_carrying_cost_rate,
        )?;
        Ok(())
    }
}

fn check_real_parameter(field: &'static str, value: f64) -> Result<(), TcoError> {
    if !value.is_finite() {
        return Err(TcoError::parameters(field, "유한한 값이어야 합니다."));
    }
    if value < 0.0 {
        return Err(TcoError::parameters(field, "음수일 수 없습니다."));
    }
    Ok(())
}

/// 비용 분해 항목 이름.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostContributor {
    Material,
    Scrap,
    Shipping,
    Inventory,
    MoqPenalty,
}

impl CostContributor {
    pub const ALL: [CostContributor; 5] = [
        CostContributor::Material,
        CostContributor::Scrap,
        CostContributor::Shipping,
        CostContributor::Inventory,
        CostContributor::MoqPenalty,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CostContributor::Material => "자재비",
            CostContributor::Scrap => "스크랩",
            CostContributor::Shipping => "운송비",
            CostContributor::Inventory => "재고유지",
            CostContributor::MoqPenalty => "MOQ 초과",
        }
    }
}

/// 부품 1개에 대한 연간 비용 분해 결과.
///
/// 각 중간 항을 그대로 보존하여 항목별로 다시 검산할 수 있게 한다.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    /// 연간 소요 수량
    pub annual_quantity: u64,
    pub material_cost: f64,
    pub scrap_cost: f64,
    /// 개당 운송비 = 주문당 운송비 / 빌드당 수량
    pub shipping_cost_per_unit: f64,
    pub shipping_cost: f64,
    /// 안전 재고의 평균 금액
    pub avg_inventory_value: f64,
    pub inventory_cost: f64,
    pub moq_penalty_cost: f64,
    /// 다섯 항목의 합계
    pub annual_cost: f64,
    /// 연간 비용 / 연간 수량. 연간 수량이 0이면 0.
    pub effective_unit_cost: f64,
    /// 기준 부품 대비 연간 비용 차이. 기준 부품 자신과 단독 평가 시 0.
    pub annual_cost_delta: f64,
    /// 관대한 입력 처리 등 주의 메시지
    pub warnings: Vec<String>,
}

impl CostBreakdown {
    /// 다섯 비용 항목을 고정 순서로 반환한다.
    pub fn contributors(&self) -> [(CostContributor, f64); 5] {
        [
            (CostContributor::Material, self.material_cost),
            (CostContributor::Scrap, self.scrap_cost),
            (CostContributor::Shipping, self.shipping_cost),
            (CostContributor::Inventory, self.inventory_cost),
            (CostContributor::MoqPenalty, self.moq_penalty_cost),
        ]
    }

    pub fn cost_of(&self, contributor: CostContributor) -> f64 {
        match contributor {
            CostContributor::Material => self.material_cost,
            CostContributor::Scrap => self.scrap_cost,
            CostContributor::Shipping => self.shipping_cost,
            CostContributor::Inventory => self.inventory_cost,
            CostContributor::MoqPenalty => self.moq_penalty_cost,
        }
    }
}

/// 부품 하나와 공통 파라미터로 연간 TCO를 계산한다.
pub fn evaluate(
    component: &ComponentCostInput,
    params: &CostParameters,
) -> Result<CostBreakdown, TcoError> {
    params.validate()?;

    let mut warnings = Vec::new();
    let unit_price = match component.unit_price {
        Some(price) if !price.is_finite() => {
            return Err(TcoError::input(
                &component.identifier,
                "unit_price",
                "유한한 값이어야 합니다.",
            ));
        }
        Some(price) if price < 0.0 => {
            return Err(TcoError::input(
                &component.identifier,
                "unit_price",
                "음수일 수 없습니다.",
            ));
        }
        // -0.0이 비용 항목에 음의 0으로 번지지 않게 한다.
        Some(price) if price == 0.0 => 0.0,
        Some(price) => price,
        None => {
            tracing::warn!(
                component = %component.identifier,
                "단가 정보가 없어 0으로 계산합니다"
            );
            warnings.push("단가 정보가 없어 0으로 계산했습니다. 실제보다 저렴하게 보일 수 있습니다.".into());
            0.0
        }
    };
    let moq = component.minimum_order_quantity.unwrap_or(0);

    let quantity_per_build = f64::from(params.quantity_per_build);
    let annual_quantity = params.annual_quantity();
    let annual_quantity_f = annual_quantity as f64;

    let material_cost = unit_price * annual_quantity_f;
    let scrap_cost = material_cost * (params.scrap_percent / 100.0);

    let shipping_cost_per_unit = params.shipping_cost_per_order / quantity_per_build;
    let shipping_cost = shipping_cost_per_unit * annual_quantity_f;

    let avg_inventory_value =
        unit_price * quantity_per_build * f64::from(params.lead_time_buffer_days) / DAYS_PER_YEAR;
    let inventory_cost = avg_inventory_value * params.inventory_carrying_cost_rate;

    // MOQ를 맞추기 위해 더 산 수량은 연중 재고로 묶인다고 보고 유지비만 부과한다.
    let moq_penalty_cost = if moq > u64::from(params.quantity_per_build) {
        let excess = (moq - u64::from(params.quantity_per_build)) as f64;
        unit_price * excess * params.inventory_carrying_cost_rate
    } else {
        0.0
    };

    let annual_cost =
        material_cost + scrap_cost + shipping_cost + inventory_cost + moq_penalty_cost;

    let effective_unit_cost = if annual_quantity > 0 {
        annual_cost / annual_quantity_f
    } else {
        warnings.push("연간 빌드 횟수가 0이라 개당 유효 단가를 0으로 표시합니다.".into());
        0.0
    };

    Ok(CostBreakdown {
        annual_quantity,
        material_cost,
        scrap_cost,
        shipping_cost_per_unit,
        shipping_cost,
        avg_inventory_value,
        inventory_cost,
        moq_penalty_cost,
        annual_cost,
        effective_unit_cost,
        annual_cost_delta: 0.0,
        warnings,
    })
}
