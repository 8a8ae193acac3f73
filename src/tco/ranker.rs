use super::error::TcoError;
use super::evaluator::{evaluate, ComponentCostInput, CostBreakdown, CostParameters};

/// 비교 결과의 한 행. 부품 레코드는 호출자 소유를 그대로 빌려 쓴다.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry<'a> {
    pub component: &'a ComponentCostInput,
    pub breakdown: CostBreakdown,
    pub is_baseline: bool,
}

/// 기준 부품과 대체 부품들의 비교 결과.
///
/// 대체 부품은 개당 유효 단가 오름차순, 같으면 연간 비용 오름차순, 그래도 같으면 입력 순서로 정렬되어 있다.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult<'a> {
    baseline: ComparisonEntry<'a>,
    alternatives: Vec<ComparisonEntry<'a>>,
}

/// 표시용 요약 값.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSummary {
    pub baseline_identifier: String,
    pub baseline_annual_cost: f64,
    pub best_identifier: Option<String>,
    pub best_annual_cost_delta: Option<f64>,
    pub best_annual_cost_delta_percent: Option<f64>,
    /// 기준보다 연간 비용이 낮은 대체 부품 수
    pub cheaper_count: usize,
    /// 기준보다 연간 비용이 높은 대체 부품 수
    pub costlier_count: usize,
}

impl<'a> ComparisonResult<'a> {
    pub fn baseline(&self) -> &ComparisonEntry<'a> {
        &self.baseline
    }

    /// 정렬된 대체 부품 목록.
    pub fn alternatives(&self) -> &[ComparisonEntry<'a>] {
        &self.alternatives
    }

    /// 개당 유효 단가가 가장 낮은 대체 부품. 대체 부품이 없으면 `None`.
    pub fn best_alternative(&self) -> Option<&ComparisonEntry<'a>> {
        self.alternatives.first()
    }

    /// 기준 부품을 먼저, 이어서 정렬된 대체 부품을 순회한다. 여러 번 호출해도 같은 순서를 준다.
    pub fn iter(&self) -> impl Iterator<Item = &ComparisonEntry<'a>> + '_ {
        std::iter::once(&self.baseline).chain(self.alternatives.iter())
    }

    pub fn len(&self) -> usize {
        1 + self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// 기준 연간 비용 대비 증감률 [%]. 기준 연간 비용이 0이면 `None`.
    pub fn annual_cost_delta_percent(&self, entry: &ComparisonEntry<'_>) -> Option<f64> {
        let base = self.baseline.breakdown.annual_cost;
        if base > 0.0 {
            Some(entry.breakdown.annual_cost_delta / base * 100.0)
        } else {
            None
        }
    }

    pub fn summary(&self) -> ComparisonSummary {
        let best = self.best_alternative();
        ComparisonSummary {
            baseline_identifier: self.baseline.component.identifier.clone(),
            baseline_annual_cost: self.baseline.breakdown.annual_cost,
            best_identifier: best.map(|e| e.component.identifier.clone()),
            best_annual_cost_delta: best.map(|e| e.breakdown.annual_cost_delta),
            best_annual_cost_delta_percent: best
                .and_then(|e| self.annual_cost_delta_percent(e)),
            cheaper_count: self
                .alternatives
                .iter()
                .filter(|e| e.breakdown.annual_cost_delta < 0.0)
                .count(),
            costlier_count: self
                .alternatives
                .iter()
                .filter(|e| e.breakdown.annual_cost_delta > 0.0)
                .count(),
        }
    }
}

impl<'r, 'a> IntoIterator for &'r ComparisonResult<'a> {
    type Item = &'r ComparisonEntry<'a>;
    type IntoIter = std::iter::Chain<
        std::iter::Once<&'r ComparisonEntry<'a>>,
        std::slice::Iter<'r, ComparisonEntry<'a>>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.baseline).chain(self.alternatives.iter())
    }
}

/// 기준 부품 대비 대체 부품들의 TCO를 계산하고 순위를 매긴다.
///
/// 어느 한 부품이라도 평가에 실패하면 부분 결과 없이 그 오류를 그대로 돌려준다.
pub fn compare<'a>(
    baseline: &'a ComponentCostInput,
    alternatives: &'a [ComponentCostInput],
    params: &CostParameters,
) -> Result<ComparisonResult<'a>, TcoError> {
    let baseline_breakdown = evaluate(baseline, params)?;
    let baseline_annual_cost = baseline_breakdown.annual_cost;

    let mut ranked = alternatives
        .iter()
        .map(|component| {
            let mut breakdown = evaluate(component, params)?;
            breakdown.annual_cost_delta = breakdown.annual_cost - baseline_annual_cost;
            Ok::<_, TcoError>(ComparisonEntry {
                component,
                breakdown,
                is_baseline: false,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // 연간 수량이 0이면 개당 단가가 모두 0이므로 연간 비용으로 다시 가른다.
    // sort_by는 안정 정렬이라 그래도 같으면 입력 순서를 유지한다.
    ranked.sort_by(|a, b| {
        a.breakdown
            .effective_unit_cost
            .total_cmp(&b.breakdown.effective_unit_cost)
            .then_with(|| a.breakdown.annual_cost.total_cmp(&b.breakdown.annual_cost))
    });

    tracing::debug!(
        baseline = %baseline.identifier,
        alternatives = ranked.len(),
        best = ranked.first().map(|e| e.component.identifier.as_str()),
        "TCO 비교 완료"
    );

    Ok(ComparisonResult {
        baseline: ComparisonEntry {
            component: baseline,
            breakdown: baseline_breakdown,
            is_baseline: true,
        },
        alternatives: ranked,
    })
}
