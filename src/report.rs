//! CLI 출력용 텍스트 리포트.

use crate::config::ReportStyle;
use crate::tco::{ComparisonEntry, ComparisonResult, CostBreakdown, CostContributor, CostParameters};

fn money(style: &ReportStyle, value: f64) -> String {
    if value < 0.0 {
        format!("-{}{:.*}", style.currency_symbol, style.decimals, -value)
    } else {
        format!("{}{:.*}", style.currency_symbol, style.decimals, value)
    }
}

fn signed_money(style: &ReportStyle, value: f64) -> String {
    if value > 0.0 {
        format!("+{}", money(style, value))
    } else {
        money(style, value)
    }
}

/// 파라미터 한 줄 요약.
pub fn format_parameters(params: &CostParameters) -> String {
    format!(
        "빌드당 {}개 × 연 {}회 = 연간 {}개, 스크랩 {}%, 주문당 운송비 {}, 안전재고 {}일, 재고유지율 {}/년",
        params.quantity_per_build,
        params.builds_per_year,
        params.annual_quantity(),
        params.scrap_percent,
        params.shipping_cost_per_order,
        params.lead_time_buffer_days,
        params.inventory_carrying_cost_rate
    )
}

/// 단일 부품의 비용 분해를 출력한다.
pub fn format_breakdown(identifier: &str, breakdown: &CostBreakdown, style: &ReportStyle) -> String {
    let mut lines = vec![format!("[{identifier}]")];
    for (contributor, value) in breakdown.contributors() {
        lines.push(format!("  {:<8} {}", contributor.label(), money(style, value)));
    }
    lines.push(format!("  {:<8} {}", "연간 합계", money(style, breakdown.annual_cost)));
    lines.push(format!(
        "  {:<8} {}{:.*}",
        "개당 단가",
        style.currency_symbol,
        style.unit_cost_decimals,
        breakdown.effective_unit_cost
    ));
    for warning in &breakdown.warnings {
        lines.push(format!("  주의: {warning}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn entry_line(result: &ComparisonResult<'_>, entry: &ComparisonEntry<'_>, style: &ReportStyle) -> String {
    let b = &entry.breakdown;
    let marker = if entry.is_baseline { "*" } else { " " };
    let contributors = CostContributor::ALL
        .iter()
        .map(|c| format!("{} {}", c.label(), money(style, b.cost_of(*c))))
        .collect::<Vec<_>>()
        .join(", ");
    let delta = if entry.is_baseline {
        "기준".to_string()
    } else {
        match result.annual_cost_delta_percent(entry) {
            Some(pct) => format!("{} ({:+.1}%)", signed_money(style, b.annual_cost_delta), pct),
            None => signed_money(style, b.annual_cost_delta),
        }
    };
    format!(
        "{marker} {:<20} 연간 {} | 개당 {}{:.*} | 증감 {} | {}",
        entry.component.identifier,
        money(style, b.annual_cost),
        style.currency_symbol,
        style.unit_cost_decimals,
        b.effective_unit_cost,
        delta,
        contributors
    )
}

/// 비교 결과 전체를 출력한다. 기준 부품이 첫 줄이다.
pub fn format_comparison(result: &ComparisonResult<'_>, style: &ReportStyle) -> String {
    let mut lines = Vec::new();
    for entry in result {
        lines.push(entry_line(result, entry, style));
        for warning in &entry.breakdown.warnings {
            lines.push(format!("    주의: {warning}"));
        }
    }

    let summary = result.summary();
    lines.push(match (&summary.best_identifier, summary.best_annual_cost_delta) {
        (Some(best), Some(delta)) => format!(
            "최적 대체 부품: {best} (기준 대비 연간 {}), 기준보다 저렴 {}개 / 비쌈 {}개",
            signed_money(style, delta),
            summary.cheaper_count,
            summary.costlier_count
        ),
        _ => "대체 부품이 없습니다.".to_string(),
    });

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
