//! 요금표를 사용량에 적용해 청구 명세를 만드는 공통 누진 계산 로직.

use log::debug;

use super::schedule::RateSchedule;

/// 요금 계산 입력이 허용 범위를 벗어났을 때의 오류.
///
/// 모든 변형은 호출자 계약 위반(InvalidInput)에 해당하며, 명세 항목이
/// 하나라도 만들어지기 전에 반환된다.
#[derive(Debug, Clone, PartialEq)]
pub enum BillingError {
    /// 음수 사용량
    NegativeConsumption(f64),
    /// NaN 또는 무한대 사용량
    NonFiniteConsumption(f64),
    /// 해석할 수 없는 선택자 문자열(용도/계절/연료)
    UnknownSelector { kind: &'static str, value: String },
    /// 1~12 범위를 벗어난 월
    InvalidMonth(u32),
}

impl std::fmt::Display for BillingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingError::NegativeConsumption(v) => write!(f, "사용량은 음수일 수 없습니다: {v}"),
            BillingError::NonFiniteConsumption(v) => write!(f, "사용량이 유한한 숫자가 아닙니다: {v}"),
            BillingError::UnknownSelector { kind, value } => {
                write!(f, "알 수 없는 {kind}: {value}")
            }
            BillingError::InvalidMonth(m) => write!(f, "월은 1~12 사이여야 합니다: {m}"),
        }
    }
}

impl std::error::Error for BillingError {}

/// 명세 항목의 종류.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind {
    BaseFee,
    /// 누진 구간 사용분. `usage`는 이 구간에서 소화한 정수 사용량이다.
    Bracket {
        label: &'static str,
        usage: u64,
        unit_rate: f64,
    },
    Tax { rate: f64 },
}

/// 청구 명세의 한 줄.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    pub kind: LineKind,
    pub amount: f64,
}

/// 요금 계산 결과.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BillingResult {
    /// 기본요금 + 구간 요금 + 세금 합계
    pub total: f64,
    /// 기본요금 → 구간(오름차순) → 세금 순서의 명세
    pub lines: Vec<LineItem>,
}

impl BillingResult {
    /// 명세 금액만 순서대로 나열한다.
    pub fn breakdown(&self) -> Vec<f64> {
        self.lines.iter().map(|line| line.amount).collect()
    }

    pub fn base_fee(&self) -> Option<f64> {
        self.lines
            .iter()
            .find(|line| line.kind == LineKind::BaseFee)
            .map(|line| line.amount)
    }

    pub fn tax(&self) -> Option<f64> {
        self.lines.iter().find_map(|line| match line.kind {
            LineKind::Tax { .. } => Some(line.amount),
            _ => None,
        })
    }

    /// 구간 요금 항목만 순회한다.
    pub fn bracket_lines(&self) -> impl Iterator<Item = &LineItem> {
        self.lines
            .iter()
            .filter(|line| matches!(line.kind, LineKind::Bracket { .. }))
    }

    /// 구간별 사용량의 합. 소수점을 버린 입력 사용량과 같다.
    pub fn billed_units(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| match line.kind {
                LineKind::Bracket { usage, .. } => usage,
                _ => 0,
            })
            .sum()
    }

    fn push(&mut self, kind: LineKind, amount: f64) {
        self.total += amount;
        self.lines.push(LineItem { kind, amount });
    }
}

/// 사용량을 검사한 뒤 소수점 이하를 버려 정수 사용량으로 만든다.
pub fn billable_units(consumption: f64) -> Result<u64, BillingError> {
    if !consumption.is_finite() {
        return Err(BillingError::NonFiniteConsumption(consumption));
    }
    if consumption < 0.0 {
        return Err(BillingError::NegativeConsumption(consumption));
    }
    // 0 이상 유한값이므로 `as` 변환은 0 방향 절삭이다. (u64 범위 초과 시 포화)
    Ok(consumption.trunc() as u64)
}

/// 요금표를 사용량에 적용한다.
///
/// 기본요금(0 초과 시) → 구간을 낮은 순서부터 채우며 사용량 소진 시 중단 →
/// 세율이 있으면 소계에 대한 세금을 마지막 항목으로 더한다.
pub fn apply_schedule(
    schedule: &RateSchedule,
    consumption: f64,
) -> Result<BillingResult, BillingError> {
    let mut remaining = billable_units(consumption)?;
    let mut result = BillingResult::default();

    if schedule.base_fee > 0.0 {
        result.push(LineKind::BaseFee, schedule.base_fee);
    }

    for bracket in schedule.brackets {
        if remaining == 0 {
            break;
        }
        let usage = remaining.min(bracket.capacity(remaining));
        let charge = usage as f64 * bracket.unit_rate;
        debug!(
            "구간 {}: {usage} 단위 × {} = {charge}",
            bracket.label, bracket.unit_rate
        );
        result.push(
            LineKind::Bracket {
                label: bracket.label,
                usage,
                unit_rate: bracket.unit_rate,
            },
            charge,
        );
        remaining -= usage;
    }

    if schedule.has_tax() {
        let tax = result.total * schedule.tax_rate;
        result.push(
            LineKind::Tax {
                rate: schedule.tax_rate,
            },
            tax,
        );
    }

    debug!("합계 {} ({}개 항목)", result.total, result.lines.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::schedule::RateBracket;

    const TWO_TIER: &[RateBracket] = &[
        RateBracket::bounded(0, 9, 1.0, "0-9"),
        RateBracket::unbounded(10, 2.0, "10+"),
    ];

    fn schedule(base_fee: f64, tax_rate: f64) -> RateSchedule {
        RateSchedule {
            brackets: TWO_TIER,
            base_fee,
            tax_rate,
        }
    }

    #[test]
    fn fractional_usage_is_discarded() {
        let res = apply_schedule(&schedule(0.0, 0.0), 9.99).expect("valid input");
        assert_eq!(res.billed_units(), 9);
        assert_eq!(res.breakdown(), vec![9.0]);
    }

    #[test]
    fn first_bracket_holds_upper_minus_lower_plus_one() {
        let res = apply_schedule(&schedule(0.0, 0.0), 12.0).expect("valid input");
        assert_eq!(res.breakdown(), vec![10.0, 4.0]);
        assert_eq!(res.total, 14.0);
    }

    #[test]
    fn zero_usage_keeps_only_fee_and_tax() {
        let res = apply_schedule(&schedule(5.0, 0.1), 0.0).expect("valid input");
        assert_eq!(res.lines.len(), 2);
        assert_eq!(res.base_fee(), Some(5.0));
        assert!((res.tax().unwrap_or_default() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_tax_rate_appends_no_entry() {
        let res = apply_schedule(&schedule(0.0, 0.0), 3.0).expect("valid input");
        assert_eq!(res.tax(), None);
        assert_eq!(res.lines.len(), 1);
    }

    #[test]
    fn invalid_consumption_is_rejected() {
        assert_eq!(
            apply_schedule(&schedule(0.0, 0.0), -1.0),
            Err(BillingError::NegativeConsumption(-1.0))
        );
        assert!(matches!(
            apply_schedule(&schedule(0.0, 0.0), f64::NAN),
            Err(BillingError::NonFiniteConsumption(_))
        ));
        assert!(matches!(
            billable_units(f64::INFINITY),
            Err(BillingError::NonFiniteConsumption(_))
        ));
    }
}
