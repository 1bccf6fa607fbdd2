//! 전기 요금표와 전기 요금 계산.
//!
//! 단위는 kWh(度), 요금은 현지 통화 기준이다.

use log::debug;

use super::billing::{apply_schedule, BillingError, BillingResult};
use super::schedule::{RateBracket, RateSchedule};
use super::selector::{CustomerCategory, Season};

/// 전기 요금에 붙는 영업세율.
pub const ELECTRICITY_TAX_RATE: f64 = 0.05;

pub const COMMERCIAL_BASE_FEE: f64 = 79.7;
pub const INDUSTRIAL_BASE_FEE: f64 = 223.7;

const RESIDENTIAL_SUMMER: &[RateBracket] = &[
    RateBracket::bounded(0, 120, 1.63, "0-120 kWh"),
    RateBracket::bounded(121, 330, 2.38, "121-330 kWh"),
    RateBracket::bounded(331, 500, 3.52, "331-500 kWh"),
    RateBracket::bounded(501, 700, 4.80, "501-700 kWh"),
    RateBracket::bounded(701, 1000, 5.66, "701-1000 kWh"),
    RateBracket::unbounded(1001, 6.41, "1001+ kWh"),
];

const RESIDENTIAL_NON_SUMMER: &[RateBracket] = &[
    RateBracket::bounded(0, 120, 1.63, "0-120 kWh"),
    RateBracket::bounded(121, 330, 2.10, "121-330 kWh"),
    RateBracket::bounded(331, 500, 2.89, "331-500 kWh"),
    RateBracket::bounded(501, 700, 3.94, "501-700 kWh"),
    RateBracket::bounded(701, 1000, 4.60, "701-1000 kWh"),
    RateBracket::unbounded(1001, 5.03, "1001+ kWh"),
];

const COMMERCIAL_SUMMER: &[RateBracket] = &[
    RateBracket::bounded(0, 330, 2.53, "0-330 kWh"),
    RateBracket::bounded(331, 700, 3.55, "331-700 kWh"),
    RateBracket::bounded(701, 1500, 4.25, "701-1500 kWh"),
    RateBracket::unbounded(1501, 4.73, "1501+ kWh"),
];

const COMMERCIAL_NON_SUMMER: &[RateBracket] = &[
    RateBracket::bounded(0, 330, 2.12, "0-330 kWh"),
    RateBracket::bounded(331, 700, 2.91, "331-700 kWh"),
    RateBracket::bounded(701, 1500, 3.44, "701-1500 kWh"),
    RateBracket::unbounded(1501, 3.81, "1501+ kWh"),
];

const INDUSTRIAL_SUMMER: &[RateBracket] = &[RateBracket::unbounded(0, 2.85, "industrial flat")];

const INDUSTRIAL_NON_SUMMER: &[RateBracket] =
    &[RateBracket::unbounded(0, 2.28, "industrial flat")];

static SCHEDULES: [RateSchedule; 6] = [
    RateSchedule {
        brackets: RESIDENTIAL_SUMMER,
        base_fee: 0.0,
        tax_rate: ELECTRICITY_TAX_RATE,
    },
    RateSchedule {
        brackets: RESIDENTIAL_NON_SUMMER,
        base_fee: 0.0,
        tax_rate: ELECTRICITY_TAX_RATE,
    },
    RateSchedule {
        brackets: COMMERCIAL_SUMMER,
        base_fee: COMMERCIAL_BASE_FEE,
        tax_rate: ELECTRICITY_TAX_RATE,
    },
    RateSchedule {
        brackets: COMMERCIAL_NON_SUMMER,
        base_fee: COMMERCIAL_BASE_FEE,
        tax_rate: ELECTRICITY_TAX_RATE,
    },
    RateSchedule {
        brackets: INDUSTRIAL_SUMMER,
        base_fee: INDUSTRIAL_BASE_FEE,
        tax_rate: ELECTRICITY_TAX_RATE,
    },
    RateSchedule {
        brackets: INDUSTRIAL_NON_SUMMER,
        base_fee: INDUSTRIAL_BASE_FEE,
        tax_rate: ELECTRICITY_TAX_RATE,
    },
];

/// (용도, 계절)에 해당하는 전기 요금표. 모든 조합이 정확히 하나의 요금표에 대응한다.
pub fn electricity_schedule(category: CustomerCategory, season: Season) -> &'static RateSchedule {
    let index = match (category, season) {
        (CustomerCategory::Residential, Season::Summer) => 0,
        (CustomerCategory::Residential, Season::NonSummer) => 1,
        (CustomerCategory::Commercial, Season::Summer) => 2,
        (CustomerCategory::Commercial, Season::NonSummer) => 3,
        (CustomerCategory::Industrial, Season::Summer) => 4,
        (CustomerCategory::Industrial, Season::NonSummer) => 5,
    };
    &SCHEDULES[index]
}

/// 전기 요금을 계산한다. 사용량은 소수점 이하를 버린 뒤 누진 구간에 배분한다.
pub fn compute_electricity_charge(
    consumption_kwh: f64,
    category: CustomerCategory,
    season: Season,
) -> Result<BillingResult, BillingError> {
    debug!("전기 요금 계산: {consumption_kwh} kWh, {category}, {season}");
    apply_schedule(electricity_schedule(category, season), consumption_kwh)
}
