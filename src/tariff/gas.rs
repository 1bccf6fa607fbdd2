//! 가스 요금표와 가스 요금 계산. 단위는 m³(度).

use log::debug;

use super::billing::{apply_schedule, BillingError, BillingResult};
use super::schedule::{RateBracket, RateSchedule};
use super::selector::{CustomerCategory, FuelType};

/// 천연가스에만 붙는 세율. LPG는 비과세.
pub const NATURAL_GAS_TAX_RATE: f64 = 0.05;

const NATURAL_GAS_RESIDENTIAL: &[RateBracket] = &[
    RateBracket::bounded(0, 50, 9.52, "0-50 m3"),
    RateBracket::bounded(51, 100, 10.75, "51-100 m3"),
    RateBracket::bounded(101, 200, 11.42, "101-200 m3"),
    RateBracket::bounded(201, 500, 12.66, "201-500 m3"),
    RateBracket::unbounded(501, 13.25, "501+ m3"),
];

const NATURAL_GAS_COMMERCIAL: &[RateBracket] = &[
    RateBracket::bounded(0, 100, 11.18, "0-100 m3"),
    RateBracket::bounded(101, 500, 11.85, "101-500 m3"),
    RateBracket::unbounded(501, 12.52, "501+ m3"),
];

const LPG_FLAT: &[RateBracket] = &[RateBracket::unbounded(0, 32.5, "LPG cylinder")];

static NATURAL_GAS_RESIDENTIAL_SCHEDULE: RateSchedule = RateSchedule {
    brackets: NATURAL_GAS_RESIDENTIAL,
    base_fee: 93.0,
    tax_rate: NATURAL_GAS_TAX_RATE,
};

static NATURAL_GAS_COMMERCIAL_SCHEDULE: RateSchedule = RateSchedule {
    brackets: NATURAL_GAS_COMMERCIAL,
    base_fee: 150.0,
    tax_rate: NATURAL_GAS_TAX_RATE,
};

static LPG_SCHEDULE: RateSchedule = RateSchedule {
    brackets: LPG_FLAT,
    base_fee: 0.0,
    tax_rate: 0.0,
};

/// (연료, 용도)에 해당하는 가스 요금표.
///
/// 천연가스 산업용은 영업용 요금표를 공유하고, LPG는 용도와 무관하게 단일 단가다.
pub fn gas_schedule(fuel: FuelType, category: CustomerCategory) -> &'static RateSchedule {
    match (fuel, category) {
        (FuelType::NaturalGas, CustomerCategory::Residential) => &NATURAL_GAS_RESIDENTIAL_SCHEDULE,
        (FuelType::NaturalGas, CustomerCategory::Commercial | CustomerCategory::Industrial) => {
            &NATURAL_GAS_COMMERCIAL_SCHEDULE
        }
        (FuelType::Lpg, _) => &LPG_SCHEDULE,
    }
}

/// 가스 요금을 계산한다. 세금 항목은 천연가스일 때만 붙는다.
pub fn compute_gas_charge(
    consumption_m3: f64,
    fuel: FuelType,
    category: CustomerCategory,
) -> Result<BillingResult, BillingError> {
    debug!("가스 요금 계산: {consumption_m3} m3, {fuel}, {category}");
    apply_schedule(gas_schedule(fuel, category), consumption_m3)
}
