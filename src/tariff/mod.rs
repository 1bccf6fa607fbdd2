//! 전기/가스 누진 요금 계산 모듈 모음.

pub mod billing;
pub mod electricity;
pub mod gas;
pub mod schedule;
pub mod selector;

pub use billing::*;
pub use electricity::{compute_electricity_charge, electricity_schedule};
pub use gas::{compute_gas_charge, gas_schedule};
pub use schedule::*;
pub use selector::*;

/// 내장 요금표 하나를 가리키는 키.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleKey {
    Electricity {
        category: CustomerCategory,
        season: Season,
    },
    /// `category`가 `None`이면 용도 구분이 없는 요금표(LPG).
    Gas {
        fuel: FuelType,
        category: Option<CustomerCategory>,
    },
}

impl std::fmt::Display for ScheduleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleKey::Electricity { category, season } => {
                write!(f, "electricity / {category} / {season}")
            }
            ScheduleKey::Gas {
                fuel,
                category: Some(category),
            } => write!(f, "gas / {fuel} / {category}"),
            ScheduleKey::Gas {
                fuel,
                category: None,
            } => write!(f, "gas / {fuel} / any"),
        }
    }
}

/// 내장 요금표 전체를 키와 함께 나열한다. 여러 키가 공유하는 요금표는 한 번만 나온다.
pub fn catalog() -> Vec<(ScheduleKey, &'static RateSchedule)> {
    let mut entries = Vec::new();
    for category in CustomerCategory::ALL {
        for season in Season::ALL {
            entries.push((
                ScheduleKey::Electricity { category, season },
                electricity_schedule(category, season),
            ));
        }
    }
    entries.push((
        ScheduleKey::Gas {
            fuel: FuelType::NaturalGas,
            category: Some(CustomerCategory::Residential),
        },
        gas_schedule(FuelType::NaturalGas, CustomerCategory::Residential),
    ));
    entries.push((
        ScheduleKey::Gas {
            fuel: FuelType::NaturalGas,
            category: Some(CustomerCategory::Commercial),
        },
        gas_schedule(FuelType::NaturalGas, CustomerCategory::Commercial),
    ));
    entries.push((
        ScheduleKey::Gas {
            fuel: FuelType::Lpg,
            category: None,
        },
        gas_schedule(FuelType::Lpg, CustomerCategory::Residential),
    ));
    entries
}
