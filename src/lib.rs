//! 누진 요금 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod tariff;
pub mod ui_cli;

pub use tariff::{
    compute_electricity_charge, compute_gas_charge, BillingError, BillingResult,
    CustomerCategory, FuelType, Season,
};
