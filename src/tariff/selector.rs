//! 요금표 선택에 쓰이는 용도/계절/연료 구분.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::billing::BillingError;

/// 고객 용도 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerCategory {
    Residential,
    Commercial,
    Industrial,
}

/// 전기 요금 계절 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Summer,
    NonSummer,
}

/// 가스 연료 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FuelType {
    NaturalGas,
    Lpg,
}

impl CustomerCategory {
    pub const ALL: [CustomerCategory; 3] = [
        CustomerCategory::Residential,
        CustomerCategory::Commercial,
        CustomerCategory::Industrial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerCategory::Residential => "residential",
            CustomerCategory::Commercial => "commercial",
            CustomerCategory::Industrial => "industrial",
        }
    }
}

impl Season {
    pub const ALL: [Season; 2] = [Season::Summer, Season::NonSummer];

    /// 월(1~12)로 계절을 정한다. 6~9월이 하계.
    pub fn from_month(month: u32) -> Result<Self, BillingError> {
        match month {
            6..=9 => Ok(Season::Summer),
            1..=5 | 10..=12 => Ok(Season::NonSummer),
            _ => Err(BillingError::InvalidMonth(month)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "summer",
            Season::NonSummer => "non-summer",
        }
    }
}

impl FuelType {
    pub const ALL: [FuelType; 2] = [FuelType::NaturalGas, FuelType::Lpg];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::NaturalGas => "natural-gas",
            FuelType::Lpg => "lpg",
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', ' '], "-")
}

impl FromStr for CustomerCategory {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "residential" | "res" | "home" | "household" => Ok(CustomerCategory::Residential),
            "commercial" | "com" | "business" => Ok(CustomerCategory::Commercial),
            "industrial" | "ind" | "industry" => Ok(CustomerCategory::Industrial),
            _ => Err(BillingError::UnknownSelector {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Season {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "summer" => Ok(Season::Summer),
            "non-summer" | "nonsummer" | "winter" | "off-season" => Ok(Season::NonSummer),
            _ => Err(BillingError::UnknownSelector {
                kind: "season",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for FuelType {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "natural-gas" | "naturalgas" | "ng" | "gas" => Ok(FuelType::NaturalGas),
            "lpg" | "propane" => Ok(FuelType::Lpg),
            _ => Err(BillingError::UnknownSelector {
                kind: "fuel type",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CustomerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
