//! 가스 요금 회귀 테스트. 세금은 천연가스에만 붙는다.
use utility_billing_calculator::tariff::{
    compute_gas_charge, gas_schedule, BillingError, CustomerCategory, FuelType,
};

fn assert_close(label: &str, actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 1e-9 * expected.abs().max(1.0),
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:e})"
    );
}

fn assert_breakdown(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "breakdown {actual:?}");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_close(&format!("line {i}"), *a, *e);
    }
}

#[test]
fn natural_gas_residential_two_brackets() {
    // 0-50 구간은 51 m3를 담는다.
    let res = compute_gas_charge(60.0, FuelType::NaturalGas, CustomerCategory::Residential)
        .expect("natural gas residential");
    assert_breakdown(&res.breakdown(), &[93.0, 485.52, 96.75, 33.7635]);
    assert_close("total", res.total, 709.0335);
}

#[test]
fn natural_gas_commercial_reaches_unbounded_bracket() {
    let res = compute_gas_charge(600.0, FuelType::NaturalGas, CustomerCategory::Commercial)
        .expect("natural gas commercial");
    assert_breakdown(&res.breakdown(), &[150.0, 1129.18, 4740.0, 1239.48, 362.933]);
    assert_close("total", res.total, 7621.593);
}

#[test]
fn industrial_shares_commercial_natural_gas_schedule() {
    assert!(std::ptr::eq(
        gas_schedule(FuelType::NaturalGas, CustomerCategory::Industrial),
        gas_schedule(FuelType::NaturalGas, CustomerCategory::Commercial),
    ));
    let ind = compute_gas_charge(250.0, FuelType::NaturalGas, CustomerCategory::Industrial)
        .expect("industrial");
    let com = compute_gas_charge(250.0, FuelType::NaturalGas, CustomerCategory::Commercial)
        .expect("commercial");
    assert_eq!(ind, com);
}

#[test]
fn lpg_is_flat_and_untaxed_for_any_category() {
    for category in CustomerCategory::ALL {
        let res = compute_gas_charge(20.0, FuelType::Lpg, category).expect("lpg");
        assert_breakdown(&res.breakdown(), &[650.0]);
        assert_close("total", res.total, 650.0);
        assert_eq!(res.tax(), None);
        assert_eq!(res.base_fee(), None);
    }
}

#[test]
fn lpg_zero_usage_has_empty_breakdown() {
    let res = compute_gas_charge(0.5, FuelType::Lpg, CustomerCategory::Residential).expect("lpg");
    assert!(res.lines.is_empty());
    assert_eq!(res.total, 0.0);
}

#[test]
fn natural_gas_zero_usage_bills_base_fee_and_tax() {
    let res = compute_gas_charge(0.0, FuelType::NaturalGas, CustomerCategory::Residential)
        .expect("natural gas");
    assert_breakdown(&res.breakdown(), &[93.0, 4.65]);
    assert_close("total", res.total, 97.65);
}

#[test]
fn negative_gas_consumption_is_invalid_input() {
    let err = compute_gas_charge(-0.5, FuelType::Lpg, CustomerCategory::Residential)
        .expect_err("negative must fail");
    assert_eq!(err, BillingError::NegativeConsumption(-0.5));
}
