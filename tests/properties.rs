//! 모든 내장 요금표에 대한 성질 테스트.
use proptest::prelude::*;
use utility_billing_calculator::tariff::{
    apply_schedule, catalog, compute_electricity_charge, compute_gas_charge, CustomerCategory,
    FuelType, LineKind, RateSchedule, Season,
};

fn schedules() -> Vec<&'static RateSchedule> {
    catalog().into_iter().map(|(_, schedule)| schedule).collect()
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn every_builtin_schedule_partitions_non_negative_integers() {
    let entries = catalog();
    assert_eq!(entries.len(), 9);
    for (key, schedule) in entries {
        schedule
            .validate()
            .unwrap_or_else(|e| panic!("{key}: {e}"));
        assert_eq!(schedule.brackets[0].lower, 0, "{key}");
        for pair in schedule.brackets.windows(2) {
            assert_eq!(pair[0].upper.map(|u| u + 1), Some(pair[1].lower), "{key}");
        }
        let last = schedule.brackets.last().expect("non-empty");
        assert!(last.upper.is_none(), "{key}");
    }
}

fn category() -> impl Strategy<Value = CustomerCategory> {
    prop::sample::select(CustomerCategory::ALL.to_vec())
}

fn season() -> impl Strategy<Value = Season> {
    prop::sample::select(Season::ALL.to_vec())
}

fn fuel() -> impl Strategy<Value = FuelType> {
    prop::sample::select(FuelType::ALL.to_vec())
}

proptest! {
    #[test]
    fn bracket_usage_sums_to_truncated_consumption(
        index in 0usize..9,
        units in 0u64..5_000,
    ) {
        let schedule = schedules()[index];
        let res = apply_schedule(schedule, units as f64).expect("valid input");
        prop_assert_eq!(res.billed_units(), units);
        prop_assert!(res.bracket_lines().count() <= schedule.brackets.len());
    }

    #[test]
    fn total_is_base_fee_plus_charges_plus_tax(
        index in 0usize..9,
        consumption in 0.0f64..5_000.0,
    ) {
        let schedule = schedules()[index];
        let res = apply_schedule(schedule, consumption).expect("valid input");

        let charges: f64 = res.bracket_lines().map(|line| line.amount).sum();
        let base = res.base_fee().unwrap_or(0.0);
        let subtotal = base + charges;
        let tax = res.tax().unwrap_or(0.0);

        prop_assert!(approx_eq(res.total, subtotal + tax), "{} vs {}", res.total, subtotal + tax);
        prop_assert!(approx_eq(tax, subtotal * schedule.tax_rate));
        prop_assert_eq!(res.tax().is_some(), schedule.tax_rate > 0.0);
        prop_assert_eq!(res.base_fee().is_some(), schedule.base_fee > 0.0);
        prop_assert!(approx_eq(res.breakdown().iter().sum::<f64>(), res.total));
    }

    #[test]
    fn lines_follow_base_bracket_tax_order(
        index in 0usize..9,
        units in 0u64..3_000,
    ) {
        let res = apply_schedule(schedules()[index], units as f64).expect("valid input");
        let rank = |kind: &LineKind| match kind {
            LineKind::BaseFee => 0,
            LineKind::Bracket { .. } => 1,
            LineKind::Tax { .. } => 2,
        };
        let ranks: Vec<u8> = res.lines.iter().map(|line| rank(&line.kind)).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{:?}", ranks);
        prop_assert!(res.lines.iter().filter(|l| l.kind == LineKind::BaseFee).count() <= 1);
    }

    #[test]
    fn electricity_total_is_monotonic(
        category in category(),
        season in season(),
        kwh in 0u64..4_000,
        extra in 0u64..500,
    ) {
        let lower = compute_electricity_charge(kwh as f64, category, season).expect("valid");
        let higher = compute_electricity_charge((kwh + extra) as f64, category, season).expect("valid");
        prop_assert!(higher.total >= lower.total);
    }

    #[test]
    fn gas_total_is_monotonic(
        fuel in fuel(),
        category in category(),
        m3 in 0u64..2_000,
        extra in 0u64..300,
    ) {
        let lower = compute_gas_charge(m3 as f64, fuel, category).expect("valid");
        let higher = compute_gas_charge((m3 + extra) as f64, fuel, category).expect("valid");
        prop_assert!(higher.total >= lower.total);
    }

    #[test]
    fn fractional_part_never_changes_the_bill(
        category in category(),
        season in season(),
        whole in 0u64..3_000,
        fraction in 0.0f64..0.999,
    ) {
        let exact = compute_electricity_charge(whole as f64, category, season).expect("valid");
        let fractional =
            compute_electricity_charge(whole as f64 + fraction, category, season).expect("valid");
        prop_assert_eq!(exact, fractional);
    }
}
