use std::fmt::Write as _;
use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::tariff::{self, BillingResult, CustomerCategory, FuelType, LineKind, Season};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Electricity,
    Gas,
    Rates,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ELECTRICITY));
    println!("{}", tr.t(keys::MAIN_MENU_GAS));
    println!("{}", tr.t(keys::MAIN_MENU_RATES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Electricity),
            "2" => return Ok(MenuChoice::Gas),
            "3" => return Ok(MenuChoice::Rates),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 전기 요금 메뉴를 처리한다.
pub fn handle_electricity(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ELECTRICITY_HEADING));
    let kwh = read_consumption(tr, keys::PROMPT_KWH)?;
    let category = read_category(tr, cfg.electricity.category)?;
    let season = read_season(tr, cfg.electricity.season)?;
    let result = tariff::compute_electricity_charge(kwh, category, season)?;
    print!("{}", render_result(tr, &result, cfg.show_breakdown));
    Ok(())
}

/// 가스 요금 메뉴를 처리한다.
pub fn handle_gas(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::GAS_HEADING));
    let m3 = read_consumption(tr, keys::PROMPT_M3)?;
    let fuel = read_fuel(tr, cfg.gas.fuel)?;
    let category = read_category(tr, cfg.gas.category)?;
    let result = tariff::compute_gas_charge(m3, fuel, category)?;
    print!("{}", render_result(tr, &result, cfg.show_breakdown));
    Ok(())
}

/// 내장 요금표를 출력한다.
pub fn handle_rates(tr: &Translator) {
    println!("{}", tr.t(keys::RATES_HEADING));
    print!("{}", render_catalog(tr));
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
            let code = read_line(tr.t(keys::SETTINGS_LANGUAGE_PROMPT))?;
            match code.trim() {
                "" => {}
                c @ ("auto" | "ko" | "en") => cfg.language = c.to_string(),
                _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
            }
        }
        "2" => {
            cfg.show_breakdown = !cfg.show_breakdown;
            println!("{} {}", tr.t(keys::SETTINGS_BREAKDOWN_TOGGLED), cfg.show_breakdown);
        }
        "3" => {
            cfg.electricity.category = read_category(tr, cfg.electricity.category)?;
            cfg.electricity.season = read_season(tr, cfg.electricity.season)?;
        }
        "4" => {
            cfg.gas.fuel = read_fuel(tr, cfg.gas.fuel)?;
            cfg.gas.category = read_category(tr, cfg.gas.category)?;
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 계산 결과를 출력용 문자열로 만든다. `show_breakdown`이 거짓이면 합계만 남긴다.
pub fn render_result(tr: &Translator, result: &BillingResult, show_breakdown: bool) -> String {
    let mut out = String::new();
    if show_breakdown {
        for line in &result.lines {
            let label = match line.kind {
                LineKind::BaseFee => tr.t(keys::RESULT_BASE_FEE).to_string(),
                LineKind::Bracket {
                    label,
                    usage,
                    unit_rate,
                } => format!("{label} ({usage} x {unit_rate})"),
                LineKind::Tax { rate } => format!("{} ({}%)", tr.t(keys::RESULT_TAX), rate * 100.0),
            };
            let _ = writeln!(out, "  {label:<32} {:>14.2}", line.amount);
        }
    }
    let _ = writeln!(out, "  {:<32} {:>14.2}", tr.t(keys::RESULT_TOTAL), result.total);
    out
}

/// 요금표 목록을 출력용 문자열로 만든다.
pub fn render_catalog(tr: &Translator) -> String {
    let mut out = String::new();
    for (key, schedule) in tariff::catalog() {
        let _ = writeln!(out, "[{key}]");
        let _ = writeln!(out, "  {}: {}", tr.t(keys::RATES_BASE_FEE), schedule.base_fee);
        if schedule.has_tax() {
            let _ = writeln!(
                out,
                "  {}: {}%",
                tr.t(keys::RATES_TAX_RATE),
                schedule.tax_rate * 100.0
            );
        } else {
            let _ = writeln!(out, "  {}: {}", tr.t(keys::RATES_TAX_RATE), tr.t(keys::RATES_NO_TAX));
        }
        for bracket in schedule.brackets {
            let _ = writeln!(out, "    {:<18} @ {}", bracket.label, bracket.unit_rate);
        }
        out.push('\n');
    }
    out
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_consumption(tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match s.trim().parse::<f64>() {
            Ok(v) if tariff::billable_units(v).is_ok() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 번호 메뉴에서 선택을 읽는다. 빈 입력이면 기본값을 돌려준다.
fn read_choice<T: Copy + std::fmt::Display>(
    tr: &Translator,
    options_key: &str,
    options: &[T],
    default: T,
) -> Result<T, AppError> {
    println!("{}", tr.t(options_key));
    loop {
        let prompt = format!(
            "{} {default}) {}",
            tr.t(keys::HINT_ENTER_FOR_DEFAULT),
            tr.t(keys::PROMPT_SELECT)
        );
        let sel = read_line(&prompt)?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(default);
        }
        let picked = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i).copied());
        match picked {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_category(tr: &Translator, default: CustomerCategory) -> Result<CustomerCategory, AppError> {
    read_choice(tr, keys::CATEGORY_OPTIONS, &CustomerCategory::ALL, default)
}

fn read_season(tr: &Translator, default: Season) -> Result<Season, AppError> {
    read_choice(tr, keys::SEASON_OPTIONS, &Season::ALL, default)
}

fn read_fuel(tr: &Translator, default: FuelType) -> Result<FuelType, AppError> {
    read_choice(tr, keys::FUEL_OPTIONS, &FuelType::ALL, default)
}
