use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ELECTRICITY: &str = "main_menu.electricity";
    pub const MAIN_MENU_GAS: &str = "main_menu.gas";
    pub const MAIN_MENU_RATES: &str = "main_menu.rates";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const HINT_ENTER_FOR_DEFAULT: &str = "hint.enter_for_default";

    pub const ELECTRICITY_HEADING: &str = "electricity.heading";
    pub const PROMPT_KWH: &str = "electricity.prompt_kwh";
    pub const SEASON_OPTIONS: &str = "electricity.season_options";

    pub const GAS_HEADING: &str = "gas.heading";
    pub const PROMPT_M3: &str = "gas.prompt_m3";
    pub const FUEL_OPTIONS: &str = "gas.fuel_options";

    pub const CATEGORY_OPTIONS: &str = "selector.category_options";

    pub const RESULT_BASE_FEE: &str = "result.base_fee";
    pub const RESULT_TAX: &str = "result.tax";
    pub const RESULT_TOTAL: &str = "result.total";

    pub const RATES_HEADING: &str = "rates.heading";
    pub const RATES_BASE_FEE: &str = "rates.base_fee";
    pub const RATES_TAX_RATE: &str = "rates.tax_rate";
    pub const RATES_NO_TAX: &str = "rates.no_tax";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_PROMPT: &str = "settings.language_prompt";
    pub const SETTINGS_BREAKDOWN_TOGGLED: &str = "settings.breakdown_toggled";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 `locales/`를 찾아보고, 그것도 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 현재 언어 → 영어 순으로 찾고, 모두 없으면 키를 그대로 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. `[section] key = "value"` 형식을 `section.key`로 펼친다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 전기/가스 요금 계산기 ===",
        MAIN_MENU_ELECTRICITY => "1) 전기 요금",
        MAIN_MENU_GAS => "2) 가스 요금",
        MAIN_MENU_RATES => "3) 요금표 보기",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "0 이상의 숫자를 입력하세요.",
        HINT_ENTER_FOR_DEFAULT => "(엔터: 기본값",
        ELECTRICITY_HEADING => "\n-- 전기 요금 --",
        PROMPT_KWH => "사용량 [kWh]: ",
        SEASON_OPTIONS => "계절: 1) 하계(6~9월)  2) 비하계",
        GAS_HEADING => "\n-- 가스 요금 --",
        PROMPT_M3 => "사용량 [m3]: ",
        FUEL_OPTIONS => "연료: 1) 천연가스  2) LPG",
        CATEGORY_OPTIONS => "용도: 1) 주택용  2) 영업용  3) 산업용",
        RESULT_BASE_FEE => "기본요금",
        RESULT_TAX => "세금",
        RESULT_TOTAL => "합계",
        RATES_HEADING => "\n-- 요금표 --",
        RATES_BASE_FEE => "기본요금",
        RATES_TAX_RATE => "세율",
        RATES_NO_TAX => "비과세",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_OPTIONS => "1) 언어  2) 명세 표시 전환  3) 전기 기본값  4) 가스 기본값",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANGUAGE_PROMPT => "언어 코드 입력(auto/ko/en): ",
        SETTINGS_BREAKDOWN_TOGGLED => "명세 표시:",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Utility Billing Calculator ===",
        MAIN_MENU_ELECTRICITY => "1) Electricity charge",
        MAIN_MENU_GAS => "2) Gas charge",
        MAIN_MENU_RATES => "3) Rate tables",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a non-negative number.",
        HINT_ENTER_FOR_DEFAULT => "(enter: default",
        ELECTRICITY_HEADING => "\n-- Electricity --",
        PROMPT_KWH => "Consumption [kWh]: ",
        SEASON_OPTIONS => "Season: 1) Summer (Jun-Sep)  2) Non-summer",
        GAS_HEADING => "\n-- Gas --",
        PROMPT_M3 => "Consumption [m3]: ",
        FUEL_OPTIONS => "Fuel: 1) Natural gas  2) LPG",
        CATEGORY_OPTIONS => "Category: 1) Residential  2) Commercial  3) Industrial",
        RESULT_BASE_FEE => "Base fee",
        RESULT_TAX => "Tax",
        RESULT_TOTAL => "Total",
        RATES_HEADING => "\n-- Rate tables --",
        RATES_BASE_FEE => "Base fee",
        RATES_TAX_RATE => "Tax rate",
        RATES_NO_TAX => "untaxed",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_OPTIONS => {
            "1) Language  2) Toggle breakdown  3) Electricity defaults  4) Gas defaults"
        }
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_PROMPT => "Language code (auto/ko/en): ",
        SETTINGS_BREAKDOWN_TOGGLED => "Show breakdown:",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(tr.t(keys::RESULT_TOTAL), "합계");
    }

    #[test]
    fn nested_pack_is_flattened() {
        let map = parse_toml_to_map("[result]\ntotal = \"Summe\"\n").expect("pack");
        assert_eq!(map.get(keys::RESULT_TOTAL).map(String::as_str), Some("Summe"));
    }

    #[test]
    fn locale_strings_are_reduced_to_language() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(normalize_locale_string("en-US").as_deref(), Some("en"));
        assert_eq!(normalize_locale_string("de_DE"), None);
    }
}
