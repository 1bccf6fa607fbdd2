use std::path::Path;

use log::info;

use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::tariff::BillingError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 요금 계산 입력 오류
    Billing(BillingError),
    /// 표준 입력이 닫힘(EOF)
    InputClosed,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Billing(e) => write!(f, "요금 계산 오류: {e}"),
            AppError::InputClosed => write!(f, "입력이 종료되었습니다"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<BillingError> for AppError {
    fn from(value: BillingError) -> Self {
        AppError::Billing(value)
    }
}

/// 대화형 메뉴 루프를 실행한다. 종료 시(EOF 포함) 설정을 저장한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    info!("대화형 모드 시작 (언어: {})", tr.language_code());
    let outcome = menu_loop(config, config_path, tr);
    match outcome {
        Ok(()) | Err(AppError::InputClosed) => {
            config.save(config_path)?;
            println!("{}", tr.t(i18n::keys::APP_EXIT));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn menu_loop(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Electricity => ui_cli::handle_electricity(tr, config)?,
            MenuChoice::Gas => ui_cli::handle_gas(tr, config)?,
            MenuChoice::Rates => ui_cli::handle_rates(tr),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => return Ok(()),
        }
    }
}
