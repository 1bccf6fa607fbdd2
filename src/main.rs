//! 전기/가스 누진 요금 계산기 CLI.
//!
//! ```sh
//! # 대화형 메뉴
//! utility_billing_cli
//!
//! # 한 번만 계산
//! utility_billing_cli electricity --kwh 400 --category residential --season summer
//! utility_billing_cli gas --m3 60 --fuel natural-gas --category residential
//! utility_billing_cli rates
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;

use utility_billing_calculator::{
    app::{self, AppError},
    config::{self, DEFAULT_CONFIG_PATH},
    i18n::{self, Translator},
    tariff::{self, CustomerCategory, FuelType, Season},
    ui_cli,
};

/// 전기/가스 누진 요금 계산기.
#[derive(Parser, Debug)]
#[command(name = "utility_billing_cli", version)]
struct Cli {
    /// 설정 파일 경로(TOML)
    #[arg(short, long, env = "UTILITY_BILLING_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 표시 언어(auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    /// 항목별 명세 없이 합계만 출력
    #[arg(long)]
    total_only: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 전기 요금을 계산한다
    Electricity {
        /// 사용량 [kWh]
        #[arg(long, allow_hyphen_values = true)]
        kwh: f64,
        /// 용도(residential/commercial/industrial)
        #[arg(long)]
        category: Option<CustomerCategory>,
        /// 계절(summer/non-summer)
        #[arg(long, conflicts_with = "month")]
        season: Option<Season>,
        /// 검침 월(1~12). 6~9월은 하계로 본다
        #[arg(long)]
        month: Option<u32>,
    },
    /// 가스 요금을 계산한다
    Gas {
        /// 사용량 [m3]
        #[arg(long, allow_hyphen_values = true)]
        m3: f64,
        /// 연료(natural-gas/lpg)
        #[arg(long)]
        fuel: Option<FuelType>,
        /// 용도(residential/commercial/industrial)
        #[arg(long)]
        category: Option<CustomerCategory>,
    },
    /// 내장 요금표를 출력한다
    Rates,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    debug!("언어 {lang}, 설정 파일 {}", cli.config.display());
    let tr = Translator::new_with_pack(&lang, None);
    let show_breakdown = cfg.show_breakdown && !cli.total_only;

    match cli.command {
        None => app::run(&mut cfg, &cli.config, &tr)?,
        Some(Command::Electricity {
            kwh,
            category,
            season,
            month,
        }) => {
            let season = match (season, month) {
                (Some(season), _) => season,
                (None, Some(month)) => Season::from_month(month)?,
                (None, None) => cfg.electricity.season,
            };
            let category = category.unwrap_or(cfg.electricity.category);
            let result = tariff::compute_electricity_charge(kwh, category, season)?;
            print!("{}", ui_cli::render_result(&tr, &result, show_breakdown));
        }
        Some(Command::Gas { m3, fuel, category }) => {
            let fuel = fuel.unwrap_or(cfg.gas.fuel);
            let category = category.unwrap_or(cfg.gas.category);
            let result = tariff::compute_gas_charge(m3, fuel, category)?;
            print!("{}", ui_cli::render_result(&tr, &result, show_breakdown));
        }
        Some(Command::Rates) => ui_cli::handle_rates(&tr),
    }
    Ok(())
}
