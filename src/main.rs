use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use component_tco_toolbox::{app, config, init_tracing, scenario::ParameterOverrides, tco};

/// 부품 대체 시 연간 총소유비용(TCO)을 비교한다.
#[derive(Debug, Parser)]
#[command(name = "component_tco_cli", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 시나리오 파일의 기준 부품과 대체 부품들을 비교한다
    Compare {
        /// 시나리오 TOML 파일
        scenario: PathBuf,
        #[command(flatten)]
        params: ParamArgs,
    },
    /// 부품 하나의 비용 분해를 계산한다
    Evaluate {
        #[arg(long, default_value = "component")]
        id: String,
        /// 단가 (생략 시 0으로 계산)
        #[arg(long)]
        price: Option<f64>,
        /// 최소 주문 수량
        #[arg(long)]
        moq: Option<u64>,
        #[command(flatten)]
        params: ParamArgs,
    },
    /// 기본 설정 파일을 생성한다
    InitConfig,
}

#[derive(Debug, Args)]
struct ParamArgs {
    #[arg(long)]
    quantity_per_build: Option<u32>,
    #[arg(long)]
    builds_per_year: Option<u32>,
    #[arg(long)]
    scrap_percent: Option<f64>,
    #[arg(long)]
    shipping_cost_per_order: Option<f64>,
    #[arg(long)]
    lead_time_buffer_days: Option<u32>,
    #[arg(long)]
    carrying_cost_rate: Option<f64>,
}

impl From<ParamArgs> for ParameterOverrides {
    fn from(args: ParamArgs) -> Self {
        ParameterOverrides {
            quantity_per_build: args.quantity_per_build,
            builds_per_year: args.builds_per_year,
            scrap_percent: args.scrap_percent,
            shipping_cost_per_order: args.shipping_cost_per_order,
            lead_time_buffer_days: args.lead_time_buffer_days,
            inventory_carrying_cost_rate: args.carrying_cost_rate,
        }
    }
}

/// 프로그램의 엔트리 포인트. 로그를 초기화한 뒤 하위 명령을 실행한다.
fn main() {
    init_tracing();
    if let Err(err) = try_run(Cli::parse()) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    match cli.command {
        Command::Compare { scenario, params } => {
            let out = app::run_compare(&scenario, &cli.config, &params.into())?;
            print!("{out}");
        }
        Command::Evaluate {
            id,
            price,
            moq,
            params,
        } => {
            let component = tco::ComponentCostInput {
                identifier: id,
                unit_price: price,
                minimum_order_quantity: moq,
            };
            let out = app::run_evaluate(&component, &cli.config, &params.into())?;
            print!("{out}");
        }
        Command::InitConfig => {
            app::init_config(&cli.config)?;
            println!("{} 파일을 생성했습니다.", cli.config.display());
        }
    }
    Ok(())
}
