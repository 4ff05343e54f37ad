use std::path::PathBuf;
use std::process::ExitCode;

use bcn_engineering_suite::assistant::AskOutcome;
use bcn_engineering_suite::{app, config};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bcn")]
#[command(about = "Engineering unit conversions, calculators and reference tables")]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, global = true, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// 기본 로그 레벨을 debug로 올린다
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 단위 변환 한 번 (예: bcn convert Pressure psi bar 100)
    Convert {
        category: String,
        from: String,
        to: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// 공학 질의응답 한 번
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// 대화형 메뉴 (기본값)
    Shell,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 선택한 명령을 실행한다.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match try_run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    match cli.command.unwrap_or(Command::Shell) {
        Command::Convert {
            category,
            from,
            to,
            value,
        } => {
            println!("{}", app::run_convert(&category, &from, &to, &value)?);
        }
        Command::Ask { query } => match app::run_ask(&cfg.assistant, &query.join(" ")).await? {
            AskOutcome::Answered(text) => println!("{text}"),
            AskOutcome::Busy | AskOutcome::Ignored => {}
        },
        Command::Shell => app::run(&mut cfg, &cli.config).await?,
    }
    Ok(())
}
