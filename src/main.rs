use masterkey_check::cli::Mode;
use masterkey_check::error::CheckError;
use masterkey_check::evaluator::Evaluator;
use masterkey_check::snmp_repo::{SnmpRepo, SnmpTarget};
use masterkey_check::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

// Current-thread runtime: checks run strictly one after another.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match cli::parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(cli::exit_code_for(&e));
        }
    };

    // stdout carries the plugin line only; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = match config::AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            let err = CheckError::unexpected(format!("{:#}", e));
            println!("{}", err.render());
            return ExitCode::from(err.severity().exit_code());
        }
    };

    let repo = SnmpRepo::new(
        SnmpTarget::new(&cli.host, cli.port, &cli.community),
        &app_config.snmp.command,
    );
    let evaluator = Evaluator::new(app_config.thresholds.clone());

    let (severity, line) = match cli.mode() {
        Mode::Single {
            metric,
            thresholds,
            invert,
        } => {
            let outcome = check::run_single(&repo, &evaluator, &metric, thresholds, invert).await;
            check::render(&outcome)
        }
        Mode::All => {
            let ignored = cli.ignored_sweep_overrides();
            if !ignored.is_empty() {
                tracing::warn!(flags = ?ignored, "overrides have no effect with --all");
            }
            let report = sweep::run_all(&repo, &evaluator).await;
            (report.severity, report.render())
        }
    };

    println!("{}", line);
    ExitCode::from(severity.exit_code())
}
