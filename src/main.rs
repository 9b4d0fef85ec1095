use deploy_recorder::adapters::sheets::spreadsheet_manager::GoogleSheetsAuthenticator;
use deploy_recorder::application::exit_report::ExitReport;
use deploy_recorder::config::app_config::RawEnvironment;
use deploy_recorder::domain::clock::SystemClock;
use deploy_recorder::prettyprint::PrettyFormatter;
use deploy_recorder::{DeployRecorder, RecorderError};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let raw = match RawEnvironment::from_env() {
        Ok(raw) => raw,
        Err(report) => return exit_with(&report),
    };

    if let Err(err) = setup_tracing(raw.log_level()) {
        eprintln!("Could not set up logging: {err}");
    }
    setup_panic_hook();

    info!("Starting deploy-recorder");

    let recorder = DeployRecorder::new(GoogleSheetsAuthenticator, SystemClock);
    match recorder.record_from_environment(raw).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(report) => exit_with(&report),
    }
}

fn exit_with(report: &error_stack::Report<RecorderError>) -> ExitCode {
    if report.current_context().is_handled() {
        debug!("{report:?}");
    }
    ExitReport::from_report(report).emit()
}

fn setup_tracing(level: tracing::Level) -> Result<(), Box<dyn std::error::Error>> {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(std::io::stdout().is_terminal()))
        .with_writer(std::io::stdout);

    Registry::default()
        .with(tracing_subscriber::filter::Targets::new().with_target("deploy_recorder", level))
        .with(stdout_layer)
        .try_init()?;

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        default_hook(info);
    }));
}
