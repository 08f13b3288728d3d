use std::sync::Arc;

use clap::Parser;

use crate::app::Orchestrator;
use crate::args::{Cli, Command, MeasureArgs};
use crate::config::{RunConfig, load_config, validate_input_path};
use crate::error::{AppError, AppResult};
use crate::http::HttpTransport;

/// Process entry: parse the CLI, set up logging and the runtime, run.
///
/// # Errors
///
/// Returns the first configuration, input, transport, or output error.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    crate::logger::init_logging(cli.verbose, cli.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = match cli.command {
        Command::Measure(args) => runtime.block_on(run_measure(args, cli.no_color)),
    };
    if let Err(err) = &result {
        tracing::error!("{}", err);
    }
    result
}

async fn run_measure(args: MeasureArgs, no_color: bool) -> AppResult<()> {
    let file = load_config(args.config.as_deref())?;
    let config = RunConfig::resolve(&args, file).map_err(AppError::config)?;
    validate_input_path(config.input_path()).map_err(AppError::config)?;
    tracing::debug!("Resolved run configuration: {:?}", config);

    let transport = HttpTransport::new(config.request_timeout()).map_err(AppError::http)?;
    let export_path = config.export_json().map(std::path::Path::to_path_buf);
    let report = Orchestrator::new(config, Arc::new(transport))
        .with_no_color(no_color)
        .run()
        .await?;

    if let Some(path) = export_path {
        crate::sinks::write_json(&path, &report)
            .await
            .map_err(AppError::sink)?;
        tracing::info!("Wrote run report to {}", path.display());
    }
    Ok(())
}
