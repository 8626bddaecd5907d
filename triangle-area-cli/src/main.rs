mod cli;
mod error;
mod exitcode;
mod input;
mod messages;
mod output;

use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::Parser;
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use triangle_area_core::prelude::{AreaReport, ReportSettings};

use crate::{
    cli::CliArgs,
    error::CliError,
    input::{validate_count, Prompter},
    messages::Language,
    output::write_report,
};

fn main() {
    let args = CliArgs::parse();
    setup_logging(args.verbose);
    let language = Language::from(args.language);
    let stdin = io::stdin();
    let result = if args.format.is_structured() {
        run_app(&args, stdin.lock(), io::stderr(), io::stdout())
    } else {
        run_app(&args, stdin.lock(), io::stdout(), io::stdout())
    };
    if let Err(error) = result {
        debug!(?error, "exiting with failure");
        eprintln!("{}", language.error_message(&error));
        process::exit(error.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();
}

/// Read triangles, then report their areas and the largest one.
///
/// Prompts go to `prompts` and the report goes to `output`.
fn run_app<R, P, O>(args: &CliArgs, input: R, prompts: P, mut output: O) -> Result<(), CliError>
where
    R: BufRead,
    P: Write,
    O: Write,
{
    let language = Language::from(args.language);
    let settings = ReportSettings {
        precision: args.precision,
    };
    info!("{:#?}", settings);
    let mut prompter = Prompter::new(input, prompts, language);
    let count = match args.count {
        Some(count) => validate_count(count)?,
        None => prompter.read_count()?,
    };
    let triangles = prompter.read_triangles(count)?;
    let report = AreaReport::new(&triangles)?;
    info!(
        count = report.entries().len(),
        largest = report.largest().index,
        "computed areas"
    );
    write_report(&mut output, &report, args.format, &settings, language)
}
