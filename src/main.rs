use anyhow::Result;
use clap::Parser;
use coqprof::cli::Cli;
use coqprof::config::ProfileConfig;
use coqprof::pipeline::{self, ViewOptions};
use coqprof::viewport::ViewState;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let mut config = match &args.config {
        Some(path) => ProfileConfig::from_file(path)?,
        None => ProfileConfig::default(),
    };
    args.apply_to(&mut config);

    let view = ViewOptions {
        state: ViewState::new(args.start_line, args.window),
        format: args.format,
    };

    pipeline::run(&args.input, &args.compiler_args, &config, view)?;

    Ok(())
}
