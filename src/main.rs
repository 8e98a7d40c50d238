// std imports
use std::{
    io::{IsTerminal, Write, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use wildspan::{
    App, InputReference, Options, Pattern,
    app::{Mode, OutputFormat},
    cli,
    error::*,
};

const WILDSPAN_DEBUG_LOG: &str = "WILDSPAN_DEBUG_LOG";
const WILDSPAN_DEBUG_LOG_STYLE: &str = "WILDSPAN_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WILDSPAN_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(WILDSPAN_DEBUG_LOG).write_style(WILDSPAN_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = cli::Opt::parse_from(wild::args());

    let color = match opt.color() {
        cli::ColorOption::Auto => stdout().is_terminal(),
        cli::ColorOption::Always => true,
        cli::ColorOption::Never => false,
    };

    let pattern = Pattern::new(&opt.pattern);
    log::debug!("compiled pattern {:?} into {} tokens", opt.pattern, pattern.len());

    let app = App::new(
        pattern,
        Options {
            mode: match opt.mode() {
                cli::ModeOption::All => Mode::All,
                cli::ModeOption::Longest => Mode::Longest,
            },
            output_format: match opt.output_format {
                cli::OutputFormat::Text => OutputFormat::Text,
                cli::OutputFormat::Json => OutputFormat::Json,
            },
            color,
        },
    );

    let inputs = InputReference::from_args(&opt.files);
    let mut output = stdout().lock();
    app.run(&inputs, &mut output)?;
    output.flush()?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        err.log();
        process::exit(1);
    }
}
