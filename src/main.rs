// std imports
use std::{
    io::{BufWriter, Write, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use strmatch::{
    App, Options,
    cli::{self, Opt},
    config,
    error::*,
    input::InputReference,
};

const STRMATCH_DEBUG_LOG: &str = "STRMATCH_DEBUG_LOG";
const STRMATCH_DEBUG_LOG_STYLE: &str = "STRMATCH_DEBUG_LOG_STYLE";

const EXIT_SELECTED: i32 = 0;
const EXIT_NOT_SELECTED: i32 = 1;
const EXIT_ERROR: i32 = 2;

// ---

fn bootstrap() {
    if std::env::var(STRMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(STRMATCH_DEBUG_LOG)
                .write_style(STRMATCH_DEBUG_LOG_STYLE),
        )
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

/// Returns `true` if anything was selected.
fn run() -> Result<bool> {
    bootstrap();

    let opt = Opt::parse_from(wild::args());

    if opt.has_wildcards {
        let result = strmatch::has_wildcards(&opt.pattern);
        writeln!(stdout(), "{}", result)?;
        return Ok(result);
    }

    let (configs, no_default) = cli::config_files(&opt.config);
    let settings = config::at(configs).no_default(no_default).load()?;
    log::debug!("settings: {:?}", settings);

    let app = App::new(Options {
        pattern: opt.pattern,
        mode: opt.mode.map(Into::into).unwrap_or(settings.mode),
        exclude: settings.exclude.into_iter().chain(opt.exclude).collect(),
        invert: opt.invert_match,
        count: opt.count,
    });

    let mut inputs = opt.files.into_iter().map(InputReference::from_arg).collect::<Vec<_>>();
    if inputs.is_empty() {
        inputs.push(InputReference::Stdin);
    }

    log::debug!("hold {} inputs", inputs.len());
    let inputs = inputs.iter().map(|input| input.hold()).collect::<Result<Vec<_>>>()?;

    let stdout = stdout();
    let mut output = BufWriter::new(stdout.lock());

    log::debug!("run the app");
    let selected = app.run(inputs, &mut output)?;

    Ok(selected != 0)
}

fn main() {
    let code = match run() {
        Ok(true) => EXIT_SELECTED,
        Ok(false) => EXIT_NOT_SELECTED,
        Err(err) if err.is_broken_pipe() => EXIT_SELECTED,
        Err(err) => {
            err.log();
            EXIT_ERROR
        }
    };
    process::exit(code);
}
