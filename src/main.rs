//! av-serial - print parsed serials for release filenames
//!
//! Inputs come from the command line, or one per line on stdin when none are
//! given. Logs go to stderr so stdout stays machine-readable with `--json`.

mod cli;

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use av_serial_parser::{Kin8Mode, ParserConfig, SerialInfo, SerialParser, Strategy};

use crate::cli::CliOptions;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "av_serial_parser=info,av_serial=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let options = CliOptions::from_args()?;

    let mut config = ParserConfig::from_env()?;
    if options.strict {
        config.kin8_mode = Kin8Mode::Strict;
    }
    if let Some(max_len) = options.max_len_override {
        config.max_input_len = max_len;
    }
    tracing::debug!(?config, "Configuration loaded");

    let parser = SerialParser::new(config);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failures = 0usize;

    if options.inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            failures += report(&mut out, &parser, input, options.json)?;
        }
    } else {
        for input in &options.inputs {
            failures += report(&mut out, &parser, input, options.json)?;
        }
    }
    out.flush()?;

    if failures > 0 {
        bail!("{failures} input(s) failed to parse");
    }
    Ok(())
}

/// Print one parse result; returns 1 if the parser reported an error
fn report(out: &mut impl Write, parser: &SerialParser, input: &str, as_json: bool) -> Result<usize> {
    let strategy = Strategy::select(input);
    let (info, error) = match parser.parse(input) {
        Ok(info) => (info, None),
        Err(e) => {
            tracing::warn!(input, error = %e, "Failed to parse");
            (SerialInfo::empty(), Some(e))
        }
    };

    if as_json {
        let line = json!({
            "input": input,
            "maker": info.maker,
            "serial": info.serial,
            "cd": info.cd,
            "ch": info.ch,
            "number": (!info.is_empty()).then(|| info.number()),
            "filename": (!info.is_empty()).then(|| info.filename()),
            "strategy": strategy,
            "error": error.as_ref().map(|e| e.to_string()),
        });
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "Input: {input}")?;
        if info.is_empty() {
            writeln!(out, "Parsed: <unparseable>")?;
        } else {
            writeln!(out, "Parsed: {info}")?;
            writeln!(out, "Filename: {}", info.filename())?;
        }
    }

    Ok(usize::from(error.is_some()))
}
