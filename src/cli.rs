//! Minimal CLI parsing for the driver binary.

use std::env;

use anyhow::{bail, Context, Result};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub json: bool,
    pub strict: bool,
    pub max_len_override: Option<usize>,
    /// Inputs to parse; empty means read stdin
    pub inputs: Vec<String>,
}

impl CliOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse(env::args().skip(1))
    }

    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => options.json = true,
                "--strict" => options.strict = true,
                "--max-len" => {
                    let Some(value) = args.next() else {
                        bail!("--max-len needs a value");
                    };
                    options.max_len_override = Some(parse_max_len(&value)?);
                }
                "--" => options.inputs.extend(args.by_ref()),
                _ if arg.starts_with("--max-len=") => {
                    if let Some(value) = arg.split_once('=').map(|(_, v)| v) {
                        options.max_len_override = Some(parse_max_len(value)?);
                    }
                }
                _ if arg.starts_with("--") => bail!("Unknown option {arg}"),
                _ => options.inputs.push(arg),
            }
        }
        Ok(options)
    }
}

fn parse_max_len(value: &str) -> Result<usize> {
    let max_len: usize = value
        .parse()
        .with_context(|| format!("Invalid --max-len {value:?}"))?;
    if max_len == 0 {
        bail!("--max-len must be greater than zero");
    }
    Ok(max_len)
}
