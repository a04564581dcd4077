use anyhow::{Context, Result};
use nifvalido_config::{Config, OutputFormat};
use nifvalido_engine::{BLANK, validate};
use std::{
    env,
    io::{self, BufRead, BufWriter, Write},
    path::PathBuf,
    process,
};

const USAGE: &str =
    "Usage: nifvalido-cli [--tsv | --plain] [--skip-invalid] [--config <path>] [NIF ...]";

/// Parsed command line. Flags left unset fall back to the config file.
#[derive(Debug, Default, PartialEq)]
struct Args {
    output: Option<OutputFormat>,
    skip_invalid: bool,
    config_path: Option<PathBuf>,
    inputs: Vec<String>,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    let mut positional_only = false;

    while let Some(arg) = args.next() {
        if positional_only {
            parsed.inputs.push(arg);
            continue;
        }
        match arg.as_str() {
            "--tsv" => parsed.output = Some(OutputFormat::Tsv),
            "--plain" => parsed.output = Some(OutputFormat::Plain),
            "--skip-invalid" => parsed.skip_invalid = true,
            "--config" => {
                let path = args.next().ok_or("--config requires a path")?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => parsed.help = true,
            "--" => positional_only = true,
            flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            _ => parsed.inputs.push(arg),
        }
    }

    Ok(parsed)
}

/// Counts of validated and rejected inputs.
#[derive(Debug, Default, PartialEq)]
struct Summary {
    valid: usize,
    invalid: usize,
}

/// Formats one output line, or `None` when the input is skipped.
fn render(input: &str, config: &Config, summary: &mut Summary) -> Option<String> {
    match validate(input) {
        Ok(nif) => {
            summary.valid += 1;
            Some(match config.output {
                OutputFormat::Plain => nif.into_code(),
                OutputFormat::Tsv => format!("{input}\t{nif}\t{}", nif.class().name()),
            })
        }
        Err(_) => {
            summary.invalid += 1;
            if config.skip_invalid {
                return None;
            }
            Some(match config.output {
                OutputFormat::Plain => BLANK.to_string(),
                OutputFormat::Tsv => format!("{input}\t{BLANK}\tinvalid"),
            })
        }
    }
}

/// Validates `inputs`, or every line of `stdin` when there are none.
fn run<R: BufRead, W: Write>(
    inputs: &[String],
    stdin: R,
    out: &mut W,
    config: &Config,
) -> Result<Summary> {
    let mut summary = Summary::default();

    if inputs.is_empty() {
        for line in stdin.lines() {
            let line = line.context("Failed to read from stdin")?;
            let input = line.trim_end_matches('\r');
            if let Some(rendered) = render(input, config, &mut summary) {
                writeln!(out, "{rendered}")?;
            }
        }
    } else {
        for input in inputs {
            if let Some(rendered) = render(input, config, &mut summary) {
                writeln!(out, "{rendered}")?;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

fn load_config(args: &Args) -> Result<Config> {
    let loaded = match &args.config_path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
            log::debug!("Loading config from {}", path.display());
            Config::load_from_path(&path)?
                .with_context(|| format!("Config file {} does not exist", path.display()))?
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?.unwrap_or_default()
        }
    };

    Ok(Config {
        output: args.output.unwrap_or(loaded.output),
        skip_invalid: args.skip_invalid || loaded.skip_invalid,
    })
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if args.help {
        println!("{USAGE}");
        return;
    }

    let result = load_config(&args).and_then(|config| {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        run(&args.inputs, io::stdin().lock(), &mut out, &config)
    });

    match result {
        Ok(summary) => {
            log::info!("{} valid, {} invalid", summary.valid, summary.invalid);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
