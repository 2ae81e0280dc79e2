//! scry CLI
//!
//! Headless front end for the re-evaluation engine: read a script (file or
//! stdin), run one evaluation cycle, print the report. The interactive
//! editor surface lives elsewhere; this binary is the scripting/CI face of
//! the same engine.

use scry_engine::{evaluate, DEFAULT_PRECISION};
use std::io::Read;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times; active only when `RUST_LOG` is set
/// (e.g. `RUST_LOG=scry_engine=debug`).
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

struct Options {
    script: String,
    prelude_path: Option<String>,
    precision: u32,
    json: bool,
}

fn print_usage() {
    eprintln!("Usage: scry <script | -> [options]");
    eprintln!();
    eprintln!("Evaluate a scry script and print its variable report.");
    eprintln!("Pass `-` to read the script from stdin.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --prelude <file>    Setup script run before every evaluation");
    eprintln!("  --precision <n>     Decimal digits for float display (default: {DEFAULT_PRECISION})");
    eprintln!("  --json              Emit the report as JSON");
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut script = None;
    let mut prelude_path = None;
    let mut precision = DEFAULT_PRECISION;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--prelude" => {
                let value = args
                    .get(i + 1)
                    .ok_or("--prelude requires a file argument")?;
                prelude_path = Some(value.clone());
                i += 2;
            }
            "--precision" => {
                let value = args
                    .get(i + 1)
                    .ok_or("--precision requires a number argument")?;
                precision = value
                    .parse::<u32>()
                    .map_err(|_| format!("invalid precision `{value}`"))?;
                i += 2;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            "-h" | "--help" => return Err(String::new()),
            other if other.starts_with("--") => {
                return Err(format!("unknown option `{other}`"));
            }
            other => {
                if script.replace(other.to_string()).is_some() {
                    return Err("more than one script argument".to_string());
                }
                i += 1;
            }
        }
    }

    let script = script.ok_or("missing script argument")?;
    Ok(Options {
        script,
        prelude_path,
        precision,
        json,
    })
}

fn read_script(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("failed to read `{path}`: {e}"))
    }
}

fn run(options: &Options) -> Result<(), String> {
    let script = read_script(&options.script)?;
    let prelude = match &options.prelude_path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read prelude `{path}`: {e}"))?,
        None => String::new(),
    };

    let snapshot = evaluate(&script, &prelude, options.precision);

    if options.json {
        let rendered = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        println!("{rendered}");
    } else {
        print!("{snapshot}");
    }
    // A failing script is still a successful report; only I/O and usage
    // problems exit nonzero.
    Ok(())
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
                eprintln!();
            }
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(message) = run(&options) {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("scry")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_script_and_defaults() {
        let options = parse_args(&args(&["notes.scry"])).unwrap();
        assert_eq!(options.script, "notes.scry");
        assert_eq!(options.precision, DEFAULT_PRECISION);
        assert!(options.prelude_path.is_none());
        assert!(!options.json);
    }

    #[test]
    fn parses_all_options() {
        let options =
            parse_args(&args(&["-", "--prelude", "setup.scry", "--precision", "2", "--json"]))
                .unwrap();
        assert_eq!(options.script, "-");
        assert_eq!(options.prelude_path.as_deref(), Some("setup.scry"));
        assert_eq!(options.precision, 2);
        assert!(options.json);
    }

    #[test]
    fn rejects_missing_script() {
        assert!(parse_args(&args(&["--json"])).is_err());
    }

    #[test]
    fn rejects_bad_precision() {
        assert!(parse_args(&args(&["s", "--precision", "minus-one"])).is_err());
    }

    #[test]
    fn rejects_unknown_option() {
        assert!(parse_args(&args(&["s", "--frobnicate"])).is_err());
    }
}
