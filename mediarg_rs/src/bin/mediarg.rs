use std::any::Any;
use std::ffi::OsString;
use std::panic;

use anyhow::{Context, Result};
use mediarg::error::ResolveError;
use mediarg::logging::init_logging;
use mediarg::{Arguments, MediargConfig, usage};

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = <dyn Any>::downcast_ref::<&str>(payload)
            .is_some_and(|s| s.contains("Broken pipe"))
            || <dyn Any>::downcast_ref::<String>(payload)
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

/// Command-line tokens as strings; the first non-UTF-8 one is returned lossily.
fn utf8_tokens(args: impl Iterator<Item = OsString>) -> Result<Vec<String>, String> {
    args.map(|arg| {
        arg.into_string()
            .map_err(|arg| arg.to_string_lossy().into_owned())
    })
    .collect()
}

/// Exit codes: 0 ok, 1 illegal values or runtime failure, 2 unparsable command line.
fn run() -> Result<i32> {
    let config = MediargConfig::load()?;

    let tokens = match utf8_tokens(std::env::args_os().skip(1)) {
        Ok(tokens) => tokens,
        Err(token) => {
            eprintln!("[mediarg][error] argument '{}' is not valid UTF-8", token);
            eprintln!("Run 'mediarg -help' for usage.");
            return Ok(2);
        }
    };
    let args = match Arguments::parse_with(tokens, &config) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("[mediarg][error] {}", err);
            eprintln!("Run 'mediarg -help' for usage.");
            return Ok(2);
        }
    };

    if args.print_help() {
        print!("{}", usage());
        return Ok(0);
    }
    if args.print_version() {
        println!("mediarg {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    let level = match args.log_level() {
        Ok(level) => level,
        Err(err) => {
            eprintln!("[mediarg][error] {}", err);
            return Ok(1);
        }
    };
    init_logging(level, args.log_file().as_deref())?;
    config.report();

    match args.resolve() {
        Ok(resolved) => {
            let json =
                serde_json::to_string_pretty(&resolved).context("failed to serialize options")?;
            println!("{}", json);
            Ok(0)
        }
        Err(ResolveError::Illegal(errors)) => {
            for err in errors {
                eprintln!("[mediarg][error] {}", err);
            }
            Ok(1)
        }
        Err(err) => Err(err.into()),
    }
}

fn main() {
    install_broken_pipe_handler();

    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("[mediarg][error] {:#}", err);
            1
        }
    };
    std::process::exit(code);
}
