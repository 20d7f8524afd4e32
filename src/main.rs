use std::env;
use std::fmt::Display;
use std::fs;
use std::io;
use std::process;

use indoc::formatdoc;
use tracing_subscriber::EnvFilter;
use uryb::constants::common::{URYB, URYB_EXT, USAGE};
use uryb::util::pretty_format::Siblings;

enum Output {
    Tokens,
    Tree,
    Json,
}

fn fail(error: impl Display) -> ! {
    eprintln!("{error}");
    process::exit(1);
}

fn help() -> String {
    formatdoc! {"
        {USAGE}

        Reads a {URYB} script ({URYB_EXT}) and prints its syntax tree.

            --tokens    print the token stream instead
            --json      print the syntax tree as JSON

        Set RUST_LOG (e.g. RUST_LOG=uryb=trace) to log lexing and parsing
        to stderr.
    "}
}

fn parse_args(args: impl Iterator<Item = String>) -> Option<(Output, String)> {
    let mut output = Output::Tree;
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "--tokens" => output = Output::Tokens,
            "--json" => output = Output::Json,
            "-h" | "--help" => return None,
            _ if path.is_none() => path = Some(arg),
            _ => return None,
        }
    }
    path.map(|path| (output, path))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    init_logging();
    let Some((output, path)) = parse_args(env::args().skip(1)) else {
        eprint!("{}", help());
        process::exit(2);
    };
    let code = match fs::read_to_string(&path) {
        Ok(code) => code,
        Err(e) => fail(format!("encountering fatal error when reading {path}: {e}")),
    };
    match output {
        Output::Tokens => match uryb::tokenize(&code) {
            Ok(tokens) => tokens.iter().for_each(|token| println!("{token}")),
            Err(e) => fail(e),
        },
        Output::Tree => match uryb::syntax_analyze(&code) {
            Ok(program) => print!("{}", Siblings(&program)),
            Err(e) => fail(e),
        },
        Output::Json => {
            let json = uryb::syntax_analyze(&code)
                .map(|program| serde_json::to_string_pretty(&program));
            match json {
                Ok(Ok(json)) => println!("{json}"),
                Ok(Err(e)) => fail(e),
                Err(e) => fail(e),
            }
        }
    }
}
