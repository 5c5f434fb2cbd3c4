use std::{fs, process::ExitCode};

use calcapi::{
    api::{self, Status},
    calc,
};
use clap::Parser;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::Layer,
    prelude::*,
};

/// calcapi evaluates arithmetic expressions made of numbers, `+ - * /` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcapi to read the contents from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Treats the contents as a JSON request body like
    /// `{"expression": "2+2"}` and prints the JSON response body.
    #[arg(short, long)]
    json: bool,

    /// Raises the log level on stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, or a path when `--file` is given.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let contents = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.json {
        let response = api::handle(&contents);
        println!("{}", response.body);
        return if response.status == Status::Ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    match calc(&contents) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry().with(Layer::new().with_writer(std::io::stderr)
                                                    .with_filter(Targets::new().with_default(LevelFilter::WARN)
                                                                               .with_target("calcapi", level)))
                                  .init();
}
