use std::{
    env,
    fs,
    io::{self, Write},
    process,
    time::Instant,
};

use anyhow::Context;
use tinylox::{run_parse, run_tokenize};

const USAGE: &str = "Usage: tinylox <tokenize|parse> <filename> [--timings]";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let timings = args.iter().any(|arg| arg == "--timings");
    let args: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|arg| *arg != "--timings")
        .collect();

    let [command, file_path] = args.as_slice() else {
        eprintln!("{}", USAGE);
        process::exit(1);
    };

    if !matches!(*command, "tokenize" | "parse") {
        eprintln!("Unknown command: {}", command);
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let file_contents =
        fs::read(file_path).with_context(|| format!("Failed to read {}", file_path))?;

    let start = Instant::now();
    let output = match *command {
        "tokenize" => run_tokenize(&file_contents),
        _ => run_parse(&file_contents),
    };
    if timings {
        eprintln!("{} in {:?}", command, start.elapsed());
    }

    io::stderr().write_all(output.stderr.as_bytes())?;
    io::stdout().write_all(output.stdout.as_bytes())?;
    io::stdout().flush()?;

    if output.exit_code != 0 {
        process::exit(output.exit_code);
    }
    Ok(())
}
