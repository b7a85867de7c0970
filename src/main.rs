use std::process::ExitCode;

use clap::Parser;
use stepwise::{evaluate, evaluate_file, report::Response};

/// stepwise evaluates a flat arithmetic expression and shows every step it
/// took to get there.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stepwise to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Print the JSON envelope instead of the worked solution. Failures,
    /// including an unreadable input file, are reported in the envelope too.
    #[arg(short, long)]
    json: bool,

    /// Also print the token sequence after each precedence pass.
    #[arg(short, long)]
    stages: bool,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let outcome = if args.file {
        evaluate_file(&args.contents)
    } else {
        evaluate(&args.contents)
    };

    if args.json {
        let response = Response::from(outcome);
        return match response.to_json_pretty() {
            Ok(json) => {
                println!("{json}");
                if response.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
            },
            Err(e) => {
                eprintln!("Failed to serialize the result: {e}");
                ExitCode::FAILURE
            },
        };
    }

    match outcome {
        Ok(evaluation) => {
            if args.stages {
                for stage in &evaluation.stages {
                    println!("{stage}");
                }
                println!();
            }
            for (i, step) in evaluation.steps.iter().enumerate() {
                println!("{}. {step}", i + 1);
            }
            println!("= {}", evaluation.value);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
