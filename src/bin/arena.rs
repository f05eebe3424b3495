//! Arena self-play CLI.
//!
//! Plays games between two configured difficulties and outputs one JSON
//! record per game (JSONL).
//!
//! Usage:
//!   cargo run --release --bin arena -- [OPTIONS]
//!
//! Options:
//!   --games N            Number of games to play (default: 10)
//!   --black DIFFICULTY   Strategy for black, basic|advanced (default: basic)
//!   --white DIFFICULTY   Strategy for white, basic|advanced (default: advanced)
//!   --seed N             Random seed, 0 for entropy (default: 0)
//!   --threads N          Number of parallel threads (default: 1)
//!   --output FILE        Output file path (default: stdout)
//!   --quiet              Suppress the summary line

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use turncoat::search::Difficulty;
use turncoat::selfplay::{run_arena, summarize, ArenaConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = ArenaConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--black" => {
                i += 1;
                config.black =
                    Difficulty::from_name(&args[i]).expect("invalid --black value");
            }
            "--white" => {
                i += 1;
                config.white =
                    Difficulty::from_name(&args[i]).expect("invalid --white value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let start = Instant::now();
    let records = run_arena(&config);

    let mut out: Box<dyn Write> = match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    for record in &records {
        let line = serde_json::to_string(record).expect("failed to serialize game record");
        writeln!(out, "{}", line).expect("failed to write record");
    }
    out.flush().expect("failed to flush output");

    if !quiet {
        let summary = summarize(&records);
        eprintln!(
            "{} games in {:.1}s: black ({}) {} / white ({}) {} / draws {}",
            records.len(),
            start.elapsed().as_secs_f64(),
            config.black.name(),
            summary.black_wins,
            config.white.name(),
            summary.white_wins,
            summary.draws
        );
    }
}

fn print_usage() {
    eprintln!("Usage: arena [OPTIONS]");
    eprintln!("  --games N            Number of games to play (default: 10)");
    eprintln!("  --black DIFFICULTY   Strategy for black, basic|advanced (default: basic)");
    eprintln!("  --white DIFFICULTY   Strategy for white, basic|advanced (default: advanced)");
    eprintln!("  --seed N             Random seed, 0 for entropy (default: 0)");
    eprintln!("  --threads N          Number of parallel threads (default: 1)");
    eprintln!("  --output FILE        Output file path (default: stdout)");
    eprintln!("  --quiet              Suppress the summary line");
}
