//! Command-line front-end for the unranking engine.
//!
//! Prints the first expressions of the enumeration, unranks arbitrary
//! (decimal, possibly >64-bit) indices, and reports totals and timing.
//!
//! Run with: `cargo run --release -- --max-size 12 --count 20`

use std::time::Instant;

use clap::Parser;
use expr_rank::{BigNat, Engine};

#[derive(Parser)]
#[command(name = "expr-rank")]
#[command(about = "Random-access enumeration of Boolean expressions")]
struct Args {
    /// Maximum expression size (leaves plus operators)
    #[arg(short, long, default_value = "12")]
    max_size: usize,

    /// Print the first COUNT expressions
    #[arg(short, long, default_value = "20")]
    count: u64,

    /// Unrank a single 1-based index (decimal, may exceed 64 bits)
    #[arg(short, long)]
    rank: Option<String>,

    /// Show the first and last expression of the deepest layer
    #[arg(short, long)]
    deepest: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();

    let start = Instant::now();
    let engine = Engine::new(args.max_size)?;
    let build_time = start.elapsed();
    let total = engine.total();

    println!("Expression space for max size {}:", args.max_size);
    println!("  Total: {}", total);
    println!("  Build time: {:.3}ms", build_time.as_secs_f64() * 1000.0);
    println!();

    let start = Instant::now();
    let one = BigNat::one();
    let mut printed = 0u64;
    let mut rank = BigNat::one();
    while printed < args.count && rank <= total {
        println!("#{}: {}", rank, engine.unrank(&rank)?);
        rank = &rank + &one;
        printed += 1;
    }

    if args.deepest {
        let first = engine.tables().cumulative(args.max_size - 1) + &one;
        println!();
        println!("Deepest layer (size {}):", args.max_size);
        println!("  first #{}: {}", first, engine.unrank(&first)?);
        println!("  last  #{}: {}", total, engine.unrank(&total)?);
    }

    if let Some(text) = &args.rank {
        let requested = BigNat::from_decimal(text)?;
        println!();
        println!("#{}: {}", requested, engine.unrank(&requested)?);
    }

    println!();
    println!("Unranking time: {:.3}ms", start.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}
