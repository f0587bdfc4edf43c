//! Times enqueue/dequeue/peek/decrease over randomized workloads and writes a
//! CSV of per-operation averages.
//!
//! ```bash
//! RUST_LOG=info cargo run --release --bin pq_bench
//! cargo run --release --bin pq_bench -- --sizes 1000,10000 --heap scan -o scan.csv
//! ```

use clap::{Parser, ValueEnum};
use indexed_heaps::bench::{render_table, run_benchmark, write_csv_file, BenchConfig};
use indexed_heaps::scan_binary::ScanBinaryHeap;
use indexed_heaps::BinaryHeap;
use log::info;
use std::error::Error;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HeapKind {
    /// Hash-indexed binary heap
    Indexed,
    /// Unindexed binary heap with linear-scan lookup
    Scan,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Benchmark priority queue operations", long_about = None)]
struct Args {
    /// Workload sizes, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = BenchConfig::default().sizes
    )]
    sizes: Vec<usize>,

    /// Timed repetitions per size; the slowest one is discarded
    #[arg(short, long, default_value_t = BenchConfig::default().iterations)]
    iterations: usize,

    /// Seed for the workload generator
    #[arg(long, default_value_t = BenchConfig::default().seed)]
    seed: u64,

    /// Heap implementation behind the queue
    #[arg(long, value_enum, default_value_t = HeapKind::Indexed)]
    heap: HeapKind,

    /// CSV report path
    #[arg(short, long, default_value = "benchmark_results.csv")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = BenchConfig {
        sizes: args.sizes,
        iterations: args.iterations,
        seed: args.seed,
    };
    info!("Benchmarking {:?} heap with {:?}", args.heap, config);

    let results = match args.heap {
        HeapKind::Indexed => run_benchmark::<BinaryHeap<u32>>(&config)?,
        HeapKind::Scan => run_benchmark::<ScanBinaryHeap<u32>>(&config)?,
    };

    println!("{}", render_table(&results));
    write_csv_file(&args.output, &results)?;
    println!("Results saved to {}", args.output.display());

    Ok(())
}
