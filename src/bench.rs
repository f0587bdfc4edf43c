//! Wall-clock benchmark harness for priority queues
//!
//! Times the four queue operations over randomized workloads of increasing
//! size and reports per-operation averages in microseconds.
//!
//! For each size `n`:
//! - values are `0..n` in shuffled order, priorities are uniform in `1..=10n`
//! - every iteration builds a fresh queue and times: enqueueing all values,
//!   one peek, one decrease of a random value to half its priority, and
//!   draining the queue by repeated dequeue
//! - per operation, the slowest iteration is dropped and the rest averaged
//!
//! The harness is generic over the heap behind the queue, so the indexed
//! [`BinaryHeap`](crate::binary::BinaryHeap) and the scanning baseline can be
//! compared on identical workloads.
//!
//! ```rust
//! use indexed_heaps::bench::{run_benchmark, BenchConfig};
//! use indexed_heaps::BinaryHeap;
//!
//! let config = BenchConfig {
//!     sizes: vec![64, 128],
//!     iterations: 3,
//!     ..BenchConfig::default()
//! };
//! let results = run_benchmark::<BinaryHeap<u32>>(&config).unwrap();
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[1].size, 128);
//! ```

use crate::queue::PriorityQueue;
use crate::traits::{Heap, HeapError};
use comfy_table::{ContentArrangement, Table};
use log::{debug, info};
use std::fs::File;
use std::hint::black_box;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Header row of the CSV report
pub const CSV_HEADER: &str = "Size,Insert(us),Extract(us),Peek(us),Decrease(us)";

/// Benchmark parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Workload sizes, one report row each
    pub sizes: Vec<usize>,
    /// Timed repetitions per size; the slowest is discarded
    pub iterations: usize,
    /// Seed for value shuffling and priority generation
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1000, 2000, 4000, 8000, 16000, 32000, 64000],
            iterations: 5,
            seed: 0x5eed,
        }
    }
}

/// Average timings for one workload size, in microseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchResult {
    pub size: usize,
    /// Enqueueing all `size` values
    pub avg_insert: f64,
    /// Draining the queue
    pub avg_extract: f64,
    /// A single peek
    pub avg_peek: f64,
    /// A single decrease
    pub avg_decrease: f64,
}

/// Runs every size in `config` against a queue backed by `H`
///
/// # Errors
/// Propagates any [`HeapError`] from the queue. The generated workloads never
/// trigger one against a heap that honours the [`Heap`] contract.
pub fn run_benchmark<H: Heap<u32, u64>>(
    config: &BenchConfig,
) -> Result<Vec<BenchResult>, HeapError> {
    let mut rng = fastrand::Rng::with_seed(config.seed);
    config
        .sizes
        .iter()
        .map(|&size| {
            info!("Benchmarking n = {}", size);
            run_size::<H>(size, config.iterations, &mut rng)
        })
        .collect()
}

fn run_size<H: Heap<u32, u64>>(
    size: usize,
    iterations: usize,
    rng: &mut fastrand::Rng,
) -> Result<BenchResult, HeapError> {
    let mut values: Vec<u32> = (0..size as u32).collect();
    rng.shuffle(&mut values);
    let max_priority = (size as u64).saturating_mul(10).max(1);
    let priorities: Vec<u64> = (0..size).map(|_| rng.u64(1..=max_priority)).collect();

    let mut insert_times = Vec::with_capacity(iterations);
    let mut extract_times = Vec::with_capacity(iterations);
    let mut peek_times = Vec::with_capacity(iterations);
    let mut decrease_times = Vec::with_capacity(iterations);

    for iteration in 0..iterations {
        let mut queue: PriorityQueue<u32, u64, H> = PriorityQueue::new();

        let start = Instant::now();
        for (&value, &priority) in values.iter().zip(&priorities) {
            queue.enqueue_with_priority(value, priority)?;
        }
        insert_times.push(micros_since(start));

        if size > 0 {
            let start = Instant::now();
            black_box(queue.peek()?);
            peek_times.push(micros_since(start));

            let idx = rng.usize(0..size);
            let new_priority = priorities[idx] / 2;
            let start = Instant::now();
            queue.decrease_priority(&values[idx], new_priority)?;
            decrease_times.push(micros_since(start));
        }

        let start = Instant::now();
        while !queue.is_empty() {
            queue.dequeue()?;
        }
        extract_times.push(micros_since(start));

        debug!(
            "n = {} iteration {}: insert {:.1}us, extract {:.1}us",
            size,
            iteration,
            insert_times[iteration],
            extract_times[iteration]
        );
    }

    Ok(BenchResult {
        size,
        avg_insert: trimmed_mean(&mut insert_times),
        avg_extract: trimmed_mean(&mut extract_times),
        avg_peek: trimmed_mean(&mut peek_times),
        avg_decrease: trimmed_mean(&mut decrease_times),
    })
}

fn micros_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1e6
}

/// Drops the largest sample and averages the rest
///
/// Returns 0.0 when no samples remain.
pub fn trimmed_mean(times: &mut Vec<f64>) -> f64 {
    if let Some(max_idx) = times
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
    {
        times.swap_remove(max_idx);
    }

    if times.is_empty() {
        0.0
    } else {
        times.iter().sum::<f64>() / times.len() as f64
    }
}

/// Writes `results` as CSV, header first
pub fn write_csv<W: Write>(mut out: W, results: &[BenchResult]) -> io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for r in results {
        writeln!(
            out,
            "{},{:.3},{:.3},{:.3},{:.3}",
            r.size, r.avg_insert, r.avg_extract, r.avg_peek, r.avg_decrease
        )?;
    }
    out.flush()
}

/// Writes the CSV report to `path`, replacing any existing file
pub fn write_csv_file(path: &Path, results: &[BenchResult]) -> io::Result<()> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), results)
}

/// Formats `results` as a terminal table
pub fn render_table(results: &[BenchResult]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Size", "Insert (us)", "Extract (us)", "Peek (us)", "Decrease (us)"]);

    for r in results {
        table.add_row(vec![
            r.size.to_string(),
            format!("{:.1}", r.avg_insert),
            format!("{:.1}", r.avg_extract),
            format!("{:.3}", r.avg_peek),
            format!("{:.3}", r.avg_decrease),
        ]);
    }
    table
}
