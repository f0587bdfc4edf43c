//! Enqueues `value:priority` pairs and drains them in priority order.
//!
//! ```bash
//! cargo run --bin pq_demo
//! cargo run --bin pq_demo -- apples:4 pears:2 plums:9
//! ```

use clap::Parser;
use indexed_heaps::PriorityQueue;
use log::info;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Drain value:priority pairs in priority order", long_about = None)]
struct Args {
    /// Entries as VALUE:PRIORITY; lower priorities come out first
    #[arg(value_name = "PAIR", value_parser = parse_pair, default_values = ["!:3", "world:2", "hello:1"])]
    pairs: Vec<(String, u64)>,
}

fn parse_pair(s: &str) -> Result<(String, u64), String> {
    let (value, priority) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected VALUE:PRIORITY, got {:?}", s))?;
    let priority = priority
        .parse::<u64>()
        .map_err(|e| format!("invalid priority in {:?}: {}", s, e))?;
    Ok((value.to_string(), priority))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut queue: PriorityQueue<String> = PriorityQueue::new();
    for (value, priority) in args.pairs {
        info!("Enqueue {:?} at priority {}", value, priority);
        queue.enqueue_with_priority(value, priority)?;
    }

    while !queue.is_empty() {
        let (priority, data) = queue.peek()?;
        println!("Priority : {}, Data : {}", priority, data);
        queue.dequeue()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("hello:1"), Ok(("hello".to_string(), 1)));
        assert_eq!(parse_pair("a:b:7"), Ok(("a:b".to_string(), 7)));
        assert!(parse_pair("hello").is_err());
        assert!(parse_pair("hello:-1").is_err());
    }

    #[test]
    fn test_default_pairs() {
        let args = Args::parse_from(["pq_demo"]);
        assert_eq!(args.pairs.len(), 3);
        assert_eq!(args.pairs[2], ("hello".to_string(), 1));
    }
}
