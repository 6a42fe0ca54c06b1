//! Solve N-Queens from the command line.
//!
//! ```text
//! cargo run --example n_queens -- 8 --stats
//! ```

use std::sync::Arc;

use clap::Parser;
use plexus::{
    problems::n_queens::n_queens,
    solver::{
        engine::SolverEngine, observer::TracingObserver, stats::render_stats_table,
        value::Variable,
    },
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Place N queens on an N x N board so that none attack each other")]
struct Args {
    /// Board size.
    #[arg(default_value_t = 8)]
    n: usize,

    /// Print the per-constraint propagation breakdown.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let problem = n_queens(args.n)?;
    let engine = SolverEngine::default().with_observer(Arc::new(TracingObserver));
    let result = engine.solve(&problem)?;

    match result.outcome.assignment() {
        Some(assignment) => {
            for row in 0..args.n {
                let queen = assignment
                    .get(&Variable::from(format!("q{}", row)))
                    .and_then(|v| v.as_str().parse::<usize>().ok());
                let line: String = (0..args.n)
                    .map(|col| if Some(col) == queen { " Q" } else { " ." })
                    .collect();
                println!("{}", line);
            }
            println!("{}", serde_json::to_string_pretty(assignment)?);
        }
        None => {
            println!("{}", result.outcome.reason().unwrap_or("no solution"));
        }
    }

    eprintln!(
        "nodes={} inferences={} backtracks={} elapsed={:?}",
        result.stats.nodes_explored,
        result.stats.inferences_applied,
        result.stats.backtracks,
        result.stats.elapsed,
    );
    if args.stats {
        println!("{}", render_stats_table(&result.stats, problem.constraints()));
    }
    Ok(())
}
