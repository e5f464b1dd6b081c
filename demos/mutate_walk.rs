//! Walks a chain of active-gene mutations and prints how the decoded
//! formula drifts, the way an outer (1+λ) search would perturb it.
//!
//! Usage: `cargo run --example mutate_walk [steps] [seed]`

use anyhow::Result;
use cartgen::{Arithmetic, Expression, ExpressionConfig};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let steps = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10);
    let seed = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(7);

    let config = ExpressionConfig {
        inputs: 2,
        outputs: 1,
        rows: 1,
        cols: 8,
        levels_back: 9,
        arity: 2,
        seed,
    };
    let mut ex = Expression::new(config, Arithmetic::all())?;

    let symbols = vec!["x".to_string(), "y".to_string()];
    println!("step 0: {}", ex.eval(&symbols)?[0]);

    for step in 1..=steps {
        ex.mutate_active(1)?;
        println!(
            "step {}: {} ({} active nodes)",
            step,
            ex.eval(&symbols)?[0],
            ex.active_nodes().len()
        );
    }

    Ok(())
}
