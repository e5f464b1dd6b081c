//! Decodes a random expression and prints its diagnostic dump, symbolic
//! form and numeric value.
//!
//! Usage: `cargo run --example symbolic [cols] [levels_back] [seed]`

use anyhow::Result;
use cartgen::{Arithmetic, Expression, ExpressionConfig};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let cols = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(6);
    let levels_back = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(7);
    let seed = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(42);

    let config = ExpressionConfig {
        inputs: 2,
        outputs: 1,
        rows: 1,
        cols,
        levels_back,
        arity: 2,
        seed,
    };
    let ex = Expression::new(config, Arithmetic::all())?;

    println!("{}", ex);

    let symbols = vec!["x".to_string(), "y".to_string()];
    let rendered = ex.eval(&symbols)?;
    println!("Decoded formula: {}", rendered[0]);

    let numeric = ex.eval(&[1.5, 2.5])?;
    println!("Value at (1.5, 2.5): {}", numeric[0]);

    Ok(())
}
