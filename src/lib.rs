//! Cartesian Genetic Programming expression engine.
//!
//! An expression is encoded as a fixed-length integer genotype over a grid
//! of computational nodes. The engine derives legal per-gene bounds from the
//! structural parameters, extracts the active subgraph by backward
//! reachability, mutates the genotype in place with an owned seeded
//! generator, and evaluates the active nodes generically over any element
//! type whose kernel contract is satisfied: plain numbers, dual numbers or
//! symbolic strings.
//!
//! The outer evolutionary search (selection, fitness, population) is the
//! caller's business; this crate is the single-individual representation it
//! loops over.
//!
//! ```
//! use cartgen::{Arithmetic, Expression, ExpressionConfig};
//!
//! let config = ExpressionConfig {
//!     inputs: 2,
//!     outputs: 1,
//!     rows: 1,
//!     cols: 1,
//!     levels_back: 1,
//!     arity: 2,
//!     seed: 42,
//! };
//! let mut ex = Expression::new(config, vec![Arithmetic::Sum, Arithmetic::Mul])?;
//!
//! // sum(input 0, input 1), routed to the single output.
//! ex.set(vec![0, 0, 1, 2])?;
//! assert_eq!(ex.eval(&[1.0, 2.0])?, vec![3.0]);
//!
//! // Same wiring, product kernel.
//! ex.set(vec![1, 0, 1, 2])?;
//! assert_eq!(ex.eval(&[1.0, 2.0])?, vec![2.0]);
//! # Ok::<(), cartgen::CartgenError>(())
//! ```

pub mod config;
pub mod error;
pub mod expression;
pub mod kernel;
pub mod kernels;

pub use config::ExpressionConfig;
pub use error::{CartgenError, Result};
pub use expression::{ActiveSet, Expression, GeneBounds};
pub use kernel::{Kernel, KernelApply};
pub use kernels::Arithmetic;
