mod active;
mod bounds;
mod display;
mod eval;
mod mutation;

pub use active::ActiveSet;
pub use bounds::GeneBounds;

use crate::config::ExpressionConfig;
use crate::error::{CartgenError, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A CGP-encoded expression.
///
/// The genotype is a flat integer vector: `rows * cols` node blocks of
/// `arity + 1` genes (function index, then connection ids) followed by one
/// gene per output. Gene bounds are derived once from the structural
/// parameters. The active set (the subgraph that actually reaches the
/// outputs) is cached and refreshed after every genotype change.
///
/// `K` is the kernel type of the function set. Evaluation is generic over
/// the element type and only requires `K: KernelApply<T>`, so one expression
/// computes values, derivatives or symbolic strings depending on what the
/// caller feeds it.
///
/// The engine owns its random generator, seeded from the configuration:
/// mutation sequences are reproducible and never touch global state.
pub struct Expression<K> {
    config: ExpressionConfig,
    kernels: Vec<K>,
    bounds: GeneBounds,
    chromosome: Vec<usize>,
    active: ActiveSet,
    rng: StdRng,
}

impl<K> Expression<K> {
    /// Builds an expression with a random initial genotype.
    ///
    /// Fails with a configuration error when a structural parameter is zero,
    /// the arity is below two, or the kernel set is empty.
    pub fn new(config: ExpressionConfig, kernels: Vec<K>) -> Result<Self> {
        config.validate()?;
        if kernels.is_empty() {
            return Err(CartgenError::Configuration(
                "Kernel set is empty".to_string(),
            ));
        }

        let bounds = GeneBounds::derive(&config, kernels.len());
        let mut rng = StdRng::seed_from_u64(config.seed);
        let chromosome = bounds.random_genotype(&mut rng);
        let active = ActiveSet::resolve(&config, &chromosome);
        debug!(
            "new expression: {} genes, {} active nodes",
            chromosome.len(),
            active.nodes().len()
        );

        Ok(Self {
            config,
            kernels,
            bounds,
            chromosome,
            active,
            rng,
        })
    }

    /// Replaces the genotype wholesale.
    ///
    /// The candidate is validated against the bounds first; on failure the
    /// current genotype and active set are left untouched.
    pub fn set(&mut self, x: Vec<usize>) -> Result<()> {
        if x.len() != self.chromosome.len() {
            return Err(CartgenError::IncompatibleGenotype(format!(
                "wrong length: expected {}, got {}",
                self.chromosome.len(),
                x.len()
            )));
        }
        if !self.bounds.contains(&x) {
            return Err(CartgenError::IncompatibleGenotype(
                "gene value outside its bounds".to_string(),
            ));
        }
        self.chromosome = x;
        self.refresh_active();
        Ok(())
    }

    /// Checks a candidate genotype's length and per-gene bounds.
    pub fn is_valid(&self, x: &[usize]) -> bool {
        self.bounds.contains(x)
    }

    /// The current genotype.
    pub fn get(&self) -> &[usize] {
        &self.chromosome
    }

    /// Per-gene lower bounds.
    pub fn lb(&self) -> &[usize] {
        self.bounds.lower()
    }

    /// Per-gene upper bounds.
    pub fn ub(&self) -> &[usize] {
        self.bounds.upper()
    }

    /// Sorted ids of the nodes that influence the outputs.
    pub fn active_nodes(&self) -> &[usize] {
        self.active.nodes()
    }

    /// Indices of the genes that determine the outputs; the last
    /// `outputs()` entries are always the output genes, in order.
    pub fn active_genes(&self) -> &[usize] {
        self.active.genes()
    }

    /// The function set.
    pub fn kernels(&self) -> &[K] {
        &self.kernels
    }

    pub fn config(&self) -> &ExpressionConfig {
        &self.config
    }

    pub fn inputs(&self) -> usize {
        self.config.inputs
    }

    pub fn outputs(&self) -> usize {
        self.config.outputs
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    pub fn levels_back(&self) -> usize {
        self.config.levels_back
    }

    pub fn arity(&self) -> usize {
        self.config.arity
    }

    fn refresh_active(&mut self) {
        self.active = ActiveSet::resolve(&self.config, &self.chromosome);
        debug!(
            "active set refreshed: {} nodes, {} genes",
            self.active.nodes().len(),
            self.active.genes().len()
        );
    }
}
