use super::Expression;
use crate::error::{CartgenError, Result};
use log::trace;
use rand::Rng;

/// Mutation operators.
///
/// Every operator draws replacement values uniformly from the gene's range
/// excluding its current value; a frozen gene (`lb == ub`) is left alone.
/// Each value-changing path ends by refreshing the active set, so callers
/// always observe a consistent phenotype.
impl<K> Expression<K> {
    /// Mutates one gene by absolute index.
    pub fn mutate(&mut self, idx: usize) -> Result<()> {
        self.check_index(idx)?;
        if self.mutate_gene(idx) {
            self.refresh_active();
        }
        Ok(())
    }

    /// Mutates several genes by absolute index.
    ///
    /// All indices are validated before any gene changes; the active set is
    /// refreshed once at the end if anything changed.
    pub fn mutate_many(&mut self, idxs: &[usize]) -> Result<()> {
        for &idx in idxs {
            self.check_index(idx)?;
        }
        let mut changed = false;
        for &idx in idxs {
            changed |= self.mutate_gene(idx);
        }
        if changed {
            self.refresh_active();
        }
        Ok(())
    }

    /// Mutates `n` genes drawn uniformly from the whole genotype, with
    /// replacement across draws.
    pub fn mutate_random(&mut self, n: usize) -> Result<()> {
        let len = self.chromosome.len();
        let mut changed = false;
        for _ in 0..n {
            let idx = self.rng.gen_range(0..len);
            changed |= self.mutate_gene(idx);
        }
        if changed {
            self.refresh_active();
        }
        Ok(())
    }

    /// Mutates `n` genes drawn uniformly from the active genes (output
    /// genes included).
    ///
    /// Each draw goes through [`mutate`](Self::mutate), so later draws
    /// sample the refreshed active gene list.
    pub fn mutate_active(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            let live = self.active.genes().len();
            let pick = self.rng.gen_range(0..live);
            let idx = self.active.genes()[pick];
            self.mutate(idx)?;
        }
        Ok(())
    }

    /// Mutates one active function gene.
    ///
    /// No-op when no computational node is active.
    pub fn mutate_active_fgene(&mut self) -> Result<()> {
        let live = self.active.genes().len();
        let m = self.config.outputs;
        if live > m {
            let pick = self.rng.gen_range(0..live - m);
            let gene = self.active.genes()[pick];
            let idx = gene - gene % (self.config.arity + 1);
            self.mutate(idx)?;
        }
        Ok(())
    }

    /// Mutates one active connection gene: uniform over active node blocks,
    /// then uniform over the block's connections.
    ///
    /// No-op when no computational node is active.
    pub fn mutate_active_cgene(&mut self) -> Result<()> {
        let live = self.active.genes().len();
        let m = self.config.outputs;
        if live > m {
            let arity = self.config.arity;
            let pick = self.rng.gen_range(0..live - m);
            let gene = self.active.genes()[pick];
            let offset = self.rng.gen_range(1..=arity);
            let idx = gene - gene % (arity + 1) + offset;
            self.mutate(idx)?;
        }
        Ok(())
    }

    /// Mutates one of the output genes.
    pub fn mutate_ogene(&mut self) -> Result<()> {
        let live = self.active.genes().len();
        let m = self.config.outputs;
        let pick = if m > 1 {
            self.rng.gen_range(live - m..live)
        } else {
            live - 1
        };
        let idx = self.active.genes()[pick];
        self.mutate(idx)
    }

    fn check_index(&self, idx: usize) -> Result<()> {
        if idx >= self.chromosome.len() {
            return Err(CartgenError::IndexOutOfRange {
                idx,
                len: self.chromosome.len(),
            });
        }
        Ok(())
    }

    /// Draws a fresh value for one gene. Returns whether the genotype
    /// changed; frozen genes never change.
    fn mutate_gene(&mut self, idx: usize) -> bool {
        match self
            .bounds
            .draw_distinct(idx, self.chromosome[idx], &mut self.rng)
        {
            Some(value) => {
                let old = self.chromosome[idx];
                self.chromosome[idx] = value;
                trace!("gene {} mutated: {} -> {}", idx, old, value);
                true
            }
            None => false,
        }
    }
}
