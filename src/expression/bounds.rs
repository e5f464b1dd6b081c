use crate::config::ExpressionConfig;
use rand::Rng;

/// Per-gene legal ranges derived from the structural parameters.
///
/// Connection genes in column `i` are bounded so they can only name nodes in
/// columns `[max(0, i - levels_back), i - 1]` or inputs; every legal value
/// therefore refers to an already-defined node and the decoded graph is
/// acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneBounds {
    lb: Vec<usize>,
    ub: Vec<usize>,
}

impl GeneBounds {
    /// Derives the bounds for a validated configuration and a non-empty
    /// kernel set.
    pub fn derive(config: &ExpressionConfig, kernel_count: usize) -> Self {
        let n = config.inputs;
        let r = config.rows;
        let c = config.cols;
        let l = config.levels_back;
        let arity = config.arity;

        let len = config.genotype_len();
        let node_genes = (arity + 1) * r * c;
        let mut lb = vec![0usize; len];
        let mut ub = vec![0usize; len];

        // Function genes index into the kernel set.
        for i in (0..node_genes).step_by(arity + 1) {
            ub[i] = kernel_count - 1;
        }

        // Connection genes: the levels-back window of the node's column.
        for col in 0..c {
            for row in 0..r {
                let block = (col * r + row) * (arity + 1);
                for k in 1..=arity {
                    ub[block + k] = n + col * r - 1;
                    if col >= l {
                        lb[block + k] = n + r * (col - l);
                    }
                }
            }
        }

        // Output genes may name any node inside the window of column `c`.
        for i in node_genes..len {
            ub[i] = n + r * c - 1;
            if l <= c {
                lb[i] = n + r * (c - l);
            }
        }

        Self { lb, ub }
    }

    pub fn len(&self) -> usize {
        self.lb.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lb.is_empty()
    }

    pub fn lower(&self) -> &[usize] {
        &self.lb
    }

    pub fn upper(&self) -> &[usize] {
        &self.ub
    }

    /// True when the gene admits a single legal value.
    pub fn is_frozen(&self, idx: usize) -> bool {
        self.lb[idx] == self.ub[idx]
    }

    /// Length plus per-gene range check.
    pub fn contains(&self, x: &[usize]) -> bool {
        x.len() == self.lb.len()
            && x.iter()
                .enumerate()
                .all(|(i, &gene)| self.lb[i] <= gene && gene <= self.ub[i])
    }

    /// Draws every gene uniformly from its range.
    pub fn random_genotype<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        (0..self.len())
            .map(|i| rng.gen_range(self.lb[i]..=self.ub[i]))
            .collect()
    }

    /// Draws a value in `[lb, ub]` distinct from `current`.
    ///
    /// Returns `None` for frozen genes, where no distinct value exists.
    pub fn draw_distinct<R: Rng>(&self, idx: usize, current: usize, rng: &mut R) -> Option<usize> {
        if self.is_frozen(idx) {
            return None;
        }
        loop {
            let value = rng.gen_range(self.lb[idx]..=self.ub[idx]);
            if value != current {
                return Some(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn minimal_config() -> ExpressionConfig {
        ExpressionConfig {
            inputs: 2,
            outputs: 1,
            rows: 1,
            cols: 1,
            levels_back: 1,
            arity: 2,
            seed: 0,
        }
    }

    #[test]
    fn test_minimal_grid_bounds() {
        let bounds = GeneBounds::derive(&minimal_config(), 2);
        assert_eq!(bounds.len(), 4);
        assert_eq!(bounds.lower(), &[0, 0, 0, 2]);
        assert_eq!(bounds.upper(), &[1, 1, 1, 2]);
        // The single output gene can only name the single computational node.
        assert!(bounds.is_frozen(3));
    }

    #[test]
    fn test_levels_back_window() {
        let config = ExpressionConfig {
            inputs: 1,
            outputs: 1,
            rows: 2,
            cols: 3,
            levels_back: 1,
            arity: 2,
            seed: 0,
        };
        let bounds = GeneBounds::derive(&config, 4);

        // Column 0 connects only to the input.
        assert_eq!(bounds.lower()[1], 0);
        assert_eq!(bounds.upper()[1], 0);
        // Column 1 reaches back exactly one column: nodes 1..=2.
        let block = 2 * 3; // first node of column 1
        assert_eq!(bounds.lower()[block + 1], 1);
        assert_eq!(bounds.upper()[block + 1], 2);
        // Column 2 must not see column 0: nodes 3..=4.
        let block = 4 * 3;
        assert_eq!(bounds.lower()[block + 1], 3);
        assert_eq!(bounds.upper()[block + 1], 4);
        // Outputs reach the last column only.
        let out = bounds.len() - 1;
        assert_eq!(bounds.lower()[out], 5);
        assert_eq!(bounds.upper()[out], 6);
    }

    #[test]
    fn test_wide_levels_back_reaches_inputs() {
        let config = ExpressionConfig {
            inputs: 2,
            outputs: 1,
            rows: 1,
            cols: 4,
            levels_back: 5,
            arity: 2,
            seed: 0,
        };
        let bounds = GeneBounds::derive(&config, 2);
        // levels_back exceeds the column count, so every lower bound is 0.
        assert!(bounds.lower().iter().all(|&lb| lb == 0));
    }

    #[test]
    fn test_random_genotype_within_bounds() {
        let config = ExpressionConfig {
            inputs: 3,
            outputs: 2,
            rows: 2,
            cols: 5,
            levels_back: 2,
            arity: 3,
            seed: 0,
        };
        let bounds = GeneBounds::derive(&config, 4);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let x = bounds.random_genotype(&mut rng);
            assert!(bounds.contains(&x));
        }
    }

    #[test]
    fn test_contains_rejects_wrong_length() {
        let bounds = GeneBounds::derive(&minimal_config(), 2);
        assert!(!bounds.contains(&[0, 0, 1]));
        assert!(!bounds.contains(&[0, 0, 1, 2, 0]));
    }

    #[test]
    fn test_draw_distinct_changes_value() {
        let bounds = GeneBounds::derive(&minimal_config(), 2);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let drawn = bounds.draw_distinct(1, 0, &mut rng).unwrap();
            assert_eq!(drawn, 1);
        }
        // Frozen gene has no distinct value.
        assert!(bounds.draw_distinct(3, 2, &mut rng).is_none());
    }
}
