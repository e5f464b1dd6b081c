use crate::config::ExpressionConfig;

/// The nodes and genes reachable backward from the outputs.
///
/// Derived state: two genotypes with equal gene values resolve to equal
/// active sets. `genes` lists each active node's `arity + 1` genes in
/// increasing node order and always ends with the `m` output genes, in
/// output order; the output-restricted mutation operator relies on that
/// trailing position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSet {
    nodes: Vec<usize>,
    genes: Vec<usize>,
}

impl ActiveSet {
    /// Walks the graph backward from the output genes.
    ///
    /// The frontier is sorted and deduplicated at every level, so a node id
    /// is expanded at most once and shared subexpressions cost linear rather
    /// than exponential time.
    pub fn resolve(config: &ExpressionConfig, x: &[usize]) -> Self {
        let n = config.inputs;
        let arity = config.arity;
        let block = arity + 1;
        let out_base = block * config.rows * config.cols;

        let mut nodes: Vec<usize> = Vec::new();
        let mut current: Vec<usize> = x[out_base..out_base + config.outputs].to_vec();
        let mut next: Vec<usize> = Vec::new();

        while !current.is_empty() {
            nodes.extend_from_slice(&current);
            for &id in &current {
                // Input nodes are terminal and have no connection genes.
                if id >= n {
                    let idx = (id - n) * block;
                    next.extend_from_slice(&x[idx + 1..idx + block]);
                }
            }
            next.sort_unstable();
            next.dedup();
            std::mem::swap(&mut current, &mut next);
            next.clear();
        }

        nodes.sort_unstable();
        nodes.dedup();

        let computational = nodes.iter().filter(|&&id| id >= n).count();
        let mut genes = Vec::with_capacity(computational * block + config.outputs);
        for &id in &nodes {
            if id >= n {
                let idx = (id - n) * block;
                genes.extend(idx..idx + block);
            }
        }
        genes.extend(out_base..out_base + config.outputs);

        Self { nodes, genes }
    }

    /// Sorted, deduplicated node ids that influence the outputs.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Gene indices of the active nodes, terminated by the output genes.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(inputs: usize, outputs: usize, rows: usize, cols: usize) -> ExpressionConfig {
        ExpressionConfig {
            inputs,
            outputs,
            rows,
            cols,
            levels_back: cols,
            arity: 2,
            seed: 0,
        }
    }

    #[test]
    fn test_minimal_resolution() {
        // One node summing both inputs, routed to the single output.
        let active = ActiveSet::resolve(&config(2, 1, 1, 1), &[0, 0, 1, 2]);
        assert_eq!(active.nodes(), &[0, 1, 2]);
        assert_eq!(active.genes(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_unreached_node_is_inactive() {
        // Two single-row columns; the output skips node 3 and names node 2,
        // which reads only input 0.
        let x = vec![0, 0, 0, 0, 2, 2, 2];
        let active = ActiveSet::resolve(&config(2, 1, 1, 2), &x);
        assert_eq!(active.nodes(), &[0, 2]);
        // Node 3's genes (3, 4, 5) stay inactive.
        assert_eq!(active.genes(), &[0, 1, 2, 6]);
    }

    #[test]
    fn test_output_wired_to_input() {
        // With levels-back wider than the grid the output may name an input
        // directly, leaving every computational node inactive.
        let cfg = ExpressionConfig {
            levels_back: 2,
            ..config(2, 1, 1, 1)
        };
        let active = ActiveSet::resolve(&cfg, &[0, 0, 1, 1]);
        assert_eq!(active.nodes(), &[1]);
        assert_eq!(active.genes(), &[3]);
    }

    #[test]
    fn test_gene_list_ends_with_output_genes() {
        let cfg = config(2, 3, 2, 3);
        let x = vec![
            0, 0, 1, // node 2
            0, 1, 1, // node 3
            0, 2, 3, // node 4
            0, 3, 2, // node 5
            0, 4, 5, // node 6
            0, 5, 4, // node 7
            6, 7, 2, // outputs
        ];
        let active = ActiveSet::resolve(&cfg, &x);
        let genes = active.genes();
        let out_base = 3 * 2 * 3;
        assert_eq!(&genes[genes.len() - 3..], &[out_base, out_base + 1, out_base + 2]);
    }

    #[test]
    fn test_duplicate_output_targets_resolved_once() {
        let cfg = config(2, 3, 1, 1);
        let x = vec![0, 0, 1, 2, 2, 2];
        let active = ActiveSet::resolve(&cfg, &x);
        assert_eq!(active.nodes(), &[0, 1, 2]);
        assert_eq!(active.genes(), &[0, 1, 2, 3, 4, 5]);
    }
}
