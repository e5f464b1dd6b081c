use super::Expression;
use crate::error::{CartgenError, Result};
use crate::kernel::KernelApply;
use std::collections::HashMap;

impl<K> Expression<K> {
    /// Evaluates the expression over element type `T`.
    ///
    /// Walks the active nodes in increasing id order: input nodes read the
    /// input vector, computational nodes gather their operands from the
    /// transient value map and apply the kernel named by their function
    /// gene. Connection targets always precede their node in the walk, so
    /// every operand is available when needed.
    ///
    /// Evaluation is read-only and deterministic: the same genotype and
    /// input produce the same output, regardless of prior calls.
    pub fn eval<T>(&self, input: &[T]) -> Result<Vec<T>>
    where
        T: Clone,
        K: KernelApply<T>,
    {
        let n = self.config.inputs;
        if input.len() != n {
            return Err(CartgenError::SizeMismatch {
                expected: n,
                actual: input.len(),
            });
        }

        let arity = self.config.arity;
        let block = arity + 1;
        let out_base = block * self.config.rows * self.config.cols;

        let mut values: HashMap<usize, T> = HashMap::with_capacity(self.active.nodes().len());
        let mut operands: Vec<T> = Vec::with_capacity(arity);

        for &id in self.active.nodes() {
            if id < n {
                values.insert(id, input[id].clone());
            } else {
                let idx = (id - n) * block;
                operands.clear();
                for j in 1..=arity {
                    operands.push(values[&self.chromosome[idx + j]].clone());
                }
                let kernel = &self.kernels[self.chromosome[idx]];
                values.insert(id, kernel.apply(&operands));
            }
        }

        Ok((0..self.config.outputs)
            .map(|i| values[&self.chromosome[out_base + i]].clone())
            .collect())
    }
}
