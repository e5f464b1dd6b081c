use crate::kernel::{Kernel, KernelApply};

/// Built-in arithmetic kernels.
///
/// Each kernel folds its operands left to right with one arithmetic
/// operation. Over `String` operands the same kernels render parenthesized
/// infix, so a symbolic expression falls out of the ordinary evaluation
/// path. Other element types (e.g. dual numbers) implement [`KernelApply`]
/// for `Arithmetic` in the caller's crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arithmetic {
    Sum,
    Diff,
    Mul,
    Div,
}

impl Arithmetic {
    /// The full arithmetic function set, in a stable order.
    pub fn all() -> Vec<Arithmetic> {
        vec![
            Arithmetic::Sum,
            Arithmetic::Diff,
            Arithmetic::Mul,
            Arithmetic::Div,
        ]
    }

    fn symbol(&self) -> char {
        match self {
            Arithmetic::Sum => '+',
            Arithmetic::Diff => '-',
            Arithmetic::Mul => '*',
            Arithmetic::Div => '/',
        }
    }
}

impl Kernel for Arithmetic {
    fn name(&self) -> &'static str {
        match self {
            Arithmetic::Sum => "sum",
            Arithmetic::Diff => "diff",
            Arithmetic::Mul => "mul",
            Arithmetic::Div => "div",
        }
    }
}

impl KernelApply<f64> for Arithmetic {
    fn apply(&self, inputs: &[f64]) -> f64 {
        let mut acc = inputs[0];
        for &v in &inputs[1..] {
            acc = match self {
                Arithmetic::Sum => acc + v,
                Arithmetic::Diff => acc - v,
                Arithmetic::Mul => acc * v,
                Arithmetic::Div => acc / v,
            };
        }
        acc
    }
}

impl KernelApply<String> for Arithmetic {
    fn apply(&self, inputs: &[String]) -> String {
        let mut out = String::from("(");
        for (i, operand) in inputs.iter().enumerate() {
            if i > 0 {
                out.push(self.symbol());
            }
            out.push_str(operand);
        }
        out.push(')');
        out
    }
}
