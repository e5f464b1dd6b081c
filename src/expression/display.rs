use super::Expression;
use crate::kernel::Kernel;
use std::fmt;

/// Longest vector prefix printed before truncation.
const MAX_ITEMS: usize = 5;

fn write_vec(f: &mut fmt::Formatter<'_>, v: &[usize]) -> fmt::Result {
    write!(f, "[")?;
    if v.len() <= MAX_ITEMS {
        for (i, item) in v.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
    } else {
        for item in &v[..MAX_ITEMS] {
            write!(f, "{}, ", item)?;
        }
        write!(f, "... ")?;
    }
    write!(f, "]")
}

impl<K: Kernel> fmt::Display for Expression<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CGP Expression:")?;
        writeln!(f, "\tNumber of inputs:\t\t{}", self.inputs())?;
        writeln!(f, "\tNumber of outputs:\t\t{}", self.outputs())?;
        writeln!(f, "\tNumber of rows:\t\t\t{}", self.rows())?;
        writeln!(f, "\tNumber of columns:\t\t{}", self.cols())?;
        writeln!(f, "\tNumber of levels-back allowed:\t{}", self.levels_back())?;
        writeln!(f, "\tKernel arity:\t\t\t{}", self.arity())?;

        write!(f, "\n\tResulting lower bounds:\t")?;
        write_vec(f, self.lb())?;
        write!(f, "\n\tResulting upper bounds:\t")?;
        write_vec(f, self.ub())?;

        write!(f, "\n\n\tCurrent expression (encoded):\t")?;
        write_vec(f, self.get())?;
        write!(f, "\n\tActive nodes:\t\t\t")?;
        write_vec(f, self.active_nodes())?;
        write!(f, "\n\tActive genes:\t\t\t")?;
        write_vec(f, self.active_genes())?;

        write!(f, "\n\n\tFunction set:\t\t\t[")?;
        for (i, kernel) in self.kernels().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", kernel.name())?;
        }
        writeln!(f, "]")
    }
}
