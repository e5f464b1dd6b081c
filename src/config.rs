use crate::error::CartgenError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Structural parameters of a CGP expression.
///
/// All parameters are fixed for the lifetime of an [`Expression`]. The node
/// grid has `rows * cols` computational nodes laid out column-major; a node
/// in column `i` may connect to nodes in columns `[max(0, i - levels_back),
/// i - 1]` or to the inputs.
///
/// [`Expression`]: crate::Expression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpressionConfig {
    /// Number of independent variables.
    pub inputs: usize,
    /// Number of dependent variables.
    pub outputs: usize,
    /// Rows of the node grid.
    pub rows: usize,
    /// Columns of the node grid.
    pub cols: usize,
    /// How many columns back a connection gene may reach.
    pub levels_back: usize,
    /// Operand count of every kernel in the function set.
    pub arity: usize,
    /// Seed for the engine's owned random generator.
    pub seed: u64,
}

impl Default for ExpressionConfig {
    fn default() -> Self {
        Self {
            inputs: 1,
            outputs: 1,
            rows: 1,
            cols: 15,
            levels_back: 16,
            arity: 2,
            seed: 0,
        }
    }
}

impl ExpressionConfig {
    pub fn validate(&self) -> Result<(), CartgenError> {
        if self.inputs == 0 {
            return Err(CartgenError::Configuration(
                "Number of inputs is zero".to_string(),
            ));
        }
        if self.outputs == 0 {
            return Err(CartgenError::Configuration(
                "Number of outputs is zero".to_string(),
            ));
        }
        if self.rows == 0 {
            return Err(CartgenError::Configuration(
                "Number of rows is zero".to_string(),
            ));
        }
        if self.cols == 0 {
            return Err(CartgenError::Configuration(
                "Number of columns is zero".to_string(),
            ));
        }
        if self.levels_back == 0 {
            return Err(CartgenError::Configuration(
                "Number of levels-back is zero".to_string(),
            ));
        }
        if self.arity < 2 {
            return Err(CartgenError::Configuration(
                "Kernel arity must be at least 2".to_string(),
            ));
        }
        Ok(())
    }

    /// Total gene count of a genotype under these parameters.
    pub fn genotype_len(&self) -> usize {
        (self.arity + 1) * self.rows * self.cols + self.outputs
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CartgenError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CartgenError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: ExpressionConfig = toml::from_str(&contents)
            .map_err(|e| CartgenError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CartgenError> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| CartgenError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| CartgenError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}
