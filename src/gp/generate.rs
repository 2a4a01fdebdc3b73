//! Random tree generation.
//!
//! Trees grow top-down: at each step a function node is chosen with
//! probability `function_bias` while depth budget remains, otherwise a leaf.
//! Leaves are parameters with probability `param_bias`, else constants in
//! `0..=10`. The depth budget shrinks by one per level, so generation always
//! terminates.

use crate::gp::registry::{Registry, Value};
use crate::gp::tree::{FunctionNode, Tree};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest constant a generated leaf may hold.
pub const MAX_CONSTANT: Value = 10;

/// Shape parameters for random trees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Depth budget; a tree never has more than this many function levels.
    pub max_depth: usize,
    /// Probability of growing a function node while budget remains.
    pub function_bias: f64,
    /// Probability that a leaf is a parameter rather than a constant.
    pub param_bias: f64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            function_bias: 0.5,
            param_bias: 0.6,
        }
    }
}

/// Draws fresh random trees over a registry and input width.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    registry: &'a Registry,
    param_count: usize,
    config: GenerateConfig,
}

impl<'a> Generator<'a> {
    /// Create a generator for trees reading `param_count` inputs.
    #[must_use]
    pub fn new(registry: &'a Registry, param_count: usize, config: GenerateConfig) -> Self {
        Self {
            registry,
            param_count,
            config,
        }
    }

    /// Registry functions are drawn from.
    #[must_use]
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Width of the input vector generated trees read from.
    #[must_use]
    pub const fn param_count(&self) -> usize {
        self.param_count
    }

    /// Generate a tree using the configured depth budget.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Tree {
        self.grow(self.config.max_depth, rng)
    }

    fn grow<R: Rng + ?Sized>(&self, depth: usize, rng: &mut R) -> Tree {
        if rng.r#gen::<f64>() < self.config.function_bias
            && depth > 0
            && let Some(function) = self.registry.choose(rng)
        {
            let children = (0..function.arity())
                .map(|_| self.grow(depth - 1, rng))
                .collect();
            return Tree::Function(FunctionNode::from_generated(function, children));
        }

        if self.param_count > 0 && rng.r#gen::<f64>() < self.config.param_bias {
            Tree::Param(rng.gen_range(0..self.param_count))
        } else {
            Tree::Const(rng.gen_range(0..=MAX_CONSTANT))
        }
    }
}
