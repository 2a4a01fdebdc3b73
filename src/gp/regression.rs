//! Symbolic regression against a numeric dataset.

use crate::error::TreeError;
use crate::gp::fitness::{Fitness, Scorer};
use crate::gp::registry::Value;
use crate::gp::tree::Tree;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One training example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Input vector handed to the tree.
    pub inputs: Vec<Value>,
    /// Expected output.
    pub output: Value,
}

/// A set of training examples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    /// Rows in file order.
    pub rows: Vec<Row>,
}

/// Target behind [`Dataset::hidden`]: `x^2 + 2y + 3x + 5`.
///
/// Sampled for `x, y` in `0..=40`; outside that range the arithmetic wraps
/// like the built-in functions do.
#[must_use]
pub fn hidden_function(x: Value, y: Value) -> Value {
    x.wrapping_mul(x)
        .wrapping_add(y.wrapping_mul(2))
        .wrapping_add(x.wrapping_mul(3))
        .wrapping_add(5)
}

impl Dataset {
    /// Sample `rows` points of [`hidden_function`] with `x, y` in `0..=40`.
    pub fn hidden<R: Rng + ?Sized>(rows: usize, rng: &mut R) -> Self {
        let rows = (0..rows)
            .map(|_| {
                let x = rng.gen_range(0..=40);
                let y = rng.gen_range(0..=40);
                Row {
                    inputs: vec![x, y],
                    output: hidden_function(x, y),
                }
            })
            .collect();
        Self { rows }
    }

    /// Narrowest input vector across all rows.
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.rows.iter().map(|row| row.inputs.len()).min().unwrap_or(0)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Row> for Dataset {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Sums the absolute error of a tree over every row.
#[derive(Debug, Clone)]
pub struct RegressionScorer {
    dataset: Dataset,
}

impl RegressionScorer {
    /// Create a scorer over `dataset`.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// The dataset being fitted.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl Scorer for RegressionScorer {
    type Error = TreeError;

    fn score(&self, tree: &Tree) -> Result<Fitness, TreeError> {
        self.dataset.rows.iter().try_fold(0, |total: Fitness, row| {
            let value = tree.evaluate(&row.inputs)?;
            Ok(total.saturating_add(value.abs_diff(row.output)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::registry::Registry;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sum_dataset() -> Dataset {
        [([2, 3], 5), ([4, 1], 5)]
            .into_iter()
            .map(|(inputs, output)| Row {
                inputs: inputs.to_vec(),
                output,
            })
            .collect()
    }

    #[test]
    fn test_exact_fit_scores_zero() {
        let registry = Registry::arithmetic();
        let tree = Tree::call(registry.get("add").unwrap(), vec![Tree::Param(0), Tree::Param(1)]).unwrap();

        let scorer = RegressionScorer::new(sum_dataset());
        assert_eq!(scorer.score(&tree).unwrap(), 0);
    }

    #[test]
    fn test_absolute_error_sum() {
        let scorer = RegressionScorer::new(sum_dataset());
        // |2 - 5| + |4 - 5|
        assert_eq!(scorer.score(&Tree::Param(0)).unwrap(), 4);
        assert_eq!(scorer.score(&Tree::Const(5)).unwrap(), 0);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let scorer = RegressionScorer::new(sum_dataset());
        assert_eq!(
            scorer.score(&Tree::Param(2)),
            Err(TreeError::ParamOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_hidden_dataset() {
        let mut rng = SmallRng::seed_from_u64(42);
        let dataset = Dataset::hidden(200, &mut rng);

        assert_eq!(dataset.len(), 200);
        assert_eq!(dataset.param_count(), 2);
        for row in &dataset.rows {
            assert_eq!(row.output, hidden_function(row.inputs[0], row.inputs[1]));
        }
    }

    #[test]
    fn test_hidden_function_wraps() {
        assert_eq!(hidden_function(1, 1), 11);
        assert_eq!(hidden_function(40, 40), 1805);
        // MAX^2 wraps to 1, 3 * MAX wraps to MAX - 2.
        assert_eq!(hidden_function(Value::MAX, 0), Value::MAX.wrapping_add(4));
        assert_eq!(hidden_function(0, Value::MAX), 3);
    }

    #[test]
    fn test_dataset_json_shape() {
        let dataset: Dataset = serde_json::from_str(r#"[{"inputs": [2, 3], "output": 5}]"#).unwrap();
        assert_eq!(dataset.rows[0].inputs, [2, 3]);
        assert_eq!(dataset.rows[0].output, 5);
    }
}
