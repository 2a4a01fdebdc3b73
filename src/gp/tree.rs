//! Expression tree representation.
//!
//! A tree is one of three node kinds: a function applied to exactly `arity`
//! children, a parameter selecting one element of the input vector, or a
//! constant. Every tree owns its children outright; genetic operators copy
//! rather than share subtrees, so population members never alias.

use crate::error::{TreeError, TreeResult};
use crate::gp::registry::{Function, Value};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// An executable expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tree {
    /// Function applied to its children.
    Function(FunctionNode),
    /// Input parameter `p<idx>`.
    Param(usize),
    /// Literal constant.
    Const(Value),
}

/// A function node. Its child count always equals the function's arity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionNode {
    #[serde(rename = "name", serialize_with = "serialize_name")]
    function: Arc<Function>,
    children: Vec<Tree>,
}

fn serialize_name<S: Serializer>(function: &Arc<Function>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(function.name())
}

impl FunctionNode {
    /// The function applied at this node.
    #[must_use]
    pub fn function(&self) -> &Arc<Function> {
        &self.function
    }

    /// Children in argument order.
    #[must_use]
    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    /// Node for a freshly generated child list of length `arity`.
    pub(crate) fn from_generated(function: &Arc<Function>, children: Vec<Tree>) -> Self {
        debug_assert_eq!(children.len(), function.arity());
        Self {
            function: Arc::clone(function),
            children,
        }
    }

    /// Same function over a new set of children.
    ///
    /// Callers derive `children` from this node's own children one-to-one.
    pub(crate) fn with_children(&self, children: Vec<Tree>) -> Self {
        debug_assert_eq!(children.len(), self.function.arity());
        Self {
            function: Arc::clone(&self.function),
            children,
        }
    }
}

impl Tree {
    /// Build a function node, checking the child count against the arity.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ArityMismatch`] if `children` has the wrong length.
    pub fn call(function: &Arc<Function>, children: Vec<Tree>) -> TreeResult<Self> {
        if children.len() != function.arity() {
            return Err(TreeError::ArityMismatch {
                function: function.name().to_string(),
                expected: function.arity(),
                found: children.len(),
            });
        }
        Ok(Self::Function(FunctionNode {
            function: Arc::clone(function),
            children,
        }))
    }

    /// Evaluate the tree against an input vector.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ParamOutOfRange`] if a parameter node indexes
    /// past the end of `input`.
    pub fn evaluate(&self, input: &[Value]) -> TreeResult<Value> {
        match self {
            Tree::Function(node) => {
                let args = node
                    .children
                    .iter()
                    .map(|child| child.evaluate(input))
                    .collect::<TreeResult<Vec<_>>>()?;
                Ok(node.function.apply(&args))
            }
            Tree::Param(index) => input.get(*index).copied().ok_or(TreeError::ParamOutOfRange {
                index: *index,
                len: input.len(),
            }),
            Tree::Const(value) => Ok(*value),
        }
    }

    /// Whether this is a function node.
    #[must_use]
    pub const fn has_children(&self) -> bool {
        matches!(self, Tree::Function(_))
    }

    /// Children of a function node; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Function(node) => &node.children,
            Tree::Param(_) | Tree::Const(_) => &[],
        }
    }

    /// Label of this node alone: function name, `p<idx>` or the constant.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Tree::Function(node) => node.function.name().to_string(),
            Tree::Param(index) => format!("p{index}"),
            Tree::Const(value) => value.to_string(),
        }
    }

    /// Total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Tree::node_count).sum::<usize>()
    }

    /// Depth of the deepest leaf; a single leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Re-check the arity invariant over the whole tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`TreeError::ArityMismatch`] found in preorder.
    pub fn validate(&self) -> TreeResult<()> {
        if let Tree::Function(node) = self
            && node.children.len() != node.function.arity()
        {
            return Err(TreeError::ArityMismatch {
                function: node.function.name().to_string(),
                expected: node.function.arity(),
                found: node.children.len(),
            });
        }
        self.children().iter().try_for_each(Tree::validate)
    }

    /// Indented preorder dump, one node per line, one space per depth level.
    ///
    /// Nothing is rendered until the returned value is formatted.
    #[must_use]
    pub fn display(&self) -> Outline<'_> {
        Outline { tree: self }
    }
}

/// Compact single-line form, e.g. `add(p0, 3)`.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Function(node) => {
                write!(f, "{}(", node.function.name())?;
                for (i, child) in node.children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
            Tree::Param(index) => write!(f, "p{index}"),
            Tree::Const(value) => write!(f, "{value}"),
        }
    }
}

/// Lazily formatted outline of a tree. See [`Tree::display`].
#[derive(Debug, Clone, Copy)]
pub struct Outline<'a> {
    tree: &'a Tree,
}

impl Outline<'_> {
    fn write_node(f: &mut fmt::Formatter<'_>, tree: &Tree, indent: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", tree.label())?;
        for child in tree.children() {
            Self::write_node(f, child, indent + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_node(f, self.tree, 0)
    }
}
