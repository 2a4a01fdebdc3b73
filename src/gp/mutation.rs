//! Subtree mutation.
//!
//! Walking from the root, each node is replaced by a brand-new random tree
//! with probability `change_probability`; otherwise it is copied and the same
//! decision is made for each of its children. A replaced node has nothing in
//! common with what it replaced.

use crate::gp::generate::Generator;
use crate::gp::tree::Tree;
use rand::Rng;

/// Return a mutated copy of `tree`. The input is left untouched.
#[must_use]
pub fn mutate<R: Rng + ?Sized>(
    tree: &Tree,
    generator: &Generator<'_>,
    change_probability: f64,
    rng: &mut R,
) -> Tree {
    if rng.r#gen::<f64>() < change_probability {
        return generator.generate(rng);
    }

    match tree {
        Tree::Function(node) => {
            let children = node
                .children()
                .iter()
                .map(|child| mutate(child, generator, change_probability, rng))
                .collect();
            Tree::Function(node.with_children(children))
        }
        Tree::Param(_) | Tree::Const(_) => tree.clone(),
    }
}
