//! Subtree crossover.
//!
//! The two parents are walked in parallel. Below the root, each position is
//! swapped wholesale for the second parent's subtree with probability
//! `swap_probability`; otherwise the first parent's node is kept and, if both
//! nodes are functions, each of its children is paired with a randomly chosen
//! child of the second parent. The root always comes from the first parent.

use crate::gp::tree::Tree;
use rand::Rng;

/// Cross `first` with `second`, returning a new tree rooted at `first`'s root.
#[must_use]
pub fn crossover<R: Rng + ?Sized>(first: &Tree, second: &Tree, swap_probability: f64, rng: &mut R) -> Tree {
    cross(first, second, swap_probability, true, rng)
}

fn cross<R: Rng + ?Sized>(first: &Tree, second: &Tree, swap_probability: f64, top: bool, rng: &mut R) -> Tree {
    if rng.r#gen::<f64>() < swap_probability && !top {
        return second.clone();
    }

    match (first, second) {
        (Tree::Function(node), Tree::Function(donor)) if !donor.children().is_empty() => {
            let donors = donor.children();
            let children = node
                .children()
                .iter()
                .map(|child| {
                    let partner = &donors[rng.gen_range(0..donors.len())];
                    cross(child, partner, swap_probability, false, rng)
                })
                .collect();
            Tree::Function(node.with_children(children))
        }
        _ => first.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::generate::{GenerateConfig, Generator};
    use crate::gp::registry::Registry;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn pair(registry: &Registry, rng: &mut SmallRng) -> (Tree, Tree) {
        let generator = Generator::new(registry, 2, GenerateConfig::default());
        (generator.generate(rng), generator.generate(rng))
    }

    #[test]
    fn test_root_comes_from_first() {
        let registry = Registry::arithmetic();
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..200 {
            let (a, b) = pair(&registry, &mut rng);
            let child = crossover(&a, &b, 1.0, &mut rng);
            assert_eq!(child.label(), a.label());
            assert!(child.validate().is_ok());
        }
    }

    #[test]
    fn test_zero_swap_copies_first() {
        let registry = Registry::arithmetic();
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..50 {
            let (a, b) = pair(&registry, &mut rng);
            assert_eq!(crossover(&a, &b, 0.0, &mut rng), a);
        }
    }

    #[test]
    fn test_certain_swap_grafts_second_children() {
        let registry = Registry::arithmetic();
        let add = registry.get("add").unwrap();
        let sub = registry.get("subtract").unwrap();

        let a = Tree::call(add, vec![Tree::Param(0), Tree::Param(1)]).unwrap();
        let b = Tree::call(sub, vec![Tree::Const(7), Tree::Const(7)]).unwrap();

        let mut rng = SmallRng::seed_from_u64(3);
        let child = crossover(&a, &b, 1.0, &mut rng);
        assert_eq!(child.to_string(), "add(7, 7)");
    }

    #[test]
    fn test_leaf_donor_keeps_first_subtree() {
        let registry = Registry::arithmetic();
        let add = registry.get("add").unwrap();
        let a = Tree::call(add, vec![Tree::Param(0), Tree::Const(2)]).unwrap();

        let mut rng = SmallRng::seed_from_u64(5);
        let child = crossover(&a, &Tree::Const(9), 1.0, &mut rng);
        assert_eq!(child, a);
    }
}
