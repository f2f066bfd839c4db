//! Deck module - one randomized pass over the catalog
//!
//! A deck stores catalog positions rather than items, so it can never hold an
//! item that is not in the catalog. Every position appears exactly once.

use crate::catalog::Catalog;
use crate::rng::RandomSource;

/// Ordered permutation of catalog positions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    order: Vec<usize>,
}

impl Deck {
    /// Deck in catalog order (no shuffling).
    pub fn in_order(catalog: &Catalog) -> Self {
        Self {
            order: (0..catalog.len()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Catalog position dealt at `position` in this deck.
    pub fn get(&self, position: usize) -> Option<usize> {
        self.order.get(position).copied()
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

/// Produce a fresh random permutation of the catalog.
///
/// The catalog itself is untouched. A one-item catalog always yields the same
/// single-card deck.
pub fn shuffle<R: RandomSource>(catalog: &Catalog, rng: &mut R) -> Deck {
    let mut deck = Deck::in_order(catalog);
    rng.shuffle(&mut deck.order);
    deck
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::rng::SimpleRng;
    use crate::types::Item;

    const THREE: &[Item] = &[
        Item::new("a", "a.jpg", true, "a"),
        Item::new("b", "b.jpg", false, "b"),
        Item::new("c", "c.jpg", true, "c"),
    ];

    #[test]
    fn shuffle_is_a_permutation() {
        let catalog = Catalog::physiques();
        let mut rng = SimpleRng::new(12345);
        for _ in 0..50 {
            let deck = shuffle(&catalog, &mut rng);
            let mut seen = deck.order().to_vec();
            seen.sort_unstable();
            assert_eq!(seen, (0..catalog.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn same_seed_same_deck() {
        let catalog = Catalog::new(THREE);
        let a = shuffle(&catalog, &mut SimpleRng::new(42));
        let b = shuffle(&catalog, &mut SimpleRng::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn single_item_deck() {
        const ONE: &[Item] = &[Item::new("solo", "solo.jpg", true, "only one")];
        let deck = shuffle(&Catalog::new(ONE), &mut SimpleRng::new(3));
        assert_eq!(deck.order(), &[0]);
    }

    #[test]
    fn shuffling_eventually_changes_order() {
        let catalog = Catalog::physiques();
        let identity = Deck::in_order(&catalog);
        let mut rng = SimpleRng::new(1);
        let moved = (0..20).any(|_| shuffle(&catalog, &mut rng) != identity);
        assert!(moved);
    }

    #[test]
    fn builtin_catalog_decks_are_diverse() {
        // 8 items have 40320 orderings.
        let catalog = Catalog::physiques();
        let mut rng = SimpleRng::new(12345);
        let distinct: HashSet<Vec<usize>> = (0..20_000)
            .map(|_| shuffle(&catalog, &mut rng).order().to_vec())
            .collect();
        assert!(distinct.len() > 10_000, "only {} distinct decks", distinct.len());
    }

    #[test]
    fn get_past_end_is_none() {
        let deck = Deck::in_order(&Catalog::new(THREE));
        assert_eq!(deck.get(2), Some(2));
        assert_eq!(deck.get(3), None);
    }
}
