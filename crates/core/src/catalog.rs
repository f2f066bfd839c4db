//! Item catalog - the fixed set of quiz subjects.

use crate::types::Item;

/// The built-in physique catalog.
pub const PHYSIQUES: &[Item] = &[
    Item::new(
        "Steve Reeves",
        "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400",
        true,
        "Steve Reeves competed in the 1940s-50s, well before steroids were available. His classic physique represents peak natural development.",
    ),
    Item::new(
        "Eugen Sandow",
        "https://images.unsplash.com/photo-1583468982228-19f19164aee2?w=400",
        true,
        "The father of modern bodybuilding from the late 1800s. Achieved incredible development through natural training methods only.",
    ),
    Item::new(
        "Modern Mass Monster",
        "https://images.unsplash.com/photo-1605296867304-46d5465a13f1?w=400",
        false,
        "Extreme muscle mass and conditioning that's virtually impossible to achieve naturally. Clear signs of performance enhancement.",
    ),
    Item::new(
        "Classic Natural",
        "https://images.unsplash.com/photo-1534368270820-9de3d8053204?w=400",
        true,
        "Well-developed physique with proportions and muscle mass achievable through consistent natural training and nutrition.",
    ),
    Item::new(
        "Enhanced Competitor",
        "https://images.unsplash.com/photo-1581009146145-b5ef050c2e1e?w=400",
        false,
        "Extreme vascularity, muscle density, and size that exceeds natural genetic limits. Typical of enhanced athletes.",
    ),
    Item::new(
        "Natural Athlete",
        "https://images.unsplash.com/photo-1556516541-9e44c271ea19?w=400",
        true,
        "Athletic physique with natural proportions and muscle development consistent with natural training methods.",
    ),
    Item::new(
        "Modern Enhanced",
        "https://images.unsplash.com/photo-1574680096145-d05b474e2155?w=400",
        false,
        "Exceptional muscle mass, low body fat, and vascular development that strongly suggests performance enhancement.",
    ),
    Item::new(
        "Classic Natural Build",
        "https://images.unsplash.com/photo-1550345332-09e3ac987658?w=400",
        true,
        "Well-proportioned natural physique with muscle development achievable through dedicated natural training.",
    ),
];

/// Read-only view over a static slice of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    items: &'static [Item],
}

impl Catalog {
    pub const fn new(items: &'static [Item]) -> Self {
        Self { items }
    }

    /// The built-in catalog.
    pub const fn physiques() -> Self {
        Self::new(PHYSIQUES)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Item> {
        self.items.get(index)
    }

    pub fn items(&self) -> &'static [Item] {
        self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Item> {
        self.items.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::physiques()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_non_empty_and_mixed() {
        let catalog = Catalog::physiques();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.iter().any(|item| item.is_natural));
        assert!(catalog.iter().any(|item| !item.is_natural));
    }

    #[test]
    fn builtin_names_are_unique() {
        let catalog = Catalog::physiques();
        for (i, a) in catalog.iter().enumerate() {
            for b in catalog.items()[i + 1..].iter() {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn get_out_of_range_is_none() {
        let catalog = Catalog::physiques();
        assert!(catalog.get(catalog.len()).is_none());
        assert!(Catalog::new(&[]).is_empty());
    }
}
