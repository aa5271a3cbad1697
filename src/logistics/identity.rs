use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Result, SorterError};
use crate::logistics::host::ItemTypeRegistry;
use crate::types::ItemId;

/// The token a sorter compares items by. Two items with equal keys are
/// indistinguishable for routing.
///
/// Comparison, hashing and ordering ignore case, so `core:Stone` and `CORE:stone`
/// are the same key. Case is folded one character at a time (upper-case, then
/// lower-case), never by context, so `ΟΔΟΣ` matches `οδοσ` and `İ` matches `i`.
/// The spelling the key was created with is kept for display.
#[derive(Debug, Clone)]
pub struct IdentityKey {
    raw: String,
    folded: String,
}

impl IdentityKey {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.chars().map(fold_char).collect();
        Self { raw, folded }
    }

    /// The key as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The case-folded form used for comparisons.
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

/// Folds a single character: simple upper-case mapping, then lower-case.
fn fold_char(c: char) -> char {
    // multi-char upper mappings (ß -> SS) have no single-char form; keep the char
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    // only İ lower-cases to more than one char, and its leading char is the simple mapping
    upper.to_lowercase().next().unwrap_or(upper)
}

impl PartialEq for IdentityKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for IdentityKey {}

impl Hash for IdentityKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl PartialOrd for IdentityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IdentityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded.cmp(&other.folded)
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for IdentityKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Derives the comparison key for `item`.
///
/// Placeable blocks are keyed by their block family URI, everything else by the
/// name of the prefab it was instantiated from.
pub fn classify<R>(registry: &R, item: ItemId) -> Result<IdentityKey>
where
    R: ItemTypeRegistry + ?Sized,
{
    if let Some(structure) = registry.structure_type(item) {
        return Ok(IdentityKey::new(structure));
    }

    registry
        .generic_type(item)
        .map(IdentityKey::new)
        .ok_or_else(|| SorterError::unclassifiable(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[derive(Default)]
    struct Registry {
        structures: HashMap<ItemId, String>,
        prefabs: HashMap<ItemId, String>,
    }

    impl ItemTypeRegistry for Registry {
        fn structure_type(&self, item: ItemId) -> Option<String> {
            self.structures.get(&item).cloned()
        }

        fn generic_type(&self, item: ItemId) -> Option<String> {
            self.prefabs.get(&item).cloned()
        }
    }

    #[test]
    fn keys_compare_case_insensitively() {
        let a = IdentityKey::new("Stone");
        let b = IdentityKey::new("stone");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "Stone");

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.insert(b));
    }

    #[test]
    fn non_ascii_keys_fold_per_character() {
        assert_eq!(IdentityKey::new("mod:ΟΔΟΣ"), IdentityKey::new("mod:οδοσ"));
        assert_eq!(IdentityKey::new("mod:οδος"), IdentityKey::new("mod:ΟΔΟΣ"));
        assert_eq!(IdentityKey::new("mod:İ"), IdentityKey::new("mod:i"));
        assert_eq!(IdentityKey::new("mod:Ärz"), IdentityKey::new("MOD:äRZ"));
        assert_eq!(IdentityKey::new("mod:İ").folded(), "mod:i");
        assert_ne!(IdentityKey::new("mod:straße"), IdentityKey::new("mod:strasse"));
    }

    #[test]
    fn structure_type_wins_over_generic_type() {
        let mut registry = Registry::default();
        registry.structures.insert(ItemId(1), "core:stone".into());
        registry.prefabs.insert(ItemId(1), "core:stoneItem".into());

        let key = classify(&registry, ItemId(1)).unwrap();
        assert_eq!(key.as_str(), "core:stone");
    }

    #[test]
    fn generic_type_used_for_plain_items() {
        let mut registry = Registry::default();
        registry.prefabs.insert(ItemId(2), "core:pickaxe".into());

        let key = classify(&registry, ItemId(2)).unwrap();
        assert_eq!(key, IdentityKey::new("CORE:Pickaxe"));
    }

    #[test]
    fn classification_is_stable() {
        let mut registry = Registry::default();
        registry.prefabs.insert(ItemId(3), "core:torch".into());

        let first = classify(&registry, ItemId(3)).unwrap();
        let second = classify(&registry, ItemId(3)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn item_without_type_is_unclassifiable() {
        let registry = Registry::default();
        let err = classify(&registry, ItemId(9)).unwrap_err();
        assert!(matches!(
            err,
            SorterError::UnclassifiableItem { item: ItemId(9) }
        ));
    }
}
