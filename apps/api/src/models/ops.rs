//! Section-list editing primitives.
//!
//! All edits are whole-sequence replacement: delete filters, append clones
//! and pushes, update maps. The owning `Resume` is replaced wholesale by
//! callers, so "last write wins" holds without any aliasing to reason about.

use crate::models::resume::SectionItem;

/// Returns a new sequence with `item` appended. Insertion order is the
/// canonical order until an explicit reorder exists.
pub fn append<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Returns a new sequence without the item addressed by `id`.
/// Unknown ids leave the sequence unchanged (still a fresh allocation).
pub fn remove<T: SectionItem + Clone>(items: &[T], id: &str) -> Vec<T> {
    items.iter().filter(|i| i.id() != id).cloned().collect()
}

/// Returns a new sequence with the item sharing `updated`'s id replaced
/// in place (position preserved). An unmatched id is a no-op.
pub fn update<T: SectionItem + Clone>(items: &[T], updated: T) -> Vec<T> {
    items
        .iter()
        .map(|i| {
            if i.id() == updated.id() {
                updated.clone()
            } else {
                i.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Skill;

    fn skill(id: &str, name: &str) -> Skill {
        Skill {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let items = vec![skill("a", "Rust"), skill("b", "Go")];
        let next = append(&items, skill("c", "TS"));
        assert_eq!(next.len(), 3);
        assert_eq!(next[2].name, "TS");
        // original untouched
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let items = vec![skill("a", "Rust"), skill("b", "Go")];
        let next = remove(&items, "a");
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, "b");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let items = vec![skill("a", "Rust")];
        let next = remove(&items, "zzz");
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let items = vec![skill("a", "Rust"), skill("b", "Go")];
        let next = update(&items, skill("b", "Golang"));
        assert_eq!(next[1].name, "Golang");
        assert_eq!(next[1].id, "b", "id is stable across edits");
        assert_eq!(next[0].name, "Rust");
    }
}
