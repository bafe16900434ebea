//! In-memory entity store
//!
//! `EntityStore` holds one kind of entity as an ordered sequence. Order is
//! insertion order; deleting an entity shifts later entries left without
//! renumbering them.
//!
//! Ids come from a monotonic counter rather than the current length, so an
//! id is never handed out twice even after deletions.

use crate::error::{CoreError, Result};

/// An entity kind that can live in an [`EntityStore`]
pub trait Entity: Clone {
    /// Fields supplied by a caller on create and update (everything but `id`)
    type Fields;

    /// Display name, used in messages such as "User not found"
    const KIND: &'static str;

    fn id(&self) -> u64;

    /// Build a new entity with a store-assigned id
    fn from_fields(id: u64, fields: Self::Fields) -> Self;

    /// Overwrite all mutable fields in place; `id` stays untouched
    fn apply(&mut self, fields: Self::Fields);
}

/// Ordered, process-lifetime collection for one entity kind
#[derive(Debug, Clone)]
pub struct EntityStore<E: Entity> {
    entries: Vec<E>,
    next_id: u64,
}

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityStore<E> {
    /// Creates an empty store; the first id handed out is 1
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store holding `seed` in the given order.
    ///
    /// The id counter starts after the largest seeded id. Seed entries whose
    /// id is already taken are skipped.
    pub fn with_seed(seed: impl IntoIterator<Item = E>) -> Self {
        let mut store = Self::new();
        for entity in seed {
            if store.contains(entity.id()) {
                log::warn!("Skipping duplicate seed {} with id {}", E::KIND, entity.id());
                continue;
            }
            store.next_id = store.next_id.max(entity.id().saturating_add(1));
            store.entries.push(entity);
        }
        store
    }

    /// All entities in current order
    pub fn list(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.position(id).is_some()
    }

    /// Lấy entity theo id
    pub fn get(&self, id: u64) -> Result<&E> {
        self.entries
            .iter()
            .find(|e| e.id() == id)
            .ok_or(CoreError::NotFound(E::KIND))
    }

    /// Assigns the next id, appends the entity and returns a copy of it
    pub fn create(&mut self, fields: E::Fields) -> E {
        let id = self.next_id;
        self.next_id += 1;

        let entity = E::from_fields(id, fields);
        self.entries.push(entity.clone());
        log::debug!("Created {} {}", E::KIND, id);
        entity
    }

    /// Overwrites the entity's fields in place and returns the updated value
    pub fn update(&mut self, id: u64, fields: E::Fields) -> Result<E> {
        let entity = self
            .entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(CoreError::NotFound(E::KIND))?;
        entity.apply(fields);
        Ok(entity.clone())
    }

    /// Removes the entity, keeping the relative order of the rest
    pub fn delete(&mut self, id: u64) -> Result<E> {
        let index = self.position(id).ok_or(CoreError::NotFound(E::KIND))?;
        let removed = self.entries.remove(index);
        log::debug!("Deleted {} {}", E::KIND, id);
        Ok(removed)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::tests_support::Note;
    use super::*;

    fn note(id: u64, text: &str) -> Note {
        Note::from_fields(id, text.to_string())
    }

    fn ids(store: &EntityStore<Note>) -> Vec<u64> {
        store.list().iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_store_crud() {
        let mut store = EntityStore::<Note>::new();

        // Create
        let first = store.create("alpha".to_string());
        assert_eq!(first.id, 1);

        // Read
        assert_eq!(store.get(1).unwrap().text, "alpha");

        // Update
        let updated = store.update(1, "beta".to_string()).unwrap();
        assert_eq!(updated, note(1, "beta"));
        assert_eq!(store.get(1).unwrap(), &updated);

        // Delete
        store.delete(1).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get(1), Err(CoreError::NotFound("Note")));
    }

    #[test]
    fn test_seed_sets_counter_after_max_id() {
        let mut store = EntityStore::with_seed(vec![note(1, "a"), note(2, "b")]);
        assert_eq!(store.create("c".to_string()).id, 3);

        let mut store = EntityStore::with_seed(vec![note(10, "a")]);
        assert_eq!(store.create("b".to_string()).id, 11);
    }

    #[test]
    fn test_seed_skips_duplicate_ids() {
        let store = EntityStore::with_seed(vec![note(1, "a"), note(1, "b")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().text, "a");
    }

    #[test]
    fn test_delete_keeps_order() {
        let mut store = EntityStore::with_seed(vec![note(1, "a"), note(2, "b"), note(3, "c")]);
        store.delete(2).unwrap();
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        // [1, 2] -> delete 1 -> a length-based id would collide with 2
        let mut store = EntityStore::with_seed(vec![note(1, "a"), note(2, "b")]);
        store.delete(1).unwrap();
        let created = store.create("c".to_string());
        assert_eq!(created.id, 3);
        assert_eq!(ids(&store), vec![2, 3]);
    }

    #[test]
    fn test_missing_id_errors() {
        let mut store = EntityStore::<Note>::new();
        assert!(store.update(7, "x".to_string()).unwrap_err().is_not_found());
        assert!(store.delete(7).unwrap_err().is_not_found());
    }
}

#[cfg(test)]
mod proptests {
    use super::tests_support::Note;
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone)]
    enum Op {
        Create(String),
        Delete(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(Op::Create),
            any::<usize>().prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn created_ids_are_distinct(count in 1usize..100) {
            let mut store = EntityStore::<Note>::new();
            let ids: HashSet<u64> = (0..count).map(|i| store.create(i.to_string()).id()).collect();
            prop_assert_eq!(ids.len(), count);
        }

        #[test]
        fn ids_stay_unique_across_deletes(ops in prop::collection::vec(op(), 1..60)) {
            let mut store = EntityStore::<Note>::new();
            let mut issued = HashSet::new();

            for op in ops {
                match op {
                    Op::Create(value) => {
                        let id = store.create(value).id();
                        prop_assert!(issued.insert(id), "id {} issued twice", id);
                    }
                    Op::Delete(pick) => {
                        if !store.is_empty() {
                            let id = store.list()[pick % store.len()].id();
                            store.delete(id).unwrap();
                        }
                    }
                }
            }
        }

        #[test]
        fn update_is_idempotent(seed in 1usize..20, value in "[a-z]{0,8}") {
            let mut store = EntityStore::<Note>::new();
            for i in 0..seed {
                store.create(i.to_string());
            }
            let target = store.list()[seed / 2].id();

            let once = store.update(target, value.clone()).unwrap();
            let snapshot: Vec<Note> = store.list().to_vec();
            let twice = store.update(target, value).unwrap();

            prop_assert_eq!(once, twice);
            prop_assert_eq!(snapshot, store.list().to_vec());
        }

        #[test]
        fn delete_removes_exactly_one(seed in 1usize..50, pick in any::<usize>()) {
            let mut store = EntityStore::<Note>::new();
            for i in 0..seed {
                store.create(i.to_string());
            }
            let target = store.list()[pick % seed].id();

            store.delete(target).unwrap();
            prop_assert_eq!(store.len(), seed - 1);
            prop_assert!(store.get(target).is_err());
        }
    }
}
