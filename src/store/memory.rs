//! In-memory proverb store.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::observability::metrics;
use crate::store::{Proverb, ProverbId, StoreError, StoreResult};

/// Id handed out first when the seed is empty.
pub const FIRST_ID: ProverbId = 1;

/// State guarded by the store lock.
#[derive(Debug)]
struct StoreState {
    proverbs: Vec<Proverb>,
    next_id: ProverbId,
    sealed: bool,
}

impl StoreState {
    fn position(&self, id: ProverbId) -> Option<usize> {
        self.proverbs.iter().position(|p| p.id == id)
    }

    fn ensure_open(&self) -> StoreResult<()> {
        if self.sealed {
            Err(StoreError::ShuttingDown)
        } else {
            Ok(())
        }
    }
}

/// The authoritative collection of proverbs plus id allocation state.
///
/// Every operation takes the same exclusive lock, so concurrent callers
/// always observe a consistent snapshot. Share it behind an `Arc`.
#[derive(Debug)]
pub struct ProverbStore {
    state: Mutex<StoreState>,
}

impl ProverbStore {
    /// Build a store from seed entries, keeping their ids and order.
    ///
    /// The id counter starts one past the largest seeded id, or at
    /// [`FIRST_ID`] when the seed is empty. A seed whose largest id leaves
    /// no successor is rejected.
    pub fn new(seed: Vec<Proverb>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(seed.len());
        for p in &seed {
            if !seen.insert(p.id) {
                return Err(StoreError::DuplicateId(p.id));
            }
        }

        let next_id = match seed.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted)?,
            None => FIRST_ID,
        };

        metrics::record_store_size(seed.len());

        Ok(Self {
            state: Mutex::new(StoreState {
                proverbs: seed,
                next_id,
                sealed: false,
            }),
        })
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self {
            state: Mutex::new(StoreState {
                proverbs: Vec::new(),
                next_id: FIRST_ID,
                sealed: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // Each mutation is a single step, so poisoned state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a new proverb under the next free id.
    ///
    /// Fails with [`StoreError::IdsExhausted`] once the counter can no
    /// longer advance; the store is left unchanged.
    pub fn create(&self, text: impl Into<String>) -> StoreResult<Proverb> {
        let mut state = self.lock();
        state.ensure_open()?;

        let id = state.next_id;
        state.next_id = id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        let proverb = Proverb::new(id, text);
        state.proverbs.push(proverb.clone());
        metrics::record_store_size(state.proverbs.len());

        tracing::debug!(id = proverb.id, "Proverb created");
        Ok(proverb)
    }

    /// Snapshot of all proverbs in insertion order.
    pub fn list(&self) -> Vec<Proverb> {
        self.lock().proverbs.clone()
    }

    /// Look up a single proverb by id.
    pub fn get(&self, id: ProverbId) -> StoreResult<Proverb> {
        let state = self.lock();
        state
            .proverbs
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Replace the text of an existing proverb. The id never changes.
    pub fn update(&self, id: ProverbId, text: impl Into<String>) -> StoreResult<Proverb> {
        let mut state = self.lock();
        state.ensure_open()?;

        let idx = state.position(id).ok_or(StoreError::NotFound(id))?;
        let entry = &mut state.proverbs[idx];
        entry.text = text.into();

        tracing::debug!(id, "Proverb updated");
        Ok(entry.clone())
    }

    /// Remove a proverb. Its id is not handed out again.
    pub fn delete(&self, id: ProverbId) -> StoreResult<()> {
        let mut state = self.lock();
        state.ensure_open()?;

        let idx = state.position(id).ok_or(StoreError::NotFound(id))?;
        state.proverbs.remove(idx);
        metrics::record_store_size(state.proverbs.len());

        tracing::debug!(id, "Proverb deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().proverbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().proverbs.is_empty()
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> ProverbId {
        self.lock().next_id
    }

    /// Take the final snapshot for shutdown and refuse further writes.
    ///
    /// Marking the store sealed and copying its contents happen inside one
    /// critical section, so no write can land after the snapshot.
    pub fn seal(&self) -> Vec<Proverb> {
        let mut state = self.lock();
        state.sealed = true;
        state.proverbs.clone()
    }

    pub fn is_sealed(&self) -> bool {
        self.lock().sealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn seeded() -> ProverbStore {
        ProverbStore::new(vec![Proverb::new(1, "A"), Proverb::new(2, "B")]).unwrap()
    }

    #[test]
    fn test_counter_starts_past_max_seed_id() {
        let store = ProverbStore::new(vec![Proverb::new(10, "x"), Proverb::new(4, "y")]).unwrap();
        assert_eq!(store.next_id(), 11);
        assert_eq!(ProverbStore::empty().next_id(), FIRST_ID);
    }

    #[test]
    fn test_duplicate_seed_ids_rejected() {
        let err = ProverbStore::new(vec![Proverb::new(1, "a"), Proverb::new(1, "b")]).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(1));
    }

    #[test]
    fn test_seed_at_max_id_rejected() {
        let err = ProverbStore::new(vec![Proverb::new(u64::MAX, "max")]).unwrap_err();
        assert_eq!(err, StoreError::IdsExhausted);
    }

    #[test]
    fn test_create_fails_when_ids_exhausted() {
        let store = ProverbStore::new(vec![Proverb::new(u64::MAX - 1, "last")]).unwrap();
        assert_eq!(store.next_id(), u64::MAX);

        let result = std::panic::catch_unwind(|| store.create("next"));
        assert_eq!(result.unwrap(), Err(StoreError::IdsExhausted));
        assert_eq!(store.create("again"), Err(StoreError::IdsExhausted));

        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id(), u64::MAX);
        assert_eq!(store.list(), vec![Proverb::new(u64::MAX - 1, "last")]);
    }

    #[test]
    fn test_create_then_get() {
        let store = ProverbStore::empty();
        let p = store.create("Don't panic.").unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(store.get(p.id).unwrap().text, "Don't panic.");
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let store = seeded();
        store.delete(2).unwrap();
        assert_eq!(store.get(2), Err(StoreError::NotFound(2)));

        let c = store.create("C").unwrap();
        assert_eq!(c.id, 3);

        let mut last = c.id;
        for i in 0..20 {
            let p = store.create(format!("p{i}")).unwrap();
            assert!(p.id > last);
            last = p.id;
            if i % 3 == 0 {
                store.delete(p.id).unwrap();
            }
        }
        assert!(store.list().iter().all(|p| p.id != 2));
    }

    #[test]
    fn test_update_keeps_id() {
        let store = seeded();
        let updated = store.update(1, "A2").unwrap();
        assert_eq!(updated, Proverb::new(1, "A2"));
        assert_eq!(store.get(1).unwrap().text, "A2");
        assert_eq!(store.update(99, "nope"), Err(StoreError::NotFound(99)));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = seeded();
        store.create("C").unwrap();
        store.delete(1).unwrap();
        store.update(2, "B2").unwrap();
        let ids: Vec<_> = store.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_missing() {
        let store = seeded();
        assert_eq!(store.delete(5), Err(StoreError::NotFound(5)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_seal_blocks_writes_but_not_reads() {
        let store = seeded();
        let snapshot = store.seal();
        assert_eq!(snapshot.len(), 2);
        assert!(store.is_sealed());

        assert_eq!(store.create("late"), Err(StoreError::ShuttingDown));
        assert_eq!(store.update(1, "late"), Err(StoreError::ShuttingDown));
        assert_eq!(store.delete(1), Err(StoreError::ShuttingDown));
        assert_eq!(store.get(1).unwrap().text, "A");
        assert_eq!(store.list(), snapshot);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(seeded());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..50)
                        .map(|i| store.create(format!("{t}-{i}")).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<_> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 400);
        assert_eq!(store.len(), 402);
        assert_eq!(store.next_id(), 403);
    }
}
