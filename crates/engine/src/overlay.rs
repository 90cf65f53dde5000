//! In-memory ownership of the overlay list: identifier allocation and the
//! three mutations that keep the list consistent with the id scheme.

use roster_core::{CharacterDraft, CharacterId, OverlayEntry, Provenance};

/// The overlay list plus its mutation rules. Persistence is the caller's
/// concern; every method here runs to completion synchronously, so id
/// allocation and insertion always observe the same snapshot.
#[derive(Debug, Default)]
pub struct OverlayList {
    entries: Vec<OverlayEntry>,
}

impl OverlayList {
    pub fn new(entries: Vec<OverlayEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[OverlayEntry] {
        &self.entries
    }

    /// Next id in the locally-owned negative namespace: -1 when no pure
    /// creation exists, otherwise one below the current minimum. Entries
    /// that override a remote character are excluded from the scan.
    pub fn next_local_id(&self) -> CharacterId {
        let min = self
            .entries
            .iter()
            .filter(|e| matches!(e.provenance(), Provenance::LocalOnly))
            .map(|e| e.id.as_i64())
            .min();
        CharacterId::new(match min {
            Some(min) => min - 1,
            None => -1,
        })
    }

    /// Insert a brand-new local creation at the front of the list.
    /// Never fails; missing fields take defaults.
    pub fn create(&mut self, draft: CharacterDraft) -> CharacterId {
        let id = self.next_local_id();
        self.entries.insert(0, OverlayEntry::new_local(id, draft));
        id
    }

    /// Apply an update, resolving `target` in order:
    /// 1. an entry whose own id matches (local creation or prior override),
    /// 2. an entry overriding remote id `target` (re-edit of a remote
    ///    character),
    /// 3. otherwise `target` is taken to be a remote id with no edit yet:
    ///    a fresh override entry is inserted at the front. No existence
    ///    check against the remote cache — updating an unknown id creates
    ///    a dangling edit.
    pub fn update(&mut self, target: CharacterId, draft: CharacterDraft) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == target) {
            entry.apply(draft);
            return;
        }
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.remote_ref == Some(target))
        {
            entry.apply(draft);
            return;
        }
        let id = self.next_local_id();
        self.entries
            .insert(0, OverlayEntry::new_override(id, target, draft));
    }

    /// Remove every entry whose id or remote_ref matches `target`. Returns
    /// the number of entries removed. Deleting an override only discards
    /// the local edit; the remote character itself is never suppressed.
    pub fn delete(&mut self, target: CharacterId) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|e| e.id != target && e.remote_ref != Some(target));
        before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_local_id_is_minus_one() {
        let list = OverlayList::default();
        assert_eq!(list.next_local_id(), CharacterId::new(-1));
    }

    #[test]
    fn local_ids_decrease_strictly() {
        let mut list = OverlayList::default();
        for expected in 1..=4 {
            let id = list.create(CharacterDraft::named("Squanchy"));
            assert_eq!(id, CharacterId::new(-expected));
        }
    }

    #[test]
    fn override_entries_do_not_feed_the_allocator() {
        let mut list = OverlayList::default();
        // Edit of remote id 7 gets a negative id but stays out of the scan.
        list.update(CharacterId::new(7), CharacterDraft::named("Edited"));
        assert_eq!(list.next_local_id(), CharacterId::new(-1));
    }

    #[test]
    fn update_by_own_id_merges_in_place() {
        let mut list = OverlayList::default();
        let id = list.create(CharacterDraft::named("Morty"));
        list.update(
            id,
            CharacterDraft {
                description: Some("now with a description".into()),
                ..CharacterDraft::default()
            },
        );
        assert_eq!(list.entries().len(), 1);
        let entry = &list.entries()[0];
        // Absent draft fields keep prior values.
        assert_eq!(entry.name, "Morty");
        assert_eq!(entry.description, "now with a description");
    }

    #[test]
    fn repeated_update_of_remote_id_mutates_one_entry() {
        let mut list = OverlayList::default();
        let remote = CharacterId::new(1);
        list.update(remote, CharacterDraft::named("Rick Sanchez"));
        list.update(remote, CharacterDraft::named("Pickle Rick"));
        assert_eq!(list.entries().len(), 1);
        assert_eq!(list.entries()[0].remote_ref, Some(remote));
        assert_eq!(list.entries()[0].name, "Pickle Rick");
    }

    #[test]
    fn delete_matches_id_and_remote_ref() {
        let mut list = OverlayList::default();
        let local = list.create(CharacterDraft::named("Local"));
        list.update(CharacterId::new(5), CharacterDraft::named("Edit"));

        assert_eq!(list.delete(local), 1);
        assert_eq!(list.delete(CharacterId::new(5)), 1);
        assert!(list.entries().is_empty());
    }
}
