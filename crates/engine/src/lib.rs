pub mod merge;
pub mod overlay;
pub mod remote;

pub use merge::merge;
pub use overlay::OverlayList;
pub use remote::{CHARACTER_ENDPOINT, FetchError, HttpRemoteSource, RemoteSource};

use roster_core::{CharacterDraft, CharacterId, MergedCharacter, RemoteCharacter};
use roster_storage::{SlotStore, load_overlay, save_overlay};

/// One session's reconciliation engine.
///
/// Owns the overlay list and the remote cache; constructed once per session
/// (the overlay is loaded from the slot at construction) and expected to be
/// refreshed once against the remote source. All mutations run to
/// completion before returning and persist the full overlay afterward;
/// none of them can fail from the caller's point of view.
pub struct Engine<S: SlotStore, R: RemoteSource> {
    slot: S,
    source: R,
    overlay: OverlayList,
    remote_cache: Vec<RemoteCharacter>,
}

impl<S: SlotStore, R: RemoteSource> Engine<S, R> {
    pub fn new(slot: S, source: R) -> Self {
        let overlay = OverlayList::new(load_overlay(&slot));
        Self {
            slot,
            source,
            overlay,
            remote_cache: Vec::new(),
        }
    }

    /// Fetch the remote dataset and replace the cache wholesale.
    ///
    /// On failure the cache keeps its previous value (empty if nothing was
    /// ever fetched) and the error is logged and handed back for
    /// observability only -- the merge path never sees it and stays
    /// callable throughout. No retry, no timeout beyond the client's own.
    pub async fn refresh(&mut self) -> Result<usize, FetchError> {
        match self.source.fetch().await {
            Ok(page) => {
                let count = page.results.len();
                self.remote_cache = page.results;
                tracing::debug!(count, "Remote catalog refreshed");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Remote catalog fetch failed, keeping cached dataset");
                Err(e)
            }
        }
    }

    /// The merged, de-duplicated view: local creations first, then remote
    /// characters (edited ones replaced by their overlay entry) in remote
    /// order. Recomputed on every call.
    pub fn all_characters(&self) -> Vec<MergedCharacter> {
        merge(self.overlay.entries(), &self.remote_cache)
    }

    /// Create a new local character. Returns its freshly allocated
    /// negative id.
    pub fn create_character(&mut self, draft: CharacterDraft) -> CharacterId {
        let id = self.overlay.create(draft);
        self.persist();
        id
    }

    /// Edit the character addressed by `target` -- a local creation, an
    /// existing edit, or a so-far-untouched remote character (which gains
    /// an override entry).
    pub fn update_character(&mut self, target: CharacterId, draft: CharacterDraft) {
        self.overlay.update(target, draft);
        self.persist();
    }

    /// Drop local data for `target`: a creation disappears from the view,
    /// an edit reverts to the unedited remote character on the next merge.
    pub fn delete_character(&mut self, target: CharacterId) {
        self.overlay.delete(target);
        self.persist();
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn overlay_entries(&self) -> &[roster_core::OverlayEntry] {
        self.overlay.entries()
    }

    pub fn remote_cache(&self) -> &[RemoteCharacter] {
        &self.remote_cache
    }

    fn persist(&mut self) {
        save_overlay(&mut self.slot, self.overlay.entries());
    }
}
