//! The reconciliation view: a pure function of (overlay, remote cache).

use std::collections::HashMap;

use roster_core::{CharacterId, MergedCharacter, OverlayEntry, Provenance, RemoteCharacter};

/// Merge the overlay onto the remote dataset.
///
/// Pure local creations come first, in overlay order (newest first, since
/// mutations insert at the front). Remote characters follow in the remote
/// dataset's order; a character with a local edit is emitted as that edit,
/// carrying the overlay entry's own id, otherwise it is emitted verbatim
/// with an empty description. When two overlay entries override the same
/// remote id the later one wins.
pub fn merge(overlay: &[OverlayEntry], remote: &[RemoteCharacter]) -> Vec<MergedCharacter> {
    let mut edits: HashMap<CharacterId, &OverlayEntry> = HashMap::new();
    for entry in overlay {
        if let Provenance::Override(remote_ref) = entry.provenance() {
            edits.insert(remote_ref, entry);
        }
    }

    let mut view: Vec<MergedCharacter> = overlay
        .iter()
        .filter(|e| matches!(e.provenance(), Provenance::LocalOnly))
        .map(MergedCharacter::from_entry)
        .collect();

    for character in remote {
        match edits.get(&character.id) {
            Some(entry) => view.push(MergedCharacter::from_entry(entry)),
            None => view.push(MergedCharacter::from_remote(character)),
        }
    }

    view
}
