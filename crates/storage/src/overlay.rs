use roster_core::OverlayEntry;

use crate::traits::SlotStore;

/// Fixed slot name holding the JSON-serialized overlay list.
pub const OVERLAY_SLOT: &str = "localCharacters";

/// Read the persisted overlay. Never fails: a missing slot, an unavailable
/// backend, or malformed stored JSON all degrade to an empty overlay. The
/// malformed case silently discards the stored data; callers get a logged
/// diagnostic and a fresh start.
pub fn load_overlay<S: SlotStore>(slot: &S) -> Vec<OverlayEntry> {
    let bytes = match slot.get(OVERLAY_SLOT) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Overlay slot unreadable, starting with empty overlay");
            return Vec::new();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "Persisted overlay is malformed, discarding it");
            Vec::new()
        }
    }
}

/// Write the whole overlay to the slot. Best-effort: a failed write is
/// logged and swallowed so mutations never surface persistence errors.
pub fn save_overlay<S: SlotStore>(slot: &mut S, entries: &[OverlayEntry]) {
    let bytes = match serde_json::to_vec(entries) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize overlay, skipping save");
            return;
        }
    };
    if let Err(e) = slot.set(OVERLAY_SLOT, &bytes) {
        tracing::warn!(error = %e, "Failed to persist overlay");
    }
}
