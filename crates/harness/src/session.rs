use roster_core::{CharacterId, LocationRef, PageInfo, RemoteCharacter, RemotePage};
use roster_engine::Engine;
use roster_storage::MemorySlot;

use crate::remote::ScriptedRemote;

/// Build a remote character with plausible catalog data.
pub fn remote_character(id: i64, name: &str) -> RemoteCharacter {
    RemoteCharacter {
        id: CharacterId::new(id),
        name: name.to_string(),
        image: format!("https://example.test/avatar/{id}.jpeg"),
        status: "Alive".to_string(),
        species: "Human".to_string(),
        gender: "Male".to_string(),
        origin: LocationRef {
            name: "Earth (C-137)".to_string(),
            url: "https://example.test/location/1".to_string(),
        },
        location: LocationRef {
            name: "Citadel of Ricks".to_string(),
            url: "https://example.test/location/3".to_string(),
        },
    }
}

/// Wrap a result list in a single-page catalog document.
pub fn page(results: Vec<RemoteCharacter>) -> RemotePage {
    RemotePage {
        info: PageInfo {
            count: results.len() as u32,
            pages: 1,
            next: None,
            prev: None,
        },
        results,
    }
}

/// One engine over an in-memory slot and a scripted remote.
pub struct TestSession {
    pub engine: Engine<MemorySlot, ScriptedRemote>,
}

impl TestSession {
    /// Fresh session with an empty remote catalog.
    pub fn new() -> Self {
        Self::with_remote(Vec::new())
    }

    /// Fresh session whose remote catalog serves `characters`.
    pub fn with_remote(characters: Vec<RemoteCharacter>) -> Self {
        Self::with_slot(MemorySlot::new(), characters)
    }

    /// Session over a pre-populated slot, e.g. to simulate a restart.
    pub fn with_slot(slot: MemorySlot, characters: Vec<RemoteCharacter>) -> Self {
        Self {
            engine: Engine::new(slot, ScriptedRemote::new(page(characters))),
        }
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}
