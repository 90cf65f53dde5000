use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

/// Fallback name for characters created or edited without one.
pub const DEFAULT_NAME: &str = "Unnamed";

/// Placeholder portrait for locally created characters with no image.
pub const PLACEHOLDER_IMAGE: &str =
    "https://www.svgrepo.com/show/508699/landscape-placeholder.svg";

/// Placeholder portrait for a freshly created edit of a remote character.
pub const EDITED_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200?text=API+Edited";

/// Named reference carried by the remote catalog for origin/location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    pub url: String,
}

/// One character as served by the remote catalog. Immutable on our side:
/// only ever read, never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCharacter {
    pub id: CharacterId,
    pub name: String,
    pub image: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub origin: LocationRef,
    pub location: LocationRef,
}

/// Pagination envelope of the remote catalog. Only the first page is
/// consumed; `info` is decoded but never followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePage {
    pub info: PageInfo,
    pub results: Vec<RemoteCharacter>,
}

/// Whether an overlay entry stands on its own or shadows a remote character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    LocalOnly,
    Override(CharacterId),
}

/// One locally-owned record in the persisted overlay.
///
/// `remote_ref` links the entry to the remote character it overrides; when
/// absent the entry is a pure local creation. The descriptive fields are a
/// denormalized snapshot taken at edit time so the entry never holds a live
/// reference into the remote cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayEntry {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub remote_ref: Option<CharacterId>,
    pub status: Option<String>,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub origin: Option<String>,
    pub location: Option<String>,
}

impl OverlayEntry {
    /// A brand-new local creation. Missing name/image take placeholders.
    pub fn new_local(id: CharacterId, draft: CharacterDraft) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            description: draft.description.unwrap_or_default(),
            image: Some(draft.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())),
            remote_ref: None,
            status: None,
            species: None,
            gender: None,
            origin: None,
            location: None,
        }
    }

    /// A first-time edit of the remote character `remote_ref`. The draft
    /// doubles as the denormalized snapshot.
    pub fn new_override(id: CharacterId, remote_ref: CharacterId, draft: CharacterDraft) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            description: draft.description.unwrap_or_default(),
            image: Some(
                draft
                    .image
                    .unwrap_or_else(|| EDITED_PLACEHOLDER_IMAGE.to_string()),
            ),
            remote_ref: Some(remote_ref),
            status: draft.status,
            species: draft.species,
            gender: draft.gender,
            origin: draft.origin,
            location: draft.location,
        }
    }

    pub fn provenance(&self) -> Provenance {
        match self.remote_ref {
            Some(remote_ref) => Provenance::Override(remote_ref),
            None => Provenance::LocalOnly,
        }
    }

    /// Shallow field overwrite: fields present in the draft replace the
    /// stored value, absent fields keep it.
    pub fn apply(&mut self, draft: CharacterDraft) {
        if let Some(name) = draft.name {
            self.name = name;
        }
        if let Some(description) = draft.description {
            self.description = description;
        }
        if let Some(image) = draft.image {
            self.image = Some(image);
        }
        if let Some(status) = draft.status {
            self.status = Some(status);
        }
        if let Some(species) = draft.species {
            self.species = Some(species);
        }
        if let Some(gender) = draft.gender {
            self.gender = Some(gender);
        }
        if let Some(origin) = draft.origin {
            self.origin = Some(origin);
        }
        if let Some(location) = draft.location {
            self.location = Some(location);
        }
    }
}

/// Caller-supplied partial fields for create/update. Every field is
/// optional; create fills defaults, update keeps prior values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub origin: Option<String>,
    pub location: Option<String>,
}

impl CharacterDraft {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// The consumer-facing view of one character. Derived on every merge,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedCharacter {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub is_local: bool,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
}

impl MergedCharacter {
    /// A remote character with no local edit. Empty description, not local.
    pub fn from_remote(remote: &RemoteCharacter) -> Self {
        Self {
            id: remote.id,
            name: remote.name.clone(),
            description: String::new(),
            image: remote.image.clone(),
            is_local: false,
            status: remote.status.clone(),
            species: remote.species.clone(),
            gender: remote.gender.clone(),
            origin: remote.origin.name.clone(),
            location: remote.location.name.clone(),
        }
    }

    /// A locally-authored entry (creation or edit). Keeps the entry's own
    /// id even when it overrides a remote character.
    pub fn from_entry(entry: &OverlayEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            description: entry.description.clone(),
            image: entry.image.clone().unwrap_or_default(),
            is_local: true,
            status: entry.status.clone().unwrap_or_default(),
            species: entry.species.clone().unwrap_or_default(),
            gender: entry.gender.clone().unwrap_or_default(),
            origin: entry.origin.clone().unwrap_or_default(),
            location: entry.location.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_page_decodes_from_catalog_json() {
        let doc = r#"{
            "info": {"count": 826, "pages": 42, "next": "https://example.test/api/character?page=2", "prev": null},
            "results": [{
                "id": 1,
                "name": "Rick Sanchez",
                "status": "Alive",
                "species": "Human",
                "type": "",
                "gender": "Male",
                "origin": {"name": "Earth (C-137)", "url": "https://example.test/api/location/1"},
                "location": {"name": "Citadel of Ricks", "url": "https://example.test/api/location/3"},
                "image": "https://example.test/api/character/avatar/1.jpeg",
                "episode": ["https://example.test/api/episode/1"],
                "url": "https://example.test/api/character/1",
                "created": "2017-11-04T18:48:46.250Z"
            }]
        }"#;

        // Fields we don't model (type, episode, url, created) are ignored.
        let page: RemotePage = serde_json::from_str(doc).unwrap();
        assert_eq!(page.info.pages, 42);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, CharacterId::new(1));
        assert_eq!(page.results[0].origin.name, "Earth (C-137)");
    }

    #[test]
    fn overlay_entry_json_round_trips() {
        let entry = OverlayEntry::new_override(
            CharacterId::new(-3),
            CharacterId::new(8),
            CharacterDraft {
                name: Some("Toxic Rick".into()),
                status: Some("Alive".into()),
                ..CharacterDraft::default()
            },
        );
        let json = serde_json::to_string(&entry).unwrap();
        let back: OverlayEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
        assert_eq!(back.provenance(), Provenance::Override(CharacterId::new(8)));
    }

    #[test]
    fn local_creation_takes_defaults() {
        let entry = OverlayEntry::new_local(CharacterId::new(-1), CharacterDraft::default());
        assert_eq!(entry.name, DEFAULT_NAME);
        assert_eq!(entry.description, "");
        assert_eq!(entry.image.as_deref(), Some(PLACEHOLDER_IMAGE));
        assert_eq!(entry.provenance(), Provenance::LocalOnly);
    }
}
