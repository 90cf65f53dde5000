pub mod character;
pub mod ids;

pub use character::{
    CharacterDraft, DEFAULT_NAME, EDITED_PLACEHOLDER_IMAGE, LocationRef, MergedCharacter,
    OverlayEntry, PLACEHOLDER_IMAGE, PageInfo, Provenance, RemoteCharacter, RemotePage,
};
pub use ids::CharacterId;
