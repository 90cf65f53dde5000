pub mod error;
pub mod memory;
pub mod overlay;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use error::StorageError;
pub use memory::{MemorySlot, NullSlot};
pub use overlay::{OVERLAY_SLOT, load_overlay, save_overlay};
pub use sqlite::SqliteSlot;
pub use traits::SlotStore;
