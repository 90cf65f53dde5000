pub mod remote;
pub mod session;

pub use remote::{FailingRemote, FlakyRemote, ScriptedRemote};
pub use session::{TestSession, page, remote_character};
