use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier shared by remote and locally-authored characters.
///
/// The sign partitions the namespace: the remote catalog assigns positive
/// ids (zero included, reserved for the remote side), while locally created
/// characters receive strictly negative ids. The two never overlap because
/// local allocation only ever decrements below -1.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(i64);

impl CharacterId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// True for ids in the locally-owned (negative) namespace.
    pub fn is_local(&self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for CharacterId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharacterId({})", self.0)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
