//! Identity newtypes.
//!
//! Entities and containers are compared by identity, never by name or by
//! memory address. Raw constructors stay crate-private; ids are minted by the
//! container that owns the entity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one events function inside its container.
///
/// Assigned on append, stable across rename and reorder, never reused.
/// Zero until the function has been appended to a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(u64);

impl FunctionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value, for logs and tests.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn#{}", self.0)
    }
}

/// Process-unique identity of a document or a functions container.
///
/// Minted from a global counter every time a container or project is built
/// (including deserialization), so two loads of the same file never compare
/// equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(u64);

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

impl ContainerId {
    /// Mint a fresh identity.
    pub fn mint() -> Self {
        Self(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for ContainerId {
    fn default() -> Self {
        Self::mint()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of the list being displayed: owning document plus container.
///
/// When this changes the list widget must be remounted and any transient
/// state tied to the previous list dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListKey {
    /// Document that owns the container.
    pub owner: ContainerId,
    /// The container itself.
    pub container: ContainerId,
}

impl fmt::Display for ListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.owner, self.container)
    }
}
