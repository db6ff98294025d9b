use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for a graph node.
///
/// Nodes are interned in declaration order, so the index doubles as a
/// position into per-node tables.
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<NodeId>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Create a NodeId from a 0-based index by storing index+1.
    ///
    /// Panics if `index == u32::MAX`.
    pub fn from_index(index: u32) -> Self {
        Self::try_from_index(index).expect("node index overflow")
    }

    /// Like `from_index`, but `None` when `index == u32::MAX`.
    pub fn try_from_index(index: u32) -> Option<Self> {
        index.checked_add(1).and_then(NonZeroU32::new).map(Self)
    }

    /// Id for a table position, or `None` if it does not fit.
    pub fn from_slot(slot: usize) -> Option<Self> {
        u32::try_from(slot).ok().and_then(Self::try_from_index)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a `usize`, for table lookups.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.index())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
