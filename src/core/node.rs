//! Board node identification.
//!
//! Every location on the transport graph is a `NodeId`. Real boards number
//! their stations from 1, which leaves `0` free to act as the "no location
//! known" sentinel reported for a concealed fugitive.
//!
//! ```
//! use rust_pursuit::core::NodeId;
//!
//! let station = NodeId::new(42);
//! assert!(station.is_known());
//! assert!(!NodeId::UNKNOWN.is_known());
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a node (station) on the transport graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel reported when no location has ever been disclosed.
    pub const UNKNOWN: NodeId = NodeId(0);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check whether this is a real location rather than the sentinel.
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0 != Self::UNKNOWN.0
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_known() {
            write!(f, "Node({})", self.0)
        } else {
            write!(f, "Node(?)")
        }
    }
}
