//! Data structures and identifiers for Seam.
//! FxHashMap, SmallVec, arena-index ID types, source locations.

pub mod collections;
pub mod identifiers;
pub mod source;

pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::{CallableId, NodeId, TypeId};
pub use source::SourceLocation;
