//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec optimized for throw sets and catch-type lists (usually <4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// SmallVec optimized for call-target sets (usually 1, rarely >2).
pub type SmallVec2<T> = SmallVec<[T; 2]>;
