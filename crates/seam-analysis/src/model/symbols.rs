//! Symbol tables: declared types and callable units.

use seam_core::types::collections::SmallVec4;
use seam_core::types::{NodeId, TypeId};

/// Whether a callable is an ordinary method/function or a constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallableKind {
    Method,
    Constructor,
}

/// One row in the type table.
///
/// `supertypes` stays `None` while the type is only referenced; declaring
/// the type fills it in. Querying the supertypes of a referenced-only row
/// is a resolution error, never an empty answer.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub qualified_name: String,
    pub supertypes: Option<Vec<TypeId>>,
}

/// One row in the callable table.
#[derive(Debug, Clone)]
pub struct CallableEntry {
    /// Host-chosen unique name. Overloads must be disambiguated by the
    /// host, e.g. by including the signature.
    pub qualified_name: String,
    pub kind: CallableKind,
    /// For constructors, the type being constructed.
    pub constructed_type: Option<TypeId>,
    /// Exception types this callable declares it may throw.
    pub declared_throws: SmallVec4<TypeId>,
    pub parameter_count: u32,
    /// Declaration node when the callable's source is part of the model;
    /// `None` for external library callables.
    pub decl_node: Option<NodeId>,
}
