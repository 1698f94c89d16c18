//! Type hierarchy ancestry over declared supertype edges.
//!
//! The walk is iterative with an explicit frame stack. Types currently on
//! the walk path are marked gray so a supertype cycle surfaces as a
//! [`ResolutionError::SupertypeCycle`] instead of an endless walk; fully
//! explored types are marked black so diamond hierarchies are visited
//! once. The hierarchy of a well-formed model is a DAG rooted at a small
//! set of root types; a cycle is a model defect and fails the run.

use seam_core::errors::ResolutionError;
use seam_core::types::collections::FxHashSet;
use seam_core::types::TypeId;

use crate::model::ProgramModel;

/// True iff `ancestor` equals `ty` or occurs anywhere along `ty`'s
/// declared supertype chains. All branches are explored; a match on any
/// branch wins and short-circuits the rest of the walk.
pub fn is_ancestor(
    model: &ProgramModel,
    ancestor: TypeId,
    ty: TypeId,
) -> Result<bool, ResolutionError> {
    if ancestor == ty {
        return Ok(true);
    }

    let mut gray: FxHashSet<TypeId> = FxHashSet::default();
    let mut black: FxHashSet<TypeId> = FxHashSet::default();
    let mut stack: Vec<(TypeId, usize)> = vec![(ty, 0)];
    gray.insert(ty);

    while let Some(frame) = stack.last_mut() {
        let current = frame.0;
        let cursor = frame.1;
        let supertypes = model.direct_supertypes(current)?;

        if cursor >= supertypes.len() {
            gray.remove(&current);
            black.insert(current);
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let next = supertypes[cursor];
        if next == ancestor {
            return Ok(true);
        }
        if gray.contains(&next) {
            return Err(ResolutionError::SupertypeCycle {
                type_name: model.type_name(next).to_string(),
            });
        }
        if black.contains(&next) {
            continue;
        }
        gray.insert(next);
        stack.push((next, 0));
    }

    Ok(false)
}

/// True iff `ty` is the unchecked-exception root itself or any descendant
/// of it. Types outside that hierarchy are checked exceptions.
pub fn is_unchecked(
    model: &ProgramModel,
    ty: TypeId,
    unchecked_root: TypeId,
) -> Result<bool, ResolutionError> {
    is_ancestor(model, unchecked_root, ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelBuilder;

    /// throwable <- exception <- {io <- file_not_found, runtime <- illegal_state}
    /// sql also implements serializable, giving it two supertype branches.
    struct Hierarchy {
        model: ProgramModel,
        throwable: TypeId,
        exception: TypeId,
        io: TypeId,
        file_not_found: TypeId,
        runtime: TypeId,
        illegal_state: TypeId,
        serializable: TypeId,
        sql: TypeId,
    }

    fn hierarchy() -> Hierarchy {
        let mut builder = ModelBuilder::new();
        let throwable = builder.declare_type("java.lang.Throwable", &[]);
        let exception = builder.declare_type("java.lang.Exception", &[throwable]);
        let io = builder.declare_type("java.io.IOException", &[exception]);
        let file_not_found = builder.declare_type("java.io.FileNotFoundException", &[io]);
        let runtime = builder.declare_type("java.lang.RuntimeException", &[exception]);
        let illegal_state = builder.declare_type("java.lang.IllegalStateException", &[runtime]);
        let serializable = builder.declare_type("java.io.Serializable", &[]);
        let sql = builder.declare_type("java.sql.SQLException", &[exception, serializable]);
        Hierarchy {
            model: builder.finish().unwrap(),
            throwable,
            exception,
            io,
            file_not_found,
            runtime,
            illegal_state,
            serializable,
            sql,
        }
    }

    #[test]
    fn every_type_is_its_own_ancestor() {
        let h = hierarchy();
        assert!(is_ancestor(&h.model, h.io, h.io).unwrap());
        assert!(is_ancestor(&h.model, h.serializable, h.serializable).unwrap());
    }

    #[test]
    fn ancestry_follows_deep_chains() {
        let h = hierarchy();
        assert!(is_ancestor(&h.model, h.exception, h.file_not_found).unwrap());
        assert!(is_ancestor(&h.model, h.throwable, h.file_not_found).unwrap());
    }

    #[test]
    fn all_supertype_branches_are_explored() {
        let h = hierarchy();
        assert!(is_ancestor(&h.model, h.serializable, h.sql).unwrap());
        assert!(is_ancestor(&h.model, h.throwable, h.sql).unwrap());
    }

    #[test]
    fn unrelated_types_do_not_match() {
        let h = hierarchy();
        assert!(!is_ancestor(&h.model, h.io, h.illegal_state).unwrap());
        assert!(!is_ancestor(&h.model, h.file_not_found, h.io).unwrap());
    }

    #[test]
    fn diamond_hierarchies_are_walked_once_without_error() {
        let mut builder = ModelBuilder::new();
        let top = builder.declare_type("com.app.Top", &[]);
        let left = builder.declare_type("com.app.Left", &[top]);
        let right = builder.declare_type("com.app.Right", &[top]);
        let bottom = builder.declare_type("com.app.Bottom", &[left, right]);
        let other = builder.declare_type("com.app.Other", &[]);
        let model = builder.finish().unwrap();

        assert!(is_ancestor(&model, top, bottom).unwrap());
        assert!(!is_ancestor(&model, other, bottom).unwrap());
    }

    #[test]
    fn supertype_cycle_is_a_resolution_error() {
        let mut builder = ModelBuilder::new();
        let first = builder.type_ref("com.app.First");
        let second = builder.type_ref("com.app.Second");
        builder.declare_type("com.app.First", &[second]);
        builder.declare_type("com.app.Second", &[first]);
        let unrelated = builder.declare_type("com.app.Unrelated", &[]);
        let model = builder.finish().unwrap();

        let err = is_ancestor(&model, unrelated, first).unwrap_err();
        assert!(matches!(err, ResolutionError::SupertypeCycle { .. }));
    }

    #[test]
    fn walking_through_an_undeclared_type_fails() {
        let mut builder = ModelBuilder::new();
        let ghost = builder.type_ref("com.app.Ghost");
        let child = builder.declare_type("com.app.Child", &[ghost]);
        let unrelated = builder.declare_type("com.app.Unrelated", &[]);
        let model = builder.finish().unwrap();

        let err = is_ancestor(&model, unrelated, child).unwrap_err();
        assert!(matches!(err, ResolutionError::UnknownSupertypes { .. }));
    }

    #[test]
    fn unchecked_means_under_the_configured_root() {
        let h = hierarchy();
        assert!(is_unchecked(&h.model, h.illegal_state, h.runtime).unwrap());
        assert!(is_unchecked(&h.model, h.runtime, h.runtime).unwrap());
        assert!(!is_unchecked(&h.model, h.io, h.runtime).unwrap());
        assert!(!is_unchecked(&h.model, h.exception, h.runtime).unwrap());
    }
}
