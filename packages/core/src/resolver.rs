//! Target names and the seams to the naming collaborator.

use std::rc::Rc;

use latewire_callable::TargetRef;

use crate::{Error, ResolveError};

/// The naming contract a tree of named components implements.
///
/// Resolution is read-only with respect to the tree. The tag grammar
/// (relative vs. absolute names, path separators) is entirely the
/// implementor's policy; this layer only forwards names and failures.
///
/// # Object Safety
///
/// This trait is object-safe: [`crate::LateBound::bind`] takes a
/// `&dyn SearchRoot`.
pub trait SearchRoot {
    /// Look up `name` starting from this node.
    fn resolve_target(&self, name: &str) -> Result<TargetRef, ResolveError>;

    /// Human-readable tag for this node, used only in diagnostics.
    fn diagnostic_tag(&self) -> String;
}

impl<T: SearchRoot + ?Sized> SearchRoot for &T {
    fn resolve_target(&self, name: &str) -> Result<TargetRef, ResolveError> {
        (*self).resolve_target(name)
    }

    fn diagnostic_tag(&self) -> String {
        (*self).diagnostic_tag()
    }
}

impl<T: SearchRoot + ?Sized> SearchRoot for Box<T> {
    fn resolve_target(&self, name: &str) -> Result<TargetRef, ResolveError> {
        self.as_ref().resolve_target(name)
    }

    fn diagnostic_tag(&self) -> String {
        self.as_ref().diagnostic_tag()
    }
}

impl<T: SearchRoot + ?Sized> SearchRoot for Rc<T> {
    fn resolve_target(&self, name: &str) -> Result<TargetRef, ResolveError> {
        self.as_ref().resolve_target(name)
    }

    fn diagnostic_tag(&self) -> String {
        self.as_ref().diagnostic_tag()
    }
}

/// Capability for objects that know their own tag within a tree.
///
/// When a callable is constructed from an object that implements `Tagged`
/// ([`crate::LateBound::with_tagged_target`]), the target name is derived
/// from the object itself, so validation tooling can still see which
/// component the callable points at. Objects without the capability simply
/// yield an absent target name.
pub trait Tagged {
    /// The object's tag, as it appears in its tree.
    fn tag(&self) -> &str;
}

/// Holds an optional target name and knows how to turn it into an object.
///
/// The name is stored verbatim at construction time; the target may not
/// exist yet, so no validation happens until [`TargetResolver::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetResolver {
    name: Option<String>,
}

impl TargetResolver {
    /// Store `name` verbatim, including absence.
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    /// A resolver for the given target name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// A resolver with no target name.
    pub fn unnamed() -> Self {
        Self { name: None }
    }

    /// The stored target name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Ask the naming collaborator to look up the stored name from `root`.
    ///
    /// # Errors
    ///
    /// * [`Error::NoTargetName`] - no name was stored.
    /// * [`Error::Resolve`] - the collaborator could not find the name.
    pub fn resolve(&self, root: &dyn SearchRoot) -> Result<TargetRef, Error> {
        let name = self.name.as_deref().ok_or(Error::NoTargetName)?;
        let target = root.resolve_target(name)?;
        tracing::trace!(name, root = %root.diagnostic_tag(), "target resolved");
        Ok(target)
    }

    /// Diagnostic tag for a possibly-absent node. Never fails.
    pub fn safe_tag(node: Option<&dyn SearchRoot>) -> String {
        match node {
            Some(node) => node.diagnostic_tag(),
            None => "(unknown)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One-entry naming collaborator for testing.
    struct SingleEntry {
        tag: &'static str,
    }

    impl SearchRoot for SingleEntry {
        fn resolve_target(&self, name: &str) -> Result<TargetRef, ResolveError> {
            if name == self.tag {
                Ok(Rc::new(42_i32) as TargetRef)
            } else {
                Err(ResolveError::NotFound {
                    name: name.to_string(),
                    root: self.diagnostic_tag(),
                })
            }
        }

        fn diagnostic_tag(&self) -> String {
            format!(":{}", self.tag)
        }
    }

    #[test]
    fn stores_name_verbatim() {
        assert_eq!(TargetResolver::named("sound1").name(), Some("sound1"));
        assert_eq!(TargetResolver::unnamed().name(), None);
        assert_eq!(
            TargetResolver::new(Some(":a:b".to_string())).name(),
            Some(":a:b")
        );
    }

    #[test]
    fn resolve_forwards_to_the_collaborator() {
        let root = SingleEntry { tag: "sound1" };

        let hit = TargetResolver::named("sound1").resolve(&root).unwrap();
        assert_eq!(*hit.downcast::<i32>().unwrap(), 42);

        let miss = TargetResolver::named("sound2").resolve(&root).unwrap_err();
        assert_eq!(
            miss,
            Error::Resolve(ResolveError::NotFound {
                name: "sound2".to_string(),
                root: ":sound1".to_string(),
            })
        );
    }

    #[test]
    fn resolve_without_a_name_is_an_error() {
        let root = SingleEntry { tag: "sound1" };
        let err = TargetResolver::unnamed().resolve(&root).unwrap_err();
        assert_eq!(err, Error::NoTargetName);
    }

    #[test]
    fn safe_tag_handles_absent_nodes() {
        let root = SingleEntry { tag: "sound1" };
        assert_eq!(TargetResolver::safe_tag(Some(&root)), ":sound1");
        assert_eq!(TargetResolver::safe_tag(None), "(unknown)");
    }

    #[test]
    fn search_root_is_usable_through_indirection() {
        let boxed: Box<dyn SearchRoot> = Box::new(SingleEntry { tag: "sound1" });
        assert!(TargetResolver::named("sound1").resolve(&boxed).is_ok());

        let shared: Rc<dyn SearchRoot> = Rc::new(SingleEntry { tag: "sound1" });
        assert!(TargetResolver::named("sound1").resolve(&shared).is_ok());
        assert_eq!(shared.diagnostic_tag(), ":sound1");
    }
}
