//! Late-bound callables: one surface over "target known now" and "target
//! known by name".

use std::fmt;
use std::rc::Rc;

use latewire_callable::Callable;

use crate::{Error, SearchRoot, Tagged, TargetResolver};

/// A callable with signature `A -> R` whose target may be supplied later,
/// by name, from a tree of named components.
///
/// A `LateBound` combines a [`Callable`] with a [`TargetResolver`] and a
/// display name for diagnostics. It is constructed in one of three modes:
///
/// - with a concrete target ([`LateBound::with_target`],
///   [`LateBound::with_tagged_target`]) - behaves like a plain callable,
///   [`LateBound::bind`] is a no-op;
/// - with a target *name* ([`LateBound::named`]) - invocation is illegal
///   until one successful [`LateBound::bind`] resolves the name;
/// - with no target at all ([`LateBound::from_fn`], [`LateBound::new`]) -
///   never binds; a receiverless function is invokable as-is, an empty
///   callable never is.
///
/// Binding happens at most once. Repeated `bind` calls on a bound or
/// targetless callable return without consulting the resolver, so a second
/// resolution can never displace an existing attachment.
pub struct LateBound<A, R = ()> {
    callable: Callable<A, R>,
    resolver: TargetResolver,
    display_name: Option<String>,
}

impl<A: 'static, R: 'static> LateBound<A, R> {
    /// An empty callable slot. Never invokable; `bind` is a no-op.
    pub fn new() -> Self {
        Self {
            callable: Callable::empty(),
            resolver: TargetResolver::unnamed(),
            display_name: None,
        }
    }

    /// A receiverless function with no target at all.
    ///
    /// The target name is absent and stays absent; the callable never
    /// transitions to bound but is invokable as-is.
    pub fn from_fn(f: impl Fn(A) -> R + 'static, display_name: impl Into<String>) -> Self {
        Self {
            callable: Callable::free(f),
            resolver: TargetResolver::unnamed(),
            display_name: Some(display_name.into()),
        }
    }

    /// A receiver-taking function bound to `target` immediately.
    ///
    /// The target name is absent; use [`LateBound::with_tagged_target`] for
    /// objects that can report their own tag.
    pub fn with_target<T: 'static>(
        f: impl Fn(&T, A) -> R + 'static,
        display_name: impl Into<String>,
        target: &Rc<T>,
    ) -> Self {
        Self {
            callable: Callable::bound(f, target),
            resolver: TargetResolver::unnamed(),
            display_name: Some(display_name.into()),
        }
    }

    /// A receiver-taking function bound to `target` immediately, with the
    /// target name derived from the object's own tag.
    pub fn with_tagged_target<T: Tagged + 'static>(
        f: impl Fn(&T, A) -> R + 'static,
        display_name: impl Into<String>,
        target: &Rc<T>,
    ) -> Self {
        Self {
            callable: Callable::bound(f, target),
            resolver: TargetResolver::named(target.tag()),
            display_name: Some(display_name.into()),
        }
    }

    /// A receiver-taking function whose target is known only by name.
    ///
    /// This is the "defer resolution" entry point: the callable starts
    /// waiting and becomes invokable after one successful
    /// [`LateBound::bind`].
    pub fn named<T: 'static>(
        f: impl Fn(&T, A) -> R + 'static,
        display_name: impl Into<String>,
        target_name: impl Into<String>,
    ) -> Self {
        Self {
            callable: Callable::deferred(f),
            resolver: TargetResolver::named(target_name),
            display_name: Some(display_name.into()),
        }
    }

    /// Copy `other` and immediately bind the copy against `root`.
    ///
    /// Observationally equivalent to cloning followed by
    /// [`LateBound::bind`].
    pub fn bound_to(other: &Self, root: &dyn SearchRoot) -> Result<Self, Error> {
        let mut copy = other.clone();
        copy.bind(root)?;
        Ok(copy)
    }

    /// Resolve the target name against `root` and attach the object.
    ///
    /// A no-op when the callable does not need a target (already bound,
    /// receiverless, or empty): the resolver is not consulted and `root` is
    /// never queried.
    ///
    /// # Errors
    ///
    /// Propagates resolution failures from the naming collaborator. On
    /// failure the callable is left waiting with its name intact; invoking
    /// it is still illegal, and a later `bind` against a root that does
    /// contain the target succeeds.
    pub fn bind(&mut self, root: &dyn SearchRoot) -> Result<(), Error> {
        if !self.callable.needs_target() {
            return Ok(());
        }
        let target = self.resolver.resolve(root)?;
        self.callable.late_bind(&target)?;
        tracing::debug!(
            name = self.resolver.name(),
            callable = self.display_name.as_deref(),
            "late-bound callable attached"
        );
        Ok(())
    }

    /// Run the callable.
    ///
    /// # Panics
    ///
    /// Panics if the callable is not invokable yet; gate on
    /// [`LateBound::is_callable`] first.
    pub fn invoke(&self, arg: A) -> R {
        if !self.callable.is_callable() {
            panic!(
                "callable '{}' invoked before a successful bind",
                self.display_name.as_deref().unwrap_or("(unnamed)")
            );
        }
        self.callable.invoke(arg)
    }

    /// The declared target name, without triggering resolution.
    ///
    /// For validation tooling that checks declared targets up front.
    pub fn target_name(&self) -> Option<&str> {
        self.resolver.name()
    }

    /// The diagnostic display name given at construction.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Whether a target has been attached.
    pub fn is_bound(&self) -> bool {
        self.callable.is_bound()
    }

    /// Whether invocation is legal right now.
    pub fn is_callable(&self) -> bool {
        self.callable.is_callable()
    }

    /// Whether this callable is still waiting for [`LateBound::bind`].
    pub fn needs_target(&self) -> bool {
        self.callable.needs_target()
    }

    /// The underlying callable, for pass-through inspection.
    pub fn callable(&self) -> &Callable<A, R> {
        &self.callable
    }
}

impl<A: 'static, R: 'static> Default for LateBound<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> Clone for LateBound<A, R> {
    fn clone(&self) -> Self {
        Self {
            callable: self.callable.clone(),
            resolver: self.resolver.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

impl<A, R> fmt::Debug for LateBound<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LateBound")
            .field("callable", &self.callable)
            .field("target_name", &self.resolver.name())
            .field("display_name", &self.display_name)
            .finish()
    }
}
