//! The component tree: tagged nodes with optional bindable objects.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use latewire_core::{ResolveError, SearchRoot, TargetRef};

/// A node in the component tree.
///
/// Each component has a tag (unique among its siblings by convention), an
/// optional object that late-bound callables can attach to, and
/// parent/child links. Components are handled through `Rc`; parents hold
/// their children strongly and children hold their parent weakly, so
/// dropping the root drops the tree.
pub struct Component {
    tag: String,
    this: Weak<Component>,
    parent: Weak<Component>,
    children: RefCell<Vec<Rc<Component>>>,
    object: RefCell<Option<TargetRef>>,
}

impl Component {
    /// Create a tree root.
    ///
    /// The root's own tag does not appear in absolute paths; its
    /// [`Component::full_tag`] is `":"`.
    pub fn root(tag: impl Into<String>) -> Rc<Self> {
        Self::node(tag.into(), Weak::new())
    }

    fn node(tag: String, parent: Weak<Component>) -> Rc<Self> {
        Rc::new_cyclic(|this| Component {
            tag,
            this: this.clone(),
            parent,
            children: RefCell::new(Vec::new()),
            object: RefCell::new(None),
        })
    }

    /// Add a child component with no object.
    pub fn add_child(&self, tag: impl Into<String>) -> Rc<Component> {
        let child = Self::node(tag.into(), self.this.clone());
        self.children.borrow_mut().push(Rc::clone(&child));
        child
    }

    /// Add a child component carrying a bindable object.
    pub fn add_child_object<T: 'static>(
        &self,
        tag: impl Into<String>,
        object: Rc<T>,
    ) -> Rc<Component> {
        let child = self.add_child(tag);
        child.set_object(object as TargetRef);
        child
    }

    /// Attach (or replace) this component's bindable object.
    pub fn set_object(&self, object: TargetRef) {
        *self.object.borrow_mut() = Some(object);
    }

    /// This component's bindable object, if any.
    pub fn object(&self) -> Option<TargetRef> {
        self.object.borrow().clone()
    }

    /// This component's own tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The parent component, unless this is the root.
    pub fn parent(&self) -> Option<Rc<Component>> {
        self.parent.upgrade()
    }

    /// The direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<Rc<Component>> {
        self.children.borrow().iter().find(|c| c.tag == tag).cloned()
    }

    /// The root of the tree this component belongs to.
    pub fn tree_root(&self) -> Rc<Component> {
        let mut current = self.rc();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Absolute path of this component, `":"` for the root.
    pub fn full_tag(&self) -> String {
        if self.parent().is_none() {
            return ":".to_string();
        }
        let mut segments = vec![self.tag.clone()];
        let mut node = self.parent();
        while let Some(current) = node {
            if current.parent().is_some() {
                segments.push(current.tag.clone());
            }
            node = current.parent();
        }
        segments.reverse();
        format!(":{}", segments.join(":"))
    }

    /// Walk a tag path from this component.
    ///
    /// `":"` alone names the tree root.
    ///
    /// # Errors
    ///
    /// * [`ResolveError::InvalidName`] - empty name or empty path segment.
    /// * [`ResolveError::NotFound`] - a segment names no child (or `^` was
    ///   used on the root).
    pub fn find(&self, name: &str) -> Result<Rc<Component>, ResolveError> {
        if name.is_empty() {
            return Err(ResolveError::InvalidName {
                name: name.to_string(),
                message: "empty target name".to_string(),
            });
        }

        let (mut current, rest) = match name.strip_prefix(':') {
            Some(stripped) => (self.tree_root(), stripped),
            None => (self.rc(), name),
        };
        if rest.is_empty() {
            return Ok(current);
        }

        for segment in rest.split(':') {
            if segment.is_empty() {
                return Err(ResolveError::InvalidName {
                    name: name.to_string(),
                    message: "empty path segment".to_string(),
                });
            }
            let next = if segment == "^" {
                current.parent()
            } else {
                current.child(segment)
            };
            current = next.ok_or_else(|| ResolveError::NotFound {
                name: name.to_string(),
                root: self.full_tag(),
            })?;
        }
        Ok(current)
    }

    /// The owning `Rc` for this component.
    ///
    /// Always upgradable while a component is reachable; the tree hands out
    /// components only behind `Rc`.
    fn rc(&self) -> Rc<Component> {
        self.this.upgrade().expect("component accessed during teardown")
    }
}

impl SearchRoot for Component {
    fn resolve_target(&self, name: &str) -> Result<TargetRef, ResolveError> {
        tracing::trace!(name, root = %self.full_tag(), "resolving tag");
        let node = self.find(name)?;
        node.object().ok_or_else(|| ResolveError::Unbindable {
            name: name.to_string(),
            root: self.full_tag(),
        })
    }

    fn diagnostic_tag(&self) -> String {
        self.full_tag()
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("tag", &self.tag)
            .field("children", &self.children.borrow().len())
            .field("has_object", &self.object.borrow().is_some())
            .finish()
    }
}
