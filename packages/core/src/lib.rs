//! Latewire core: target names and the late-binding protocol.
//!
//! This layer adds names to the raw callables of `latewire-callable`:
//! - [`TargetResolver`]: an optional target name plus the lookup protocol
//! - [`SearchRoot`]: the contract a tree of named components implements
//! - [`Tagged`]: capability for objects that know their own tag
//! - [`LateBound`]: a callable that can be wired to a component by name
//!
//! A [`LateBound`] is constructed during setup, before all components exist.
//! Once the tree is assembled, a single [`LateBound::bind`] against a search
//! root resolves the target name and attaches the object; from then on the
//! value behaves like a plain callable. Binding an already-bound (or
//! targetless) callable is a safe no-op, so a second resolution can never
//! corrupt an existing attachment.
//!
//! # Example
//!
//! ```rust
//! use latewire_core::{LateBound, ResolveError, SearchRoot, TargetRef};
//! use std::rc::Rc;
//!
//! struct Speaker;
//!
//! impl Speaker {
//!     fn play(&self, _note: i32) {}
//! }
//!
//! // A one-component "tree" standing in for the real naming collaborator.
//! struct Root(Rc<Speaker>);
//!
//! impl SearchRoot for Root {
//!     fn resolve_target(&self, name: &str) -> Result<TargetRef, ResolveError> {
//!         if name == "speaker" {
//!             Ok(Rc::clone(&self.0) as TargetRef)
//!         } else {
//!             Err(ResolveError::NotFound {
//!                 name: name.to_string(),
//!                 root: self.diagnostic_tag(),
//!             })
//!         }
//!     }
//!
//!     fn diagnostic_tag(&self) -> String {
//!         ":".to_string()
//!     }
//! }
//!
//! let root = Root(Rc::new(Speaker));
//!
//! // Declared before the target is known to exist.
//! let mut play: LateBound<i32> = LateBound::named(Speaker::play, "play", "speaker");
//! assert!(!play.is_bound());
//!
//! play.bind(&root).unwrap();
//! assert!(play.is_bound());
//! play.invoke(60);
//! ```

mod error;
mod late_bound;
mod resolver;

pub use error::{Error, ResolveError};
pub use late_bound::LateBound;
pub use resolver::{SearchRoot, Tagged, TargetResolver};

// Re-export callable types for convenience
pub use latewire_callable::{BindError, Callable, TargetRef};
