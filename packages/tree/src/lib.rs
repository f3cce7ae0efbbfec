//! A reference tree of named components for latewire.
//!
//! The core crate only speaks the [`SearchRoot`] contract; this crate
//! provides the tree behind it: components linked parent/child, each with a
//! tag and an optional bindable object. Systems that already have their own
//! component hierarchy implement [`SearchRoot`] themselves and skip this
//! crate entirely.
//!
//! # Tag grammar
//!
//! - Segments are separated by `:` - `"bus:sound1"` is the `sound1` child
//!   of the `bus` child of the search root.
//! - A leading `:` resolves from the tree root instead of the search root;
//!   `":sound1"` names the same component from anywhere in the tree.
//! - A `^` segment steps to the parent.
//! - Empty segments are malformed.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use latewire_core::LateBound;
//! use latewire_tree::Component;
//!
//! struct Speaker;
//!
//! impl Speaker {
//!     fn play(&self, _note: i32) {}
//! }
//!
//! let root = Component::root("machine");
//! root.add_child_object("sound1", Rc::new(Speaker));
//!
//! let mut play: LateBound<i32> = LateBound::named(Speaker::play, "play", "sound1");
//! play.bind(&root).unwrap();
//! play.invoke(60);
//! ```

mod component;

pub use component::Component;

// Re-export the seam types callers and implementors share
pub use latewire_core::{ResolveError, SearchRoot, TargetRef};
