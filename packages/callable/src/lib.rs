//! Latewire callable layer: type-erased functions with an optional target.
//!
//! This is the narrow waist of the latewire stack. Everything at this level
//! is a plain function plus (maybe) a target object - no tags, no trees, no
//! resolution policy. Higher layers decide *which* object a callable should
//! receive; this layer only stores the function shape and performs the
//! single-shot attachment.
//!
//! Use this layer for:
//! - Storing a method together with its receiver behind one call signature
//! - Deferring the receiver until a later [`Callable::late_bind`]
//! - Receiverless functions that never take a target
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use latewire_callable::{Callable, TargetRef};
//!
//! struct Counter {
//!     step: i32,
//! }
//!
//! impl Counter {
//!     fn add(&self, n: i32) -> i32 {
//!         self.step + n
//!     }
//! }
//!
//! // The shape is recorded now; the receiver arrives later.
//! let mut callable: Callable<i32, i32> = Callable::deferred(Counter::add);
//! assert!(callable.needs_target());
//!
//! let counter: TargetRef = Rc::new(Counter { step: 10 });
//! callable.late_bind(&counter).unwrap();
//! assert_eq!(callable.invoke(32), 42);
//! ```

mod callable;
mod error;

pub use callable::{Callable, TargetRef};
pub use error::BindError;
