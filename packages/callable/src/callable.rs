//! Type-erased callables over a fixed signature.

use std::any::{type_name, Any};
use std::fmt;
use std::rc::Rc;

use crate::BindError;

/// Shared handle to a late-bind target of any concrete type.
///
/// This is the object-reference currency between the callable layer and
/// whatever locates targets above it. The callable downcasts it to the
/// concrete receiver type at bind time.
pub type TargetRef = Rc<dyn Any>;

/// A ready-to-run function behind the callable's signature.
type Thunk<A, R> = Rc<dyn Fn(A) -> R>;

/// Produces a [`Thunk`] from a target, or explains why it cannot.
type Binder<A, R> = Rc<dyn Fn(&TargetRef) -> Result<Thunk<A, R>, BindError>>;

/// Internal state of a [`Callable`].
///
/// The bound/unbound distinction is an explicit enum rather than a null
/// check so the single-shot binding guard can be exercised in isolation.
enum State<A, R> {
    /// No function at all. Never invokable.
    Empty,
    /// A receiverless function. Invokable, never takes a target.
    Free(Thunk<A, R>),
    /// A receiver-taking function waiting for its target.
    Deferred {
        /// Type name of the expected receiver, for diagnostics.
        expects: &'static str,
        binder: Binder<A, R>,
    },
    /// A function with its target captured. Invokable.
    Bound(Thunk<A, R>),
}

impl<A, R> Clone for State<A, R> {
    fn clone(&self) -> Self {
        match self {
            State::Empty => State::Empty,
            State::Free(f) => State::Free(Rc::clone(f)),
            State::Deferred { expects, binder } => State::Deferred {
                expects: *expects,
                binder: Rc::clone(binder),
            },
            State::Bound(f) => State::Bound(Rc::clone(f)),
        }
    }
}

/// A type-erased callable with signature `A -> R`.
///
/// A `Callable` stores one function of any receiver-taking or receiverless
/// shape behind a uniform call signature. Receiver-taking functions can be
/// constructed with their target up front ([`Callable::bound`]) or left
/// waiting for a single [`Callable::late_bind`] ([`Callable::deferred`]).
///
/// Multi-argument signatures use a tuple for `A`.
///
/// Cloning preserves the bound/unbound state exactly; a clone of a deferred
/// callable is itself bindable, independently of the original.
pub struct Callable<A, R = ()> {
    state: State<A, R>,
}

impl<A: 'static, R: 'static> Callable<A, R> {
    /// A callable with no function at all.
    ///
    /// Never invokable and never bindable; useful as a placeholder slot
    /// before wiring decides what goes there.
    pub fn empty() -> Self {
        Self {
            state: State::Empty,
        }
    }

    /// A callable around a receiverless function.
    ///
    /// Invokable immediately. Has no target slot, so [`Callable::late_bind`]
    /// refuses it and it never reports [`Callable::is_bound`].
    pub fn free(f: impl Fn(A) -> R + 'static) -> Self {
        Self {
            state: State::Free(Rc::new(f)),
        }
    }

    /// A callable around a receiver-taking function, bound to `target` now.
    pub fn bound<T: 'static>(f: impl Fn(&T, A) -> R + 'static, target: &Rc<T>) -> Self {
        let target = Rc::clone(target);
        Self {
            state: State::Bound(Rc::new(move |arg| f(&target, arg))),
        }
    }

    /// A callable around a receiver-taking function, with the target left
    /// open for a later [`Callable::late_bind`].
    pub fn deferred<T: 'static>(f: impl Fn(&T, A) -> R + 'static) -> Self {
        let f = Rc::new(f);
        let binder: Binder<A, R> = Rc::new(move |target: &TargetRef| {
            let target = Rc::clone(target)
                .downcast::<T>()
                .map_err(|_| BindError::WrongTargetType {
                    expected: type_name::<T>(),
                })?;
            let f = Rc::clone(&f);
            Ok(Rc::new(move |arg| f(&target, arg)) as Thunk<A, R>)
        });
        Self {
            state: State::Deferred {
                expects: type_name::<T>(),
                binder,
            },
        }
    }

    /// Attach the target to a deferred callable. Single-shot.
    ///
    /// # Errors
    ///
    /// * [`BindError::AlreadyBound`] - the callable already has its target.
    /// * [`BindError::NoTargetSlot`] - the callable is empty or receiverless.
    /// * [`BindError::WrongTargetType`] - `target` is not the receiver type
    ///   the stored function expects. The callable stays deferred and a
    ///   later bind with the right type succeeds.
    pub fn late_bind(&mut self, target: &TargetRef) -> Result<(), BindError> {
        match &self.state {
            State::Deferred { binder, .. } => {
                let thunk = binder(target)?;
                self.state = State::Bound(thunk);
                Ok(())
            }
            State::Bound(_) => Err(BindError::AlreadyBound),
            State::Empty | State::Free(_) => Err(BindError::NoTargetSlot),
        }
    }

    /// Run the stored function.
    ///
    /// # Panics
    ///
    /// Panics if the callable is empty or still waiting for its target.
    /// Callers gate invocation on [`Callable::is_callable`].
    pub fn invoke(&self, arg: A) -> R {
        match &self.state {
            State::Free(f) | State::Bound(f) => f(arg),
            State::Deferred { expects, .. } => {
                panic!("invoked a callable still waiting for its target (expects {expects})")
            }
            State::Empty => panic!("invoked an empty callable"),
        }
    }

    /// Whether a target has been attached.
    pub fn is_bound(&self) -> bool {
        matches!(self.state, State::Bound(_))
    }

    /// Whether this callable holds no function at all.
    pub fn is_empty(&self) -> bool {
        matches!(self.state, State::Empty)
    }

    /// Whether this callable is waiting for [`Callable::late_bind`].
    pub fn needs_target(&self) -> bool {
        matches!(self.state, State::Deferred { .. })
    }

    /// Whether [`Callable::invoke`] is legal right now.
    pub fn is_callable(&self) -> bool {
        matches!(self.state, State::Free(_) | State::Bound(_))
    }

    /// Type name of the receiver a deferred callable is waiting for.
    pub fn expected_target(&self) -> Option<&'static str> {
        match self.state {
            State::Deferred { expects, .. } => Some(expects),
            _ => None,
        }
    }
}

impl<A: 'static, R: 'static> Default for Callable<A, R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A, R> Clone for Callable<A, R> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<A, R> fmt::Debug for Callable<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Empty => write!(f, "Callable::Empty"),
            State::Free(_) => write!(f, "Callable::Free"),
            State::Deferred { expects, .. } => {
                write!(f, "Callable::Deferred(expects {expects})")
            }
            State::Bound(_) => write!(f, "Callable::Bound"),
        }
    }
}
