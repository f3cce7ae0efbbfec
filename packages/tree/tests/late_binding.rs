//! End-to-end wiring scenarios: declare callables by name before the tree
//! exists, assemble the tree, bind once, invoke many.

use std::cell::RefCell;
use std::rc::Rc;

use latewire_core::{Error, LateBound, ResolveError, Tagged};
use latewire_tree::Component;

struct SoundDevice {
    played: RefCell<Vec<i32>>,
}

impl SoundDevice {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            played: RefCell::new(Vec::new()),
        })
    }

    fn play(&self, note: i32) {
        self.played.borrow_mut().push(note);
    }

    fn note_count(&self, _: ()) -> usize {
        self.played.borrow().len()
    }
}

impl Tagged for SoundDevice {
    fn tag(&self) -> &str {
        "sound1"
    }
}

#[test]
fn declare_before_the_target_exists_then_bind_and_invoke() {
    // Wiring is declared first; no SoundDevice exists yet.
    let mut play: LateBound<i32> = LateBound::named(SoundDevice::play, "play", "sound1");
    assert_eq!(play.target_name(), Some("sound1"));
    assert!(!play.is_callable());

    // Now the tree comes up.
    let device = SoundDevice::new();
    let root = Component::root("machine");
    root.add_child_object("sound1", Rc::clone(&device));

    play.bind(&root).unwrap();
    assert!(play.is_bound());

    play.invoke(60);
    play.invoke(64);
    play.invoke(67);
    assert_eq!(*device.played.borrow(), vec![60, 64, 67]);
}

#[test]
fn bind_fails_when_the_subtree_lacks_the_target() {
    let bare = Component::root("machine");
    bare.add_child("video");

    let mut play: LateBound<i32> = LateBound::named(SoundDevice::play, "play", "sound1");

    let err = play.bind(&bare).unwrap_err();
    assert_eq!(
        err,
        Error::Resolve(ResolveError::NotFound {
            name: "sound1".to_string(),
            root: ":".to_string(),
        })
    );
    assert!(!play.is_bound());

    // Retry against a tree that does contain the target.
    let device = SoundDevice::new();
    let full = Component::root("machine");
    full.add_child_object("sound1", Rc::clone(&device));

    play.bind(&full).unwrap();
    play.invoke(72);
    assert_eq!(*device.played.borrow(), vec![72]);
}

#[test]
fn absolute_and_relative_names_reach_the_same_object() {
    let device = SoundDevice::new();
    let root = Component::root("machine");
    root.add_child_object("sound1", Rc::clone(&device));
    let bus = root.add_child("bus");

    // Relative name from the tree root.
    let mut relative: LateBound<i32> = LateBound::named(SoundDevice::play, "play", "sound1");
    relative.bind(&root).unwrap();

    // Absolute name from a different search root.
    let mut absolute: LateBound<i32> = LateBound::named(SoundDevice::play, "play", ":sound1");
    absolute.bind(&bus).unwrap();

    relative.invoke(1);
    absolute.invoke(2);
    assert_eq!(*device.played.borrow(), vec![1, 2]);
}

#[test]
fn already_bound_callables_never_consult_the_tree() {
    let device = SoundDevice::new();
    let mut play = LateBound::with_target(SoundDevice::play, "play", &device);

    // This tree has no "sound1"; binding would fail if it were attempted.
    let unrelated = Component::root("machine");

    play.bind(&unrelated).unwrap();
    play.bind(&unrelated).unwrap();

    play.invoke(43);
    assert_eq!(*device.played.borrow(), vec![43]);
}

#[test]
fn copy_with_search_root_equals_copy_then_bind() {
    let device = SoundDevice::new();
    let root = Component::root("machine");
    root.add_child_object("sound1", Rc::clone(&device));

    let template: LateBound<i32> = LateBound::named(SoundDevice::play, "play", "sound1");

    let combined = LateBound::bound_to(&template, &root).unwrap();
    let stepwise = {
        let mut copy = template.clone();
        copy.bind(&root).unwrap();
        copy
    };

    combined.invoke(10);
    stepwise.invoke(20);
    assert_eq!(*device.played.borrow(), vec![10, 20]);
    assert!(template.needs_target());
}

#[test]
fn tagged_targets_declare_their_name_for_validation() {
    let device = SoundDevice::new();
    let play = LateBound::with_tagged_target(SoundDevice::play, "play", &device);

    // Validation tooling can see the declared wiring without resolving.
    assert_eq!(play.target_name(), Some("sound1"));
    assert!(play.is_bound());
}

#[test]
fn non_unit_returns_flow_through_the_full_stack() {
    let device = SoundDevice::new();
    let root = Component::root("machine");
    root.add_child_object("sound1", Rc::clone(&device));

    let mut play: LateBound<i32> = LateBound::named(SoundDevice::play, "play", "sound1");
    let mut count: LateBound<(), usize> =
        LateBound::named(SoundDevice::note_count, "note_count", "sound1");

    play.bind(&root).unwrap();
    count.bind(&root).unwrap();

    assert_eq!(count.invoke(()), 0);
    play.invoke(60);
    play.invoke(62);
    assert_eq!(count.invoke(()), 2);
}

#[test]
fn nested_tags_resolve_through_the_path() {
    let device = SoundDevice::new();
    let root = Component::root("machine");
    let bus = root.add_child("bus");
    bus.add_child_object("sound1", Rc::clone(&device));

    let mut play: LateBound<i32> = LateBound::named(SoundDevice::play, "play", "bus:sound1");
    play.bind(&root).unwrap();
    play.invoke(48);
    assert_eq!(*device.played.borrow(), vec![48]);
}

#[test]
fn components_without_objects_cannot_be_bound_to() {
    let root = Component::root("machine");
    root.add_child("video");

    let mut play: LateBound<i32> = LateBound::named(SoundDevice::play, "play", "video");
    let err = play.bind(&root).unwrap_err();
    assert!(matches!(
        err,
        Error::Resolve(ResolveError::Unbindable { .. })
    ));
    assert!(!play.is_bound());
}

#[test]
fn wrong_receiver_type_is_reported_and_retryable() {
    struct VideoDevice;

    let root = Component::root("machine");
    root.add_child_object("sound1", Rc::new(VideoDevice));

    let mut play: LateBound<i32> = LateBound::named(SoundDevice::play, "play", "sound1");
    let err = play.bind(&root).unwrap_err();
    assert!(matches!(err, Error::Bind(_)));
    assert!(!play.is_bound());

    // Replace the object and bind again.
    let device = SoundDevice::new();
    let sound1 = root.find("sound1").unwrap();
    sound1.set_object(Rc::clone(&device) as latewire_tree::TargetRef);

    play.bind(&root).unwrap();
    play.invoke(36);
    assert_eq!(*device.played.borrow(), vec![36]);
}
