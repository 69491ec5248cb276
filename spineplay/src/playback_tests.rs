#![allow(deprecated)]

use crate::{EVT_FINISHED, FrameEvent, PlaybackEvent, ScriptedHost, SkeletonView};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn hero() -> SkeletonView<ScriptedHost> {
    SkeletonView::new(ScriptedHost::new("hero", &["idle", "walk", "attack"]))
}

fn frame_event(name: &str) -> FrameEvent {
    FrameEvent {
        name: name.to_string(),
        ..FrameEvent::default()
    }
}

#[test]
fn play_unknown_name_is_a_no_op() {
    let mut view = hero();

    assert!(view.play("fly", true).is_none());

    assert!(view.host().current_track().is_none());
    assert_eq!(view.host().set_animation_calls(), 0);
}

#[test]
fn play_sets_the_track_and_chains() {
    let mut view = hero();

    let chained = view
        .play("walk", true)
        .and_then(|view| view.play("attack", false));
    assert!(chained.is_some());

    let track = view.host().current_track().expect("track set");
    assert_eq!(track.animation, "attack");
    assert!(!track.looped);
}

#[test]
fn play_keeps_the_previous_track_on_a_miss() {
    let mut view = hero();
    view.play("walk", true);

    assert!(view.play("fly", false).is_none());

    let track = view.host().current_track().expect("track kept");
    assert_eq!(track.animation, "walk");
    assert!(track.looped);
}

#[test]
fn completion_listener_fires_at_most_once() {
    let mut view = hero();
    let fired = Rc::new(Cell::new(0u32));
    {
        let fired = Rc::clone(&fired);
        view.on_event(EVT_FINISHED, move |_| fired.set(fired.get() + 1));
    }
    view.play("attack", false);

    view.host_mut().fire_complete();
    view.host_mut().fire_complete();

    assert_eq!(fired.get(), 1);
}

#[test]
fn completion_payload_names_the_finished_animation() {
    let mut view = hero();
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        view.on_event(EVT_FINISHED, move |payload| {
            if let PlaybackEvent::Completed { track } = payload {
                seen.borrow_mut().push(track.animation.clone());
            }
        });
    }
    view.play("attack", false);

    view.host_mut().fire_complete();

    assert_eq!(*seen.borrow(), vec!["attack"]);
}

#[test]
fn frame_listener_hears_only_its_own_event_name() {
    let mut view = hero();
    let hits = Rc::new(Cell::new(0u32));
    {
        let hits = Rc::clone(&hits);
        view.on_event("footstep", move |_| hits.set(hits.get() + 1));
    }
    view.play("walk", true);

    view.host_mut().fire_frame_event(frame_event("swing"));
    view.host_mut().fire_frame_event(frame_event("footstep"));

    assert_eq!(hits.get(), 1);
}

#[test]
fn frame_listeners_for_different_names_accumulate() {
    let mut view = hero();
    let rows = Rc::new(RefCell::new(Vec::new()));
    for name in ["footstep", "swing"] {
        let rows = Rc::clone(&rows);
        view.on_event(name, move |payload| {
            if let PlaybackEvent::Frame { event, .. } = payload {
                rows.borrow_mut().push(event.name.clone());
            }
        });
    }
    view.play("walk", true);

    view.host_mut().fire_frame_event(frame_event("swing"));
    view.host_mut().fire_frame_event(frame_event("footstep"));

    assert_eq!(*rows.borrow(), vec!["swing", "footstep"]);
    // Both registrations share one host-side forwarder.
    assert_eq!(view.host().event_listener_installs(), 1);
}

#[test]
fn completion_forwarder_is_installed_once() {
    let mut view = hero();
    view.on_event(EVT_FINISHED, |_| {});
    view.on_event(EVT_FINISHED, |_| {});

    assert_eq!(view.host().complete_listener_installs(), 1);
}

#[test]
fn off_event_silences_a_listener() {
    let mut view = hero();
    let hits = Rc::new(Cell::new(0u32));
    let id = {
        let hits = Rc::clone(&hits);
        view.on_event("footstep", move |_| hits.set(hits.get() + 1))
    };
    view.play("walk", true);

    assert!(view.off_event("footstep", id));
    view.host_mut().fire_frame_event(frame_event("footstep"));

    assert_eq!(hits.get(), 0);
    assert!(!view.off_event("footstep", id));
}

#[test]
fn stop_with_clear_resets_everything() {
    let mut view = hero();
    let hits = Rc::new(Cell::new(0u32));
    {
        let hits = Rc::clone(&hits);
        view.on_event(EVT_FINISHED, move |_| hits.set(hits.get() + 1));
    }
    {
        let hits = Rc::clone(&hits);
        view.on_event("footstep", move |_| hits.set(hits.get() + 1));
    }
    view.play("attack", false);

    view.stop(true);

    assert!(view.host().current_track().is_none());
    assert!(!view.host().has_complete_listener());
    assert!(!view.host().has_event_listener());

    // Even with the host made to emit again, nothing is delivered.
    view.host_mut().fire_complete();
    view.host_mut().fire_frame_event(frame_event("footstep"));
    assert_eq!(hits.get(), 0);
}

#[test]
fn stop_without_clear_keeps_the_track() {
    let mut view = hero();
    view.on_event("footstep", |_| {});
    view.play("walk", true);

    view.stop(false);

    let track = view.host().current_track().expect("track survives stop");
    assert_eq!(track.animation, "walk");
    assert!(!view.host().has_complete_listener());
    assert!(!view.host().has_event_listener());
}

#[test]
fn listeners_registered_after_stop_work_again() {
    let mut view = hero();
    view.on_event("footstep", |_| {});
    view.stop(false);

    let hits = Rc::new(Cell::new(0u32));
    {
        let hits = Rc::clone(&hits);
        view.on_event("footstep", move |_| hits.set(hits.get() + 1));
    }
    view.play("walk", true);
    view.host_mut().fire_frame_event(frame_event("footstep"));

    assert_eq!(hits.get(), 1);
    // stop() uninstalled the forwarder, so it was hooked twice in total.
    assert_eq!(view.host().event_listener_installs(), 2);
}

#[test]
fn hubs_are_per_view() {
    let mut a = hero();
    let mut b = hero();
    let hits = Rc::new(Cell::new(0u32));
    {
        let hits = Rc::clone(&hits);
        a.on_event("footstep", move |_| hits.set(hits.get() + 1));
    }
    b.play("walk", true);

    b.host_mut().fire_frame_event(frame_event("footstep"));

    assert_eq!(hits.get(), 0);
    // The forwarder went to a's host only.
    assert!(a.host().has_event_listener());
    assert!(!b.host().has_event_listener());
}

#[test]
fn run_ani_end_call_fires_once() {
    let mut view = hero();
    let fired = Rc::new(Cell::new(0u32));
    let end = {
        let fired = Rc::clone(&fired);
        Box::new(move || fired.set(fired.get() + 1))
    };

    view.run_ani("attack", false, Some(end), None).unwrap();
    view.host_mut().fire_complete();
    view.host_mut().fire_complete();

    assert_eq!(fired.get(), 1);
    let track = view.host().current_track().expect("track set");
    assert_eq!(track.animation, "attack");
}

#[test]
fn run_ani_forwards_frame_event_names() {
    let mut view = hero();
    let rows = Rc::new(RefCell::new(Vec::new()));
    let on_name = {
        let rows = Rc::clone(&rows);
        Box::new(move |name: &str| rows.borrow_mut().push(name.to_string()))
    };

    view.run_ani("walk", true, None, Some(on_name)).unwrap();
    view.host_mut().fire_frame_event(frame_event("swing"));
    view.host_mut().fire_frame_event(frame_event("footstep"));

    assert_eq!(*rows.borrow(), vec!["swing", "footstep"]);
}

#[test]
fn run_ani_propagates_unknown_animation() {
    let mut view = hero();

    let err = view.run_ani("fly", false, None, None).unwrap_err();

    assert!(matches!(err, crate::Error::UnknownAnimation { .. }));
}

#[test]
fn on_event_rehooks_after_a_legacy_overwrite() {
    let mut view = hero();
    let hits = Rc::new(Cell::new(0u32));
    view.on_event("footstep", |_| {});

    // Legacy wiring clobbers the host's frame-event slot.
    view.run_ani("walk", true, None, Some(Box::new(|_| {})))
        .unwrap();

    {
        let hits = Rc::clone(&hits);
        view.on_event("swing", move |_| hits.set(hits.get() + 1));
    }
    view.host_mut().fire_frame_event(frame_event("swing"));

    assert_eq!(hits.get(), 1);
    // Forwarder, legacy callback, forwarder again.
    assert_eq!(view.host().event_listener_installs(), 3);
}

#[test]
fn stop_ani_clears_slots_but_not_the_track() {
    let mut view = hero();
    view.run_ani("walk", true, Some(Box::new(|| {})), Some(Box::new(|_| {})))
        .unwrap();

    view.stop_ani();

    assert!(!view.host().has_complete_listener());
    assert!(!view.host().has_event_listener());
    assert!(view.host().current_track().is_some());
}

#[test]
fn stop_all_ani_also_clears_tracks() {
    let mut view = hero();
    view.run_ani("walk", true, None, None).unwrap();

    view.stop_all_ani();

    assert!(!view.host().has_complete_listener());
    assert!(!view.host().has_event_listener());
    assert!(view.host().current_track().is_none());
}
