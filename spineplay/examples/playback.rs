//! Drives a `ScriptedHost` through the modern playback API, standing in for
//! an engine's update pass.
//!
//! Run with `RUST_LOG=warn` to see the missing-animation diagnostic.

use spineplay::{EVT_FINISHED, FrameEvent, PlaybackEvent, ScriptedHost, SkeletonView};

fn main() {
    env_logger::init();

    let host = ScriptedHost::new("hero", &["idle", "walk", "attack"]);
    let mut view = SkeletonView::new(host);

    view.on_event("footstep", |payload| {
        if let PlaybackEvent::Frame { track, event } = payload {
            println!(
                "footstep during '{}' at t={:.2} (int payload {})",
                track.animation, event.time, event.int_value
            );
        }
    });
    view.on_event(EVT_FINISHED, |payload| {
        if let PlaybackEvent::Completed { track } = payload {
            println!("'{}' finished", track.animation);
        }
    });

    if view.play("attack", false).is_none() {
        return;
    }

    // What the engine would do over a few frames.
    view.host_mut().advance(0.25);
    view.host_mut().fire_frame_event(FrameEvent {
        time: 0.25,
        name: "footstep".to_string(),
        int_value: 80,
        ..FrameEvent::default()
    });
    view.host_mut().advance(0.55);
    view.host_mut().fire_complete();

    // Missing animation: logs a warning, no playback side effect.
    view.play("fly", true);

    view.stop(true);
    println!("stopped; track = {:?}", view.host().current_track());
}
