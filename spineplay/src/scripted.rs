//! In-memory host for tests and demos.

use crate::{CompleteCallback, Error, FrameEvent, FrameEventCallback, SkeletonHost, TrackInfo};

/// What a [`ScriptedHost`] track is currently playing.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackState {
    pub animation: String,
    pub looped: bool,
}

/// A complete [`SkeletonHost`] with no engine behind it.
///
/// Holds the animation-name set, a single track record and the two callback
/// slots; the `fire_*` methods play the role of the engine's update pass.
/// Useful for exercising playback wiring in tests without a real runtime.
pub struct ScriptedHost {
    name: String,
    animations: Vec<String>,
    track: Option<TrackState>,
    track_time: f32,
    complete_listener: Option<CompleteCallback>,
    event_listener: Option<FrameEventCallback>,
    set_animation_calls: usize,
    complete_listener_installs: usize,
    event_listener_installs: usize,
}

impl ScriptedHost {
    pub fn new(name: &str, animations: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            animations: animations.iter().map(|s| s.to_string()).collect(),
            track: None,
            track_time: 0.0,
            complete_listener: None,
            event_listener: None,
            set_animation_calls: 0,
            complete_listener_installs: 0,
            event_listener_installs: 0,
        }
    }

    pub fn current_track(&self) -> Option<&TrackState> {
        self.track.as_ref()
    }

    pub fn has_complete_listener(&self) -> bool {
        self.complete_listener.is_some()
    }

    pub fn has_event_listener(&self) -> bool {
        self.event_listener.is_some()
    }

    /// Number of successful and failed `set_animation` calls seen.
    pub fn set_animation_calls(&self) -> usize {
        self.set_animation_calls
    }

    /// Number of times a completion callback was installed (clears excluded).
    pub fn complete_listener_installs(&self) -> usize {
        self.complete_listener_installs
    }

    /// Number of times a frame-event callback was installed (clears excluded).
    pub fn event_listener_installs(&self) -> usize {
        self.event_listener_installs
    }

    /// Advances the pretend track clock.
    pub fn advance(&mut self, delta: f32) {
        self.track_time += delta;
    }

    fn track_info(&self) -> TrackInfo {
        TrackInfo {
            track_index: 0,
            animation: self
                .track
                .as_ref()
                .map(|t| t.animation.clone())
                .unwrap_or_default(),
            track_time: self.track_time,
        }
    }

    /// Invokes the completion slot, as the engine would when the current
    /// animation finishes.
    pub fn fire_complete(&mut self) {
        let info = self.track_info();
        if let Some(listener) = self.complete_listener.as_mut() {
            listener(&info);
        }
    }

    /// Invokes the frame-event slot, as the engine would when playback
    /// crosses the named keyframe marker.
    pub fn fire_frame_event(&mut self, event: FrameEvent) {
        let info = self.track_info();
        if let Some(listener) = self.event_listener.as_mut() {
            listener(&info, &event);
        }
    }
}

impl SkeletonHost for ScriptedHost {
    fn set_animation(
        &mut self,
        track_index: usize,
        name: &str,
        looped: bool,
    ) -> Result<(), Error> {
        self.set_animation_calls += 1;
        if track_index != 0 {
            return Err(Error::InvalidTrackIndex { index: track_index });
        }
        if !self.animations.iter().any(|a| a == name) {
            return Err(Error::UnknownAnimation {
                name: name.to_string(),
            });
        }
        self.track = Some(TrackState {
            animation: name.to_string(),
            looped,
        });
        self.track_time = 0.0;
        Ok(())
    }

    fn set_complete_listener(&mut self, listener: Option<CompleteCallback>) {
        if listener.is_some() {
            self.complete_listener_installs += 1;
        }
        self.complete_listener = listener;
    }

    fn set_event_listener(&mut self, listener: Option<FrameEventCallback>) {
        if listener.is_some() {
            self.event_listener_installs += 1;
        }
        self.event_listener = listener;
    }

    fn clear_tracks(&mut self) {
        self.track = None;
        self.track_time = 0.0;
    }

    fn has_animation(&self, name: &str) -> bool {
        self.animations.iter().any(|a| a == name)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for ScriptedHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedHost")
            .field("name", &self.name)
            .field("animations", &self.animations)
            .field("track", &self.track)
            .field("track_time", &self.track_time)
            .field("complete_listener", &self.complete_listener.is_some())
            .field("event_listener", &self.event_listener.is_some())
            .finish()
    }
}
