//! The boundary with the host animation runtime.

use crate::Error;

/// Snapshot of the track entry a host callback refers to.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackInfo {
    pub track_index: usize,
    pub animation: String,
    pub track_time: f32,
}

/// An authored keyframe event, with its user payload fields.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameEvent {
    pub time: f32,
    pub name: String,
    pub int_value: i32,
    pub float_value: f32,
    pub string: String,
}

/// Callback for the host's completion slot.
pub type CompleteCallback = Box<dyn FnMut(&TrackInfo)>;

/// Callback for the host's frame-event slot.
pub type FrameEventCallback = Box<dyn FnMut(&TrackInfo, &FrameEvent)>;

/// The surface this crate consumes from a Spine-style runtime.
///
/// The host owns skeleton data and track state and drives both callback slots
/// from its own update pass. Each slot holds at most one callback; installing
/// a new one replaces the previous.
pub trait SkeletonHost {
    /// Starts the named animation on a track.
    fn set_animation(&mut self, track_index: usize, name: &str, looped: bool)
    -> Result<(), Error>;

    /// Installs or clears the completion callback slot.
    fn set_complete_listener(&mut self, listener: Option<CompleteCallback>);

    /// Installs or clears the frame-event callback slot.
    fn set_event_listener(&mut self, listener: Option<FrameEventCallback>);

    /// Resets all tracks to empty.
    fn clear_tracks(&mut self);

    /// Whether the skeleton's data contains the named animation.
    fn has_animation(&self, name: &str) -> bool;

    /// Diagnostic label for the skeleton.
    fn name(&self) -> &str;
}
