//! The skeleton view: playback control plus named-event multiplexing.

use crate::{Error, EventHub, FrameEvent, ListenerId, SkeletonHost, TrackInfo};
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;

/// Event name the completion of a non-looping animation is published under.
pub const EVT_FINISHED: &str = "PLAY_ANI_FINISHED";

/// Payload delivered to [`SkeletonView::on_event`] listeners.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackEvent {
    /// Published under [`EVT_FINISHED`] when the host reports completion.
    Completed { track: TrackInfo },
    /// Published under the frame event's own name.
    Frame { track: TrackInfo, event: FrameEvent },
}

/// One-shot completion callback for the legacy playback path.
pub type EndCallback = Box<dyn FnOnce()>;

/// Frame-event-name callback for the legacy playback path.
pub type NamedEventCallback = Box<dyn FnMut(&str)>;

/// Wraps one host skeleton with chainable playback control and an event hub
/// that turns the host's single-slot callbacks into any number of
/// independently removable named listeners.
///
/// Each view owns its hub; views never share listener state. The host-facing
/// forwarding callbacks are installed once, on the first subscription that
/// needs them, so registering listeners for several frame-event names
/// accumulates instead of one registration clobbering another.
pub struct SkeletonView<H> {
    host: H,
    hub: Rc<RefCell<EventHub<PlaybackEvent>>>,
    complete_forwarder: bool,
    frame_forwarder: bool,
}

impl<H: SkeletonHost> SkeletonView<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            hub: Rc::new(RefCell::new(EventHub::new())),
            complete_forwarder: false,
            frame_forwarder: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Starts the named animation on track 0.
    ///
    /// If the skeleton's data has no such animation, logs a warning naming the
    /// skeleton, leaves playback untouched and returns `None`. On success
    /// returns the view for chaining. Listeners are not affected either way.
    pub fn play(&mut self, name: &str, looped: bool) -> Option<&mut Self> {
        if !self.host.has_animation(name) {
            warn!(
                "skeleton '{}' has no animation named '{}'",
                self.host.name(),
                name
            );
            return None;
        }
        if let Err(err) = self.host.set_animation(0, name, looped) {
            warn!(
                "skeleton '{}' failed to start animation '{name}': {err}",
                self.host.name()
            );
            return None;
        }
        Some(self)
    }

    /// Registers a listener for a named animation event.
    ///
    /// [`EVT_FINISHED`] listeners fire at most once and are then removed;
    /// every other name is an authored frame-event name and stays registered
    /// until [`off_event`](Self::off_event) or [`stop`](Self::stop).
    pub fn on_event<F>(&mut self, event: &str, callback: F) -> ListenerId
    where
        F: FnMut(&PlaybackEvent) + 'static,
    {
        if event == EVT_FINISHED {
            let id = self.hub.borrow_mut().once(EVT_FINISHED, callback);
            if !self.complete_forwarder {
                let hub = Rc::clone(&self.hub);
                self.host.set_complete_listener(Some(Box::new(move |track| {
                    let payload = PlaybackEvent::Completed {
                        track: track.clone(),
                    };
                    hub.borrow_mut().emit(EVT_FINISHED, &payload);
                })));
                self.complete_forwarder = true;
            }
            id
        } else {
            let id = self.hub.borrow_mut().on(event, callback);
            if !self.frame_forwarder {
                let hub = Rc::clone(&self.hub);
                self.host
                    .set_event_listener(Some(Box::new(move |track, frame| {
                        let payload = PlaybackEvent::Frame {
                            track: track.clone(),
                            event: frame.clone(),
                        };
                        hub.borrow_mut().emit(&frame.name, &payload);
                    })));
                self.frame_forwarder = true;
            }
            id
        }
    }

    /// Removes one listener. Returns whether it was still registered.
    pub fn off_event(&mut self, event: &str, id: ListenerId) -> bool {
        self.hub.borrow_mut().off(event, id)
    }

    /// Clears both host callback slots and every registered listener; resets
    /// all tracks as well when `clear` is true.
    pub fn stop(&mut self, clear: bool) {
        self.host.set_event_listener(None);
        self.host.set_complete_listener(None);
        self.complete_forwarder = false;
        self.frame_forwarder = false;

        if clear {
            self.host.clear_tracks();
        }

        self.hub.borrow_mut().clear();
    }

    /// Starts the named animation on track 0, wiring the optional callbacks
    /// straight into the host's slots.
    ///
    /// `end_call` fires at most once. Unlike [`on_event`](Self::on_event),
    /// this path bypasses the event hub and overwrites whatever the host's
    /// slots held, including wiring installed by `on_event`.
    #[deprecated(since = "0.1.0", note = "use `play` and `on_event`")]
    pub fn run_ani(
        &mut self,
        name: &str,
        looped: bool,
        end_call: Option<EndCallback>,
        event_call: Option<NamedEventCallback>,
    ) -> Result<(), Error> {
        if let Some(end) = end_call {
            let mut end = Some(end);
            self.host.set_complete_listener(Some(Box::new(move |_track| {
                if let Some(end) = end.take() {
                    end();
                }
            })));
            self.complete_forwarder = false;
        }
        if let Some(mut on_name) = event_call {
            self.host
                .set_event_listener(Some(Box::new(move |_track, frame| on_name(&frame.name))));
            self.frame_forwarder = false;
        }
        self.host.set_animation(0, name, looped)
    }

    /// Clears both host callback slots; tracks keep playing.
    #[deprecated(since = "0.1.0", note = "use `stop`")]
    pub fn stop_ani(&mut self) {
        self.host.set_event_listener(None);
        self.host.set_complete_listener(None);
        self.complete_forwarder = false;
        self.frame_forwarder = false;
    }

    /// Clears both host callback slots and resets all tracks.
    #[deprecated(since = "0.1.0", note = "use `stop`")]
    pub fn stop_all_ani(&mut self) {
        self.host.set_event_listener(None);
        self.host.set_complete_listener(None);
        self.complete_forwarder = false;
        self.frame_forwarder = false;
        self.host.clear_tracks();
    }
}

impl<H: std::fmt::Debug> std::fmt::Debug for SkeletonView<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkeletonView")
            .field("host", &self.host)
            .field("listeners", &self.hub.borrow().len())
            .field("complete_forwarder", &self.complete_forwarder)
            .field("frame_forwarder", &self.frame_forwarder)
            .finish()
    }
}
