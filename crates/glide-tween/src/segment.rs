//! Timeline segments.

use glide_ease::EasingKind;

/// Callback invoked when the cursor crosses a segment's end boundary.
///
/// Fired at most once, synchronously and inline during [`Tween::advance`],
/// on the caller's thread, before `advance` returns. The callback has no
/// access to the tween; re-entering the owning tween's mutating operations
/// through captured state is unsupported.
///
/// [`Tween::advance`]: crate::Tween::advance
pub type CompletionCallback = Box<dyn FnOnce()>;

/// One leg of a tween sequence.
///
/// A segment eases from the previous segment's target (or the tween's
/// origin value) to its own target over `duration` ticks. Segments are
/// immutable once appended, except for attaching a completion callback to
/// the most recently appended one.
pub struct Segment {
    target: f32,
    duration: u32,
    easing: EasingKind,
    on_complete: Option<CompletionCallback>,
}

impl Segment {
    pub(crate) fn new(target: f32, duration: u32, easing: EasingKind) -> Self {
        Self {
            target,
            duration,
            easing,
            on_complete: None,
        }
    }

    /// The value this segment eases toward.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Length of this segment in ticks. Zero is a valid instant jump;
    /// negative durations are unrepresentable.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// The curve shaping this segment's progress.
    pub fn easing(&self) -> EasingKind {
        self.easing
    }

    /// Whether a completion callback is still pending.
    pub fn has_callback(&self) -> bool {
        self.on_complete.is_some()
    }

    pub(crate) fn set_callback(&mut self, callback: CompletionCallback) {
        self.on_complete = Some(callback);
    }

    /// Detach the callback for firing; subsequent takes return `None`.
    pub(crate) fn take_callback(&mut self) -> Option<CompletionCallback> {
        self.on_complete.take()
    }
}

impl std::fmt::Debug for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segment")
            .field("target", &self.target)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}
