//! The tween sequencer.

use glide_ease::EasingKind;

use crate::segment::Segment;

/// Linear blend between two scalars by factor `t`.
#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// A sequence of eased segments over a logical tick timeline.
///
/// The tween owns an origin value (the value at tick 0), an append-only
/// segment list, and a cursor. Two query modes are supported:
///
/// - [`evaluate`](Tween::evaluate) answers "what is the value at tick N"
///   without touching any state;
/// - [`advance`](Tween::advance) moves the cursor forward and fires
///   completion callbacks on the segments the cursor departs.
///
/// The cursor only moves forward; rewinding means calling
/// [`reset`](Tween::reset), which also clears the sequence. The tween is a
/// single-owner, single-threaded structure: `evaluate` is a pure read, but
/// no internal synchronization is provided, so concurrent mutation must be
/// prevented by the caller.
///
/// # Example
///
/// ```
/// use glide_tween::{EasingKind, Tween};
///
/// let mut position = Tween::new(0.0);
/// position
///     .reset(0.0)
///     .to(100.0, 100, EasingKind::Linear)
///     .wait(20)
///     .to(0.0, 50, EasingKind::QuadraticOut);
///
/// assert_eq!(position.evaluate(50), 50.0);
/// assert_eq!(position.evaluate(110), 100.0); // holding
/// assert_eq!(position.total_duration(), 170);
/// ```
pub struct Tween {
    origin: f32,
    cursor: u32,
    sequence: Vec<Segment>,
}

impl Tween {
    /// Create a tween holding `origin` with an empty sequence.
    pub fn new(origin: f32) -> Self {
        Self {
            origin,
            cursor: 0,
            sequence: Vec::new(),
        }
    }

    /// Clear the sequence, set the value at tick 0 to `origin`, and rewind
    /// the cursor. Returns `&mut Self` so a fresh run can be chained:
    /// `tween.reset(1.0).to(3.0, 2, EasingKind::Linear)`.
    ///
    /// This is also the only way to "cancel" pending segments; their
    /// unfired callbacks are dropped.
    pub fn reset(&mut self, origin: f32) -> &mut Self {
        self.sequence.clear();
        self.origin = origin;
        self.cursor = 0;
        self
    }

    /// Append a segment easing from the current end value to `target` over
    /// `duration` ticks.
    ///
    /// A `duration` of 0 is a valid instant jump: the timeline passes
    /// through `target` without spending any ticks on it. Negative
    /// durations are unrepresentable by construction.
    pub fn to(&mut self, target: f32, duration: u32, easing: EasingKind) -> &mut Self {
        self.sequence.push(Segment::new(target, duration, easing));
        self
    }

    /// Append a hold: a segment that keeps the current end value for
    /// `duration` ticks.
    pub fn wait(&mut self, duration: u32) -> &mut Self {
        let hold = self.end_value();
        self.to(hold, duration, EasingKind::Linear)
    }

    /// Attach a completion callback to the most recently appended segment.
    ///
    /// The callback fires at most once, during the [`advance`](Tween::advance)
    /// call whose step reaches or passes that segment's end boundary.
    ///
    /// # Panics
    ///
    /// Panics if no segment has been appended since construction or the
    /// last [`reset`](Tween::reset); attaching a callback to nothing is a
    /// caller logic error.
    pub fn call<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce() + 'static,
    {
        let segment = self
            .sequence
            .last_mut()
            .expect("call() requires at least one segment; append one with to() first");
        segment.set_callback(Box::new(callback));
        self
    }

    /// Value of the timeline at `position`, independent of the cursor.
    ///
    /// Walks the segments in order until `position` falls inside one, then
    /// blends that segment's endpoints by its eased local progress. A
    /// zero-duration segment is never "inside"; the walk passes through it,
    /// so it contributes its target as the next segment's start value.
    ///
    /// Positions at or past the total duration return the final segment's
    /// target; an empty sequence returns the origin value. This is a pure
    /// read: repeated calls return the same value and never move the
    /// cursor.
    pub fn evaluate(&self, position: u32) -> f32 {
        let mut start = self.origin;
        let mut remaining = position;
        for segment in &self.sequence {
            if remaining < segment.duration() {
                let t = remaining as f32 / segment.duration() as f32;
                let shaped = segment.easing().apply(t);
                return lerp(start, segment.target(), shaped);
            }
            remaining -= segment.duration();
            start = segment.target();
        }
        start
    }

    /// Advance the cursor by `steps` ticks, firing at most one completion
    /// callback.
    ///
    /// Before the cursor moves, the segment under the pre-advance cursor is
    /// checked: if the new cursor position reaches or passes that segment's
    /// end boundary, its callback (if any) fires exactly once, synchronously,
    /// before `advance` returns. The check is edge-triggered on the
    /// crossing, so a large step that leaves the segment entirely still
    /// fires it.
    ///
    /// Only the departing segment is considered. If one call steps across
    /// several segments, callbacks on the fully skipped ones never fire -
    /// this mirrors the engine's long-standing observable behavior and is
    /// deliberate; callers needing catch-up semantics should advance in
    /// smaller steps.
    pub fn advance(&mut self, steps: u32) {
        let old_cursor = self.cursor;
        let new_cursor = old_cursor.saturating_add(steps);

        let mut segment_start = 0u32;
        for segment in &mut self.sequence {
            let segment_end = segment_start.saturating_add(segment.duration());
            if old_cursor < segment_end {
                if new_cursor >= segment_end {
                    if let Some(callback) = segment.take_callback() {
                        log::debug!(
                            "segment completed at tick {} (target {})",
                            segment_end,
                            segment.target()
                        );
                        callback();
                    }
                }
                break;
            }
            segment_start = segment_end;
        }

        self.cursor = new_cursor;
    }

    /// Advance by a single tick. Shorthand for `advance(1)`.
    pub fn step(&mut self) {
        self.advance(1);
    }

    /// Value under the cursor; equivalent to `evaluate(cursor)`.
    pub fn current_value(&self) -> f32 {
        self.evaluate(self.cursor)
    }

    /// The cursor's current tick position.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Sum of all segment durations.
    pub fn total_duration(&self) -> u32 {
        self.sequence
            .iter()
            .fold(0u32, |sum, segment| sum.saturating_add(segment.duration()))
    }

    /// Whether the cursor has reached or passed the end of the sequence.
    /// Trivially true for an empty sequence.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.total_duration()
    }

    /// The appended segments, in timeline order.
    pub fn segments(&self) -> &[Segment] {
        &self.sequence
    }

    /// The value the sequence ends on: the last segment's target, or the
    /// origin value while the sequence is empty.
    pub fn end_value(&self) -> f32 {
        self.sequence
            .last()
            .map(Segment::target)
            .unwrap_or(self.origin)
    }
}

impl std::fmt::Debug for Tween {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("origin", &self.origin)
            .field("cursor", &self.cursor)
            .field("segments", &self.sequence.len())
            .field("total_duration", &self.total_duration())
            .finish()
    }
}
