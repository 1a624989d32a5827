//! Tween sequencing over scalar values.
//!
//! This crate provides:
//! - [`Segment`]: one leg of a timeline (target value, duration in ticks,
//!   easing kind, optional completion callback)
//! - [`Tween`]: an ordered sequence of segments with two query modes -
//!   stateless random access via [`Tween::evaluate`] and stateful cursor
//!   advancement via [`Tween::advance`]
//!
//! # Architecture
//!
//! ```text
//! Tween
//!   ├── origin value (value at tick 0)
//!   ├── cursor (caller-driven logical time)
//!   └── Vec<Segment> (append-only per run, cleared by reset)
//! ```
//!
//! Values are one-dimensional `f32` scalars; animate multiple channels by
//! running one tween per channel. Advancement is entirely caller-driven -
//! there is no running/paused state, only the monotonic cursor.
//!
//! # Usage
//!
//! ```
//! use glide_tween::{EasingKind, Tween};
//!
//! let mut tween = Tween::new(0.0);
//! tween
//!     .reset(1.0)
//!     .to(3.0, 2, EasingKind::Linear)
//!     .to(5.0, 2, EasingKind::Linear);
//!
//! assert_eq!(tween.evaluate(3), 4.0);
//! assert_eq!(tween.evaluate(99), 5.0); // past the end clamps
//! ```

mod segment;
mod tween;

pub use glide_ease::EasingKind;
pub use segment::{CompletionCallback, Segment};
pub use tween::Tween;
