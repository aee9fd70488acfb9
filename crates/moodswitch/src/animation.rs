//! Animation timing and keyframe sampling for the mood indicator.
//!
//! Each [`AnimationKind`] other than `None` loops forever over a short
//! keyframe track that drives one property of the indicator:
//!
//! | kind       | property        | track         | duration |
//! |------------|-----------------|---------------|----------|
//! | `bounce`   | vertical offset | 0 → -20 → 0   | 1s       |
//! | `pulse`    | scale           | 1 → 1.2 → 1   | 1.5s     |
//! | `slowFade` | opacity         | 0.5 → 1 → 0.5 | 3s       |
//!
//! Values are linearly interpolated between keyframes.

use std::fmt::Write as _;
use std::time::Duration;

use crate::mood::AnimationKind;

/// The indicator property an animation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatedProperty {
    /// Vertical offset in pixels; negative is up.
    TranslateY,
    Scale,
    Opacity,
}

/// One stop of a keyframe track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Position within one iteration, in `[0, 1]`.
    pub offset: f32,
    pub value: f32,
}

const fn kf(offset: f32, value: f32) -> Keyframe {
    Keyframe { offset, value }
}

const BOUNCE: [Keyframe; 3] = [kf(0.0, 0.0), kf(0.5, -20.0), kf(1.0, 0.0)];
const PULSE: [Keyframe; 3] = [kf(0.0, 1.0), kf(0.5, 1.2), kf(1.0, 1.0)];
const SLOW_FADE: [Keyframe; 3] = [kf(0.0, 0.5), kf(0.5, 1.0), kf(1.0, 0.5)];

/// The sampled state of the indicator at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub offset_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Frame {
    /// The indicator with no animation applied.
    pub const REST: Frame = Frame {
        offset_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };
}

impl Default for Frame {
    fn default() -> Self {
        Frame::REST
    }
}

/// An infinitely repeating keyframe animation.
///
/// # Example
///
/// ```rust
/// use moodswitch::{Animation, AnimationKind};
/// use std::time::Duration;
///
/// let pulse = Animation::for_kind(AnimationKind::Pulse).unwrap();
/// assert_eq!(pulse.shorthand(), "pulse 1.5s infinite");
///
/// let peak = pulse.sample(Duration::from_millis(750));
/// assert!((peak.scale - 1.2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    kind: AnimationKind,
    duration: Duration,
    property: AnimatedProperty,
    keyframes: &'static [Keyframe],
}

impl Animation {
    /// The animation for `kind`, or `None` for [`AnimationKind::None`].
    pub fn for_kind(kind: AnimationKind) -> Option<Animation> {
        let (duration_ms, property, keyframes): (u64, _, &'static [Keyframe]) = match kind {
            AnimationKind::None => return None,
            AnimationKind::Bounce => (1000, AnimatedProperty::TranslateY, &BOUNCE),
            AnimationKind::Pulse => (1500, AnimatedProperty::Scale, &PULSE),
            AnimationKind::SlowFade => (3000, AnimatedProperty::Opacity, &SLOW_FADE),
        };
        Some(Animation {
            kind,
            duration: Duration::from_millis(duration_ms),
            property,
            keyframes,
        })
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// Length of one iteration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn property(&self) -> AnimatedProperty {
        self.property
    }

    pub fn keyframes(&self) -> &'static [Keyframe] {
        self.keyframes
    }

    /// Fraction of the current iteration elapsed, in `[0, 1)`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let period = self.duration.as_nanos();
        (elapsed.as_nanos() % period) as f32 / period as f32
    }

    /// Samples the animation `elapsed` after it started.
    pub fn sample(&self, elapsed: Duration) -> Frame {
        let value = interpolate(self.keyframes, self.progress(elapsed));
        let mut frame = Frame::REST;
        match self.property {
            AnimatedProperty::TranslateY => frame.offset_y = value,
            AnimatedProperty::Scale => frame.scale = value,
            AnimatedProperty::Opacity => frame.opacity = value,
        }
        frame
    }

    /// The `animation` shorthand, e.g. `bounce 1s infinite`.
    pub fn shorthand(&self) -> String {
        format!(
            "{} {}s infinite",
            self.kind.name(),
            self.duration.as_secs_f32()
        )
    }

    /// The `@keyframes` rule for this animation.
    pub fn keyframes_css(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.kind.name());
        for keyframe in self.keyframes {
            let declaration = match self.property {
                AnimatedProperty::TranslateY => {
                    format!("transform: translateY({}px)", keyframe.value)
                }
                AnimatedProperty::Scale => format!("transform: scale({})", keyframe.value),
                AnimatedProperty::Opacity => format!("opacity: {}", keyframe.value),
            };
            // Writing to a String cannot fail.
            let _ = writeln!(
                css,
                "  {}% {{ {}; }}",
                (keyframe.offset * 100.0).round(),
                declaration
            );
        }
        css.push('}');
        css
    }
}

/// Samples the indicator for `kind`; [`Frame::REST`] when it has no animation.
pub fn frame_at(kind: AnimationKind, elapsed: Duration) -> Frame {
    Animation::for_kind(kind)
        .map(|animation| animation.sample(elapsed))
        .unwrap_or(Frame::REST)
}

fn interpolate(track: &[Keyframe], t: f32) -> f32 {
    let Some(first) = track.first() else {
        return 0.0;
    };
    if t <= first.offset {
        return first.value;
    }
    for pair in track.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f32::EPSILON {
                return b.value;
            }
            return a.value + (b.value - a.value) * (t - a.offset) / span;
        }
    }
    track.last().map_or(first.value, |last| last.value)
}
