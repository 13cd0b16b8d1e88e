use crate::{
    animation::ease::Ease,
    effects::{EffectProfile, EmissionWindow},
    foundation::core::{FrameIndex, Vec3},
    foundation::error::{RevealError, RevealResult},
    schedule::ScheduleEntry,
    shape::Shape,
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Key<T> {
    pub frame: FrameIndex,
    pub value: T,
    pub ease: Ease, // toward the next key
}

impl<T> Key<T> {
    pub fn new(frame: u64, value: T, ease: Ease) -> Self {
        Self {
            frame: FrameIndex(frame),
            value,
            ease,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track<T> {
    pub keys: Vec<Key<T>>, // sorted by frame
}

impl<T> Track<T>
where
    T: Lerp + Clone,
{
    pub fn new(keys: Vec<Key<T>>) -> RevealResult<Self> {
        let track = Self { keys };
        track.validate()?;
        Ok(track)
    }

    pub fn validate(&self) -> RevealResult<()> {
        if self.keys.is_empty() {
            return Err(RevealError::validation("track must have at least one key"));
        }
        if !self.keys.windows(2).all(|w| w[0].frame <= w[1].frame) {
            return Err(RevealError::validation("track keys must be sorted by frame"));
        }
        Ok(())
    }

    /// Value at `frame`; holds the first/last value outside the keyed range.
    pub fn sample(&self, frame: FrameIndex) -> RevealResult<T> {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(RevealError::validation("cannot sample an empty track")),
        };

        let idx = self.keys.partition_point(|k| k.frame <= frame);
        if idx == 0 {
            return Ok(first.value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(last.value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((frame.0 - a.frame.0) as f64) / (denom as f64);
        Ok(T::lerp(&a.value, &b.value, a.ease.apply(t)))
    }

    pub fn first_frame(&self) -> Option<FrameIndex> {
        self.keys.first().map(|k| k.frame)
    }

    pub fn last_frame(&self) -> Option<FrameIndex> {
        self.keys.last().map(|k| k.frame)
    }
}

/// Particle-count fade at the end of the piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FadeoutConfig {
    pub start: u64,
    pub end: u64,
}

impl Default for FadeoutConfig {
    fn default() -> Self {
        Self {
            start: 260,
            end: 300,
        }
    }
}

impl FadeoutConfig {
    pub fn validate(&self) -> RevealResult<()> {
        if self.start > self.end {
            return Err(RevealError::configuration("fadeout start must be <= end"));
        }
        Ok(())
    }
}

/// Everything keyed on one shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeTracks {
    pub shape_id: String,
    pub location: Track<Vec3>,
    pub density: Track<f64>,
    pub particle_count: Track<f64>,
}

pub fn motion_track(shape: &Shape, entry: &ScheduleEntry) -> Track<Vec3> {
    Track {
        keys: vec![
            Key::new(entry.start.0, shape.start_position(), Ease::Bezier),
            Key::new(entry.end.0, shape.center(), Ease::Bezier),
        ],
    }
}

/// Off until ignition, full through the entrance, then a linear fade to off.
pub fn density_track(window: &EmissionWindow) -> Track<f64> {
    let mut keys = Vec::with_capacity(4);
    if window.ignite.0 > 0 {
        keys.push(Key::new(0, 0.0, Ease::Constant));
    }
    keys.push(Key::new(window.ignite.0, 1.0, Ease::Constant));
    keys.push(Key::new(window.full_until.0, 1.0, Ease::Linear));
    keys.push(Key::new(window.extinguish.0, 0.0, Ease::Linear));
    Track { keys }
}

pub fn fadeout_track(profile: &EffectProfile, fadeout: FadeoutConfig) -> Track<f64> {
    let full = f64::from(profile.particle_count);
    Track {
        keys: vec![
            Key::new(fadeout.start, full, Ease::Bezier),
            Key::new(fadeout.end, 0.0, Ease::Bezier),
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
