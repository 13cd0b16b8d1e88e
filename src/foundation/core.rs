use crate::foundation::error::{RevealError, RevealResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> RevealResult<Self> {
        if start.0 > end.0 {
            return Err(RevealError::configuration(
                "FrameRange start must be <= end",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// World-space vector. `y` is depth (away from the camera), `z` is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        self.add(other.sub(self).scale(t))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }
}

/// Axis-aligned bounding box.
///
/// Corners are not required to be ordered; inverted boxes report absolute extents.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of the given per-axis `size` centered on `center`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.scale(0.5);
        Self {
            min: center.sub(half),
            max: center.add(half),
        }
    }

    pub fn point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    pub fn center(&self) -> Vec3 {
        self.min.lerp(self.max, 0.5)
    }

    pub fn extents(&self) -> Vec3 {
        let d = self.max.sub(self.min);
        Vec3::new(d.x.abs(), d.y.abs(), d.z.abs())
    }

    /// Extent along the largest axis.
    pub fn size(&self) -> f64 {
        let e = self.extents();
        e.x.max(e.y).max(e.z)
    }

    pub fn union(&self, other: &Self) -> Self {
        let (a0, a1) = self.ordered();
        let (b0, b1) = other.ordered();
        Self {
            min: a0.min(b0),
            max: a1.max(b1),
        }
    }

    pub fn include(&self, p: Vec3) -> Self {
        self.union(&Self::point(p))
    }

    pub fn pad(&self, by: f64) -> Self {
        let (lo, hi) = self.ordered();
        let d = Vec3::new(by, by, by);
        Self {
            min: lo.sub(d),
            max: hi.add(d),
        }
    }

    pub fn contains(&self, p: Vec3) -> bool {
        let (lo, hi) = self.ordered();
        lo.x <= p.x && p.x <= hi.x && lo.y <= p.y && p.y <= hi.y && lo.z <= p.z && p.z <= hi.z
    }

    fn ordered(&self) -> (Vec3, Vec3) {
        (self.min.min(self.max), self.min.max(self.max))
    }
}

/// Straight (non-premultiplied) linear RGBA in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_valid(self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_range_contains_boundaries() {
        let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
        assert!(!r.contains(FrameIndex(1)));
        assert!(r.contains(FrameIndex(2)));
        assert!(r.contains(FrameIndex(4)));
        assert!(!r.contains(FrameIndex(5)));
        assert_eq!(r.len_frames(), 3);
    }

    #[test]
    fn frame_range_rejects_inverted() {
        assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    }

    #[test]
    fn aabb_center_and_size() {
        let b = Aabb::new(Vec3::new(-1.0, 0.0, -0.25), Vec3::new(1.0, 0.5, 0.25));
        assert_eq!(b.center(), Vec3::new(0.0, 0.25, 0.0));
        assert_eq!(b.size(), 2.0);
    }

    #[test]
    fn inverted_box_reports_absolute_size() {
        let b = Aabb::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(-2.0, 1.0, 1.0));
        assert_eq!(b.size(), 3.0);
        assert!(b.contains(Vec3::new(0.0, 1.0, 1.0)));
    }

    #[test]
    fn zero_volume_box_has_zero_size() {
        let b = Aabb::point(Vec3::new(4.0, 0.0, 1.0));
        assert_eq!(b.size(), 0.0);
        assert_eq!(b.center(), Vec3::new(4.0, 0.0, 1.0));
    }

    #[test]
    fn union_and_pad_cover_inputs() {
        let a = Aabb::point(Vec3::new(-1.0, 0.0, 0.0));
        let b = a.include(Vec3::new(3.0, 20.0, -2.0)).pad(1.0);
        assert!(b.contains(Vec3::new(-2.0, -1.0, 1.0)));
        assert!(b.contains(Vec3::new(4.0, 21.0, -3.0)));
        assert!(!b.contains(Vec3::new(4.5, 0.0, 0.0)));
    }

    #[test]
    fn rgba_validity() {
        assert!(Rgba::new(1.0, 0.4, 0.0, 1.0).is_valid());
        assert!(!Rgba::new(1.2, 0.4, 0.0, 1.0).is_valid());
        assert!(!Rgba::new(f32::NAN, 0.4, 0.0, 1.0).is_valid());
    }
}
