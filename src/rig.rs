//! Camera, lights, fire domain and render settings around the classified logo.
//!
//! Everything here is plain data for the host; positions are derived from the logo
//! centroid so the rig follows the logo wherever it was imported.

use crate::{
    foundation::core::{Aabb, FrameIndex, FrameRange, Vec3},
    foundation::error::{RevealError, RevealResult},
    shape::Shape,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub camera_distance: f64,
    pub lens_mm: f64,
    pub f_stop: f64,
    pub clip_end: f64,
    pub domain_padding: f64,
    pub domain_resolution: u32,
    pub render: RenderSettings,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            camera_distance: 12.0,
            lens_mm: 50.0,
            f_stop: 2.8,
            clip_end: 40.0,
            domain_padding: 1.0,
            domain_resolution: 128,
            render: RenderSettings::default(),
        }
    }
}

impl RigConfig {
    pub fn validate(&self) -> RevealResult<()> {
        if !(self.camera_distance.is_finite() && self.camera_distance > 0.0) {
            return Err(RevealError::configuration(
                "camera_distance must be finite and > 0",
            ));
        }
        if !(self.lens_mm.is_finite() && self.lens_mm > 0.0) {
            return Err(RevealError::configuration("lens_mm must be > 0"));
        }
        if !(self.domain_padding.is_finite() && self.domain_padding >= 0.0) {
            return Err(RevealError::configuration("domain_padding must be >= 0"));
        }
        if self.domain_resolution == 0 {
            return Err(RevealError::configuration("domain_resolution must be > 0"));
        }
        self.render.validate()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub resolution_percentage: u32,
    pub fps: u32,
    pub total_frames: u64,
    pub film_transparent: bool,
    pub file_format: String,
    pub color_mode: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            resolution_percentage: 100,
            fps: 30,
            total_frames: 300,
            film_transparent: true,
            file_format: "PNG".to_string(),
            color_mode: "RGBA".to_string(),
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> RevealResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RevealError::configuration(
                "render width/height must be > 0",
            ));
        }
        if self.fps == 0 {
            return Err(RevealError::configuration("render fps must be > 0"));
        }
        if self.resolution_percentage == 0 {
            return Err(RevealError::configuration(
                "resolution_percentage must be > 0",
            ));
        }
        if self.total_frames == 0 {
            return Err(RevealError::configuration("total_frames must be > 0"));
        }
        Ok(())
    }

    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.total_frames),
        }
    }

    /// Frames `1..=total_frames`, the range a fire simulation bakes.
    pub fn cache_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(1),
            end: FrameIndex(self.total_frames.saturating_add(1)),
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.total_frames as f64 / f64::from(self.fps)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Camera {
    pub location: Vec3,
    pub target: Vec3,
    pub lens_mm: f64,
    pub focus_distance: f64,
    pub f_stop: f64,
    pub clip_end: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    Area,
    Spot,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Light {
    pub name: String,
    pub kind: LightKind,
    pub location: Vec3,
    pub target: Vec3,
    pub energy_w: f64,
    /// Area size for area lights, cone angle in degrees for spots.
    pub size: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FireDomain {
    pub bounds: Aabb,
    pub resolution: u32,
    pub cache: FrameRange,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneRig {
    pub centroid: Vec3,
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub domain: FireDomain,
    pub render: RenderSettings,
}

/// Mean of the final shape centers; origin for an empty logo.
pub fn logo_centroid(shapes: &[Shape]) -> Vec3 {
    if shapes.is_empty() {
        return Vec3::ZERO;
    }
    shapes
        .iter()
        .fold(Vec3::ZERO, |acc, s| acc.add(s.center()))
        .scale(1.0 / shapes.len() as f64)
}

pub fn camera_for(centroid: Vec3, cfg: &RigConfig) -> Camera {
    Camera {
        location: centroid.sub(Vec3::new(0.0, cfg.camera_distance, 0.0)),
        target: centroid,
        lens_mm: cfg.lens_mm,
        focus_distance: cfg.camera_distance,
        f_stop: cfg.f_stop,
        clip_end: cfg.clip_end,
    }
}

/// Key, fill and rim around the centroid, all aimed at it.
pub fn three_point_lights(centroid: Vec3) -> Vec<Light> {
    let light = |name: &str, kind: LightKind, offset: Vec3, energy_w: f64, size: f64| Light {
        name: name.to_string(),
        kind,
        location: centroid.add(offset),
        target: centroid,
        energy_w,
        size,
    };

    vec![
        light("KeyLight", LightKind::Area, Vec3::new(-5.0, -8.0, 6.0), 500.0, 3.0),
        light("FillLight", LightKind::Area, Vec3::new(5.0, -6.0, 3.0), 200.0, 4.0),
        light("RimLight", LightKind::Spot, Vec3::new(0.0, 5.0, 8.0), 300.0, 60.0),
    ]
}

/// Smallest padded box holding every shape at rest and at its start position.
pub fn fire_domain(shapes: &[Shape], cfg: &RigConfig) -> FireDomain {
    let bounds = shapes
        .iter()
        .map(|s| s.bounds.include(s.start_position()))
        .reduce(|a, b| a.union(&b))
        .unwrap_or_else(|| Aabb::point(Vec3::ZERO))
        .pad(cfg.domain_padding);

    FireDomain {
        bounds,
        resolution: cfg.domain_resolution,
        cache: cfg.render.cache_range(),
    }
}

#[tracing::instrument(skip_all, fields(shapes = shapes.len()))]
pub fn build_rig(shapes: &[Shape], cfg: &RigConfig) -> SceneRig {
    let centroid = logo_centroid(shapes);
    SceneRig {
        centroid,
        camera: camera_for(centroid, cfg),
        lights: three_point_lights(centroid),
        domain: fire_domain(shapes, cfg),
        render: cfg.render.clone(),
    }
}
