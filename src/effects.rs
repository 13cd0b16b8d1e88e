use std::collections::BTreeMap;

use crate::{
    foundation::core::{FrameIndex, Rgba},
    foundation::error::{RevealError, RevealResult},
    schedule::ScheduleEntry,
    shape::{Category, Shape},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorStop {
    pub position: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(position: f32, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// Emitter and fire-material parameters for one shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectProfile {
    pub particle_count: u32,
    pub lifetime_frames: u32,
    pub particle_size: f64,
    pub velocity: f64,
    pub fuel_amount: f64,
    pub temperature: f64,
    pub emission_strength: f64,
    pub color_stops: Vec<ColorStop>, // sorted by position
}

impl Default for EffectProfile {
    fn default() -> Self {
        Self {
            particle_count: 5000,
            lifetime_frames: 30,
            particle_size: 0.15,
            velocity: 0.5,
            fuel_amount: 2.0,
            temperature: 3.0,
            emission_strength: 8.0,
            color_stops: fire_ramp(),
        }
    }
}

/// Dark red, orange, yellow, white hot.
pub fn fire_ramp() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Rgba::new(0.3, 0.05, 0.0, 1.0)),
        ColorStop::new(0.5, Rgba::new(1.0, 0.4, 0.0, 1.0)),
        ColorStop::new(0.75, Rgba::new(1.0, 0.9, 0.0, 1.0)),
        ColorStop::new(1.0, Rgba::new(1.0, 1.0, 0.9, 1.0)),
    ]
}

impl EffectProfile {
    pub fn validate(&self) -> RevealResult<()> {
        let numbers = [
            self.particle_size,
            self.velocity,
            self.fuel_amount,
            self.temperature,
            self.emission_strength,
        ];
        if !numbers.iter().all(|v| v.is_finite() && *v >= 0.0) {
            return Err(RevealError::configuration(
                "effect profile values must be finite and >= 0",
            ));
        }
        if self.color_stops.is_empty() {
            return Err(RevealError::configuration(
                "effect profile needs at least one color stop",
            ));
        }
        for stop in &self.color_stops {
            if !(0.0..=1.0).contains(&stop.position) || !stop.color.is_valid() {
                return Err(RevealError::configuration(
                    "color stops must have position and channels in 0..=1",
                ));
            }
        }
        if !self
            .color_stops
            .windows(2)
            .all(|w| w[0].position <= w[1].position)
        {
            return Err(RevealError::configuration(
                "color stops must be sorted by position",
            ));
        }
        Ok(())
    }
}

/// Surface of a logo shape: a principled metal mixed with an emission glow.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MaterialProfile {
    pub name: String,
    pub base_color: Rgba,
    pub metallic: f64,
    pub roughness: f64,
    pub emission_color: Rgba,
    pub emission_strength: f64,
    /// Mix factor toward the emission layer; 0 is pure metal.
    pub emission_mix: f64,
}

impl Default for MaterialProfile {
    fn default() -> Self {
        Self {
            name: "GoldenMetal".to_string(),
            base_color: Rgba::new(1.0, 0.766, 0.336, 1.0),
            metallic: 1.0,
            roughness: 0.1,
            emission_color: Rgba::new(1.0, 0.85, 0.4, 1.0),
            emission_strength: 0.8,
            emission_mix: 0.85,
        }
    }
}

impl MaterialProfile {
    pub fn validate(&self) -> RevealResult<()> {
        if self.name.trim().is_empty() {
            return Err(RevealError::configuration("material name must be non-empty"));
        }
        if !self.base_color.is_valid() || !self.emission_color.is_valid() {
            return Err(RevealError::configuration(format!(
                "material '{}': color channels must be in 0..=1",
                self.name
            )));
        }
        let unit = [self.metallic, self.roughness, self.emission_mix];
        if !unit.iter().all(|v| (0.0..=1.0).contains(v)) {
            return Err(RevealError::configuration(format!(
                "material '{}': metallic, roughness and emission_mix must be in 0..=1",
                self.name
            )));
        }
        if !(self.emission_strength.is_finite() && self.emission_strength >= 0.0) {
            return Err(RevealError::configuration(format!(
                "material '{}': emission_strength must be finite and >= 0",
                self.name
            )));
        }
        Ok(())
    }
}

/// Category lookup with a fallback for anything the table does not list.
///
/// Materials work the same way: `materials` holds per-category overrides and
/// `material` covers every other category.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProfileTable {
    pub profiles: BTreeMap<Category, EffectProfile>,
    pub fallback: EffectProfile,
    pub material: MaterialProfile,
    pub materials: BTreeMap<Category, MaterialProfile>,
}

impl Default for ProfileTable {
    fn default() -> Self {
        let base = EffectProfile::default();
        let mut profiles = BTreeMap::new();

        profiles.insert(
            Category::PrimaryCenterpiece,
            EffectProfile {
                particle_count: 8000,
                lifetime_frames: 40,
                particle_size: 0.2,
                emission_strength: 10.0,
                ..base.clone()
            },
        );
        profiles.insert(Category::LeftAccessory, base.clone());
        profiles.insert(Category::RightAccessory, base.clone());
        for text in [Category::TopText, Category::BottomText] {
            profiles.insert(
                text,
                EffectProfile {
                    particle_count: 3000,
                    lifetime_frames: 24,
                    particle_size: 0.1,
                    ..base.clone()
                },
            );
        }
        profiles.insert(Category::Miscellaneous, base.clone());

        Self {
            profiles,
            fallback: base,
            material: MaterialProfile::default(),
            materials: BTreeMap::new(),
        }
    }
}

impl ProfileTable {
    /// Profiles are total over categories: a missing entry resolves to `fallback`.
    pub fn lookup(&self, category: Category) -> &EffectProfile {
        match self.profiles.get(&category) {
            Some(p) => p,
            None => {
                tracing::warn!(%category, "no effect profile for category, using fallback");
                &self.fallback
            }
        }
    }

    pub fn material_for(&self, category: Category) -> &MaterialProfile {
        self.materials.get(&category).unwrap_or(&self.material)
    }

    pub fn validate(&self) -> RevealResult<()> {
        self.fallback.validate()?;
        self.material.validate()?;
        for material in self.materials.values() {
            material.validate()?;
        }
        for (category, profile) in &self.profiles {
            profile.validate().map_err(|e| {
                RevealError::configuration(format!("profile '{category}': {e}"))
            })?;
        }
        Ok(())
    }
}

/// Fire lead-in/out around each entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EmissionEnvelope {
    pub lead_frames: u64,
    pub trail_frames: u64,
}

impl Default for EmissionEnvelope {
    fn default() -> Self {
        Self {
            lead_frames: 5,
            trail_frames: 10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmissionWindow {
    pub ignite: FrameIndex,
    pub full_until: FrameIndex,
    pub extinguish: FrameIndex,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundEffect {
    pub shape_id: String,
    pub category: Category,
    pub profile: EffectProfile,
    pub material: MaterialProfile,
    pub emission: EmissionWindow,
}

pub fn emission_window(entry: &ScheduleEntry, envelope: EmissionEnvelope) -> EmissionWindow {
    EmissionWindow {
        ignite: FrameIndex(entry.start.0.saturating_sub(envelope.lead_frames)),
        full_until: entry.end,
        extinguish: FrameIndex(entry.end.0.saturating_add(envelope.trail_frames)),
    }
}

/// Pure: no host state is touched here.
pub fn bind(
    shape: &Shape,
    entry: &ScheduleEntry,
    table: &ProfileTable,
    envelope: EmissionEnvelope,
) -> BoundEffect {
    BoundEffect {
        shape_id: shape.id.clone(),
        category: shape.category,
        profile: table.lookup(shape.category).clone(),
        material: table.material_for(shape.category).clone(),
        emission: emission_window(entry, envelope),
    }
}
