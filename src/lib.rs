//! logoreveal plans a procedural 3D logo-reveal animation.
//!
//! The crate never talks to a 3D application directly. It turns the bounding boxes of an
//! imported vector logo into a serializable [`RevealPlan`] and hands that plan to a
//! [`SceneHost`] handle supplied by the caller.
//!
//! # Pipeline overview
//!
//! 1. **Classify**: each sub-shape gets a [`Category`] and an arrival offset
//!    ([`classify_all`]).
//! 2. **Order**: shapes are arranged for presentation ([`arrange`]).
//! 3. **Schedule**: staggered entrance windows that all end by the convergence frame
//!    ([`schedule()`]).
//! 4. **Bind**: fire-effect and surface-material parameters per shape ([`bind`]).
//! 5. **Animate / rig**: keyframe tracks, camera, lights and fire domain.
//!
//! [`plan_reveal`] runs all of it; it is pure and deterministic for a given input.
#![forbid(unsafe_code)]

pub mod animation;
pub mod classify;
pub mod config;
pub mod effects;
pub mod foundation;
pub mod host;
pub mod logging;
pub mod order;
pub mod pipeline;
pub mod rig;
pub mod schedule;
pub mod shape;

pub use animation::ease::Ease;
pub use animation::track::{
    FadeoutConfig, Key, Lerp, ShapeTracks, Track, density_track, fadeout_track, motion_track,
};
pub use classify::{ArrivalTable, Reference, Thresholds, centroid, classify, classify_all};
pub use config::{LoggingConfig, RevealConfig};
pub use effects::{
    BoundEffect, ColorStop, EffectProfile, EmissionEnvelope, EmissionWindow, MaterialProfile,
    ProfileTable, bind, emission_window, fire_ramp,
};
pub use foundation::core::{Aabb, FrameIndex, FrameRange, Rgba, Vec3};
pub use foundation::error::{RevealError, RevealResult};
pub use host::{HostOp, RecordingHost, SceneHost, apply_plan};
pub use logging::init_logging;
pub use order::{PresentationOrder, arrange};
pub use pipeline::{RevealPlan, plan_reveal};
pub use rig::{
    Camera, FireDomain, Light, LightKind, RenderSettings, RigConfig, SceneRig, build_rig,
};
pub use schedule::{Schedule, ScheduleConfig, ScheduleEntry, schedule};
pub use shape::{Category, Shape, ShapeInput, ShapeSet};
