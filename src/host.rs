//! Handle to the 3D application that realizes a plan.
//!
//! The host is always passed explicitly; nothing here relies on a "current
//! selection" or other ambient state on the host side.

use crate::{
    animation::track::ShapeTracks,
    effects::{BoundEffect, MaterialProfile},
    foundation::error::{RevealError, RevealResult},
    pipeline::RevealPlan,
    rig::SceneRig,
    schedule::ScheduleEntry,
    shape::Shape,
};

pub trait SceneHost {
    fn add_shape(&mut self, shape: &Shape) -> RevealResult<()>;

    fn assign_material(&mut self, shape_id: &str, material: &MaterialProfile) -> RevealResult<()>;

    fn insert_motion(&mut self, entry: &ScheduleEntry, tracks: &ShapeTracks) -> RevealResult<()>;

    fn attach_emitter(&mut self, effect: &BoundEffect) -> RevealResult<()>;

    fn configure_rig(&mut self, rig: &SceneRig) -> RevealResult<()>;
}

/// Push a finished plan into the host, shape by shape, then the rig.
#[tracing::instrument(skip_all, fields(shapes = plan.shapes.len()))]
pub fn apply_plan(plan: &RevealPlan, host: &mut dyn SceneHost) -> RevealResult<()> {
    for (idx, shape) in plan.shapes.iter().enumerate() {
        let (Some(entry), Some(tracks), Some(effect)) = (
            plan.schedule.entries.get(idx),
            plan.tracks.get(idx),
            plan.effects.get(idx),
        ) else {
            return Err(RevealError::validation(format!(
                "plan is missing schedule/tracks/effect for shape '{}'",
                shape.id
            )));
        };

        host.add_shape(shape)?;
        host.assign_material(&shape.id, &effect.material)?;
        host.insert_motion(entry, tracks)?;
        host.attach_emitter(effect)?;
    }
    host.configure_rig(&plan.rig)
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum HostOp {
    AddShape {
        id: String,
        category: String,
    },
    AssignMaterial {
        id: String,
        material: String,
    },
    InsertMotion {
        id: String,
        start: u64,
        end: u64,
        keys: usize,
    },
    AttachEmitter {
        id: String,
        particle_count: u32,
        ignite: u64,
        extinguish: u64,
    },
    ConfigureRig {
        lights: usize,
        total_frames: u64,
    },
}

/// Host that only writes down what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    pub ops: Vec<HostOp>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneHost for RecordingHost {
    fn add_shape(&mut self, shape: &Shape) -> RevealResult<()> {
        self.ops.push(HostOp::AddShape {
            id: shape.id.clone(),
            category: shape.category.to_string(),
        });
        Ok(())
    }

    fn assign_material(&mut self, shape_id: &str, material: &MaterialProfile) -> RevealResult<()> {
        self.ops.push(HostOp::AssignMaterial {
            id: shape_id.to_string(),
            material: material.name.clone(),
        });
        Ok(())
    }

    fn insert_motion(&mut self, entry: &ScheduleEntry, tracks: &ShapeTracks) -> RevealResult<()> {
        self.ops.push(HostOp::InsertMotion {
            id: entry.shape_id.clone(),
            start: entry.start.0,
            end: entry.end.0,
            keys: tracks.location.keys.len()
                + tracks.density.keys.len()
                + tracks.particle_count.keys.len(),
        });
        Ok(())
    }

    fn attach_emitter(&mut self, effect: &BoundEffect) -> RevealResult<()> {
        self.ops.push(HostOp::AttachEmitter {
            id: effect.shape_id.clone(),
            particle_count: effect.profile.particle_count,
            ignite: effect.emission.ignite.0,
            extinguish: effect.emission.extinguish.0,
        });
        Ok(())
    }

    fn configure_rig(&mut self, rig: &SceneRig) -> RevealResult<()> {
        self.ops.push(HostOp::ConfigureRig {
            lights: rig.lights.len(),
            total_frames: rig.render.total_frames,
        });
        Ok(())
    }
}
