use std::collections::BTreeSet;

use crate::{
    animation::track::{ShapeTracks, density_track, fadeout_track, motion_track},
    classify::classify_all,
    config::RevealConfig,
    effects::{BoundEffect, bind},
    foundation::error::{RevealError, RevealResult},
    order::arrange,
    rig::{SceneRig, build_rig},
    schedule::{Schedule, schedule},
    shape::{Shape, ShapeInput},
};

/// Everything the host needs to build the reveal, in presentation order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealPlan {
    pub shapes: Vec<Shape>,
    pub schedule: Schedule,
    pub effects: Vec<BoundEffect>,
    pub tracks: Vec<ShapeTracks>,
    pub rig: SceneRig,
}

impl RevealPlan {
    pub fn shape(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn effect(&self, id: &str) -> Option<&BoundEffect> {
        self.effects.iter().find(|e| e.shape_id == id)
    }
}

fn validate_inputs(inputs: &[ShapeInput]) -> RevealResult<()> {
    let mut seen = BTreeSet::new();
    for input in inputs {
        if input.id.trim().is_empty() {
            return Err(RevealError::validation("shape id must be non-empty"));
        }
        if !seen.insert(input.id.as_str()) {
            return Err(RevealError::validation(format!(
                "duplicate shape id '{}'",
                input.id
            )));
        }
    }
    Ok(())
}

/// classify → order → schedule → bind, plus tracks and rig.
///
/// All checks run before anything is built, so an error leaves no partial plan.
#[tracing::instrument(skip_all, fields(shapes = inputs.len()))]
pub fn plan_reveal(inputs: &[ShapeInput], cfg: &RevealConfig) -> RevealResult<RevealPlan> {
    cfg.validate()?;
    validate_inputs(inputs)?;

    let classified = classify_all(inputs, &cfg.thresholds, &cfg.arrivals, cfg.reference);
    let shapes = arrange(classified, cfg.order);

    let ids: Vec<&str> = shapes.iter().map(|s| s.id.as_str()).collect();
    let schedule = schedule(&ids, cfg.schedule)?;

    let mut effects = Vec::with_capacity(shapes.len());
    let mut tracks = Vec::with_capacity(shapes.len());
    for (shape, entry) in shapes.iter().zip(&schedule.entries) {
        let bound = bind(shape, entry, &cfg.profiles, cfg.envelope);
        tracks.push(ShapeTracks {
            shape_id: shape.id.clone(),
            location: motion_track(shape, entry),
            density: density_track(&bound.emission),
            particle_count: fadeout_track(&bound.profile, cfg.fadeout),
        });
        effects.push(bound);
    }

    let rig = build_rig(&shapes, &cfg.rig);

    tracing::info!(
        shapes = shapes.len(),
        gap = schedule.gap,
        convergence = schedule.convergence.0,
        "reveal plan ready"
    );

    Ok(RevealPlan {
        shapes,
        schedule,
        effects,
        tracks,
        rig,
    })
}
