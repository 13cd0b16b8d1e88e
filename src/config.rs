//! Run configuration. Every field has a default so a partial JSON file is enough.

use std::path::Path;

use crate::{
    animation::track::FadeoutConfig,
    classify::{ArrivalTable, Reference, Thresholds},
    effects::{EmissionEnvelope, ProfileTable},
    foundation::error::{RevealError, RevealResult},
    order::PresentationOrder,
    rig::RigConfig,
    schedule::ScheduleConfig,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub schedule: ScheduleConfig,
    pub thresholds: Thresholds,
    pub reference: Reference,
    pub order: PresentationOrder,
    pub arrivals: ArrivalTable,
    pub profiles: ProfileTable,
    pub envelope: EmissionEnvelope,
    pub fadeout: FadeoutConfig,
    pub rig: RigConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "logoreveal=debug,warn". `RUST_LOG` wins.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl RevealConfig {
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> RevealResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            RevealError::Other(anyhow::Error::new(e).context(format!(
                "read config '{}'",
                path.display()
            )))
        })?;
        let cfg = Self::from_json_str(&s)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> RevealResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> RevealResult<()> {
        self.schedule.validate()?;
        self.thresholds.validate()?;
        self.arrivals.validate()?;
        self.profiles.validate()?;
        self.fadeout.validate()?;
        self.rig.validate()?;

        let total = self.rig.render.total_frames;
        if self.schedule.convergence_frame > total {
            return Err(RevealError::configuration(format!(
                "convergence_frame ({}) is past the last rendered frame ({total})",
                self.schedule.convergence_frame
            )));
        }
        if self.fadeout.end > total {
            return Err(RevealError::configuration(format!(
                "fadeout end ({}) is past the last rendered frame ({total})",
                self.fadeout.end
            )));
        }
        Ok(())
    }
}
