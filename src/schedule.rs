use crate::foundation::{
    core::{FrameIndex, FrameRange},
    error::{RevealError, RevealResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Frame by which every shape has arrived.
    pub convergence_frame: u64,
    /// Frames each shape spends travelling to its final position.
    pub travel_duration: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            convergence_frame: 200,
            travel_duration: 30,
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> RevealResult<()> {
        if self.travel_duration > self.convergence_frame {
            return Err(RevealError::configuration(format!(
                "travel_duration ({}) exceeds convergence_frame ({})",
                self.travel_duration, self.convergence_frame
            )));
        }
        Ok(())
    }

    /// Latest frame an entrance may start at.
    pub fn last_start(&self) -> u64 {
        self.convergence_frame.saturating_sub(self.travel_duration)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleEntry {
    pub shape_id: String,
    pub start: FrameIndex,
    pub end: FrameIndex,
}

impl ScheduleEntry {
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: self.start,
            end: self.end,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Schedule {
    /// Spacing between consecutive starts, before rounding.
    pub gap: f64,
    pub convergence: FrameIndex,
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn entry(&self, shape_id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.shape_id == shape_id)
    }
}

/// Lays out entrance windows for `shape_ids` in the given order.
///
/// Starts are spread evenly over `[0, C - D]`; every window ends by the convergence
/// frame. Many shapes may round onto the same start frame.
#[tracing::instrument(skip(shape_ids), fields(shapes = shape_ids.len()))]
pub fn schedule<S: AsRef<str>>(shape_ids: &[S], cfg: ScheduleConfig) -> RevealResult<Schedule> {
    cfg.validate()?;

    let n = shape_ids.len() as u64;
    let last_start = cfg.last_start();
    let gap = last_start as f64 / n.saturating_sub(1).max(1) as f64;

    let entries = shape_ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let start = ((i as f64 * gap).round() as u64).min(last_start);
            let end = start + cfg.travel_duration;
            tracing::debug!(shape = id.as_ref(), start, end, "scheduled entrance");
            ScheduleEntry {
                shape_id: id.as_ref().to_string(),
                start: FrameIndex(start),
                end: FrameIndex(end),
            }
        })
        .collect();

    Ok(Schedule {
        gap,
        convergence: FrameIndex(cfg.convergence_frame),
        entries,
    })
}

#[cfg(test)]
#[path = "../tests/unit/schedule.rs"]
mod tests;
