use crate::{FailureKind, RequestFailure, StatsSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsStatus {
    #[default]
    Pending,
    Live,
    /// The backend could not be reached or sent an unreadable body.
    Offline,
    /// The backend answered with a non-2xx status.
    Error,
}

/// Linear count-up from the displayed value to a new one over a fixed
/// number of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    from: u64,
    to: u64,
    step: u32,
    steps: u32,
}

impl CountUp {
    pub fn new(from: u64, to: u64, steps: u32) -> Self {
        Self {
            from,
            to,
            step: 0,
            steps: steps.max(1),
        }
    }

    pub fn value(&self) -> u64 {
        if self.step >= self.steps {
            return self.to;
        }
        let from = self.from as f64;
        let delta = self.to as f64 - from;
        let value = from + delta * f64::from(self.step) / f64::from(self.steps);
        value.round().max(0.0) as u64
    }

    /// Moves one frame forward. Returns `true` once the final value is shown.
    pub fn advance(&mut self) -> bool {
        self.step = (self.step + 1).min(self.steps);
        self.step >= self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }
}

/// Knowledge-base counters as shown on screen. Each pull overwrites the
/// previous snapshot; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsPanel {
    snapshot: Option<StatsSnapshot>,
    displayed: u64,
    status: StatsStatus,
    animation: Option<CountUp>,
}

impl StatsPanel {
    pub fn snapshot(&self) -> Option<StatsSnapshot> {
        self.snapshot
    }

    pub fn status(&self) -> StatsStatus {
        self.status
    }

    /// Vector count currently on screen, mid-animation included.
    pub fn displayed(&self) -> u64 {
        self.animation
            .map(|animation| animation.value())
            .unwrap_or(self.displayed)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Applies a stats pull. Returns `true` when a count-up was started.
    pub fn apply(&mut self, result: Result<StatsSnapshot, RequestFailure>, steps: u32) -> bool {
        match result {
            Ok(snapshot) => {
                let from = self.displayed();
                self.snapshot = Some(snapshot);
                self.status = StatsStatus::Live;
                self.displayed = snapshot.total_vectors;
                if from == snapshot.total_vectors {
                    self.animation = None;
                    return false;
                }
                self.animation = Some(CountUp::new(from, snapshot.total_vectors, steps));
                true
            }
            Err(failure) => {
                self.status = match failure.kind {
                    FailureKind::HttpStatus(_) => StatsStatus::Error,
                    FailureKind::Network | FailureKind::Decode => StatsStatus::Offline,
                };
                // The indicator replaces every counter, so the next count-up starts at zero.
                self.snapshot = None;
                self.displayed = 0;
                self.animation = None;
                false
            }
        }
    }

    /// Advances the count-up. Returns `true` while more frames remain.
    pub fn tick(&mut self) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        if animation.advance() {
            self.animation = None;
            return false;
        }
        true
    }
}
