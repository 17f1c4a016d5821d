/// Halfway mark the bar climbs to while the request is still in flight.
const IN_FLIGHT_TARGET: u8 = 50;
const COMPLETE: u8 = 100;

/// Cosmetic ingestion progress bar.
///
/// The bar climbs in fixed steps towards a target. It carries no
/// information about server-side progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressBar {
    percent: u8,
    target: u8,
    visible: bool,
    run: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStep {
    /// Moved one step; the target is not reached yet.
    Climbing,
    /// Reached the in-flight target and waits for the response.
    Holding,
    /// Reached 100%.
    Completed,
}

impl ProgressBar {
    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Counts ingestion runs so a delayed hide can tell which run it belongs to.
    pub fn run(&self) -> u32 {
        self.run
    }

    /// Shows the bar at 0% and aims for the in-flight mark.
    pub fn begin(&mut self) {
        self.run = self.run.wrapping_add(1);
        self.visible = true;
        self.percent = 0;
        self.target = IN_FLIGHT_TARGET;
    }

    /// Response arrived: resume from at least the halfway mark up to 100%.
    pub fn finish_request(&mut self) {
        self.visible = true;
        self.percent = self.percent.max(IN_FLIGHT_TARGET);
        self.target = COMPLETE;
    }

    pub fn advance(&mut self, step: u8) -> ProgressStep {
        if self.percent < self.target {
            self.percent = self.percent.saturating_add(step).min(self.target);
        }
        if self.percent < self.target {
            ProgressStep::Climbing
        } else if self.target >= COMPLETE {
            ProgressStep::Completed
        } else {
            ProgressStep::Holding
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}
