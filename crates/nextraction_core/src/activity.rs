use chrono::NaiveTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ActivityLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            ActivityLevel::Info => "log-info",
            ActivityLevel::Success => "log-success",
            ActivityLevel::Warning => "log-warning",
            ActivityLevel::Error => "log-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub at: NaiveTime,
    pub level: ActivityLevel,
    pub message: String,
}

impl ActivityEntry {
    pub fn time_label(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }
}

/// In-page list of timestamped status lines. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
    pushed: u64,
}

impl ActivityLog {
    pub fn push(&mut self, at: NaiveTime, level: ActivityLevel, message: impl Into<String>) {
        self.entries.push(ActivityEntry {
            at,
            level,
            message: message.into(),
        });
        self.pushed += 1;
    }

    /// Total number of entries ever pushed, cleared ones included.
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// Entries pushed after the log had seen `seen` pushes.
    pub fn entries_since(&self, seen: u64) -> &[ActivityEntry] {
        let fresh = self.pushed.saturating_sub(seen).min(self.entries.len() as u64) as usize;
        &self.entries[self.entries.len() - fresh..]
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ActivityEntry> {
        self.entries.last()
    }

    pub fn count(&self, level: ActivityLevel) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    /// Drops every entry and leaves a single "cleared" notice.
    pub fn clear(&mut self, at: NaiveTime) {
        self.entries.clear();
        self.push(at, ActivityLevel::Info, "Log cleared.");
    }
}
