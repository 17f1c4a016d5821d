//! Admin ingestion console: URL verification, ingestion and stats.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::AdminEffect;
pub use msg::AdminMsg;
pub use state::{AdminState, Operation, ResultsPanel, EXAMPLE_URLS};
pub use update::update;
pub use view_model::{
    AdminViewModel, IngestRow, IngestSummary, ResultsView, StatsView, VerificationRow,
    VerificationSummary,
};
