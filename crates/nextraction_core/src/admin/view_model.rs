use crate::admin::{AdminState, Operation, ResultsPanel};
use crate::{ActivityEntry, IngestReport, StatsPanel, StatsStatus, VerificationResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminViewModel {
    pub input: String,
    pub verify_enabled: bool,
    pub ingest_enabled: bool,
    pub verify_label: &'static str,
    pub ingest_label: &'static str,
    /// `Some(percent)` while the progress bar is shown.
    pub progress: Option<u8>,
    pub results: ResultsView,
    pub stats: StatsView,
    pub log: Vec<ActivityEntry>,
}

/// Counters are `None` when there is nothing trustworthy to show: no snapshot
/// yet for chunks, or a failed pull for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsView {
    pub status: StatsStatus,
    pub vectors: Option<u64>,
    pub chunks: Option<u64>,
}

impl StatsView {
    pub fn is_unavailable(&self) -> bool {
        matches!(self.status, StatsStatus::Offline | StatsStatus::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Empty,
    Verification {
        rows: Vec<VerificationRow>,
        summary: VerificationSummary,
    },
    Ingestion {
        rows: Vec<IngestRow>,
        summary: IngestSummary,
    },
    Malformed {
        title: &'static str,
        raw_json: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRow {
    pub url: String,
    pub accessible: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationSummary {
    pub accessible: usize,
    pub total: usize,
}

impl VerificationSummary {
    pub fn all_accessible(&self) -> bool {
        self.accessible == self.total
    }

    pub fn headline(&self) -> String {
        format!("{} of {} URLs accessible", self.accessible, self.total)
    }

    pub fn hint(&self) -> &'static str {
        if self.all_accessible() {
            "All URLs are reachable. You can proceed with indexing."
        } else {
            "Some sites may block robots. Try other URLs."
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestRow {
    pub url: String,
    pub success: bool,
    pub chunks_added: Option<u64>,
    pub reason: Option<String>,
    /// Cosmetic entrance delay, a fixed increment per row index.
    pub entrance_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub total_urls: usize,
    pub successful: usize,
    pub total_vectors: u64,
    pub status: String,
}

pub(crate) fn build(state: &AdminState) -> AdminViewModel {
    let in_flight = state.in_flight();
    let progress = state.progress();
    let stats = state.stats();

    AdminViewModel {
        input: state.input().to_string(),
        verify_enabled: in_flight.is_none(),
        ingest_enabled: in_flight.is_none(),
        verify_label: match in_flight {
            Some(Operation::Verify) => "Verifying...",
            _ => "Verify URLs",
        },
        ingest_label: match in_flight {
            Some(Operation::Ingest) => "Indexing...",
            _ => "Index into the knowledge base",
        },
        progress: progress.is_visible().then(|| progress.percent()),
        results: build_results(state.results(), state.config().row_stagger_ms),
        stats: stats_view(stats),
        log: state.log().entries().to_vec(),
    }
}

fn stats_view(stats: &StatsPanel) -> StatsView {
    let mut view = StatsView {
        status: stats.status(),
        vectors: Some(stats.displayed()),
        chunks: stats.snapshot().map(|snapshot| snapshot.chunks_count),
    };
    if view.is_unavailable() {
        view.vectors = None;
        view.chunks = None;
    }
    view
}

fn build_results(panel: &ResultsPanel, stagger_ms: u32) -> ResultsView {
    match panel {
        ResultsPanel::Empty => ResultsView::Empty,
        ResultsPanel::Verification(results) => verification_view(results),
        ResultsPanel::Ingestion(report) => ingestion_view(report, stagger_ms),
        ResultsPanel::Malformed { operation, raw } => ResultsView::Malformed {
            title: match operation {
                Operation::Verify => "Error: verification results are not in the expected format.",
                Operation::Ingest => "Error: invalid ingestion results.",
            },
            raw_json: raw.clone(),
        },
    }
}

fn verification_view(results: &[VerificationResult]) -> ResultsView {
    let rows: Vec<VerificationRow> = results
        .iter()
        .map(|result| VerificationRow {
            url: result.url.clone(),
            accessible: result.accessible,
            error: result.error.clone().filter(|error| !error.is_empty()),
        })
        .collect();
    let summary = VerificationSummary {
        accessible: rows.iter().filter(|row| row.accessible).count(),
        total: rows.len(),
    };
    ResultsView::Verification { rows, summary }
}

fn ingestion_view(report: &IngestReport, stagger_ms: u32) -> ResultsView {
    let rows = report
        .results
        .iter()
        .enumerate()
        .map(|(index, item)| IngestRow {
            url: item.url.clone(),
            success: item.is_success(),
            chunks_added: item.chunks_added.filter(|&chunks| chunks > 0),
            reason: item.reason.clone().filter(|reason| !reason.is_empty()),
            entrance_delay_ms: stagger_ms.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)),
        })
        .collect();
    let summary = IngestSummary {
        total_urls: report.total_urls,
        successful: report.success_count(),
        total_vectors: report.total_vectors,
        status: report.status.clone(),
    };
    ResultsView::Ingestion { rows, summary }
}
