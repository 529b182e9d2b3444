pub mod codec;
pub mod padding;
pub mod scan;

pub use codec::*;
pub use padding::*;
pub use scan::*;

/// Per-file outcome of one scan iteration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum FileOutcome {
    Unchanged,
    Padded { from: (u32, u32), to: (u32, u32) },
    Failed(String),
}

/// Running tally for a whole scan. Only `padded` is reported in the final
/// summary line; the rest feed the optional JSON report.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ScanSummary {
    pub padded: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl ScanSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Padded { .. } => self.padded += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }
}

pub type Result<T> = anyhow::Result<T>;
