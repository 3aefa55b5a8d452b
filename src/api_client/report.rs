use serde::{Deserialize, Serialize};

use crate::api_client;

/// Backend path serving the task count summary.
pub const REPORT_ENDPOINT: &str = "/tasks/report/task_by_status/json";

/// One (label, value) pair of a chart series, `["Open", 3]` on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeriesEntry(pub String, pub f64);

impl SeriesEntry {
    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }
}

/// The report payload: task counts grouped by status and by module. Read-only,
/// held only for the duration of one fetch/render cycle.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TaskReport {
    pub task_by_status: Vec<SeriesEntry>,
    pub task_by_module: Vec<SeriesEntry>,
}

impl TaskReport {
    /// Total task count across every status slice.
    pub fn total_tasks(&self) -> f64 {
        self.task_by_status.iter().map(SeriesEntry::value).sum()
    }
}

/// Fetch the task report summary.
pub async fn get_task_report() -> Result<TaskReport, String> {
    log::trace!("Fetching task report");
    let result: Result<TaskReport, String> = api_client::get(REPORT_ENDPOINT).await;
    match &result {
        Ok(report) => log::info!(
            "Fetched report: {} status slices, {} module slices",
            report.task_by_status.len(),
            report.task_by_module.len()
        ),
        Err(e) => log::error!("Failed to fetch task report: {}", e),
    }
    result
}
