pub mod flot;
pub mod label;
pub mod options;

use std::future::Future;

pub use options::PieOptions;

use crate::api_client::report::{SeriesEntry, TaskReport};

/// Render capability for one pie chart. The production implementation hands
/// the series and configuration to the page's charting library; tests inject
/// a recording double instead.
pub trait PieRenderer {
    fn draw(&self, series: &[SeriesEntry], options: &PieOptions);
}

/// Draw both report charts, status first, then module.
pub fn render_report<R: PieRenderer>(renderer: &R, report: &TaskReport) {
    renderer.draw(&report.task_by_status, &PieOptions::status_chart());
    renderer.draw(&report.task_by_module, &PieOptions::module_chart());
}

/// Await the report fetch and draw both charts on success. A failed fetch
/// skips rendering entirely and hands the error back to the caller.
pub async fn load_and_render<R, F>(fetch: F, renderer: &R) -> Result<TaskReport, String>
where
    R: PieRenderer,
    F: Future<Output = Result<TaskReport, String>>,
{
    let report = fetch.await?;
    log::debug!(
        "Report loaded: {} status slices, {} module slices",
        report.task_by_status.len(),
        report.task_by_module.len()
    );
    render_report(renderer, &report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::{self, FutureExt};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: RefCell<Vec<(Vec<SeriesEntry>, PieOptions)>>,
    }

    impl PieRenderer for RecordingRenderer {
        fn draw(&self, series: &[SeriesEntry], options: &PieOptions) {
            self.calls
                .borrow_mut()
                .push((series.to_vec(), options.clone()));
        }
    }

    fn sample_report() -> TaskReport {
        serde_json::from_str(
            r#"{"task_by_status": [["Open", 3], ["Closed", 7]],
                "task_by_module": [["Core", 5], ["UI", 5]]}"#,
        )
        .unwrap()
    }

    #[test]
    fn renders_status_then_module_exactly_once() {
        let renderer = RecordingRenderer::default();
        render_report(&renderer, &sample_report());

        let calls = renderer.calls.borrow();
        assert_eq!(calls.len(), 2);

        let (series, options) = &calls[0];
        let expected = vec![
            SeriesEntry("Open".to_string(), 3.0),
            SeriesEntry("Closed".to_string(), 7.0),
        ];
        assert_eq!(series, &expected);
        assert_eq!(options, &PieOptions::status_chart());

        let (series, options) = &calls[1];
        let expected = vec![
            SeriesEntry("Core".to_string(), 5.0),
            SeriesEntry("UI".to_string(), 5.0),
        ];
        assert_eq!(series, &expected);
        assert_eq!(options, &PieOptions::module_chart());
    }

    #[test]
    fn successful_fetch_renders_both_charts() {
        let renderer = RecordingRenderer::default();
        let report = sample_report();

        let outcome =
            load_and_render(future::ready(Ok(report.clone())), &renderer).now_or_never();

        assert_eq!(outcome, Some(Ok(report)));
        assert_eq!(renderer.calls.borrow().len(), 2);
    }

    #[test]
    fn failed_fetch_skips_rendering() {
        let renderer = RecordingRenderer::default();

        let outcome =
            load_and_render(future::ready(Err("boom".to_string())), &renderer).now_or_never();

        assert_eq!(outcome, Some(Err("boom".to_string())));
        assert!(renderer.calls.borrow().is_empty());
    }

    #[test]
    fn pending_fetch_never_renders() {
        let renderer = RecordingRenderer::default();

        let outcome = load_and_render(
            future::pending::<Result<TaskReport, String>>(),
            &renderer,
        )
        .now_or_never();

        assert!(outcome.is_none());
        assert!(renderer.calls.borrow().is_empty());
    }
}
