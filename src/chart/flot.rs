use wasm_bindgen::prelude::*;

use super::label::format_slice_label;
use super::options::PieOptions;
use super::PieRenderer;
use crate::api_client::report::SeriesEntry;

#[wasm_bindgen]
extern "C" {
    /// `jQuery.plot(target, data, options)`, the page-global charting entry point.
    #[wasm_bindgen(js_namespace = jQuery, js_name = plot)]
    fn plot(target: &str, data: JsValue, options: JsValue);
}

/// `PieRenderer` backed by the plotting library loaded by the host page.
pub struct FlotPieRenderer;

impl PieRenderer for FlotPieRenderer {
    fn draw(&self, series: &[SeriesEntry], options: &PieOptions) {
        log::trace!("Drawing pie chart into {}", options.target);
        let data = serde_wasm_bindgen::to_value(series).unwrap();
        let opts = serde_wasm_bindgen::to_value(&options.to_flot_options()).unwrap();
        attach_label_formatter(&opts);
        plot(options.target, data, opts);
    }
}

/// Install the slice-label callback at `series.pie.label.formatter`. The
/// library invokes it per slice with the label and the computed series stats.
fn attach_label_formatter(options: &JsValue) {
    let formatter =
        Closure::<dyn Fn(String, JsValue) -> String>::new(|label: String, series: JsValue| {
            let percent = js_sys::Reflect::get(&series, &JsValue::from_str("percent"))
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);
            format_slice_label(&label, percent)
        });

    let pie_label = ["series", "pie", "label"]
        .iter()
        .fold(options.clone(), |object, key| {
            js_sys::Reflect::get(&object, &JsValue::from_str(key)).unwrap()
        });
    js_sys::Reflect::set(
        &pie_label,
        &JsValue::from_str("formatter"),
        formatter.as_ref(),
    )
    .unwrap();

    // The library keeps calling the formatter for the lifetime of the chart.
    formatter.forget();
}
