/// Markup for one pie-slice label: the category name over its share of the
/// total, rounded to a whole percent.
pub fn format_slice_label(label: &str, percent: f64) -> String {
    format!(
        "<div style='font-size:8pt; text-align:center; padding:2px; color:white;'>{}<br/>{}%</div>",
        label,
        percent.round() as i64
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_label_and_rounded_percent() {
        let markup = format_slice_label("Open", 33.4);
        assert!(markup.contains("Open"));
        assert!(markup.contains("33%"));
    }

    #[test]
    fn rounds_half_up() {
        assert!(format_slice_label("Open", 33.5).contains("34%"));
        assert!(format_slice_label("Open", 33.4).contains("33%"));
        assert!(format_slice_label("Open", 0.0).contains("0%"));
    }

    #[test]
    fn styles_for_small_centered_white_text() {
        let markup = format_slice_label("Core", 50.0);
        assert!(markup.starts_with("<div style='font-size:8pt;"));
        assert!(markup.contains("text-align:center"));
        assert!(markup.contains("color:white"));
        assert!(markup.ends_with("</div>"));
    }
}
