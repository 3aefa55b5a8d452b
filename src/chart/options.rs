use serde_json::{json, Value};

/// Configuration record for one pie chart: target region, geometry, slice
/// combination, and legend visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct PieOptions {
    /// Selector of the page region the chart draws into.
    pub target: &'static str,
    pub radius: f64,
    pub tilt: Option<f64>,
    /// Slices below this share of the total are merged into one catch-all slice.
    pub combine_threshold: f64,
    pub combine_color: &'static str,
    pub show_legend: bool,
    pub label_radius: Option<f64>,
    pub label_background_opacity: Option<f64>,
}

impl PieOptions {
    /// Tilted full-radius pie of task counts by status, no legend.
    pub fn status_chart() -> Self {
        Self {
            target: ".status_chart",
            radius: 1.0,
            tilt: Some(0.5),
            combine_threshold: 0.1,
            combine_color: "#999",
            show_legend: false,
            label_radius: Some(1.0),
            label_background_opacity: Some(0.8),
        }
    }

    /// Large-radius pie of task counts by module, with a legend.
    pub fn module_chart() -> Self {
        Self {
            target: ".module_chart",
            radius: 500.0,
            tilt: None,
            combine_threshold: 0.05,
            combine_color: "#999",
            show_legend: true,
            label_radius: None,
            label_background_opacity: None,
        }
    }

    /// Class name of the target region (the selector without its leading dot).
    pub fn target_class(&self) -> &'static str {
        self.target.trim_start_matches('.')
    }

    /// Build the nested options object the charting library consumes.
    pub fn to_flot_options(&self) -> Value {
        let mut pie = json!({
            "show": true,
            "radius": self.radius,
            "label": { "show": true },
            "combine": {
                "color": self.combine_color,
                "threshold": self.combine_threshold,
            },
        });
        if let Some(tilt) = self.tilt {
            pie["tilt"] = json!(tilt);
        }
        if let Some(radius) = self.label_radius {
            pie["label"]["radius"] = json!(radius);
        }
        if let Some(opacity) = self.label_background_opacity {
            pie["label"]["background"] = json!({ "opacity": opacity });
        }

        json!({
            "series": { "pie": pie },
            "legend": { "show": self.show_legend },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_chart_configuration() {
        let options = PieOptions::status_chart();
        assert_eq!(options.target, ".status_chart");
        assert_eq!(options.radius, 1.0);
        assert_eq!(options.tilt, Some(0.5));
        assert_eq!(options.combine_threshold, 0.1);
        assert_eq!(options.combine_color, "#999");
        assert!(!options.show_legend);
    }

    #[test]
    fn module_chart_configuration() {
        let options = PieOptions::module_chart();
        assert_eq!(options.target, ".module_chart");
        assert_eq!(options.radius, 500.0);
        assert_eq!(options.tilt, None);
        assert_eq!(options.combine_threshold, 0.05);
        assert!(options.show_legend);
    }

    #[test]
    fn chart_configurations_never_swap() {
        let status = PieOptions::status_chart();
        let module = PieOptions::module_chart();
        assert_eq!(status.combine_threshold, 0.1);
        assert!(!status.show_legend);
        assert_eq!(module.combine_threshold, 0.05);
        assert!(module.show_legend);
    }

    #[test]
    fn target_class_strips_the_selector_dot() {
        assert_eq!(PieOptions::status_chart().target_class(), "status_chart");
        assert_eq!(PieOptions::module_chart().target_class(), "module_chart");
    }

    #[test]
    fn status_options_serialize_to_library_shape() {
        let value = PieOptions::status_chart().to_flot_options();
        assert_eq!(value["series"]["pie"]["show"], json!(true));
        assert_eq!(value["series"]["pie"]["radius"], json!(1.0));
        assert_eq!(value["series"]["pie"]["tilt"], json!(0.5));
        assert_eq!(value["series"]["pie"]["label"]["show"], json!(true));
        assert_eq!(value["series"]["pie"]["label"]["radius"], json!(1.0));
        assert_eq!(
            value["series"]["pie"]["label"]["background"]["opacity"],
            json!(0.8)
        );
        assert_eq!(value["series"]["pie"]["combine"]["threshold"], json!(0.1));
        assert_eq!(value["series"]["pie"]["combine"]["color"], json!("#999"));
        assert_eq!(value["legend"]["show"], json!(false));
    }

    #[test]
    fn module_options_serialize_to_library_shape() {
        let value = PieOptions::module_chart().to_flot_options();
        assert_eq!(value["series"]["pie"]["radius"], json!(500.0));
        assert!(value["series"]["pie"].get("tilt").is_none());
        assert_eq!(value["series"]["pie"]["combine"]["threshold"], json!(0.05));
        assert_eq!(value["legend"]["show"], json!(true));
    }
}
