use plotly::{
    color::Rgba,
    common::{Line, Marker, Mode, Title},
    layout::Axis,
    Layout, Plot, Scatter,
};
use shared::{AppConfig, ChartItem, MarkerStyle, SamplePair};

use crate::{dom, error::UiError, plotly_bindings, render::ScatterRenderer};

/// Hands a chart item to the plotly.js runtime of the host page.
pub struct InteractiveRenderer {
    title: String,
    x_label: String,
    y_label: String,
    marker: MarkerStyle,
}

impl InteractiveRenderer {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            title: config.title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            marker: config.marker.clone(),
        }
    }

    pub fn scatter_plot(&self, samples: &SamplePair) -> Plot {
        let (r, g, b) = self.marker.fill_rgb;
        let marker = Marker::new()
            .size(self.marker.size)
            .color(Rgba::new(r, g, b, self.marker.fill_alpha))
            .line(Line::new().color(self.marker.line_color.clone()));
        let trace = Scatter::new(samples.x().to_vec(), samples.y().to_vec())
            .mode(Mode::Markers)
            .show_legend(false)
            .marker(marker);

        let layout = Layout::new()
            .title(Title::with_text(&self.title))
            .x_axis(Axis::new().title(Title::with_text(&self.x_label)))
            .y_axis(Axis::new().title(Title::with_text(&self.y_label)));

        let mut plot = Plot::new();
        plot.add_trace(trace);
        plot.set_layout(layout);
        plot
    }

    /// JSON text of the chart item that mounts this plot into `target_id`.
    pub fn chart_item_json(&self, samples: &SamplePair, target_id: &str) -> Result<String, UiError> {
        let doc: serde_json::Value = serde_json::from_str(&self.scatter_plot(samples).to_json())?;
        Ok(ChartItem::new(target_id, doc).to_json()?)
    }
}

impl ScatterRenderer for InteractiveRenderer {
    /// Serializes, clears the target, then parses the text back on the JS side
    /// and embeds the parsed value. The target is emptied before embedding.
    fn render(&self, samples: &SamplePair, target: &str) -> Result<(), UiError> {
        let json = self.chart_item_json(samples, target)?;
        dom::element_by_id(target)?.set_inner_html("");
        let item = js_sys::JSON::parse(&json)?;
        plotly_bindings::embed_item(&item)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn item_for(samples: &SamplePair) -> ChartItem {
        let renderer = InteractiveRenderer::from_config(&AppConfig::default());
        let json = renderer.chart_item_json(samples, "graph-area-bokeh").unwrap();
        ChartItem::from_json(&json).unwrap()
    }

    #[test]
    fn chart_item_targets_element() {
        let samples = SamplePair::standard_normal(&mut StdRng::seed_from_u64(4), 100);
        let item = item_for(&samples);
        assert_eq!(item.target_id, "graph-area-bokeh");
        assert!(item.doc.get("layout").is_some());
    }

    #[test]
    fn trace_holds_samples_as_markers() {
        let samples = SamplePair::standard_normal(&mut StdRng::seed_from_u64(8), 100);
        let item = item_for(&samples);
        let data = item.doc["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);

        let trace = &data[0];
        assert_eq!(trace["type"], "scatter");
        assert_eq!(trace["mode"], "markers");
        let x: Vec<f64> = serde_json::from_value(trace["x"].clone()).unwrap();
        let y: Vec<f64> = serde_json::from_value(trace["y"].clone()).unwrap();
        assert_eq!(x.len(), 100);
        assert_eq!(y.len(), 100);
        for (got, want) in x.iter().chain(&y).zip(samples.x().iter().chain(samples.y())) {
            assert!((got - want).abs() <= 1e-12 * want.abs().max(1.0));
        }
    }

    #[test]
    fn marker_style_is_applied() {
        let item = item_for(&SamplePair::squares_of(vec![1.0, 2.0]));
        let marker = &item.doc["data"][0]["marker"];
        assert_eq!(marker["size"], 3);
        assert_eq!(marker["color"], "rgba(255, 165, 0, 0.5)");
        assert_eq!(marker["line"]["color"], "navy");
    }

    #[test]
    fn marker_style_follows_config() {
        let config = AppConfig {
            marker: MarkerStyle {
                size: 5,
                line_color: "black".to_string(),
                fill_rgb: (0, 128, 0),
                fill_alpha: 0.25,
            },
            ..AppConfig::default()
        };
        let renderer = InteractiveRenderer::from_config(&config);
        let json = renderer
            .chart_item_json(&SamplePair::squares_of(vec![1.0]), "t")
            .unwrap();
        let item = ChartItem::from_json(&json).unwrap();
        let marker = &item.doc["data"][0]["marker"];
        assert_eq!(marker["size"], 5);
        assert_eq!(marker["color"], "rgba(0, 128, 0, 0.25)");
        assert_eq!(marker["line"]["color"], "black");
    }

    #[test]
    fn labels_reach_layout() {
        let config = AppConfig {
            title: "Squares".to_string(),
            x_label: "draw".to_string(),
            ..AppConfig::default()
        };
        let renderer = InteractiveRenderer::from_config(&config);
        let json = renderer
            .chart_item_json(&SamplePair::squares_of(vec![0.0]), "t")
            .unwrap();
        let item = ChartItem::from_json(&json).unwrap();
        let layout = item.doc["layout"].to_string();
        assert!(layout.contains("Squares"));
        assert!(layout.contains("draw"));
    }
}
