use serde::{Deserialize, Serialize};

use crate::samples::SamplePair;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub ids: ElementIds,
    pub sample_count: usize,
    /// Seeds the plot RNG; entropy is used when absent.
    pub seed: Option<u64>,
    #[serde(rename = "static")]
    pub static_plot: StaticPlotConfig,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub marker: MarkerStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            sample_count: SamplePair::DEFAULT_LEN,
            seed: None,
            static_plot: StaticPlotConfig::default(),
            title: "Graph".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            marker: MarkerStyle::default(),
        }
    }
}

impl AppConfig {
    /// Parses a possibly partial config; missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Ids of the page elements the handlers read and write.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ElementIds {
    pub local_file: String,
    pub calculation_result: String,
    pub graph_area: String,
    pub graph_area_interactive: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            local_file: "local-file".to_string(),
            calculation_result: "calculation-result".to_string(),
            graph_area: "graph-area".to_string(),
            graph_area_interactive: "graph-area-bokeh".to_string(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct StaticPlotConfig {
    pub width: u32,
    pub height: u32,
    pub point_radius: u32,
}

impl Default for StaticPlotConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            point_radius: 3,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct MarkerStyle {
    pub size: usize,
    pub line_color: String,
    pub fill_rgb: (u8, u8, u8),
    pub fill_alpha: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size: 3,
            line_color: "navy".to_string(),
            fill_rgb: (255, 165, 0),
            fill_alpha: 0.5,
        }
    }
}
