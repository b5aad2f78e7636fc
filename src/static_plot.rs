use plotters::prelude::*;
use shared::{SamplePair, StaticPlotConfig};

use crate::{dom, error::UiError, render::ScatterRenderer};

const SCATTER_BLUE: RGBColor = RGBColor(31, 119, 180);

/// Renders to SVG markup and injects it as the target's content.
pub struct StaticRenderer {
    config: StaticPlotConfig,
}

impl StaticRenderer {
    pub fn new(config: StaticPlotConfig) -> Self {
        Self { config }
    }
}

impl ScatterRenderer for StaticRenderer {
    fn render(&self, samples: &SamplePair, target: &str) -> Result<(), UiError> {
        let svg = render_svg(samples, &self.config)?;
        dom::element_by_id(target)?.set_inner_html(&svg);
        Ok(())
    }
}

fn draw_error(err: impl std::fmt::Display) -> UiError {
    UiError::Draw(err.to_string())
}

pub fn render_svg(samples: &SamplePair, config: &StaticPlotConfig) -> Result<String, UiError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let (x_range, y_range) = samples.bounds();
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_error)?;
        chart
            .configure_mesh()
            .disable_mesh()
            .draw()
            .map_err(draw_error)?;

        let radius = config.point_radius;
        chart
            .draw_series(
                samples
                    .points()
                    .map(|point| Circle::new(point, radius, SCATTER_BLUE.filled())),
            )
            .map_err(draw_error)?;
        root.present().map_err(draw_error)?;
    }
    Ok(svg)
}
