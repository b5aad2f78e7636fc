mod calc;
mod chart_item;
mod config;
mod error;
mod samples;

pub use calc::{calculate, parse_input, Calculation, Number};
pub use chart_item::ChartItem;
pub use config::{AppConfig, ElementIds, MarkerStyle, StaticPlotConfig};
pub use error::{CalcError, ChartItemError, ComputationError};
pub use samples::SamplePair;
