mod metric_card;
mod rent;
mod structure_chart;
mod trend_chart;
mod units;
mod view;

pub use view::Infographic;
