mod view;

pub use view::TradeAreaMap;
