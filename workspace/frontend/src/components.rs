pub mod infographic;
pub mod layout;
pub mod map_widget;
