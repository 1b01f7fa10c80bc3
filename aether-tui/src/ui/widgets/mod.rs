pub mod card;
pub mod load_chart;
pub mod roster;
