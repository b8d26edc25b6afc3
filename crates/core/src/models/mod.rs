pub mod asset;
pub mod chart;
pub mod price;
pub mod settings;
