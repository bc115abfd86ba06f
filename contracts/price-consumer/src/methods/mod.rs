pub mod decimals;
pub mod description;
pub mod initialize;
pub mod latest_price;
pub mod utils;
