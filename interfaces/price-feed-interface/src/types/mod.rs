pub mod error;
pub mod round_data;
