pub mod decoder;
pub mod encoder;
pub mod engine;

pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
pub use decoder::to_number;
pub use encoder::to_numeral;
pub use engine::ConversionEngine;
