pub mod error;
pub mod types;

pub use error::{ChartError, Result};
pub use types::{Polarity, Star, Yuan};
