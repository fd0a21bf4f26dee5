pub mod annual;
pub mod assembler;
pub mod overrides;
pub mod palace;
pub mod resolver;
pub mod sequencer;

pub use annual::annual_star;
pub use assembler::{compute, ComputationInput, ComputationResult};
pub use resolver::{resolve, Resolution};
pub use sequencer::{fly, Chart};
