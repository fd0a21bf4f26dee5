pub mod mountain;
pub mod trigram;

pub use mountain::Mountain;
pub use trigram::Trigram;
