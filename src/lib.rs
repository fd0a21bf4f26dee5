//! Xuan Kong Flying Star chart engine
//!
//! Deterministic generation of the four Flying Star charts (period,
//! mountain, water, annual) for a construction period, a sitting mountain
//! on the 24-direction compass ring, a calendar year, and the
//! substitute-star mode flag. The engine is a pure function over immutable
//! reference tables; rendering and input widgets live with the caller.

pub mod chart;
pub mod compass;
pub mod core;
