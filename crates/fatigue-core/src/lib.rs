//! Walker-equation fatigue crack growth engine.
//!
//! Two operations share the same growth-law primitive:
//! cycle-by-cycle trace simulation (`simulator`) and a one-shot
//! closed-form life estimate (`estimator`).

pub mod estimator;
pub mod geometry;
pub mod simulator;
pub mod walker;
