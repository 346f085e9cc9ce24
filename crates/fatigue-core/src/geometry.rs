// ─────────────────────────────────────────────────────────────────────
// Fatigue Crack Growth Core — Geometry
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Geometry factor and stress-intensity evaluation for a crack at an
//! open bore in a finite-width plate.

use std::f64::consts::PI;

/// Beta relates the far-field loading to the crack tip for a hole of
/// diameter D in a plate of width W: β = 1 + 0.5·(D/W).
pub fn bore_beta(hole_diameter: f64, width: f64) -> f64 {
    1.0 + 0.5 * (hole_diameter / width)
}

/// Effective ΔK for the current crack size: SMF·√(π·ā)·β, where ā is
/// the average of the two crack semi-axes. Division by a zero width in
/// beta is not guarded; IEEE-754 infinities propagate into the stop
/// conditions.
pub fn delta_k(smf: f64, length_a: f64, length_c: f64, beta: f64) -> f64 {
    let a_avg = (length_a + length_c) / 2.0;
    smf * (PI * a_avg).sqrt() * beta
}
