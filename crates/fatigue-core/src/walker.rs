// ─────────────────────────────────────────────────────────────────────
// Fatigue Crack Growth Core — Walker Law
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! The Walker crack growth law, generalizing Paris to account for
//! stress ratio.

/// Crack growth rate da/dN = C·(ΔK·(1−R)^(m−1))^n.
///
/// The general form is kept even where callers fix R = 0, so non-zero
/// stress ratios need no formula change. Evaluation follows IEEE-754
/// throughout: overflow yields `+∞` (absorbed by the runaway cutoff
/// downstream), and negative or zero coefficients are not
/// special-cased.
pub fn walker_rate(delta_k: f64, stress_ratio: f64, c: f64, n: f64, m: f64) -> f64 {
    c * (delta_k * (1.0 - stress_ratio).powf(m - 1.0)).powf(n)
}
