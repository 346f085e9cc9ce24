// ─────────────────────────────────────────────────────────────────────
// Fatigue Crack Growth Core — Estimator
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Closed-form residual-life estimate from segmented Walker fits.
//!
//! This is a coarse screening approximation, not an integration: it
//! divides the fatigue threshold by the instantaneous growth rate of
//! each segment and sums the results. It is deliberately kept separate
//! from the cycle-stepping simulator and is not reconciled with it;
//! the two share only the growth-law primitive.

use log::debug;

use crate::walker::walker_rate;
use fatigue_types::config::ResidualLifeInputs;
use fatigue_types::error::FatigueResult;
use fatigue_types::state::LifeEstimate;

/// Stress ratio assumed when the upper R-shift limit is zero.
const FALLBACK_STRESS_RATIO: f64 = 0.5;

/// Estimate cycles to failure and final crack size across all Walker
/// segments.
///
/// Per segment: ΔK = KC − ΔK_th, R = lower/upper R-shift limit (0.5
/// when the upper limit is zero), rate from the Walker law, then
/// cycles = ΔK_th / rate and size = rate · cycles. Totals are summed
/// over segments.
pub fn estimate_cycles_to_failure(inputs: &ResidualLifeInputs) -> FatigueResult<LifeEstimate> {
    inputs.validate()?;

    let delta_k = inputs.plane_stress_fracture_toughness - inputs.delta_k_threshold;
    let stress_ratio = if inputs.upper_limit_r_shift == 0.0 {
        FALLBACK_STRESS_RATIO
    } else {
        inputs.lower_limit_r_shift / inputs.upper_limit_r_shift
    };

    let mut total_failure_cycles = 0.0;
    let mut total_final_crack_size = 0.0;
    for segment in &inputs.segments {
        let rate = walker_rate(delta_k, stress_ratio, segment.c, segment.n, segment.m);
        let failure_cycles = inputs.delta_k_threshold / rate;
        total_failure_cycles += failure_cycles;
        total_final_crack_size += rate * failure_cycles;
    }

    debug!(
        "residual life estimate: {} segments, R = {stress_ratio}, {total_failure_cycles:.3e} cycles",
        inputs.segments.len(),
    );

    Ok(LifeEstimate {
        failure_cycles: total_failure_cycles,
        final_crack_size: total_final_crack_size,
    })
}
