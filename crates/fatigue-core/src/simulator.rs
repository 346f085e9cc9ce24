// ─────────────────────────────────────────────────────────────────────
// Fatigue Crack Growth Core — Simulator
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! CrackGrowthSimulator — the cycle-stepping integration loop.
//!
//! Advances a crack through blocks of load cycles using the Walker
//! growth law and a bore geometry factor, recording one trace point per
//! retained step, until a stop condition fires: sub-threshold ΔK,
//! arrested growth, runaway area, or cycle budget exhaustion.

use log::debug;

use crate::geometry::{bore_beta, delta_k};
use crate::walker::walker_rate;
use fatigue_types::config::{GrowthParameters, SimulationControls};
use fatigue_types::constants::{GROWTH_ARREST_LIMIT, RUNAWAY_AREA_LIMIT};
use fatigue_types::error::FatigueResult;
use fatigue_types::state::{CrackState, GrowthTrace, Termination};

/// Discrete-cycle fatigue crack growth simulator.
///
/// Holds a validated parameter set and integration controls; each call
/// to [`run`](Self::run) owns its own state, so calls are independent
/// and freely repeatable.
pub struct CrackGrowthSimulator {
    params: GrowthParameters,
    controls: SimulationControls,
}

impl CrackGrowthSimulator {
    /// Simulator with the default controls (R = 0, 10-cycle blocks,
    /// 50 000-cycle budget).
    pub fn new(params: GrowthParameters) -> FatigueResult<Self> {
        Self::with_controls(params, SimulationControls::default())
    }

    pub fn with_controls(
        params: GrowthParameters,
        controls: SimulationControls,
    ) -> FatigueResult<Self> {
        params.validate()?;
        controls.validate()?;
        Ok(CrackGrowthSimulator { params, controls })
    }

    pub fn params(&self) -> &GrowthParameters {
        &self.params
    }

    pub fn controls(&self) -> &SimulationControls {
        &self.controls
    }

    /// Run the integration to completion.
    ///
    /// Algorithm, per block of `block_size` cycles:
    /// 1. ΔK = SMF·√(π·ā)·β with β = 1 + 0.5·(D/W)
    /// 2. stop `BelowThreshold` if ΔK < ΔK_th
    /// 3. da/dN from the Walker law at the configured stress ratio
    /// 4. growth = da/dN · block_size
    /// 5. stop `Arrested` if growth < 1e-9
    /// 6. advance both semi-axes by growth/2, recompute area
    /// 7. stop `Runaway` (discarding the unstable step) if area > 1
    /// 8. otherwise advance the cycle counter and retain the point
    ///
    /// The returned trace is non-empty, cycle-ordered, and a pure
    /// function of the inputs. No I/O.
    pub fn run(&self) -> GrowthTrace {
        let p = &self.params;
        let beta = bore_beta(p.hole_diameter, p.width);

        let mut state = CrackState::new(p.initial_crack_length_a, p.initial_crack_length_c);
        let mut points = vec![state.point()];

        let termination = loop {
            if state.cycles >= self.controls.max_cycles {
                break Termination::CycleLimit;
            }
            let dk = delta_k(p.smf, state.length_a, state.length_c, beta);
            if dk < p.delta_k_threshold_value {
                break Termination::BelowThreshold;
            }
            let rate = walker_rate(dk, self.controls.stress_ratio, p.c, p.n, p.m);
            let growth = rate * f64::from(self.controls.block_size);
            if growth < GROWTH_ARREST_LIMIT {
                break Termination::Arrested;
            }
            state.advance(growth);
            if state.area > RUNAWAY_AREA_LIMIT {
                break Termination::Runaway;
            }
            state.cycles += self.controls.block_size;
            points.push(state.point());
        };

        debug!(
            "crack growth run stopped: {:?} after {} cycles, final area {:.6e}",
            termination,
            points.last().map_or(0, |pt| pt.cycles),
            points.last().map_or(f64::NAN, |pt| pt.area),
        );

        GrowthTrace {
            points,
            termination,
        }
    }
}
