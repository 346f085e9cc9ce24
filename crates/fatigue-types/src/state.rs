// ─────────────────────────────────────────────────────────────────────
// Fatigue Crack Growth Core — State
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;

/// Mutable crack state owned by one running simulation.
///
/// `area` is recomputed from the two semi-axes on every advance, never
/// accumulated separately.
#[derive(Debug, Clone)]
pub struct CrackState {
    pub length_a: f64,
    pub length_c: f64,
    pub area: f64,
    pub cycles: u32,
}

impl CrackState {
    pub fn new(length_a: f64, length_c: f64) -> Self {
        CrackState {
            length_a,
            length_c,
            area: length_a * length_c,
            cycles: 0,
        }
    }

    /// Split the per-block growth evenly between the two semi-axes.
    /// The model has no anisotropic growth.
    pub fn advance(&mut self, growth: f64) {
        self.length_a += growth / 2.0;
        self.length_c += growth / 2.0;
        self.area = self.length_a * self.length_c;
    }

    pub fn point(&self) -> TracePoint {
        TracePoint {
            cycles: self.cycles,
            length_a: self.length_a,
            length_c: self.length_c,
            area: self.area,
        }
    }
}

/// One retained integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub cycles: u32,
    pub length_a: f64,
    pub length_c: f64,
    pub area: f64,
}

/// Why the stepping loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// ΔK fell below the fatigue threshold; the crack is dormant.
    BelowThreshold,
    /// Per-block growth fell below the arrest cutoff.
    Arrested,
    /// Crack area exceeded the runaway cutoff (unstable growth).
    Runaway,
    /// The cycle budget was exhausted.
    CycleLimit,
}

/// Full history of one crack growth run.
///
/// Always holds at least the initial state at cycle 0, in increasing
/// cycle order.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthTrace {
    pub points: Vec<TracePoint>,
    pub termination: Termination,
}

impl GrowthTrace {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn final_point(&self) -> Option<&TracePoint> {
        self.points.last()
    }

    /// The four parallel columns consumed by the rendering boundary
    /// (length/area vs cycles plots).
    pub fn columns(&self) -> TraceColumns {
        TraceColumns {
            cycles: Array1::from_iter(self.points.iter().map(|p| f64::from(p.cycles))),
            length_a: Array1::from_iter(self.points.iter().map(|p| p.length_a)),
            length_c: Array1::from_iter(self.points.iter().map(|p| p.length_c)),
            area: Array1::from_iter(self.points.iter().map(|p| p.area)),
        }
    }
}

/// Column-oriented view of a trace.
#[derive(Debug, Clone)]
pub struct TraceColumns {
    pub cycles: Array1<f64>,
    pub length_a: Array1<f64>,
    pub length_c: Array1<f64>,
    pub area: Array1<f64>,
}

/// Result of the closed-form residual-life estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeEstimate {
    pub failure_cycles: f64,
    pub final_crack_size: f64,
}
