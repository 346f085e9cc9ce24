// ─────────────────────────────────────────────────────────────────────
// Fatigue Crack Growth Core — Constants
// License: MIT
// ─────────────────────────────────────────────────────────────────────
/// Default stress ratio R (min/max cyclic stress).
/// Zero-to-tension loading: the spectrum cycles from zero to peak.
pub const DEFAULT_STRESS_RATIO: f64 = 0.0;

/// Default number of load cycles lumped into one integration step.
pub const DEFAULT_BLOCK_SIZE: u32 = 10;

/// Default cycle budget. Runs never integrate past this many cycles.
pub const DEFAULT_MAX_CYCLES: u32 = 50_000;

/// Per-block crack growth (length units) below which the crack is
/// treated as arrested and the run stops.
pub const GROWTH_ARREST_LIMIT: f64 = 1e-9;

/// Crack area (square length units) above which growth is considered
/// unstable and the run is cut off. Substitutes for an explicit
/// fracture-toughness check in the stepping loop.
pub const RUNAWAY_AREA_LIMIT: f64 = 1.0;
