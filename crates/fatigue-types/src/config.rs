// ─────────────────────────────────────────────────────────────────────
// Fatigue Crack Growth Core — Config
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BLOCK_SIZE, DEFAULT_MAX_CYCLES, DEFAULT_STRESS_RATIO};
use crate::error::{FatigueError, FatigueResult};

/// Material and geometry parameters for one crack growth run.
///
/// Field names mirror the flat key→value JSON written by the parameter
/// import/export layer, so previously saved files deserialize directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthParameters {
    /// Paris coefficient (growth-rate scale).
    #[serde(rename = "C")]
    pub c: f64,
    /// Paris exponent.
    pub n: f64,
    /// Walker stress-ratio sensitivity exponent.
    pub m: f64,
    /// Initial crack semi-axis A (length units).
    #[serde(rename = "initial_crack_length_A")]
    pub initial_crack_length_a: f64,
    /// Initial crack semi-axis C (length units).
    #[serde(rename = "initial_crack_length_C")]
    pub initial_crack_length_c: f64,
    /// Stress multiplication factor applied to the normalized spectrum.
    #[serde(rename = "SMF")]
    pub smf: f64,
    /// Specimen width W (length units).
    pub width: f64,
    /// Specimen thickness T (length units).
    pub thickness: f64,
    /// Bore (hole) diameter D (length units).
    pub hole_diameter: f64,
    /// Plane stress fracture toughness KC (stress-intensity units).
    pub plane_stress_fracture_toughness: f64,
    /// Plane strain fracture toughness KIC (stress-intensity units).
    pub plane_strain_fracture_toughness: f64,
    /// Fatigue threshold ΔK_th at R = 0 (stress-intensity units).
    #[serde(rename = "delta_K_threshold_value")]
    pub delta_k_threshold_value: f64,
}

impl GrowthParameters {
    /// Load parameters from a flat JSON file.
    pub fn from_file(path: &str) -> FatigueResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&contents)?;
        Ok(params)
    }

    /// Every field must be finite. Positivity is deliberately not
    /// enforced: degenerate geometry follows IEEE-754 through the
    /// growth formulas and terminates the stepping loop on its own.
    pub fn validate(&self) -> FatigueResult<()> {
        let fields: [(&'static str, f64); 12] = [
            ("C", self.c),
            ("n", self.n),
            ("m", self.m),
            ("initial_crack_length_A", self.initial_crack_length_a),
            ("initial_crack_length_C", self.initial_crack_length_c),
            ("SMF", self.smf),
            ("width", self.width),
            ("thickness", self.thickness),
            ("hole_diameter", self.hole_diameter),
            (
                "plane_stress_fracture_toughness",
                self.plane_stress_fracture_toughness,
            ),
            (
                "plane_strain_fracture_toughness",
                self.plane_strain_fracture_toughness,
            ),
            ("delta_K_threshold_value", self.delta_k_threshold_value),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(FatigueError::InvalidParameter {
                    name,
                    message: format!("must be finite, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Integration controls for the stepping loop.
///
/// All three are optional in JSON and default to the historical
/// simulation-wide constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationControls {
    /// Stress ratio R (default: 0, zero-to-tension loading).
    #[serde(default = "default_stress_ratio")]
    pub stress_ratio: f64,
    /// Cycles per integration step (default: 10).
    #[serde(default = "default_block_size")]
    pub block_size: u32,
    /// Cycle budget (default: 50 000).
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u32,
}

fn default_stress_ratio() -> f64 {
    DEFAULT_STRESS_RATIO
}
fn default_block_size() -> u32 {
    DEFAULT_BLOCK_SIZE
}
fn default_max_cycles() -> u32 {
    DEFAULT_MAX_CYCLES
}

impl Default for SimulationControls {
    fn default() -> Self {
        SimulationControls {
            stress_ratio: default_stress_ratio(),
            block_size: default_block_size(),
            max_cycles: default_max_cycles(),
        }
    }
}

impl SimulationControls {
    /// A zero block size would never advance the cycle counter.
    pub fn validate(&self) -> FatigueResult<()> {
        if self.block_size == 0 {
            return Err(FatigueError::InvalidParameter {
                name: "block_size",
                message: "must be at least 1".to_string(),
            });
        }
        if !self.stress_ratio.is_finite() {
            return Err(FatigueError::InvalidParameter {
                name: "stress_ratio",
                message: format!("must be finite, got {}", self.stress_ratio),
            });
        }
        Ok(())
    }
}

/// One Walker-law segment of a sigmoidal da/dN vs ΔK fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkerSegment {
    pub c: f64,
    pub n: f64,
    pub m: f64,
}

/// Inputs for the closed-form residual-life estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidualLifeInputs {
    pub segments: Vec<WalkerSegment>,
    pub plane_stress_fracture_toughness: f64,
    pub delta_k_threshold: f64,
    /// Lower limit on R shift (0..-1).
    pub lower_limit_r_shift: f64,
    /// Upper limit on R shift (< 1).
    pub upper_limit_r_shift: f64,
}

impl ResidualLifeInputs {
    pub fn validate(&self) -> FatigueResult<()> {
        if self.segments.is_empty() {
            return Err(FatigueError::MissingParameter(
                "at least one Walker segment is required".to_string(),
            ));
        }
        let fields: [(&'static str, f64); 4] = [
            (
                "plane_stress_fracture_toughness",
                self.plane_stress_fracture_toughness,
            ),
            ("delta_k_threshold", self.delta_k_threshold),
            ("lower_limit_r_shift", self.lower_limit_r_shift),
            ("upper_limit_r_shift", self.upper_limit_r_shift),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(FatigueError::InvalidParameter {
                    name,
                    message: format!("must be finite, got {value}"),
                });
            }
        }
        for (i, seg) in self.segments.iter().enumerate() {
            for (name, value) in [("c", seg.c), ("n", seg.n), ("m", seg.m)] {
                if !value.is_finite() {
                    return Err(FatigueError::InvalidParameter {
                        name: "segments",
                        message: format!("segment {i}: `{name}` must be finite, got {value}"),
                    });
                }
            }
        }
        Ok(())
    }
}
