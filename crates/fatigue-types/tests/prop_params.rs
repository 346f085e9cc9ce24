// ─────────────────────────────────────────────────────────────────────
// Fatigue Crack Growth Core — Property-Based Tests (proptest) for fatigue-types
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for fatigue-types using proptest.
//!
//! Covers: parameter serialization roundtrip, validation of finite
//! fields, simulation control defaults.

use fatigue_types::config::{GrowthParameters, SimulationControls};
use proptest::prelude::*;

fn arb_params() -> impl Strategy<Value = GrowthParameters> {
    (
        (1e-14f64..1e-6, 0.5f64..6.0, -1.0f64..1.0),
        (1e-4f64..0.5, 1e-4f64..0.5, 0.0f64..100.0),
        (0.5f64..10.0, 0.01f64..2.0, 0.0f64..0.5),
        (1.0f64..200.0, 1.0f64..200.0, 0.0f64..20.0),
    )
        .prop_map(
            |((c, n, m), (a0, c0, smf), (width, thickness, hole), (kc, kic, kth))| {
                GrowthParameters {
                    c,
                    n,
                    m,
                    initial_crack_length_a: a0,
                    initial_crack_length_c: c0,
                    smf,
                    width,
                    thickness,
                    hole_diameter: hole,
                    plane_stress_fracture_toughness: kc,
                    plane_strain_fracture_toughness: kic,
                    delta_k_threshold_value: kth,
                }
            },
        )
}

proptest! {
    /// Any finite parameter set passes validation.
    #[test]
    fn finite_params_validate(params in arb_params()) {
        prop_assert!(params.validate().is_ok());
    }

    /// JSON roundtrip preserves every field bit-for-bit.
    #[test]
    fn params_json_roundtrip(params in arb_params()) {
        let json = serde_json::to_string(&params).unwrap();
        let back: GrowthParameters = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(params, back);
    }

    /// Poisoning any one field with a non-finite value fails validation.
    #[test]
    fn non_finite_field_rejected(
        params in arb_params(),
        slot in 0usize..12,
        poison in prop_oneof![
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
        ],
    ) {
        let mut params = params;
        let field = match slot {
            0 => &mut params.c,
            1 => &mut params.n,
            2 => &mut params.m,
            3 => &mut params.initial_crack_length_a,
            4 => &mut params.initial_crack_length_c,
            5 => &mut params.smf,
            6 => &mut params.width,
            7 => &mut params.thickness,
            8 => &mut params.hole_diameter,
            9 => &mut params.plane_stress_fracture_toughness,
            10 => &mut params.plane_strain_fracture_toughness,
            _ => &mut params.delta_k_threshold_value,
        };
        *field = poison;
        prop_assert!(params.validate().is_err());
    }
}

proptest! {
    /// Controls parsed from sparse JSON keep unset fields at defaults.
    #[test]
    fn controls_partial_json_defaults(max_cycles in 1u32..1_000_000) {
        let json = format!(r#"{{"max_cycles": {max_cycles}}}"#);
        let controls: SimulationControls = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(controls.max_cycles, max_cycles);
        prop_assert_eq!(controls.block_size, SimulationControls::default().block_size);
        prop_assert_eq!(controls.stress_ratio, SimulationControls::default().stress_ratio);
    }

    /// Any positive block size validates.
    #[test]
    fn positive_block_size_validates(block_size in 1u32..10_000) {
        let controls = SimulationControls { block_size, ..SimulationControls::default() };
        prop_assert!(controls.validate().is_ok());
    }
}
