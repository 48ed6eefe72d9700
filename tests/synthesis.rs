//! Validates wavefunction synthesis: unit modulus, parameter ranges, and seeded determinism

use quantica::synthesis::{Field, WaveParameters};
use rand::{SeedableRng, rngs::StdRng};
use std::f64::consts::TAU;

#[test]
fn test_plane_wave_cells_have_unit_modulus_before_noise() {
    let mut rng = StdRng::seed_from_u64(7);
    let parameters = WaveParameters::sample(&mut rng);
    let field = Field::plane_wave(16, &parameters);

    for value in field.values() {
        assert!(
            (value.norm() - 1.0).abs() < 1e-12,
            "Pre-noise modulus should be 1, got {}",
            value.norm()
        );
    }
}

#[test]
fn test_phase_noise_perturbs_phase_only() {
    let mut rng = StdRng::seed_from_u64(7);
    let parameters = WaveParameters::sample(&mut rng);
    let mut field = Field::plane_wave(16, &parameters);
    let before = field.clone();

    field.apply_phase_noise(&mut rng);

    for value in field.values() {
        assert!(
            (value.norm() - 1.0).abs() < 1e-12,
            "Phase noise should not change the modulus, got {}",
            value.norm()
        );
    }

    let changed = field
        .values()
        .iter()
        .zip(before.values().iter())
        .any(|(after, original)| after != original);
    assert!(changed, "Phase noise should perturb at least one cell");
}

#[test]
fn test_sampled_parameters_stay_within_ranges() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let parameters = WaveParameters::sample(&mut rng);
        assert!(
            (0.5..=2.0).contains(&parameters.wave_number),
            "Wave number {} outside [0.5, 2.0]",
            parameters.wave_number
        );
        assert!(
            (0.5..=2.0).contains(&parameters.angular_frequency),
            "Angular frequency {} outside [0.5, 2.0]",
            parameters.angular_frequency
        );
        assert!(
            (0.0..TAU).contains(&parameters.phase),
            "Phase {} outside [0, 2π)",
            parameters.phase
        );
    }
}

#[test]
fn test_synthesized_field_has_requested_dimensions() {
    let mut rng = StdRng::seed_from_u64(3);
    let field = Field::synthesize(8, &mut rng);

    assert_eq!(field.size(), 8);
    assert_eq!(field.values().dim(), (8, 8));
    assert_eq!(field.probability_density().dim(), (8, 8));
}

#[test]
fn test_same_seed_synthesizes_identical_fields() {
    let mut first_rng = StdRng::seed_from_u64(1234);
    let mut second_rng = StdRng::seed_from_u64(1234);

    let first = Field::synthesize(12, &mut first_rng);
    let second = Field::synthesize(12, &mut second_rng);

    let identical = first
        .values()
        .iter()
        .zip(second.values().iter())
        .all(|(a, b)| a == b);
    assert!(identical, "Fixed seed should reproduce the field exactly");
}

#[test]
fn test_probability_density_is_near_one_before_smoothing() {
    let mut rng = StdRng::seed_from_u64(5);
    let field = Field::synthesize(10, &mut rng);

    for value in &field.probability_density() {
        assert!(
            (value - 1.0).abs() < 1e-12,
            "Unit-modulus cells should have density 1, got {value}"
        );
    }
}
