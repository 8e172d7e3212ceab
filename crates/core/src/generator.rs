//! Organic blob point generation.
//!
//! Vertices are spaced evenly by angle around the canvas center. Each vertex
//! radius starts at a growth-derived base and is perturbed by three terms:
//! a sinusoidal ripple (`frequency`, `amplitude`), seeded trigonometric noise
//! (`complexity`, `seed`), and a three-lobe wobble (`smoothness`). The result
//! is always clamped into the canvas radius bounds.
//!
//! Noise is a pure function of `(angle, seed)`, so neighbouring vertices get
//! correlated offsets and equal inputs give bit-identical points.

use std::f64::consts::TAU;

use crate::error::BlobError;
use crate::geometry::{BlobBounds, BlobPoint};
use crate::params::{BlobParams, MIN_EDGE_COUNT};
use crate::stitch::{stitch_path, BlobPath, StitchMethod};

/// Ratio between the sine and cosine rates of the seeded noise.
const NOISE_COSINE_RATE: f64 = 0.7;
/// Lobes of the smoothness wobble around the full circle.
const WOBBLE_LOBES: f64 = 3.0;
/// Wobble amplitude as a fraction of the headroom above the base radius.
const WOBBLE_SCALE: f64 = 0.2;

/// Generates the `edge_count` vertices of a blob on the standard canvas.
///
/// Returns `BlobError::InvalidParameter` if `edge_count < 3` or if any real
/// parameter is NaN or infinite. Values outside their slider ranges are not
/// rejected; the radius clamp absorbs them.
pub fn generate_blob_points(params: &BlobParams) -> Result<Vec<BlobPoint>, BlobError> {
    generate_blob_points_in(params, &BlobBounds::STANDARD)
}

/// Generates blob vertices within explicit canvas bounds.
///
/// Besides the parameter checks of [`generate_blob_points`], rejects bounds
/// that fail [`BlobBounds::validate`].
pub fn generate_blob_points_in(
    params: &BlobParams,
    bounds: &BlobBounds,
) -> Result<Vec<BlobPoint>, BlobError> {
    validate_params(params)?;
    bounds.validate()?;
    let step = TAU / params.edge_count as f64;
    Ok((0..params.edge_count)
        .map(|i| {
            let angle = i as f64 * step;
            bounds.polar(angle, vertex_radius(params, bounds, angle))
        })
        .collect())
}

/// Radius of the vertex at `angle`, already clamped into `bounds`.
pub fn vertex_radius(params: &BlobParams, bounds: &BlobBounds, angle: f64) -> f64 {
    let base_radius = bounds.base_radius(params.growth);
    let headroom = bounds.max_radius - base_radius;

    let sine_wave = (angle * params.frequency).sin() * params.amplitude;
    let random_factor =
        ((angle * params.seed).sin() + (angle * params.seed * NOISE_COSINE_RATE).cos()) * 0.5;
    let max_randomness = headroom * params.complexity;
    let randomness = random_factor * max_randomness + sine_wave * max_randomness;
    let wobble = (angle * WOBBLE_LOBES).sin() * params.smoothness * headroom * WOBBLE_SCALE;

    // Huge finite inputs overflow the trig arguments or the headroom product
    // into NaN; such vertices fall back to the base radius.
    let radius = base_radius + randomness + wobble;
    let radius = if radius.is_nan() { base_radius } else { radius };

    // Must stay the last step before the polar conversion.
    bounds.clamp_radius(radius)
}

/// Generates a blob and stitches it with `method`, using `params.smoothness`.
pub fn generate_blob(params: &BlobParams, method: StitchMethod) -> Result<BlobPath, BlobError> {
    let points = generate_blob_points(params)?;
    stitch_path(&points, method, params.smoothness)
}

/// Rejects `edge_count < 3` with `InvalidParameter`.
fn check_edge_count(edge_count: usize) -> Result<(), BlobError> {
    if edge_count < MIN_EDGE_COUNT {
        return Err(BlobError::invalid(
            "edge_count",
            format!("must be at least {MIN_EDGE_COUNT}, got {edge_count}"),
        ));
    }
    Ok(())
}

/// Every check a parameter set must pass before generation.
pub(crate) fn validate_params(params: &BlobParams) -> Result<(), BlobError> {
    check_edge_count(params.edge_count)?;
    let reals = [
        ("growth", params.growth),
        ("complexity", params.complexity),
        ("smoothness", params.smoothness),
        ("frequency", params.frequency),
        ("amplitude", params.amplitude),
        ("seed", params.seed),
    ];
    match reals.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, v)) => Err(BlobError::invalid(name, format!("must be finite, got {v}"))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    /// Helper: the radius and angle of a point relative to the standard center.
    fn polar_of(p: BlobPoint) -> (f64, f64) {
        let d = p - BlobBounds::STANDARD.center_point();
        (d.length(), d.y.atan2(d.x))
    }

    /// Helper: shortest distance between two angles on the circle.
    fn angular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    fn scenario() -> BlobParams {
        BlobParams {
            edge_count: 8,
            growth: 6.0,
            complexity: 0.7,
            smoothness: 0.5,
            frequency: 4.0,
            amplitude: 0.5,
            seed: 123.45,
        }
    }

    #[test]
    fn returns_exactly_edge_count_points() {
        for n in [3, 4, 7, 8, 64, 200] {
            let points = generate_blob_points(&scenario().with_edge_count(n)).unwrap();
            assert_eq!(points.len(), n);
        }
    }

    #[test]
    fn two_edges_is_rejected() {
        let err = generate_blob_points(&scenario().with_edge_count(2)).unwrap_err();
        assert!(matches!(
            err,
            BlobError::InvalidParameter { ref name, .. } if name == "edge_count"
        ));
    }

    #[test]
    fn zero_edges_is_rejected() {
        assert!(generate_blob_points(&scenario().with_edge_count(0)).is_err());
    }

    #[test]
    fn non_finite_seed_is_rejected() {
        let err = generate_blob_points(&scenario().with_seed(f64::NAN)).unwrap_err();
        assert!(err.to_string().contains("seed"), "got: {err}");
    }

    #[test]
    fn same_params_give_bit_identical_points() {
        let a = generate_blob_points(&scenario()).unwrap();
        let b = generate_blob_points(&scenario()).unwrap();
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.x.to_bits(), pb.x.to_bits());
            assert_eq!(pa.y.to_bits(), pb.y.to_bits());
        }
    }

    #[test]
    fn different_seed_changes_shape() {
        let a = generate_blob_points(&scenario()).unwrap();
        let b = generate_blob_points(&scenario().with_seed(7.0)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn scenario_points_stay_in_bounds_and_start_on_the_x_axis() {
        let bounds = BlobBounds::STANDARD;
        let points = generate_blob_points(&scenario()).unwrap();
        assert_eq!(points.len(), 8);
        for &p in &points {
            let (r, _) = polar_of(p);
            assert!(bounds.contains_radius(r, 1e-9), "radius {r} out of bounds");
        }
        let first = points[0];
        assert_eq!(first.y, 240.0);
        assert!(first.x > 240.0 + 48.0 - 1e-9 && first.x < 240.0 + 192.0 + 1e-9);
    }

    #[test]
    fn flat_triangle_is_regular() {
        let params = BlobParams {
            edge_count: 3,
            complexity: 0.0,
            amplitude: 0.0,
            smoothness: 0.0,
            ..scenario()
        };
        let base = BlobBounds::STANDARD.base_radius(params.growth);
        for p in generate_blob_points(&params).unwrap() {
            let (r, _) = polar_of(p);
            assert!((r - base).abs() < 1e-9, "radius {r} != base {base}");
        }
    }

    #[test]
    fn vertices_follow_even_angular_spacing() {
        let points = generate_blob_points(&scenario().with_edge_count(12)).unwrap();
        let step = TAU / 12.0;
        for (i, &p) in points.iter().enumerate() {
            let (_, angle) = polar_of(p);
            assert!(
                angular_distance(angle, i as f64 * step) < 1e-9,
                "vertex {i} at angle {angle}"
            );
        }
    }

    #[test]
    fn full_growth_with_noise_never_exceeds_max_radius() {
        let params = BlobParams {
            growth: 10.0,
            complexity: 1.0,
            amplitude: 1.0,
            smoothness: 1.0,
            ..scenario()
        };
        for p in generate_blob_points(&params).unwrap() {
            let (r, _) = polar_of(p);
            assert!(r <= 192.0 + 1e-9);
        }
    }

    #[test]
    fn out_of_range_inputs_degrade_to_bounds() {
        let bounds = BlobBounds::STANDARD;
        for growth in [-1e6, 0.0, 25.0, 1e6] {
            let params = BlobParams {
                growth,
                amplitude: 4.0,
                frequency: 1e3,
                ..scenario()
            };
            for p in generate_blob_points(&params).unwrap() {
                let (r, _) = polar_of(p);
                assert!(bounds.contains_radius(r, 1e-6), "growth {growth}: radius {r}");
            }
        }
    }

    #[test]
    fn zero_complexity_and_smoothness_pin_radius_to_base() {
        let params = BlobParams {
            complexity: 0.0,
            smoothness: 0.0,
            ..scenario()
        };
        let base = BlobBounds::STANDARD.base_radius(params.growth);
        for p in generate_blob_points(&params).unwrap() {
            assert!((polar_of(p).0 - base).abs() < 1e-9);
        }
    }

    #[test]
    fn vertex_radius_at_zero_angle_is_base_plus_noise_floor() {
        // At angle 0: sin terms vanish, cos(0) = 1, so random_factor = 0.5.
        let params = scenario();
        let bounds = BlobBounds::STANDARD;
        let base = bounds.base_radius(params.growth);
        let expected = base + 0.5 * (bounds.max_radius - base) * params.complexity;
        assert!((vertex_radius(&params, &bounds, 0.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn generate_blob_closes_on_first_vertex() {
        let path = generate_blob(&scenario(), StitchMethod::Advanced).unwrap();
        let first = generate_blob_points(&scenario()).unwrap()[0];
        assert_eq!(path.start(), first);
        assert_eq!(path.end(), first);
    }

    #[test]
    fn custom_bounds_are_respected() {
        let bounds = BlobBounds::for_canvas(100.0).unwrap();
        let points = generate_blob_points_in(&scenario(), &bounds).unwrap();
        for p in points {
            let r = (p - DVec2::splat(50.0)).length();
            assert!(bounds.contains_radius(r, 1e-9), "radius {r}");
        }
    }

    fn assert_finite_and_in_bounds(params: &BlobParams) {
        let bounds = BlobBounds::STANDARD;
        for p in generate_blob_points(params).unwrap() {
            assert!(p.is_finite(), "non-finite vertex {p} for {params:?}");
            let (r, _) = polar_of(p);
            assert!(bounds.contains_radius(r, 1e-6), "radius {r} for {params:?}");
        }
    }

    #[test]
    fn huge_finite_inputs_stay_finite_and_in_bounds() {
        for big in [1e308, f64::MAX, -1e308, f64::MIN] {
            assert_finite_and_in_bounds(&scenario().with_seed(big));
            assert_finite_and_in_bounds(&BlobParams {
                frequency: big,
                ..scenario()
            });
            assert_finite_and_in_bounds(&BlobParams {
                growth: big,
                ..scenario()
            });
            assert_finite_and_in_bounds(&BlobParams {
                growth: big,
                complexity: 0.0,
                ..scenario()
            });
            assert_finite_and_in_bounds(&BlobParams {
                amplitude: big,
                complexity: big,
                smoothness: big,
                ..scenario()
            });
        }
    }

    #[test]
    fn huge_seed_survives_caller_side_clamping() {
        // `clamped()` passes finite seeds through untouched.
        let params = scenario().with_seed(f64::MAX).clamped();
        assert_eq!(params.seed, f64::MAX);
        assert_finite_and_in_bounds(&params);
    }

    #[test]
    fn huge_growth_pins_radius_to_max() {
        let params = BlobParams {
            growth: 1e308,
            complexity: 0.0,
            ..scenario()
        };
        for p in generate_blob_points(&params).unwrap() {
            assert!((polar_of(p).0 - 192.0).abs() < 1e-9);
        }
    }

    #[test]
    fn degenerate_bounds_are_rejected_without_panicking() {
        let bounds = BlobBounds {
            size: -480.0,
            center: -240.0,
            min_radius: -48.0,
            max_radius: -192.0,
        };
        assert!(generate_blob_points_in(&scenario(), &bounds).is_err());

        let bounds = BlobBounds {
            min_radius: f64::NAN,
            ..BlobBounds::STANDARD
        };
        assert!(generate_blob_points_in(&scenario(), &bounds).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn in_range_params() -> impl Strategy<Value = BlobParams> {
            (
                3_usize..=64,
                1.0_f64..=10.0,
                0.0_f64..=1.0,
                0.0_f64..=1.0,
                1.0_f64..=20.0,
                0.0_f64..=1.0,
                -1000.0_f64..1000.0,
            )
                .prop_map(
                    |(edge_count, growth, complexity, smoothness, frequency, amplitude, seed)| {
                        BlobParams {
                            edge_count,
                            growth,
                            complexity,
                            smoothness,
                            frequency,
                            amplitude,
                            seed,
                        }
                    },
                )
        }

        proptest! {
            #[test]
            fn radius_always_within_bounds(p in in_range_params()) {
                let bounds = BlobBounds::STANDARD;
                for point in generate_blob_points(&p).unwrap() {
                    let (r, _) = polar_of(point);
                    prop_assert!(bounds.contains_radius(r, 1e-9), "radius {r} for {p:?}");
                }
            }

            #[test]
            fn point_count_matches_edge_count(p in in_range_params()) {
                prop_assert_eq!(generate_blob_points(&p).unwrap().len(), p.edge_count);
            }

            #[test]
            fn deterministic_across_calls(p in in_range_params()) {
                let a = generate_blob_points(&p).unwrap();
                let b = generate_blob_points(&p).unwrap();
                for (pa, pb) in a.iter().zip(&b) {
                    prop_assert_eq!(pa.x.to_bits(), pb.x.to_bits());
                    prop_assert_eq!(pa.y.to_bits(), pb.y.to_bits());
                }
            }

            #[test]
            fn angles_strictly_increase_around_center(p in in_range_params()) {
                let step = TAU / p.edge_count as f64;
                for (i, point) in generate_blob_points(&p).unwrap().into_iter().enumerate() {
                    let (_, angle) = polar_of(point);
                    prop_assert!(angular_distance(angle, i as f64 * step) < 1e-9);
                }
            }

            #[test]
            fn fewer_than_three_edges_always_rejected(
                p in in_range_params(),
                n in 0_usize..3,
            ) {
                let rejected = matches!(
                    generate_blob_points(&p.with_edge_count(n)),
                    Err(BlobError::InvalidParameter { .. })
                );
                prop_assert!(rejected);
            }
        }
    }
}
