//! Algebraic identities checked over seeded random vectors, plus
//! read-only sharing of vectors across threads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use redeem_linalg::{LinalgError, ToleranceConfig, Vector};

const TRIALS: usize = 200;

fn random_vector(rng: &mut StdRng, len: usize) -> Vector<i64> {
    (0..len).map(|_| rng.gen_range(-100..=100)).collect()
}

fn random_float_vector(rng: &mut StdRng, len: usize) -> Vector<f64> {
    (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[test]
fn dot_and_inner_product_agree_and_commute() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..TRIALS {
        let len = rng.gen_range(0..8);
        let a = random_vector(&mut rng, len);
        let b = random_vector(&mut rng, len);
        let ab = a.dot_product(&b).unwrap();
        assert_eq!(ab, a.inner_product(&b).unwrap());
        assert_eq!(ab, b.dot_product(&a).unwrap());
    }
}

#[test]
fn cross_product_is_anticommutative() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..TRIALS {
        let a = random_vector(&mut rng, 3);
        let b = random_vector(&mut rng, 3);
        let ab = a.cross_product(&b).unwrap();
        let ba = b.cross_product(&a).unwrap();
        assert_eq!(ab, ba.scalar_multiply(-1));
        assert_eq!(a.cross_product(&a).unwrap(), Vector::zeros(3));
        assert_eq!(ab.dot_product(&a).unwrap(), 0);
        assert_eq!(ab.dot_product(&b).unwrap(), 0);
    }
}

#[test]
fn outer_product_shape_and_entries() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..TRIALS {
        let (m, n) = (rng.gen_range(0..6), rng.gen_range(0..6));
        let a = random_vector(&mut rng, m);
        let b = random_vector(&mut rng, n);
        let outer = a.outer_product(&b);
        assert_eq!(outer.shape(), (m, n));
        for i in 0..m {
            for j in 0..n {
                assert_eq!(outer[(i, j)], a[i] * b[j]);
            }
        }
        assert_eq!(outer.transpose(), b.outer_product(&a));
    }
}

// ---------------------------------------------------------------------------
// Dimension checks
// ---------------------------------------------------------------------------

#[test]
fn unequal_dimensions_always_fail() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..TRIALS {
        let m = rng.gen_range(0..6);
        let n = rng.gen_range(0..6);
        if m == n {
            continue;
        }
        let a = random_vector(&mut rng, m);
        let b = random_vector(&mut rng, n);
        let is_mismatch = |e: LinalgError| matches!(e, LinalgError::DimensionMismatch { .. });
        assert!(is_mismatch(a.dot_product(&b).unwrap_err()));
        assert!(is_mismatch(a.add(&b).unwrap_err()));
        assert!(is_mismatch(a.cross_product(&b).unwrap_err()));
    }
}

// ---------------------------------------------------------------------------
// Scaling, addition, sums
// ---------------------------------------------------------------------------

#[test]
fn scaling_by_zero_gives_zero_vector() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..TRIALS {
        let len = rng.gen_range(0..10);
        let a = random_float_vector(&mut rng, len);
        let scaled = a.scalar_multiply(0.0);
        assert_eq!(scaled.dimension(), len);
        assert!(scaled.iter().all(|&v| v == 0.0));
    }
    let empty: Vector<f64> = Vector::from_vec(vec![]);
    assert!(empty.scalar_multiply(3.5).is_empty());
}

#[test]
fn add_commutes_and_sums_distribute() {
    let mut rng = StdRng::seed_from_u64(23);
    let tolerance = ToleranceConfig::relative(1e-9);
    for _ in 0..TRIALS {
        let len = rng.gen_range(0..10);
        let a = random_float_vector(&mut rng, len);
        let b = random_float_vector(&mut rng, len);
        let ab = a.add(&b).unwrap();
        assert!(ab.approx_eq(&b.add(&a).unwrap(), &tolerance));
        assert!((ab.sum() - (a.sum() + b.sum())).abs() < 1e-9);
    }
}

// ---------------------------------------------------------------------------
// Sharing
// ---------------------------------------------------------------------------

#[test]
fn shared_vectors_are_read_concurrently() {
    let mut rng = StdRng::seed_from_u64(29);
    let a = random_vector(&mut rng, 3);
    let b = random_vector(&mut rng, 3);
    let expected_dot = a.dot_product(&b).unwrap();
    let expected_cross = a.cross_product(&b).unwrap();

    let results: Vec<(i64, Vector<i64>)> = (0..64)
        .into_par_iter()
        .map(|_| {
            (
                a.dot_product(&b).unwrap(),
                a.cross_product(&b).unwrap(),
            )
        })
        .collect();

    assert_eq!(results.len(), 64);
    for (dot, cross) in results {
        assert_eq!(dot, expected_dot);
        assert_eq!(cross, expected_cross);
    }
}
