//! Property tests for the twiddle cache and the transform engine.
//!
//! Reproduce a failure: `PROPTEST_SEED=<seed> cargo test --test properties`

use num_complex::Complex32;
use proptest::prelude::*;
use rs_split_dft::float::reduce_index;
use rs_split_dft::{Algorithm, EngineConfig, TransformEngine, TwiddleTable};

mod common;
use common::assert_complex_approx;

fn even_size() -> impl Strategy<Value = usize> {
    (1usize..=64).prop_map(|half| half * 2)
}

fn power_of_two_size() -> impl Strategy<Value = usize> {
    (1u32..=7).prop_map(|exp| 1usize << exp)
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Reference),
        Just(Algorithm::SplitSum),
        Just(Algorithm::Radix2),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn test_reduce_index_in_range_and_congruent(
        n in 1usize..4096,
        k in 0usize..4096,
        m in 0usize..4096,
    ) {
        let idx = reduce_index(k * m, n);
        prop_assert!(idx < n);
        prop_assert_eq!(idx % n, (k * m) % n);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_table_starts_at_unity_and_builds_deterministically(n in even_size()) {
        let a = TwiddleTable::build(n).unwrap();
        let b = TwiddleTable::build(n).unwrap();
        prop_assert_eq!(a[0], Complex32::new(1.0, 0.0));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.len(), n);
    }

    #[test]
    fn test_populated_entries_lie_on_the_unit_circle(n in even_size()) {
        let table = TwiddleTable::build(n).unwrap();
        for idx in 0..n {
            if table.is_populated(idx) {
                prop_assert!((table[idx].norm_sqr() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_transform_is_linear(
        n in power_of_two_size(),
        algorithm in algorithm(),
        a in -2.0f32..2.0,
        b in -2.0f32..2.0,
        seed in prop::collection::vec(-1.0f32..1.0, 256),
    ) {
        let twiddles = TwiddleTable::build(n).unwrap();
        let engine = TransformEngine::new(EngineConfig::default().with_algorithm(algorithm));

        let x = &seed[..n];
        let y = &seed[128..128 + n];
        let combined: Vec<f32> = x.iter().zip(y).map(|(&xi, &yi)| a * xi + b * yi).collect();

        let fx = engine.transform(x, &twiddles).unwrap();
        let fy = engine.transform(y, &twiddles).unwrap();
        let fc = engine.transform(&combined, &twiddles).unwrap();

        for k in 0..n / 2 {
            let expected = fx[k].scale(a) + fy[k].scale(b);
            assert_complex_approx(fc[k], expected, 1e-3 * n as f32, &format!("bin {}", k));
        }
    }

    #[test]
    fn test_output_has_half_length(n in even_size(), algorithm in algorithm()) {
        let twiddles = TwiddleTable::build(n).unwrap();
        let engine = TransformEngine::new(EngineConfig::default().with_algorithm(algorithm));
        let input = vec![0.5f32; n];

        match engine.transform(&input, &twiddles) {
            Ok(out) => prop_assert_eq!(out.len(), n / 2),
            Err(err) => {
                prop_assert_eq!(algorithm, Algorithm::Radix2);
                prop_assert!(!n.is_power_of_two(), "{}", err);
            }
        }
    }
}
