//! Statistical and determinism checks for the random source.
//!
//! Every test runs on a fixed seed, so the chi-squared statistics are
//! deterministic; the critical values are the 0.99 quantiles for the
//! relevant degrees of freedom.

use delve_rand::{Random, RandomError};

const SEED: u64 = 0xC0FFEE;

fn chi_squared(observed: &[u64], expected: &[f64]) -> f64 {
    observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| {
            let d = o as f64 - e;
            d * d / e
        })
        .sum()
}

// ── Uniformity ──────────────────────────────────────────────────

#[test]
fn uniform_u64_high_bits_are_uniform() {
    const N: u64 = 160_000;
    let mut r = Random::seeded(SEED);
    let mut buckets = [0u64; 16];
    for _ in 0..N {
        buckets[(r.uniform_u64() >> 60) as usize] += 1;
    }
    let expected = [N as f64 / 16.0; 16];
    let chi2 = chi_squared(&buckets, &expected);
    // df = 15
    assert!(chi2 < 30.578, "chi2 = {chi2}");
}

#[test]
fn uniform_f64_deciles_are_uniform() {
    const N: u64 = 100_000;
    let mut r = Random::seeded(SEED);
    let mut buckets = [0u64; 10];
    for _ in 0..N {
        buckets[(r.uniform_f64() * 10.0) as usize] += 1;
    }
    let chi2 = chi_squared(&buckets, &[N as f64 / 10.0; 10]);
    // df = 9
    assert!(chi2 < 21.666, "chi2 = {chi2}");
}

#[test]
fn uniform_int_faces_are_uniform() {
    const N: u64 = 60_000;
    let mut r = Random::seeded(SEED);
    let mut faces = [0u64; 6];
    for _ in 0..N {
        faces[r.uniform_int(6).unwrap()] += 1;
    }
    let chi2 = chi_squared(&faces, &[N as f64 / 6.0; 6]);
    // df = 5
    assert!(chi2 < 15.086, "chi2 = {chi2}");
}

#[test]
fn chance_frequency_tracks_probability() {
    const N: u64 = 100_000;
    let mut r = Random::seeded(SEED);
    let hits = (0..N).filter(|_| r.chance(0.3).unwrap()).count();
    let freq = hits as f64 / N as f64;
    assert!((freq - 0.3).abs() < 0.01, "freq = {freq}");
}

// ── Weighted choice ─────────────────────────────────────────────

#[test]
fn weighted_choice_is_proportional() {
    const N: u64 = 100_000;
    let weights = [1i64, 2, 3, 4];
    let total: i64 = weights.iter().sum();
    let mut r = Random::seeded(SEED);
    let mut counts = [0u64; 4];
    for _ in 0..N {
        counts[r.weighted_index(&weights, |&w| w).unwrap()] += 1;
    }
    let expected: Vec<f64> = weights
        .iter()
        .map(|&w| N as f64 * w as f64 / total as f64)
        .collect();
    let chi2 = chi_squared(&counts, &expected);
    // df = 3
    assert!(chi2 < 11.345, "chi2 = {chi2}");
}

#[test]
fn weighted_choice_returns_the_element() {
    #[derive(Debug, PartialEq)]
    struct Entry {
        name: &'static str,
        weight: i64,
    }
    let table = [
        Entry {
            name: "rat",
            weight: 0,
        },
        Entry {
            name: "wolf",
            weight: 3,
        },
    ];
    let mut r = Random::seeded(SEED);
    for _ in 0..100 {
        assert_eq!(r.weighted_choice(&table, |e| e.weight).unwrap().name, "wolf");
    }
}

// ── Determinism ─────────────────────────────────────────────────

/// Drive a stream through every derived operation and record the outputs.
fn mixed_sequence(r: &mut Random) -> Vec<u64> {
    let xs: Vec<u32> = (0..37).collect();
    let mut out = Vec::new();
    for i in 0..200u64 {
        out.push(r.uniform_u64());
        out.push(r.uniform_f64().to_bits());
        out.push(r.uniform_int(1 + i as usize).unwrap() as u64);
        out.push(r.range(-5, 5).unwrap() as u64);
        out.push(u64::from(r.chance(0.5).unwrap()));
        out.push(u64::from(*r.choice(&xs).unwrap()));
        out.push(r.weighted_index(&xs, |&x| i64::from(x % 4)).unwrap() as u64);
        out.push(u64::from(*r.filtered_choice(&xs, |&x| x % 7 == 3).unwrap()));
    }
    let mut deck: Vec<u32> = (0..20).collect();
    r.shuffle(&mut deck);
    out.extend(deck.into_iter().map(u64::from));
    out
}

#[test]
fn independent_instances_are_bit_identical() {
    let mut a = Random::seeded(0x1234_5678_9abc_def0);
    let mut b = Random::seeded(0x1234_5678_9abc_def0);
    assert_eq!(mixed_sequence(&mut a), mixed_sequence(&mut b));
}

#[test]
fn different_seeds_diverge() {
    let mut a = Random::seeded(1);
    let mut b = Random::seeded(2);
    assert_ne!(mixed_sequence(&mut a), mixed_sequence(&mut b));
}

#[test]
fn errors_display_their_arguments() {
    let mut r = Random::seeded(SEED);
    let err = r.range(10, 1).unwrap_err();
    assert_eq!(err, RandomError::InvertedRange { lo: 10, hi: 1 });
    assert_eq!(err.to_string(), "range upper bound 1 is below lower bound 10");
    let err = r.chance(1.25).unwrap_err();
    assert_eq!(err.to_string(), "probability 1.25 is outside [0, 1]");
}
