use pcp_chart::Sampler;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

#[test]
fn test_sample_sizes_and_prefix() {
    let sampler = Sampler::with_seed(5, 42);
    let forty = sampler.sample(40).to_vec();
    let sixty = sampler.sample(60).to_vec();

    assert_eq!(forty.len(), 2);
    assert_eq!(sixty.len(), 3);
    assert!(sixty.starts_with(&forty));
    assert_eq!(sampler.sample(100), sampler.permutation());
}

#[test]
fn test_samples_are_nested() {
    let sampler = Sampler::with_seed(37, 7);
    for p in 1..100 {
        let low = sampler.sample(p);
        let high = sampler.sample(p + 1);
        assert!(high.starts_with(low), "sample({}) not within sample({})", p, p + 1);
    }
}

#[test]
fn test_percentage_is_clamped() {
    let sampler = Sampler::with_seed(20, 1);
    assert_eq!(sampler.sample(0), sampler.sample(1));
    assert_eq!(sampler.sample(-5), sampler.sample(1));
    assert_eq!(sampler.sample(1000).len(), 20);
}

#[test]
fn test_permutation_covers_every_row() {
    let sampler = Sampler::new(50);
    let mut rows = sampler.permutation().to_vec();
    rows.sort_unstable();
    assert_eq!(rows, (0..50).collect::<Vec<_>>());
    assert_eq!(sampler.total(), 50);
}

#[test]
fn test_seed_is_reproducible() {
    assert_eq!(Sampler::with_seed(100, 9), Sampler::with_seed(100, 9));
    assert!(Sampler::new(0).sample(50).is_empty());
}

#[test]
fn test_shuffle_is_uniform() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
    for _ in 0..6000 {
        let sampler = Sampler::with_rng(3, &mut rng);
        *counts.entry(sampler.permutation().to_vec()).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    for (perm, n) in counts {
        assert!((850..=1150).contains(&n), "{:?} drawn {} times", perm, n);
    }
}
