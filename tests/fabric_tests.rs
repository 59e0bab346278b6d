//! End-to-end properties of the cost fabric: preset loading, statistical
//! behavior of the samplers, and seed determinism.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use netfabric::{
    BandwidthPreset, DegreeDistributionPreset, LatencyPreset, NetworkConfig, NetworkCostModel,
    PresetSelection, RegionDistribution, RegionDistributionPreset,
};

#[test]
fn test_all_bundled_presets_construct() {
    for latency in [LatencyPreset::Year2015, LatencyPreset::Year2019] {
        for bandwidth in [BandwidthPreset::Year2015, BandwidthPreset::Year2019] {
            for region_distribution in [
                RegionDistributionPreset::Bitcoin2015,
                RegionDistributionPreset::Bitcoin2019,
                RegionDistributionPreset::Litecoin,
                RegionDistributionPreset::Dogecoin,
            ] {
                let selection = PresetSelection {
                    latency,
                    bandwidth,
                    region_distribution,
                    degree_distribution: DegreeDistributionPreset::Bitcoin2015,
                };
                let model = NetworkCostModel::from_presets(&selection)
                    .expect("test: bundled preset data must validate");
                assert_eq!(model.region_count(), 6);
                assert_eq!(model.default_slot(), 6);
            }
        }
    }
}

#[test]
fn test_zero_size_delay_equals_latency_matrix() {
    let model = NetworkCostModel::from_presets(&PresetSelection::default())
        .expect("test: default presets");
    let matrix = LatencyPreset::Year2019.matrix();
    for sender in 0..model.region_count() {
        for receiver in 0..model.region_count() {
            let delay = model
                .transmission_delay(sender, receiver, 0)
                .expect("test: in-range delay");
            assert_eq!(delay, matrix[sender][receiver]);
        }
    }
}

#[test]
fn test_same_seed_same_assignments() {
    let model = NetworkCostModel::from_presets(&PresetSelection::default())
        .expect("test: default presets");

    let mut rng_a = ChaCha8Rng::seed_from_u64(7);
    let mut rng_b = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..5_000 {
        assert_eq!(model.sample_region(&mut rng_a), model.sample_region(&mut rng_b));
        assert_eq!(model.sample_degree(&mut rng_a), model.sample_degree(&mut rng_b));
    }
}

#[test]
fn test_different_seeds_diverge() {
    let model = NetworkCostModel::from_presets(&PresetSelection::default())
        .expect("test: default presets");

    let mut rng_a = ChaCha8Rng::seed_from_u64(1);
    let mut rng_b = ChaCha8Rng::seed_from_u64(2);
    let a: Vec<usize> = (0..1_000).map(|_| model.sample_region(&mut rng_a)).collect();
    let b: Vec<usize> = (0..1_000).map(|_| model.sample_region(&mut rng_b)).collect();
    assert_ne!(a, b, "different seeds should produce different placements");
}

#[test]
fn test_even_split_frequency_within_one_percent() {
    let distribution =
        RegionDistribution::new(vec![0.5, 0.5]).expect("test: valid pmf");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    const DRAWS: usize = 100_000;
    let mut counts = [0usize; 2];
    for _ in 0..DRAWS {
        counts[distribution.sample(&mut rng)] += 1;
    }

    for (region, &count) in counts.iter().enumerate() {
        let frequency = count as f64 / DRAWS as f64;
        assert!(
            (frequency - 0.5).abs() < 0.01,
            "region {region} frequency {frequency} outside 0.5 +/- 0.01"
        );
    }
}

#[test]
fn test_preset_frequencies_track_mass() {
    let model = NetworkCostModel::from_presets(&PresetSelection::default())
        .expect("test: default presets");
    let pmf = RegionDistributionPreset::Bitcoin2019.pmf();
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    const DRAWS: usize = 100_000;
    let mut counts = vec![0usize; model.region_count()];
    for _ in 0..DRAWS {
        counts[model.sample_region(&mut rng)] += 1;
    }

    for (region, &count) in counts.iter().enumerate() {
        let frequency = count as f64 / DRAWS as f64;
        assert!(
            (frequency - pmf[region]).abs() < 0.01,
            "region {region} frequency {frequency} far from mass {}",
            pmf[region]
        );
    }
}

#[test]
fn test_degree_samples_stay_in_bucket_range() {
    let model = NetworkCostModel::from_presets(&PresetSelection::default())
        .expect("test: default presets");
    let buckets = DegreeDistributionPreset::Bitcoin2015.cdf().len();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..10_000 {
        assert!(model.sample_degree(&mut rng) < buckets);
    }
}

#[test]
fn test_model_from_external_json() {
    let text = r#"{
        "regions": ["WEST", "EAST"],
        "latency_ms": [[10, 100], [100, 10]],
        "download_bps": [40000000, 40000000, 6000000],
        "upload_bps": [10000000, 10000000, 6000000],
        "region_distribution": [0.8, 0.2],
        "degree_distribution": [0.5, 1.0]
    }"#;
    let config = NetworkConfig::from_json(text).expect("test: config parses");
    let model = NetworkCostModel::from_config(config).expect("test: config validates");

    // 10 Mbit over the 10 Mbps upload bottleneck: 1000 ms on top of 100 ms.
    let delay = model
        .transmission_delay(0, 1, 10_000_000)
        .expect("test: in-range delay");
    assert_eq!(delay, 1100);
}

#[test]
fn test_shared_model_across_threads() {
    let model = std::sync::Arc::new(
        NetworkCostModel::from_presets(&PresetSelection::default())
            .expect("test: default presets"),
    );

    // Per-worker generators, one shared immutable model.
    let handles: Vec<_> = (0..4u64)
        .map(|worker| {
            let model = model.clone();
            std::thread::spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(worker);
                let mut total = 0u64;
                for _ in 0..10_000 {
                    let sender = model.sample_region(&mut rng);
                    let receiver = model.sample_region(&mut rng);
                    total += model
                        .transmission_delay(sender, receiver, 8_000_000)
                        .expect("test: sampled regions are in range");
                }
                total
            })
        })
        .collect();

    for handle in handles {
        let total = handle.join().expect("test: worker panicked");
        assert!(total > 0);
    }
}
