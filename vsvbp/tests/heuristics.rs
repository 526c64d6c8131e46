#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;
    use vsvbp::entities::{Bin, Instance, Item, PackingState};
    use vsvbp::heuristics::{BalancingMode, Failure, Heuristic};
    use vsvbp::measures::{DoNothing, Measure, MeasurePair, Phase};
    use vsvbp::util::assertions;

    const I4: usize = 0;
    const I3: usize = 1;
    const I2: usize = 2;
    const I1: usize = 3;

    /// Assigns preset sizes during init and leaves them untouched afterwards
    #[derive(Debug)]
    struct Preset {
        items: Vec<f64>,
        bins: Vec<f64>,
    }

    impl Measure for Preset {
        fn evaluate(&mut self, state: &mut PackingState, phase: Phase, _rng: &mut SmallRng) {
            if phase == Phase::Init {
                state.item_sizes.clone_from(&self.items);
                state.bin_sizes.clone_from(&self.bins);
            }
        }

        fn name(&self) -> &'static str {
            "preset"
        }
    }

    /// items i4, i3, i2, i1 and bins b1, b2, b3
    fn instance(i2: [u64; 3]) -> Instance {
        let items = [[9, 8, 7], [0, 1, 0], i2, [1, 2, 9]]
            .iter()
            .map(|r| Item::from(&r[..]))
            .collect_vec();
        let bins = [[5, 8, 4], [100, 0, 100], [1, 2, 9]]
            .iter()
            .map(|c| Bin::new(c.to_vec()))
            .collect_vec();
        Instance::new(items, bins)
    }

    fn preset(item_sizes: &[f64]) -> MeasurePair {
        MeasurePair::new(
            Preset {
                items: item_sizes.to_vec(),
                bins: vec![1.0, 2.0, 3.0],
            },
            DoNothing,
        )
    }

    fn run(heuristic: Heuristic, instance: &mut Instance, item_sizes: &[f64]) -> Vec<Failure> {
        let mut rng = SmallRng::seed_from_u64(0);
        let failures = heuristic.run(instance, &mut preset(item_sizes), &mut rng);
        assert!(assertions::instance_consistent(instance));
        assert_eq!(instance.n_items_packed() + failures.len(), instance.n_items());
        failures
    }

    fn contents(instance: &Instance) -> Vec<Vec<usize>> {
        instance.bins.iter().map(|b| b.items.clone()).collect()
    }

    #[test_case(Heuristic::ItemCentric; "item centric")]
    #[test_case(Heuristic::BinCentric; "bin centric")]
    fn best_fit_decreasing(heuristic: Heuristic) {
        let mut instance = instance([4, 5, 3]);
        let failures = run(heuristic, &mut instance, &[0.0, 3.0, 2.0, 1.0]);
        assert_eq!(failures, vec![Failure { rank: 3, item: I4 }]);
        assert_eq!(contents(&instance), vec![vec![I3, I2], vec![], vec![I1]]);
    }

    #[test_case(Heuristic::ItemCentric, 0; "item centric")]
    #[test_case(Heuristic::BinCentric, 3; "bin centric")]
    fn unpackable_item_first(heuristic: Heuristic, rank: usize) {
        let mut instance = instance([4, 5, 3]);
        let failures = run(heuristic, &mut instance, &[10.0, 3.0, 2.0, 1.0]);
        assert_eq!(failures, vec![Failure { rank, item: I4 }]);
        assert_eq!(contents(&instance), vec![vec![I3, I2], vec![], vec![I1]]);
    }

    #[test]
    fn bin_centric_ranks_trailing_failures() {
        let mut instance = instance([4, 5, 3]);
        instance.items.push(Item::new(vec![9, 9, 9]));
        let failures = run(Heuristic::BinCentric, &mut instance, &[0.0, 3.0, 2.0, 1.0, 5.0]);
        assert_eq!(
            failures,
            vec![Failure { rank: 3, item: 4 }, Failure { rank: 4, item: I4 }]
        );
        assert_eq!(contents(&instance), vec![vec![I3, I2], vec![], vec![I1]]);
    }

    #[test_case(BalancingMode::Global; "global")]
    #[test_case(BalancingMode::Single; "single")]
    fn bin_balancing(mode: BalancingMode) {
        let mut instance = instance([1, 1, 1]);
        let failures = run(Heuristic::BinBalancing(mode), &mut instance, &[0.0, 3.0, 2.0, 1.0]);
        assert_eq!(
            failures,
            vec![Failure { rank: 2, item: I1 }, Failure { rank: 3, item: I4 }]
        );
        assert_eq!(contents(&instance), vec![vec![I3], vec![], vec![I2]]);
    }

    // a only fits b1 and b2; after it lands in b1 the two modes resume at different bins
    #[test_case(BalancingMode::Global, &[&[2], &[0], &[1]]; "global")]
    #[test_case(BalancingMode::Single, &[&[1], &[0], &[2]]; "single")]
    fn balancing_modes_diverge(mode: BalancingMode, expected: &[&[usize]]) {
        let items = [[5, 0], [1, 1], [1, 1]].iter().map(|r| Item::from(&r[..])).collect_vec();
        let bins = [[1, 10], [10, 10], [10, 10]]
            .iter()
            .map(|c| Bin::new(c.to_vec()))
            .collect_vec();
        let mut instance = Instance::new(items, bins);
        let failures = run(Heuristic::BinBalancing(mode), &mut instance, &[3.0, 2.0, 1.0]);
        assert!(failures.is_empty());
        assert_eq!(contents(&instance), expected.iter().map(|b| b.to_vec()).collect_vec());
    }

    #[test_case(Heuristic::ItemCentric, &[]; "item centric")]
    #[test_case(Heuristic::BinCentric, &[]; "bin centric")]
    #[test_case(Heuristic::BinBalancing(BalancingMode::Global), &[(2, 2)]; "global balancing")]
    #[test_case(Heuristic::BinBalancing(BalancingMode::Single), &[(2, 2)]; "single balancing")]
    fn without_unpackable_item(heuristic: Heuristic, expected: &[(usize, usize)]) {
        let mut instance = instance([1, 1, 1]);
        instance.items.remove(I4);
        let failures = run(heuristic, &mut instance, &[3.0, 2.0, 1.0]);
        let expected = expected
            .iter()
            .map(|&(rank, item)| Failure { rank, item })
            .collect_vec();
        assert_eq!(failures, expected);
    }

    #[test_case(Heuristic::ItemCentric; "item centric")]
    #[test_case(Heuristic::BinCentric; "bin centric")]
    #[test_case(Heuristic::BinBalancing(BalancingMode::Global); "global balancing")]
    #[test_case(Heuristic::BinBalancing(BalancingMode::Single); "single balancing")]
    fn no_bins(heuristic: Heuristic) {
        let mut instance = Instance::new(vec![Item::new(vec![1]), Item::new(vec![2])], vec![]);
        let mut rng = SmallRng::seed_from_u64(0);
        let failures = heuristic.run(&mut instance, &mut MeasurePair::nothing(), &mut rng);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures.iter().map(|f| f.rank).collect_vec(), vec![0, 1]);
    }

    #[test_case(Heuristic::ItemCentric; "item centric")]
    #[test_case(Heuristic::BinCentric; "bin centric")]
    #[test_case(Heuristic::BinBalancing(BalancingMode::Global); "global balancing")]
    #[test_case(Heuristic::BinBalancing(BalancingMode::Single); "single balancing")]
    fn no_items(heuristic: Heuristic) {
        let mut instance = Instance::with_uniform_bins(vec![], &Bin::new(vec![3, 3]), 2);
        let mut rng = SmallRng::seed_from_u64(0);
        let failures = heuristic.run(&mut instance, &mut MeasurePair::shuffle(), &mut rng);
        assert!(failures.is_empty());
    }

    #[test]
    fn capacity_invariant_under_random_measures() {
        let mut rng = SmallRng::seed_from_u64(7);
        let items = (0..40)
            .map(|i| Item::new(vec![i % 7 + 1, (i * 3) % 5, 11 - i % 11]))
            .collect_vec();
        let mut instance = Instance::with_uniform_bins(items, &Bin::new(vec![20, 12, 30]), 12);
        for heuristic in [
            Heuristic::ItemCentric,
            Heuristic::BinCentric,
            Heuristic::BinBalancing(BalancingMode::Global),
            Heuristic::BinBalancing(BalancingMode::Single),
        ] {
            for mut measures in [
                MeasurePair::shuffle(),
                MeasurePair::shuffle_once(),
                MeasurePair::similarity(),
            ] {
                instance.empty();
                let failures = heuristic.run(&mut instance, &mut measures, &mut rng);
                assert!(assertions::instance_consistent(&instance));
                assert_eq!(
                    instance.n_items_packed() + failures.len(),
                    instance.n_items()
                );
            }
        }
    }
}
