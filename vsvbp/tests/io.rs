#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;

    use test_case::test_case;
    use vsvbp::entities::Bin;
    use vsvbp::io;
    use vsvbp::io::ext_repr::{ExtInstance, ExtItem};
    use vsvbp::solver::Optimizer;
    use vsvbp::util::SolverConfig;

    const TOY: &str = "3\n5 5 8\n4\n0 4 3 1\n1 1 3 1\n5 2 1 1\n3 1 7 1\n";

    #[test]
    fn parse_toy_instance() {
        let ext = io::parse(TOY.as_bytes()).unwrap();
        assert_eq!(ext.dimensions, 3);
        assert_eq!(ext.capacities, vec![5, 5, 8]);
        assert_eq!(ext.items.len(), 4);
        assert_eq!(
            ext.items[2],
            ExtItem {
                requirements: vec![5, 2, 1],
                demand: 1
            }
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        let ext = io::parse("\n2\n\n10 10\n1\n 3 4 2 \n\n".as_bytes()).unwrap();
        assert_eq!(ext.items.len(), 1);
        assert_eq!(ext.items[0].demand, 2);
    }

    #[test_case("3\n5 5\n0\n"; "too few capacities")]
    #[test_case("2\n5 5\n1\n1 1\n"; "missing demand")]
    #[test_case("2\n5 5\n2\n1 1 1\n"; "missing item type")]
    #[test_case("2\n5 5\n1\n1 1 1\n2 2 1\n"; "extra item type")]
    #[test_case("2\n5 -5\n0\n"; "negative capacity")]
    #[test_case("2\n5 x\n0\n"; "not a number")]
    #[test_case(""; "empty file")]
    fn malformed_instances(content: &str) {
        assert!(io::parse(content.as_bytes()).is_err());
    }

    #[test]
    fn write_then_parse() {
        let ext = ExtInstance {
            dimensions: 2,
            capacities: vec![7, 9],
            items: vec![
                ExtItem {
                    requirements: vec![1, 2],
                    demand: 3,
                },
                ExtItem {
                    requirements: vec![0, 5],
                    demand: 1,
                },
            ],
        };
        let mut buffer = vec![];
        io::write(&ext, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "2\n7 9\n2\n1 2 3\n0 5 1\n");
        assert_eq!(io::parse(buffer.as_slice()).unwrap(), ext);
    }

    #[test]
    fn import_expands_demand() {
        let ext = io::parse("2\n7 9\n2\n1 2 3\n0 5 1\n".as_bytes()).unwrap();
        let (items, tbin) = io::import(&ext).unwrap();
        assert_eq!(tbin, Bin::new(vec![7, 9]));
        assert_eq!(items.len(), 4);
        assert!(items[..3].iter().all(|i| i.requirements == vec![1, 2]));
        assert_eq!(items[3].requirements, vec![0, 5]);
    }

    #[test]
    fn import_rejects_inconsistent_dimensions() {
        let ext = ExtInstance {
            dimensions: 2,
            capacities: vec![7, 9],
            items: vec![ExtItem {
                requirements: vec![1, 2, 3],
                demand: 1,
            }],
        };
        assert!(io::import(&ext).is_err());
    }

    #[test_case("../assets/toy.vbp", 3; "toy")]
    #[test_case("../assets/toy_demand.vbp", 2; "toy with demand")]
    fn export_solution(path: &str, expected_bins: usize) {
        let file = File::open(path).unwrap();
        let ext = io::parse(BufReader::new(file)).unwrap();
        let (items, tbin) = io::import(&ext).unwrap();
        let n_items = items.len();
        let solution = Optimizer::new(items, tbin, SolverConfig::default())
            .solve()
            .unwrap();

        let ext_sol = io::export(&solution);
        assert_eq!(ext_sol.n_bins, expected_bins);
        assert_eq!(ext_sol.bins.len(), expected_bins);
        assert_eq!(ext_sol.strategy, solution.strategy);
        assert_eq!(
            ext_sol.bins.iter().map(|b| b.items.len()).sum::<usize>(),
            n_items
        );
        assert!(ext_sol.bins.iter().all(|b| b.capacities == ext.capacities));
    }
}
