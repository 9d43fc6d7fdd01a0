#[cfg(test)]
mod tests {
    use std::path::Path;

    use fabkit::batch::io::ext_repr::ExtPrintInstance;
    use fabkit::rod::io::ext_repr::ExtRodInstance;
    use fabkit::rod::solvers::StrategyKind;
    use fabkit_cli::config::FabkitConfig;
    use fabkit_cli::io;
    use fabkit_cli::opt::batch_opt;
    use fabkit_cli::opt::rod_opt::FabkitOptimizerRod;
    use test_case::test_case;

    #[test_case(StrategyKind::Memoized; "memoized")]
    #[test_case(StrategyKind::Tabulated; "tabulated")]
    fn rod_assets(strategy: StrategyKind) {
        let ext_instances = io::read_instances::<ExtRodInstance>(Path::new("assets/rods.json")).unwrap();
        let config = FabkitConfig {
            rod_strategy: strategy,
            ..FabkitConfig::default()
        };
        let solved = FabkitOptimizerRod::new(config).solve_all(ext_instances).unwrap();

        let profits = solved.iter().map(|s| s.entry.solution.max_profit).collect::<Vec<_>>();
        assert_eq!(profits, vec![Some(12), Some(8), Some(12), Some(12), Some(22)]);
        for s in &solved {
            assert_eq!(s.entry.solution.strategy, strategy);
            assert_eq!(
                s.entry.solution.cuts.iter().sum::<usize>() as i64,
                s.entry.instance.length
            );
        }
    }

    #[test]
    fn single_unsolvable_instance() {
        let ext_instances =
            io::read_instances::<ExtRodInstance>(Path::new("assets/unsolvable_rod.json")).unwrap();
        assert_eq!(ext_instances.len(), 1);
        let solved = FabkitOptimizerRod::new(FabkitConfig::default())
            .solve_all(ext_instances)
            .unwrap();
        assert_eq!(solved[0].entry.solution.max_profit, None);
        assert!(solved[0].entry.solution.cuts.is_empty());
        assert_eq!(solved[0].entry.solution.number_of_cuts, 0);
    }

    #[test]
    fn negative_length_fails_the_run() {
        let ext_instances = vec![ExtRodInstance {
            name: "negative".to_string(),
            length: -3,
            prices: vec![1, 2, 3],
        }];
        assert!(FabkitOptimizerRod::new(FabkitConfig::default())
            .solve_all(ext_instances)
            .is_err());
    }

    #[test]
    fn print_assets() {
        let ext_instances =
            io::read_instances::<ExtPrintInstance>(Path::new("assets/print_jobs.json")).unwrap();
        let entries = batch_opt::solve_all(ext_instances).unwrap();

        let orders = entries
            .iter()
            .map(|e| e.solution.print_order.join(","))
            .collect::<Vec<_>>();
        assert_eq!(orders, vec!["M1,M2,M3", "M2,M1,M3", "M1,M2,M3"]);
        let times = entries.iter().map(|e| e.solution.total_time).collect::<Vec<_>>();
        assert_eq!(times, vec![270, 270, 450]);
    }

    #[test]
    fn config_file_parses() {
        let config: FabkitConfig =
            serde_json::from_str(&std::fs::read_to_string("assets/config.json").unwrap()).unwrap();
        assert_eq!(config.rod_strategy, StrategyKind::Memoized);
        assert!(config.cross_check);
    }

    #[test]
    fn output_is_written() {
        let folder = std::env::temp_dir().join("fabkit_cli_output_test");
        std::fs::create_dir_all(&folder).unwrap();
        let ext_instances =
            io::read_instances::<ExtRodInstance>(Path::new("assets/rods.json")).unwrap();
        let solved = FabkitOptimizerRod::new(FabkitConfig::default())
            .solve_all(ext_instances)
            .unwrap();
        let output = fabkit_cli::io::output::RodOutput {
            entries: solved.into_iter().map(|s| s.entry).collect(),
            config: FabkitConfig::default(),
        };
        let path = folder.join("sol_rods.json");
        io::write_json(&output, &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["entries"][0]["name"], "basic");
        assert_eq!(written["entries"][0]["solution"]["cuts"], serde_json::json!([1, 2, 2]));
    }
}
