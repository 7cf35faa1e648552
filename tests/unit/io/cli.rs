//! Tests for argument parsing and headless generation runs

#[cfg(test)]
mod tests {
    use clap::Parser;
    use hexcells::GridError;
    use hexcells::geometry::HexOrientation;
    use hexcells::io::cli::{Cli, GridRunner};
    use hexcells::io::configuration::{DEFAULT_BATCH_SIZE, DEFAULT_SEED, DEFAULT_WIDTH};

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["hexcells"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap_or_else(|error| unreachable!("{error}"))
    }

    // Tests defaults come from configuration constants
    #[test]
    fn test_default_arguments() {
        let cli = parse(&[]);
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.orientation, HexOrientation::FlatTop);
        assert!(cli.should_show_progress());
        assert_eq!(cli.verbose, 0);
    }

    // Tests flags map onto the layout and verbosity
    #[test]
    fn test_parsed_layout() {
        let cli = parse(&[
            "-W", "5", "-H", "3", "--hex-size", "2.5", "--orientation", "pointy-top", "-q", "-vv",
        ]);
        let layout = cli.layout();
        assert_eq!((layout.width, layout.height), (5, 3));
        assert!((layout.hex_size - 2.5).abs() < f32::EPSILON);
        assert_eq!(layout.orientation, HexOrientation::PointyTop);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.verbose, 2);
    }

    // Tests a plain run materializes every cell exactly once
    #[test]
    fn test_run_summary() -> hexcells::Result<()> {
        let summary = GridRunner::new(parse(&["-W", "4", "-H", "3", "-b", "5", "-q"])).run()?;
        assert_eq!(summary.cells, 12);
        assert_eq!(summary.batches, 3);
        assert_eq!(summary.generations, 1);
        assert_eq!(summary.live_resources, 12);
        assert_eq!(summary.created_resources, 12);
        assert_eq!(summary.released_resources, 0);
        assert_eq!(summary.terrain_counts.values().sum::<usize>(), 12);
        assert!(summary.to_string().starts_with("12 cells in 3 batches"));
        Ok(())
    }

    // Tests superseded generations release everything they materialized
    // Verified by skipping the clear before the swap
    #[test]
    fn test_regenerate_releases_superseded_cells() -> hexcells::Result<()> {
        let summary =
            GridRunner::new(parse(&["-W", "4", "-H", "4", "-b", "2", "-r", "1", "-q"])).run()?;
        assert_eq!(summary.generations, 2);
        assert_eq!(summary.created_resources, 24);
        assert_eq!(summary.released_resources, 8);
        assert_eq!(summary.live_resources, 16);
        Ok(())
    }

    // Tests invalid layouts are reported before anything is generated
    #[test]
    fn test_invalid_layout() {
        let result = GridRunner::new(parse(&["-W", "0", "-q"])).run();
        assert!(matches!(
            result,
            Err(GridError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
    }
}
