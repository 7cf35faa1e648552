//! Tests for batched materialization, progress accounting and staleness

#[cfg(test)]
mod tests {
    use hexcells::GridError;
    use hexcells::geometry::{HexOrientation, OffsetCoordinates};
    use hexcells::grid::assembler::GridAssembler;
    use hexcells::grid::cell::HexCell;
    use hexcells::grid::container::{GridLayout, HexGrid};
    use hexcells::materialize::materializer::{BatchProgress, CellMaterializer, MaterializeStep};
    use hexcells::materialize::resources::{TerrainHandle, TerrainResources};
    use hexcells::terrain::TerrainType;
    use ndarray::Array2;

    /// Records every instantiation in call order
    #[derive(Default)]
    struct Recorder {
        created: Vec<OffsetCoordinates>,
        released: Vec<TerrainHandle>,
    }

    impl TerrainResources for Recorder {
        fn instantiate(&mut self, cell: &HexCell) -> TerrainHandle {
            self.created.push(cell.offset());
            TerrainHandle::new(self.created.len() as u64)
        }

        fn release(&mut self, handle: TerrainHandle) {
            self.released.push(handle);
        }
    }

    fn grid(width: usize, height: usize) -> hexcells::Result<HexGrid> {
        let layout = GridLayout::new(width, height, 1.0, HexOrientation::FlatTop);
        let terrain = Array2::from_elem(layout.shape(), TerrainType::Grass);
        let mut grid = HexGrid::new(layout);
        grid.swap(GridAssembler::new(layout).assemble(&terrain)?);
        Ok(grid)
    }

    fn row_major(width: i32, height: i32) -> Vec<OffsetCoordinates> {
        (0..height)
            .flat_map(|y| (0..width).map(move |x| OffsetCoordinates::new(x, y)))
            .collect()
    }

    // Tests every cell is materialized exactly once, in assembly order
    // Verified by iterating the cell array in column-major order
    #[test]
    fn test_cells_materialized_once_in_order() -> hexcells::Result<()> {
        let mut grid = grid(4, 3)?;
        let mut recorder = Recorder::default();
        let mut materializer = CellMaterializer::new(&grid, 5)?;

        let progress = materializer.run_to_completion(&mut grid, &mut recorder)?;

        assert_eq!(recorder.created, row_major(4, 3));
        assert!(recorder.released.is_empty());
        assert_eq!(progress.cells_processed, 12);
        assert_eq!(progress.completed_batches, 3);
        assert_eq!(
            grid.current().map(|g| g.materialized_count()),
            Some(grid.current().map_or(0, |g| g.cell_count()))
        );
        Ok(())
    }

    // Tests each step yields exactly one batch and the step count is ceil(N / b)
    // Verified by processing the whole grid in the first step
    #[test]
    fn test_batches_yield_between_steps() -> hexcells::Result<()> {
        for (width, height, batch_size) in [(3, 3, 2), (4, 4, 4), (5, 2, 3), (1, 1, 7)] {
            let cells = width * height;
            let mut grid = grid(width, height)?;
            let mut recorder = Recorder::default();
            let mut materializer = CellMaterializer::new(&grid, batch_size)?;
            assert_eq!(materializer.total_batches(), cells.div_ceil(batch_size));

            let mut steps = 0;
            loop {
                let before = recorder.created.len();
                let step = materializer.step(&mut grid, &mut recorder)?;
                steps += 1;
                assert!(recorder.created.len() - before <= batch_size);
                if step.is_complete() {
                    break;
                }
                assert_eq!(recorder.created.len() - before, batch_size);
            }
            assert_eq!(steps, cells.div_ceil(batch_size));
            assert!(steps >= cells / batch_size);
            assert_eq!(recorder.created.len(), cells);
        }
        Ok(())
    }

    // Tests a 3x3 grid with batch size 2 finishes on the fifth step
    #[test]
    fn test_three_by_three_in_pairs() -> hexcells::Result<()> {
        let mut grid = grid(3, 3)?;
        let mut recorder = Recorder::default();
        let mut materializer = CellMaterializer::new(&grid, 2)?;

        for expected in 1..=4 {
            let step = materializer.step(&mut grid, &mut recorder)?;
            assert!(matches!(step, MaterializeStep::Batch(_)));
            assert_eq!(step.progress().completed_batches, expected);
        }
        let last = materializer.step(&mut grid, &mut recorder)?;
        assert_eq!(
            last,
            MaterializeStep::Complete(BatchProgress {
                completed_batches: 5,
                total_batches: 5,
                cells_processed: 9,
                cell_count: 9,
            })
        );
        Ok(())
    }

    // Tests a batch size of zero materializes everything in a single step
    // Verified by treating zero as a batch size of one
    #[test]
    fn test_zero_batch_size_is_unbounded() -> hexcells::Result<()> {
        let mut grid = grid(6, 5)?;
        let mut recorder = Recorder::default();
        let mut materializer = CellMaterializer::new(&grid, 0)?;
        assert_eq!(materializer.batch_size(), None);
        assert_eq!(materializer.total_batches(), 1);

        let step = materializer.step(&mut grid, &mut recorder)?;
        assert!(step.is_complete());
        assert_eq!(recorder.created.len(), 30);
        Ok(())
    }

    // Tests stepping after completion does no further work
    #[test]
    fn test_complete_is_idempotent() -> hexcells::Result<()> {
        let mut grid = grid(2, 2)?;
        let mut recorder = Recorder::default();
        let mut materializer = CellMaterializer::new(&grid, 3)?;
        let done = materializer.run_to_completion(&mut grid, &mut recorder)?;

        let again = materializer.step(&mut grid, &mut recorder)?;
        assert_eq!(again, MaterializeStep::Complete(done));
        assert_eq!(recorder.created.len(), 4);
        Ok(())
    }

    // Tests a materializer refuses to touch a grid swapped after its creation
    // Verified by skipping the generation check
    #[test]
    fn test_stale_after_swap() -> hexcells::Result<()> {
        let mut grid = grid(3, 3)?;
        let mut recorder = Recorder::default();
        let mut materializer = CellMaterializer::new(&grid, 2)?;
        let _ = materializer.step(&mut grid, &mut recorder)?;

        let layout = *grid.layout();
        let terrain = Array2::from_elem(layout.shape(), TerrainType::Sand);
        grid.swap(GridAssembler::new(layout).assemble(&terrain)?);

        let result = materializer.step(&mut grid, &mut recorder);
        assert!(matches!(
            result,
            Err(GridError::StaleMaterialization {
                expected: 1,
                found: Some(2)
            })
        ));
        assert_eq!(recorder.created.len(), 2);
        assert_eq!(grid.current().map(|g| g.materialized_count()), Some(0));
        Ok(())
    }

    // Tests an empty grid cannot be materialized
    #[test]
    fn test_empty_grid_is_rejected() {
        let grid = HexGrid::new(GridLayout::default());
        assert!(matches!(
            CellMaterializer::new(&grid, 2),
            Err(GridError::StaleMaterialization { found: None, .. })
        ));
    }

    // Tests a cell that already holds a resource has it released before replacement
    #[test]
    fn test_rematerializing_releases_displaced_handles() -> hexcells::Result<()> {
        let mut grid = grid(2, 1)?;
        let mut recorder = Recorder::default();
        CellMaterializer::new(&grid, 0)?.run_to_completion(&mut grid, &mut recorder)?;
        CellMaterializer::new(&grid, 0)?.run_to_completion(&mut grid, &mut recorder)?;

        assert_eq!(recorder.created.len(), 4);
        assert_eq!(
            recorder.released,
            vec![TerrainHandle::new(1), TerrainHandle::new(2)]
        );
        Ok(())
    }

    // Tests progress fractions and completion flags
    #[test]
    fn test_progress_fraction() {
        let materializer = CellMaterializer::for_generation(3, 10, 4);
        let progress = materializer.progress();
        assert_eq!(materializer.generation(), 3);
        assert_eq!(progress.total_batches, 3);
        assert!(progress.fraction().abs() < f32::EPSILON);
        assert!(!progress.is_complete());

        let halfway = BatchProgress {
            completed_batches: 2,
            total_batches: 4,
            cells_processed: 4,
            cell_count: 8,
        };
        assert!((halfway.fraction() - 0.5).abs() < f32::EPSILON);

        let empty = CellMaterializer::for_generation(1, 0, 4);
        assert!(empty.is_complete());
        assert!((empty.progress().fraction() - 1.0).abs() < f32::EPSILON);
    }
}
