//! Tests for error construction and display messages

#[cfg(test)]
mod tests {
    use hexcells::GridError;
    use hexcells::io::error::{computation_error, invalid_parameter};
    use ndarray::Array2;

    // Tests display messages carry the offending values
    #[test]
    fn test_display_messages() {
        let mismatch = GridError::TerrainDimensionMismatch {
            expected: (2, 3),
            actual: (4, 5),
        };
        assert_eq!(
            mismatch.to_string(),
            "Terrain sample is 4x5 but the grid expects 2x3 (rows x cols)"
        );

        let stale = GridError::StaleMaterialization {
            expected: 1,
            found: Some(2),
        };
        assert!(stale.to_string().contains("generation 2"));
        let empty = GridError::StaleMaterialization {
            expected: 0,
            found: None,
        };
        assert!(empty.to_string().ends_with("the grid is empty"));

        let unavailable = GridError::TerrainUnavailable {
            source_name: "random",
        };
        assert!(unavailable.to_string().contains("'random'"));
    }

    // Tests helper constructors fill in every field
    #[test]
    fn test_helpers() {
        let error = invalid_parameter("width", &0, &"must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'width' = '0': must be positive"
        );
        let error = computation_error("linking", &"missing cell");
        assert_eq!(error.to_string(), "Computation error in linking: missing cell");
    }

    // Tests ndarray shape errors convert into computation errors
    #[test]
    fn test_from_shape_error() {
        let result: hexcells::Result<Array2<u8>> =
            Array2::from_shape_vec((2, 2), vec![1, 2, 3]).map_err(GridError::from);
        assert!(matches!(
            result,
            Err(GridError::Computation {
                operation: "array shaping",
                ..
            })
        ));
    }
}
