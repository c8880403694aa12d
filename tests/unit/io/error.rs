//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::io::error::computation_error;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking the source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/mosaic.jpg".into(),
            operation: "write",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    // Tests grid validation errors carry the computed deltas
    // Verified by omitting the deltas from the message
    #[test]
    fn test_invalid_grid_error_message() {
        let error = MosaicError::InvalidGrid {
            divisions: 500,
            x_delta: 0,
            y_delta: 3,
        };

        let message = error.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("x_delta=0"));
        assert!(message.contains("y_delta=3"));
        assert!(error.source().is_none());
    }

    // Tests the empty palette error names the scanned directory
    // Verified by omitting the directory from the message
    #[test]
    fn test_empty_palette_error_message() {
        let error = MosaicError::EmptyPalette {
            directory: "/photos/tiles".into(),
        };

        assert!(error.to_string().contains("/photos/tiles"));
    }

    // Tests the degenerate region error reports its bounds
    // Verified by omitting coordinates from the message
    #[test]
    fn test_degenerate_region_error_message() {
        let error = MosaicError::DegenerateRegion {
            x_min: 4,
            y_min: 5,
            x_max: 4,
            y_max: 9,
        };

        let message = error.to_string();
        assert!(message.contains('4'));
        assert!(message.contains('9'));
    }

    // Tests the directory access error chains the I/O cause
    // Verified by dropping the source
    #[test]
    fn test_directory_access_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = MosaicError::DirectoryAccess {
            path: "/photos/tiles".into(),
            source: io_error,
        };

        assert!(error.to_string().contains("/photos/tiles"));
        assert!(error.source().is_some());
    }

    // Tests the computation error helper fills both fields
    // Verified by swapping operation and reason
    #[test]
    fn test_computation_error_helper() {
        let error = computation_error("nearest tile search", &"palette is empty");

        let message = error.to_string();
        assert!(message.contains("nearest tile search"));
        assert!(message.contains("palette is empty"));
    }
}
