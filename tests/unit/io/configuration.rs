//! Tests for runtime defaults and encoding constants

#[cfg(test)]
mod tests {
    use photomosaic::io::configuration::{
        DEFAULT_DIVISIONS, JPEG_QUALITY, OUTPUT_SUFFIX, PROGRESS_BAR_WIDTH, TILE_EXTENSIONS,
    };

    // Tests recognized extensions cover the JPEG spellings in lowercase
    // Verified by adding an uppercase entry
    #[test]
    fn test_tile_extensions() {
        assert_eq!(TILE_EXTENSIONS, &["jpg", "jpeg"]);
        assert!(
            TILE_EXTENSIONS
                .iter()
                .all(|ext| ext.chars().all(|ch| ch.is_ascii_lowercase()))
        );
    }

    // Tests encoding quality is the fixed value within JPEG range
    // Verified by changing the quality value
    #[test]
    fn test_jpeg_quality() {
        assert_eq!(JPEG_QUALITY, 80);
        assert!(JPEG_QUALITY <= 100);
    }

    // Tests the default division count is positive
    // Verified by zeroing the default
    #[test]
    fn test_default_divisions() {
        assert_eq!(DEFAULT_DIVISIONS, 32);
        assert!(DEFAULT_DIVISIONS > 0);
    }

    // Tests output suffix starts with underscore
    // Verified by removing underscore prefix
    #[test]
    fn test_output_suffix_format() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        assert!(!OUTPUT_SUFFIX.is_empty());
    }

    // Tests filesystem safety of the suffix
    // Verified by adding a special character
    #[test]
    fn test_output_suffix_no_special_chars() {
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
    }

    // Tests progress bar width is displayable
    // Verified by changing the width value
    #[test]
    fn test_progress_bar_width() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }
}
