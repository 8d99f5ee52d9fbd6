//! Human-readable file sizes.

/// Base-1024 units, smallest first.
const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

const STEP: u64 = 1024;

/// Format a byte count for display in the file list.
///
/// The unit is the largest power of 1024 not exceeding `bytes`
/// (capped at TB); the value keeps at most two decimals.
///
/// ```
/// use imgdrop::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    let mut scale = 1u64;
    while index + 1 < UNITS.len() && bytes / scale >= STEP {
        scale *= STEP;
        index += 1;
    }

    let value = bytes as f64 / scale as f64;
    format!("{} {}", trim_decimals(value), UNITS[index])
}

/// Round to two decimals and drop trailing zeros ("1.50" -> "1.5", "2.00" -> "2").
///
/// Ties round away from zero (1.125 -> "1.13").
pub(crate) fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", (value * 100.0).round() / 100.0);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(10 * 1_048_576), "10 MB");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
        assert_eq!(format_file_size(1100), "1.07 KB");
        // Exact ties at the third decimal round up
        assert_eq!(format_file_size(1152), "1.13 KB");
        assert_eq!(format_file_size(1664), "1.63 KB");
        assert_eq!(format_file_size(1_179_648), "1.13 MB");
    }

    #[test]
    fn test_sizes_beyond_megabytes() {
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
        assert_eq!(format_file_size(3 * 1_073_741_824 / 2), "1.5 GB");
        assert_eq!(format_file_size(1_099_511_627_776), "1 TB");
        // No unit past TB: the value keeps growing instead.
        assert_eq!(format_file_size(2048 * 1_099_511_627_776), "2048 TB");
    }

    #[test]
    fn test_trim_decimals() {
        assert_eq!(trim_decimals(2.0), "2");
        assert_eq!(trim_decimals(1.5), "1.5");
        assert_eq!(trim_decimals(10.0), "10");
        assert_eq!(trim_decimals(0.126), "0.13");
        assert_eq!(trim_decimals(1.125), "1.13");
    }
}
