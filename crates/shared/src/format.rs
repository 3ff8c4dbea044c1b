const UNIT_STEP: u64 = 1024;
const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];

/// Renders a byte count for display, e.g. `0 Bytes`, `1.5 KB`, `2 MB`.
///
/// Values are rounded to two decimals with trailing zeros dropped. Anything at
/// or above 1 GiB is still expressed in MB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut unit_size = 1u64;
    while unit + 1 < UNITS.len() && bytes >= unit_size * UNIT_STEP {
        unit += 1;
        unit_size *= UNIT_STEP;
    }

    let value = (bytes as f64 / unit_size as f64 * 100.0).round() / 100.0;
    format!("{value} {}", UNITS[unit])
}
