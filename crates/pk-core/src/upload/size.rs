const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: u64 = 1024;

/// Human-readable size for the preview caption.
///
/// Picks the largest unit (up to GB) not exceeding `bytes`, rounds to two
/// decimals and drops trailing zeros: `1536 -> "1.5 KB"`, `1024 -> "1 KB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit + 1 < UNITS.len() && bytes / divisor >= STEP {
        divisor *= STEP;
        unit += 1;
    }

    let value = bytes as f64 / divisor as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
