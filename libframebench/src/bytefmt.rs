/// Prefixes for successive powers of 1024, in ascending order
const BYTE_PREFIXES: [&str; 5] = [ "", "k", "M", "G", "T" ];

/// Renders a byte count as a human-readable magnitude string such as "31 kiB" or "2 MiB",
/// rounding the scaled value to the nearest integer. The value is divided by 1024 until it
/// drops below 1024 or the largest prefix is reached, so counts past the tebibyte range clamp
/// to "TiB" (e.g. "2048 TiB") rather than falling off the end of the prefix table
pub fn format_bytes(bytes: u64) -> String {
	let mut value = bytes as f64;
	let mut exponent = 0;

	while value >= 1024.0 && exponent + 1 < BYTE_PREFIXES.len() {
		value /= 1024.0;
		exponent += 1;
	}

	format!("{} {}iB", value.round() as u64, BYTE_PREFIXES[exponent])
}
