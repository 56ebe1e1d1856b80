//! String formatting utilities for hashes and hex values in logs.

/// Truncates a hash for log output, keeping the 0x prefix and eight hex digits.
pub fn truncate_id(id: &str) -> String {
	let body = without_0x_prefix(id);
	if body.len() <= 8 {
		id.to_string()
	} else {
		format!("0x{}..", &body[..8])
	}
}

/// Removes the "0x" or "0X" prefix from a hex string if present.
pub fn without_0x_prefix(hex_str: &str) -> &str {
	hex_str
		.strip_prefix("0x")
		.or_else(|| hex_str.strip_prefix("0X"))
		.unwrap_or(hex_str)
}
