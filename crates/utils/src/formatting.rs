// Copyright 2025 Irreducible Inc.

/// Renders bytes as lowercase hexadecimal, two characters per byte, most significant nibble first.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
	hex::encode(bytes)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_to_hex_empty() {
		assert_eq!(to_hex([0u8; 0]), "");
	}

	#[test]
	fn test_to_hex_nibble_order() {
		assert_eq!(to_hex([0x00u8, 0x0f, 0xf0, 0xab]), "000ff0ab");
	}

	#[test]
	fn test_to_hex_length() {
		let bytes: Vec<u8> = (0..=255).collect();
		let rendered = to_hex(&bytes);
		assert_eq!(rendered.len(), 2 * bytes.len());
		assert!(rendered
			.chars()
			.all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
	}
}
