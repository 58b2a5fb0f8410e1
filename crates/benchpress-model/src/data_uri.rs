//! Data-URI texture payload decoding

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use benchpress_core::{BenchError, Result};

/// Decode a `data:<mime>;base64,<payload>` string into raw bytes.
///
/// The header before the comma is not inspected; Blockbench always writes
/// base64-encoded PNG data and the image decoder downstream rejects anything
/// it cannot read.
pub fn decode_data_uri(source: &str) -> Result<Vec<u8>> {
    let (_, payload) = source.split_once(',').ok_or_else(|| {
        BenchError::MalformedDocument("texture source is not a data URI".to_string())
    })?;

    STANDARD.decode(payload.trim()).map_err(|e| {
        BenchError::MalformedDocument(format!("texture payload is not valid base64: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_round_trip() {
        let encoded = STANDARD.encode(b"png-bytes-here");
        let uri = format!("data:image/png;base64,{}", encoded);
        let decoded = decode_data_uri(&uri).unwrap();
        assert_eq!(decoded, b"png-bytes-here");
    }

    #[test]
    fn reject_missing_separator() {
        let result = decode_data_uri("no comma in sight");
        assert!(matches!(result, Err(BenchError::MalformedDocument(_))));
    }

    #[test]
    fn reject_invalid_base64() {
        let result = decode_data_uri("data:image/png;base64,!!!not-base64!!!");
        assert!(matches!(result, Err(BenchError::MalformedDocument(_))));
    }
}
