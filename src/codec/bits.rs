//! The bit channel: messages to bitstreams and back.

use super::{table, CodecError};


/// Map each message symbol to its codeword and concatenate, in order.
///
/// The whole message is validated before any bit is emitted, so a rejected
/// message never produces a partial stream.
pub fn encode_bits(message: &str) -> Result<Vec<bool>, CodecError> {
    let mut codewords = Vec::with_capacity(message.len());
    for (index, ch) in message.chars().enumerate() {
        codewords.push(
            table::codeword_of(ch).ok_or(CodecError::InvalidMessageSymbol { ch, index })?
        );
    }

    let mut bits = Vec::with_capacity(codewords.len() * table::CODE_BITS);
    for codeword in codewords {
        table::push_codeword(&mut bits, codeword);
    }
    Ok(bits)
}

/// Split the bitstream into codeword-sized groups and map each back to its
/// symbol.
pub fn decode_bits(bits: &[bool]) -> Result<String, CodecError> {
    if bits.len() % table::CODE_BITS != 0 {
        return Err(CodecError::TruncatedBitstream { len: bits.len() });
    }

    let mut message = String::with_capacity(bits.len() / table::CODE_BITS);
    for (index, group) in bits.chunks(table::CODE_BITS).enumerate() {
        let value = table::group_value(group);
        match table::symbol_of(value) {
            Some(symbol) => message.push(symbol),
            None => return Err(CodecError::InvalidMoveEncoding { value, index }),
        }
    }
    Ok(message)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_concatenates_in_order() {
        let bits = encode_bits("ab").unwrap();
        assert_eq!(bits.len(), 12);
        assert_eq!(&bits[..6], &[false; 6]);
        assert_eq!(&bits[6..], &[false, false, false, false, false, true]);
    }

    #[test]
    fn test_bad_symbol_reported_with_position() {
        assert_eq!(
            encode_bits("ab!cd").unwrap_err(),
            CodecError::InvalidMessageSymbol { ch: '!', index: 2 },
        );
        // uppercase is not normalized at this layer
        assert_eq!(
            encode_bits("aB").unwrap_err(),
            CodecError::InvalidMessageSymbol { ch: 'B', index: 1 },
        );
    }

    #[test]
    fn test_decode_round_trip() {
        let message = "tacit0x9";
        assert_eq!(decode_bits(&encode_bits(message).unwrap()).unwrap(), message);
        assert_eq!(decode_bits(&[]).unwrap(), "");
    }

    #[test]
    fn test_truncated_stream_rejected() {
        let mut bits = encode_bits("ab").unwrap();
        bits.pop();
        assert_eq!(decode_bits(&bits).unwrap_err(), CodecError::TruncatedBitstream { len: 11 });
    }

    #[test]
    fn test_unassigned_group_rejected() {
        // 0b111111 = 63 names no symbol
        let mut bits = encode_bits("a").unwrap();
        bits.extend([true; 6]);
        assert_eq!(
            decode_bits(&bits).unwrap_err(),
            CodecError::InvalidMoveEncoding { value: 63, index: 1 },
        );
    }
}
