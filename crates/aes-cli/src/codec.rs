//! Conversions between text files and 16-byte blocks.

use aes_core::{Block, BLOCK_SIZE};
use anyhow::{bail, Context, Result};

/// Converts one line of text into a block.
///
/// The line's UTF-8 bytes are right-aligned and left-padded with zero bytes,
/// the same layout a big-endian 128-bit number would have.
pub fn line_to_block(line: &str, line_no: usize) -> Result<Block> {
    let bytes = line.as_bytes();
    if bytes.len() > BLOCK_SIZE {
        bail!(
            "line {line_no} is {} bytes; each line must fit in one {BLOCK_SIZE}-byte block",
            bytes.len()
        );
    }
    let mut block = [0u8; BLOCK_SIZE];
    block[BLOCK_SIZE - bytes.len()..].copy_from_slice(bytes);
    Ok(block)
}

/// Converts a decrypted block back to text, dropping the leading zero padding.
pub fn block_to_line(block: &Block) -> String {
    let start = block
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(BLOCK_SIZE);
    String::from_utf8_lossy(&block[start..]).into_owned()
}

/// Splits plaintext into one block per line.
pub fn text_to_blocks(text: &str) -> Result<Vec<Block>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| line_to_block(line, idx + 1))
        .collect()
}

/// Joins decrypted blocks into text, one line per block.
pub fn blocks_to_text(blocks: &[Block]) -> String {
    let mut text = String::new();
    for block in blocks {
        text.push_str(&block_to_line(block));
        text.push('\n');
    }
    text
}

/// Renders blocks as uppercase hex, one block per line.
pub fn blocks_to_hex(blocks: &[Block]) -> String {
    let mut text = String::with_capacity(blocks.len() * (2 * BLOCK_SIZE + 1));
    for block in blocks {
        text.push_str(&hex::encode_upper(block));
        text.push('\n');
    }
    text
}

/// Parses hex text into raw block-sized chunks.
///
/// Whitespace is ignored. A trailing chunk shorter than a block is kept so the
/// cipher reports it.
pub fn hex_to_chunks(text: &str) -> Result<Vec<Vec<u8>>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(&compact).context("decode ciphertext hex")?;
    Ok(bytes.chunks(BLOCK_SIZE).map(<[u8]>::to_vec).collect())
}

/// Parses a 16-byte value given as 32 hex characters.
pub fn parse_block_hex(hex_str: &str, what: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))?;
    if bytes.len() != BLOCK_SIZE {
        bail!("{what} must be {BLOCK_SIZE} bytes (32 hex characters)");
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&bytes);
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_left_padded() {
        let block = line_to_block("hi", 1).unwrap();
        assert_eq!(&block[..14], &[0u8; 14]);
        assert_eq!(&block[14..], b"hi");
        assert_eq!(block_to_line(&block), "hi");
    }

    #[test]
    fn full_line_uses_whole_block() {
        let block = line_to_block("exactly16bytes!!", 1).unwrap();
        assert_eq!(&block, b"exactly16bytes!!");
    }

    #[test]
    fn long_line_is_rejected() {
        let err = line_to_block("this line is too long", 4).unwrap_err();
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn empty_line_decodes_to_empty_string() {
        assert_eq!(block_to_line(&[0u8; 16]), "");
    }

    #[test]
    fn text_round_trips_through_blocks() {
        let text = "first line\nsecond\n";
        let blocks = text_to_blocks(text).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks_to_text(&blocks), text);
    }

    #[test]
    fn hex_output_is_uppercase_per_block() {
        let hex = blocks_to_hex(&[[0xab; 16], [0x01; 16]]);
        let lines: Vec<&str> = hex.lines().collect();
        assert_eq!(lines, vec!["AB".repeat(16), "01".repeat(16)]);
    }

    #[test]
    fn hex_parsing_ignores_whitespace_and_keeps_partial_chunk() {
        let text = format!("{}\n{}  \n0a0b", "00".repeat(16), "FF".repeat(16));
        let chunks = hex_to_chunks(&text).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1], vec![0xff; 16]);
        assert_eq!(chunks[2], vec![0x0a, 0x0b]);
    }

    #[test]
    fn block_hex_requires_sixteen_bytes() {
        assert!(parse_block_hex("0011", "iv").is_err());
        assert!(parse_block_hex("zz", "iv").is_err());
        let iv = parse_block_hex(" 000102030405060708090a0b0c0d0e0f ", "iv").unwrap();
        assert_eq!(iv[15], 0x0f);
    }
}
