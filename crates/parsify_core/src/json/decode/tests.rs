use std::io::{self, Cursor, Read};

use parsify_testkit::{fixture_bytes, fixture_zstd};

use super::{DecodeOptions, decode_bytes, decode_reader};
use crate::json::{Compression, Kind, ParsifyError, TreeValue, ZSTD_MAGIC};

#[test]
fn decodes_plain_buffer_and_stream_alike() {
	let bytes = fixture_bytes("eth_block.json");
	let from_buffer = decode_bytes(&bytes, &DecodeOptions::default()).expect("buffer decodes");
	let from_stream = decode_reader(Cursor::new(bytes.clone()), &DecodeOptions::default()).expect("stream decodes");

	assert_eq!(from_buffer.compression, Compression::None);
	assert_eq!(from_stream.compression, Compression::None);
	assert_eq!(from_buffer.tree.kind(), Kind::Object);
	assert_eq!(from_buffer.tree, from_stream.tree);
}

#[test]
fn syntax_error_is_forwarded_verbatim() {
	let input = br#"{"jsonrpc": "2.0",}"#;
	let expected = serde_json::from_slice::<serde_json::Value>(input).expect_err("input is malformed").to_string();

	let err = TreeValue::from_slice(input).expect_err("decode fails");
	assert!(matches!(err, ParsifyError::Decode(_)));
	assert_eq!(err.to_string(), expected);
}

#[test]
fn empty_input_is_a_decode_error() {
	assert!(matches!(TreeValue::from_slice(b""), Err(ParsifyError::Decode(_))));
	assert!(matches!(TreeValue::from_reader(Cursor::new(Vec::new())), Err(ParsifyError::Decode(_))));
}

#[test]
fn scalar_documents_decode() {
	assert!(TreeValue::from_slice(b"null").expect("null decodes").is_null());
	assert_eq!(TreeValue::from_slice(b" 7 ").expect("number decodes").as_number(), Some(7.0));
}

#[test]
fn zstd_input_is_decompressed() {
	let plain = fixture_bytes("eth_block.json");
	let packed = fixture_zstd("eth_block.json");

	let from_buffer = decode_bytes(&packed, &DecodeOptions::default()).expect("zstd buffer decodes");
	let from_stream = decode_reader(Cursor::new(packed), &DecodeOptions::default()).expect("zstd stream decodes");
	let expected = TreeValue::from_slice(&plain).expect("plain decodes");

	assert_eq!(from_buffer.compression, Compression::Zstd);
	assert_eq!(from_stream.compression, Compression::Zstd);
	assert_eq!(from_buffer.tree, expected);
	assert_eq!(from_stream.tree, expected);
}

#[test]
fn zstd_output_is_bounded() {
	let packed = zstd::encode_all(&b"[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]"[..], 3).expect("zstd encodes");
	let options = DecodeOptions {
		max_decompressed_bytes: 8,
		..DecodeOptions::default()
	};

	let err = decode_bytes(&packed, &options).expect_err("limit exceeded");
	assert!(matches!(err, ParsifyError::DecompressedTooLarge { limit: 8 }));
}

#[test]
fn zstd_can_be_disabled() {
	let packed = zstd::encode_all(&b"{}"[..], 3).expect("zstd encodes");
	let options = DecodeOptions {
		allow_zstd: false,
		..DecodeOptions::default()
	};

	assert!(matches!(decode_bytes(&packed, &options), Err(ParsifyError::Decode(_))));
}

struct OneByteReader<R>(R);

impl<R: Read> Read for OneByteReader<R> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let end = buf.len().min(1);
		self.0.read(&mut buf[..end])
	}
}

#[test]
fn zstd_magic_is_found_across_short_reads() {
	let plain = fixture_bytes("eth_block.json");
	let packed = fixture_zstd("eth_block.json");

	let decoded = decode_reader(OneByteReader(Cursor::new(packed)), &DecodeOptions::default()).expect("zstd stream decodes");
	assert_eq!(decoded.compression, Compression::Zstd);
	assert_eq!(decoded.tree, TreeValue::from_slice(&plain).expect("plain decodes"));

	let decoded = decode_reader(OneByteReader(Cursor::new(plain)), &DecodeOptions::default()).expect("plain stream decodes");
	assert_eq!(decoded.compression, Compression::None);
	assert_eq!(decoded.tree.kind(), Kind::Object);
}

#[test]
fn short_streams_decode() {
	assert_eq!(TreeValue::from_reader(OneByteReader(Cursor::new(b"7".to_vec()))).expect("decodes").as_number(), Some(7.0));
	assert_eq!(TreeValue::from_reader(Cursor::new(b"[]".to_vec())).expect("decodes").array_len(), Some(0));
}

#[test]
fn corrupt_zstd_frame_is_a_decompress_error() {
	let mut packed = ZSTD_MAGIC.to_vec();
	packed.extend_from_slice(&[0xff; 8]);

	let err = decode_bytes(&packed, &DecodeOptions::default()).expect_err("frame is corrupt");
	assert!(matches!(err, ParsifyError::Decompress(_)), "{err:?}");
	assert!(err.to_string().starts_with("zstd: "));

	let err = decode_reader(Cursor::new(packed), &DecodeOptions::default()).expect_err("frame is corrupt");
	assert!(matches!(err, ParsifyError::Decompress(_)), "{err:?}");
}
