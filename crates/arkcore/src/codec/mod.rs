//! Codec implementations for encoding and decoding protocol messages

pub mod packet_codec;
pub mod text;

pub use packet_codec::PacketCodec;
pub use text::decode_text;
