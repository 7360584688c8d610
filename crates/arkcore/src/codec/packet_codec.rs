//! Packet codec for encoding and decoding RCON packets

use crate::error::{RconError, Result};
use crate::protocol::{MAX_PACKET_SIZE, MIN_PACKET_SIZE, Packet, SIZE_FIELD_LEN};
use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// Codec for encoding and decoding RCON packets
pub struct PacketCodec {
    // Largest size field we accept before giving up on the stream
    max_size: usize,
}

impl PacketCodec {
    /// Create a new packet codec
    pub fn new() -> Self {
        Self {
            max_size: MAX_PACKET_SIZE,
        }
    }

    /// Create a new packet codec with a custom max size
    pub fn with_max_size(max_size: usize) -> Self {
        Self { max_size }
    }
}

impl Default for PacketCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for PacketCodec {
    type Item = Packet;
    type Error = RconError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        if src.len() < SIZE_FIELD_LEN {
            return Ok(None);
        }

        // Peek at the size without consuming it
        let size = u32::from_le_bytes([src[0], src[1], src[2], src[3]]);
        let body_size = size as usize;

        if body_size < MIN_PACKET_SIZE {
            return Err(RconError::MalformedPacket(size));
        }

        if body_size > self.max_size {
            return Err(RconError::PacketTooLarge {
                size: body_size,
                max: self.max_size,
            });
        }

        let total_needed = SIZE_FIELD_LEN + body_size;
        if src.len() < total_needed {
            src.reserve(total_needed - src.len());
            return Ok(None);
        }

        src.advance(SIZE_FIELD_LEN);
        let mut frame = src.split_to(body_size);

        let id = frame.get_i32_le();
        let packet_type = frame.get_i32_le();

        // Drop the two NUL terminators
        frame.truncate(frame.len() - 2);

        Ok(Some(Packet {
            id,
            packet_type,
            body: frame.freeze(),
        }))
    }
}

impl Encoder<Packet> for PacketCodec {
    type Error = RconError;

    fn encode(&mut self, item: Packet, dst: &mut BytesMut) -> Result<()> {
        let size = item.wire_size();
        if size > self.max_size {
            return Err(RconError::PacketTooLarge {
                size,
                max: self.max_size,
            });
        }

        dst.reserve(SIZE_FIELD_LEN + size);
        dst.put_u32_le(size as u32);
        dst.put_i32_le(item.id);
        dst.put_i32_le(item.packet_type);
        dst.extend_from_slice(&item.body);
        dst.put_u16(0);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{SERVERDATA_EXECCOMMAND, SERVERDATA_RESPONSE_VALUE};

    #[test]
    fn test_encode_layout() {
        let mut codec = PacketCodec::new();
        let mut buf = BytesMut::new();
        codec.encode(Packet::command("echo test"), &mut buf).unwrap();

        assert_eq!(buf.len(), 4 + 19);
        assert_eq!(&buf[0..4], &19u32.to_le_bytes());
        assert_eq!(&buf[4..8], &1i32.to_le_bytes());
        assert_eq!(&buf[8..12], &2i32.to_le_bytes());
        assert_eq!(&buf[12..21], b"echo test");
        assert_eq!(&buf[21..], &[0, 0]);
    }

    #[test]
    fn test_command_round_trip() {
        let mut codec = PacketCodec::new();
        let mut buf = BytesMut::new();
        codec.encode(Packet::command("listplayers"), &mut buf).unwrap();

        let decoded = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(decoded.id, 1);
        assert_eq!(decoded.packet_type, SERVERDATA_EXECCOMMAND);
        assert_eq!(&decoded.body[..], b"listplayers");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_partial_frame_waits_for_more() {
        let mut codec = PacketCodec::new();
        let mut full = BytesMut::new();
        codec
            .encode(Packet::new(7, SERVERDATA_RESPONSE_VALUE, &b"hello"[..]), &mut full)
            .unwrap();

        let mut buf = BytesMut::from(&full[..2]);
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(&full[2..10]);
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(&full[10..]);
        let packet = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(packet.id, 7);
        assert_eq!(&packet.body[..], b"hello");
    }

    #[test]
    fn test_two_packets_in_one_buffer() {
        let mut codec = PacketCodec::new();
        let mut buf = BytesMut::new();
        codec.encode(Packet::new(1, 0, &b""[..]), &mut buf).unwrap();
        codec.encode(Packet::new(1, 2, &b""[..]), &mut buf).unwrap();

        let first = codec.decode(&mut buf).unwrap().unwrap();
        let second = codec.decode(&mut buf).unwrap().unwrap();
        assert!(first.is_response_value());
        assert!(second.is_auth_response());
        assert!(codec.decode(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_undersized_packet_is_malformed() {
        let mut codec = PacketCodec::new();
        let mut buf = BytesMut::new();
        buf.put_u32_le(6);
        buf.extend_from_slice(&[0; 6]);

        assert!(matches!(
            codec.decode(&mut buf),
            Err(RconError::MalformedPacket(6))
        ));
    }

    #[test]
    fn test_oversized_packet_rejected() {
        let mut codec = PacketCodec::with_max_size(64);
        let mut buf = BytesMut::new();
        buf.put_u32_le(1000);

        assert!(matches!(
            codec.decode(&mut buf),
            Err(RconError::PacketTooLarge { size: 1000, max: 64 })
        ));

        let long_command = "x".repeat(100);
        let mut out = BytesMut::new();
        assert!(codec.encode(Packet::command(&long_command), &mut out).is_err());
    }
}
