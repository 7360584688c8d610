//! A single RCON connection

use crate::codec::PacketCodec;
use crate::error::{RconError, Result};
use crate::protocol::{Packet, REQUEST_ID};
use futures::{SinkExt, StreamExt};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;

/// One authenticated-or-not connection to the console
///
/// Dropping the session closes the socket; [`RconSession::close`] does the
/// same but also sends a FIN first.
pub struct RconSession {
    framed: Framed<TcpStream, PacketCodec>,
}

impl RconSession {
    /// Open a connection to `host:port`
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port)).await?;
        stream.set_nodelay(true)?;

        tracing::trace!("RCON connection opened to {}:{}", host, port);

        Ok(Self {
            framed: Framed::new(stream, PacketCodec::new()),
        })
    }

    /// Send the password and check the server's answer
    ///
    /// The reply must carry the auth-response type *and* echo our request id.
    /// Servers answer a wrong password with id -1 and the same type tag, so
    /// the type alone is not enough. Any other reply is
    /// [`RconError::AuthRejected`].
    pub async fn authenticate(&mut self, password: &str) -> Result<()> {
        self.send(Packet::auth(password)).await?;

        let mut reply = self.read_packet().await?;

        // Source-engine servers precede the auth reply with an empty response
        if reply.is_response_value() && reply.id == REQUEST_ID && reply.body.is_empty() {
            reply = self.read_packet().await?;
        }

        if reply.is_auth_response() && reply.id == REQUEST_ID {
            Ok(())
        } else {
            Err(RconError::AuthRejected {
                id: reply.id,
                packet_type: reply.packet_type,
            })
        }
    }

    /// Send a command and read the single reply packet
    pub async fn exchange(&mut self, command: &str) -> Result<Packet> {
        self.send(Packet::command(command)).await?;
        self.read_packet().await
    }

    /// Write a packet and flush it
    pub async fn send(&mut self, packet: Packet) -> Result<()> {
        self.framed.send(packet).await
    }

    /// Read the next packet from the server
    pub async fn read_packet(&mut self) -> Result<Packet> {
        match self.framed.next().await {
            Some(result) => result,
            None => Err(RconError::ConnectionClosed),
        }
    }

    /// Shut down the write half and release the socket
    pub async fn close(self) -> Result<()> {
        let mut stream = self.framed.into_inner();
        stream.shutdown().await?;
        Ok(())
    }
}
