//! Shared fixtures for bot integration tests

#![allow(dead_code)]

use arkbotd::console::ConsoleChat;
use arkbotd::orchestrator::{InfraStatus, Orchestrator};
use arkbotd::{BotState, Config};
use arkcore::RconClient;
use arkcore::codec::PacketCodec;
use arkcore::protocol::{AUTH_FAILED_ID, Packet, SERVERDATA_AUTH_RESPONSE, SERVERDATA_RESPONSE_VALUE};
use async_trait::async_trait;
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::io::{BufReader, DuplexStream, Lines};
use tokio::net::TcpListener;
use tokio_util::codec::Framed;

pub const PASSWORD: &str = "secret";
pub const CHANNEL_ID: u64 = 42;

/// Fake game console: accepts `PASSWORD` and answers each command with
/// `reply(command)`
pub async fn fake_rcon_server(reply: fn(&str) -> String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake RCON server");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut conn = Framed::new(stream, PacketCodec::new());

                let Some(Ok(auth)) = conn.next().await else { return };
                let accepted = auth.body == PASSWORD.as_bytes();
                let id = if accepted { auth.id } else { AUTH_FAILED_ID };
                if conn
                    .send(Packet::new(id, SERVERDATA_AUTH_RESPONSE, Bytes::new()))
                    .await
                    .is_err()
                    || !accepted
                {
                    return;
                }

                let Some(Ok(command)) = conn.next().await else { return };
                let text = String::from_utf8_lossy(&command.body).into_owned();
                let _ = conn
                    .send(Packet::new(command.id, SERVERDATA_RESPONSE_VALUE, reply(&text)))
                    .await;
            });
        }
    });

    addr
}

/// Replies like an ARK server with two players online
pub fn ark_replies(command: &str) -> String {
    match command {
        "listplayers" => "0. Alice, 00000001\n1. Bob, 00000002\n".to_string(),
        "echo test" => "test".to_string(),
        _ => String::new(),
    }
}

/// Orchestrator whose status the test flips by hand
pub struct SwitchableOrchestrator {
    status: Mutex<InfraStatus>,
    restarts: AtomicUsize,
}

impl SwitchableOrchestrator {
    pub fn new(status: InfraStatus) -> Self {
        Self {
            status: Mutex::new(status),
            restarts: AtomicUsize::new(0),
        }
    }

    pub fn set(&self, status: InfraStatus) {
        *self.status.lock().unwrap() = status;
    }

    pub fn restarts(&self) -> usize {
        self.restarts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Orchestrator for SwitchableOrchestrator {
    async fn get_server_status(&self) -> InfraStatus {
        *self.status.lock().unwrap()
    }

    async fn restart_server(&self) -> bool {
        self.restarts.fetch_add(1, Ordering::SeqCst);
        true
    }
}

pub fn test_config(addr: SocketAddr, password: &str) -> Config {
    let mut config = Config::default();
    config.rcon.host = addr.ip().to_string();
    config.rcon.port = addr.port();
    config.rcon.password = password.to_string();
    config.chat.channel_id = CHANNEL_ID;
    config.monitor.interval_seconds = 1;
    config.monitor.rcon_timeout_seconds = 2;
    config.logging.file = None;
    config
}

/// Everything a bot test needs: state wired to a console chat whose output
/// the test reads line by line
pub struct Harness {
    pub state: Arc<BotState>,
    pub console: Arc<ConsoleChat>,
    pub output: Lines<BufReader<DuplexStream>>,
}

pub fn harness(config: Config, orchestrator: Arc<SwitchableOrchestrator>) -> Harness {
    use tokio::io::AsyncBufReadExt;

    let (writer, reader) = tokio::io::duplex(8192);
    let console = Arc::new(ConsoleChat::new(writer));
    let rcon = Arc::new(RconClient::new(
        config.rcon.host.clone(),
        config.rcon.port,
        config.rcon.password.clone(),
    ));
    let state = Arc::new(BotState::with_collaborators(
        config,
        rcon,
        orchestrator,
        console.clone(),
    ));

    Harness {
        state,
        console,
        output: BufReader::new(reader).lines(),
    }
}

/// `[channel] text` as printed by the console chat
pub fn line(text: &str) -> String {
    format!("[{}] {}", CHANNEL_ID, text)
}
