//! WebSocket transport bridge
//!
//! The socket runs on its own thread with a current-thread tokio runtime and
//! is bridged to the ECS with channels: outbound text goes through a tokio
//! mpsc sender (sending is synchronous, so Bevy systems can call it
//! directly), and inbound events come back over a crossbeam channel drained
//! once per frame. The socket thread never touches game state.
//!
//! Connection loss is surfaced to the user and nothing more: there is no
//! reconnect logic, matching the rest of the client's trust-the-server
//! posture.

use bevy::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use futures::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use websocket::{ClientBuilder, Message};

use crate::core::config::ClientConfig;
use crate::game::events::{InboundWire, OutboundWire};

/// Events surfaced by the socket thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// A text frame arrived from the server
    Message(String),
    /// The link is down; the user is told, nothing is retried
    ConnectionLost,
}

#[derive(Debug, Error)]
enum TransportError {
    #[error("invalid server url {0:?}")]
    InvalidUrl(String),
    #[error("websocket error: {0}")]
    Socket(#[source] websocket::Error),
    #[error("connection closed by server")]
    Closed,
}

/// Channel pair connecting the ECS to the socket thread
#[derive(Resource)]
pub struct WireTransport {
    outbound: UnboundedSender<String>,
    inbound: Receiver<TransportEvent>,
}

impl WireTransport {
    pub fn new(outbound: UnboundedSender<String>, inbound: Receiver<TransportEvent>) -> Self {
        WireTransport { outbound, inbound }
    }

    /// Queue a text frame for the server
    pub fn send(&self, text: String) {
        if self.outbound.send(text).is_err() {
            warn!("[NETWORK] transport thread gone, dropping outbound message");
        }
    }
}

/// Connection health as shown to the user
#[derive(Resource, Debug, Default)]
pub struct ConnectionStatus {
    pub lost: bool,
}

pub struct NetworkPlugin;

impl Plugin for NetworkPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConnectionStatus>();
        app.add_systems(Startup, start_transport);
        app.add_systems(
            PreUpdate,
            pump_transport.run_if(resource_exists::<WireTransport>),
        );
        app.add_systems(
            PostUpdate,
            flush_outbound.run_if(resource_exists::<WireTransport>),
        );
    }
}

/// Spawn the socket thread and install the channel pair
pub fn start_transport(mut commands: Commands, config: Res<ClientConfig>) {
    let (out_tx, out_rx) = mpsc::unbounded_channel();
    let (in_tx, in_rx) = crossbeam_channel::unbounded();
    let url = config.server_url.clone();

    let spawned = std::thread::Builder::new()
        .name("wire-transport".into())
        .spawn(move || socket_thread(url, out_rx, in_tx));
    if let Err(err) = spawned {
        error!("[NETWORK] failed to spawn transport thread: {err}");
        return;
    }

    commands.insert_resource(WireTransport::new(out_tx, in_rx));
    info!("[NETWORK] transport started");
}

fn socket_thread(
    url: String,
    out_rx: UnboundedReceiver<String>,
    in_tx: Sender<TransportEvent>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("[NETWORK] failed to build transport runtime: {err}");
            let _ = in_tx.send(TransportEvent::ConnectionLost);
            return;
        }
    };

    if let Err(err) = runtime.block_on(run_socket(&url, out_rx, &in_tx)) {
        tracing::warn!("[NETWORK] {err}");
    }
    // Whether the loop ended by error or by the app dropping its sender, the
    // link is gone either way.
    let _ = in_tx.send(TransportEvent::ConnectionLost);
}

async fn run_socket(
    url: &str,
    mut out_rx: UnboundedReceiver<String>,
    in_tx: &Sender<TransportEvent>,
) -> Result<(), TransportError> {
    let builder = ClientBuilder::new()
        .uri(url)
        .map_err(|_| TransportError::InvalidUrl(url.to_owned()))?;
    let (mut stream, _response) = builder.connect().await.map_err(TransportError::Socket)?;
    tracing::info!("[NETWORK] connected to {url}");

    loop {
        tokio::select! {
            outgoing = out_rx.recv() => {
                let Some(text) = outgoing else {
                    // App side hung up; clean shutdown.
                    return Ok(());
                };
                stream
                    .send(Message::text(text))
                    .await
                    .map_err(TransportError::Socket)?;
            }
            incoming = stream.next() => {
                match incoming {
                    Some(Ok(message)) => {
                        if let Some(text) = message.as_text() {
                            let _ = in_tx.send(TransportEvent::Message(text.to_owned()));
                        } else if message.is_close() {
                            return Err(TransportError::Closed);
                        }
                    }
                    Some(Err(err)) => return Err(TransportError::Socket(err)),
                    None => return Err(TransportError::Closed),
                }
            }
        }
    }
}

/// Drain the socket thread's events into ECS messages
pub fn pump_transport(
    transport: Res<WireTransport>,
    mut inbound: MessageWriter<InboundWire>,
    mut status: ResMut<ConnectionStatus>,
) {
    for event in transport.inbound.try_iter() {
        match event {
            TransportEvent::Message(text) => {
                inbound.write(InboundWire(text));
            }
            TransportEvent::ConnectionLost => {
                if !status.lost {
                    warn!("[NETWORK] connection lost");
                }
                status.lost = true;
            }
        }
    }
}

/// Forward queued outbound messages to the socket thread
pub fn flush_outbound(transport: Res<WireTransport>, mut outbound: MessageReader<OutboundWire>) {
    for message in outbound.read() {
        debug!("[NETWORK] send {:?}", message.0);
        transport.send(message.0.clone());
    }
}
