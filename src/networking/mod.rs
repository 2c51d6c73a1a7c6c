pub mod client;

pub use client::{
    flush_outbound, pump_transport, ConnectionStatus, NetworkPlugin, TransportEvent, WireTransport,
};
