pub mod input;
pub mod network;

pub use input::board_click_system;
pub use network::{apply_inbound_messages, handle_restart_requests};
