//! Messages exchanged with a shared drawing session
//!
//! Only the wire shapes live here. Transport, the session registry and the
//! relaying of messages between connections belong to the host application.
//!
//! - [message](message/index.html) - client and server message types with their JSON codec

pub mod message;
