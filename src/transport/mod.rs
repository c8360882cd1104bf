//! Transport layer: wire-format details (form encoding and JSON decoding).

mod message;

pub use message::{TransportError, decode_message_json_response, encode_message_form};
