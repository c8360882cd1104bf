//! Domain layer: the message model, validation rules, and invariants (no I/O).

mod message;
mod response;
mod validation;
mod value;

pub use message::{
    DEVICE_MAX_CHARS, EMERGENCY_RETRY_MIN_SECONDS, EXPIRE_MAX_SECONDS, MESSAGE_MAX_CHARS, Message,
    TITLE_MAX_CHARS, TOKEN_CHARS, URL_MAX_CHARS, URL_TITLE_MAX_CHARS, USER_KEY_CHARS,
};
pub use response::Response;
pub use validation::ValidationError;
pub use value::{Priority, Sound, UnixTimestamp};
