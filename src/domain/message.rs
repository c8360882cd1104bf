use url::Url;

use crate::domain::validation::ValidationError;
use crate::domain::value::{Priority, Sound, UnixTimestamp};

/// Required length of an application token (`token`), in characters.
pub const TOKEN_CHARS: usize = 30;
/// Required length of a recipient user key (`user`), in characters.
pub const USER_KEY_CHARS: usize = 30;
/// Maximum message body length, in characters.
pub const MESSAGE_MAX_CHARS: usize = 1024;
/// Maximum device name length, in characters.
pub const DEVICE_MAX_CHARS: usize = 25;
/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 250;
/// Maximum rendered length of a supplementary or callback URL, in characters.
pub const URL_MAX_CHARS: usize = 512;
/// Maximum supplementary URL title length, in characters.
pub const URL_TITLE_MAX_CHARS: usize = 100;
/// Minimum retry interval for emergency-priority messages, in seconds.
pub const EMERGENCY_RETRY_MIN_SECONDS: i64 = 30;
/// Maximum expire interval for emergency-priority messages, in seconds.
pub const EXPIRE_MAX_SECONDS: i64 = 86_400;

#[derive(Debug, Clone, PartialEq, Default)]
/// A Pushover notification message.
///
/// Fields are plain values populated by the caller; nothing is checked at
/// construction time. [`Message::validate`] applies the service's documented
/// constraints in a fixed precedence order and is pure: it takes `&self`,
/// never mutates, and may be re-run any number of times.
pub struct Message {
    /// Application token. Must be exactly [`TOKEN_CHARS`] characters.
    pub token: String,
    /// Recipient user key. Must be exactly [`USER_KEY_CHARS`] characters.
    pub user: String,
    /// Message body. Mandatory, at most [`MESSAGE_MAX_CHARS`] characters.
    pub message: String,
    /// Target device name. Optional, at most [`DEVICE_MAX_CHARS`] characters.
    pub device: String,
    /// Message title. Optional, at most [`TITLE_MAX_CHARS`] characters.
    pub title: String,
    /// Supplementary URL shown with the message.
    pub url: Option<Url>,
    /// Title for the supplementary URL, at most [`URL_TITLE_MAX_CHARS`]
    /// characters.
    pub url_title: String,
    /// Message priority. [`Priority::Emergency`] makes `retry` and `expire`
    /// mandatory.
    pub priority: Priority,
    /// Message timestamp; absent means "use server receipt time".
    pub timestamp: Option<UnixTimestamp>,
    /// Alert sound; [`Sound::Default`] lets the service choose.
    pub sound: Sound,
    /// Retry interval in seconds for emergency priority. Ignored when zero at
    /// other priorities.
    pub retry: i64,
    /// Expire interval in seconds for emergency priority.
    pub expire: i64,
    /// Render the message body as HTML. Formatting-only; the service applies
    /// it, the client does not enforce anything about it.
    pub html: bool,
    /// Callback URL receiving emergency acknowledgement receipts. Never
    /// mandatory, even at emergency priority.
    pub callback: Option<Url>,
}

impl Message {
    /// Create a message with the three mandatory fields set and everything
    /// else at its default.
    pub fn new(
        token: impl Into<String>,
        user: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            user: user.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Check the message against the service's field constraints.
    ///
    /// Rules are evaluated in three phases with fixed precedence, and the
    /// first violated rule wins:
    ///
    /// 1. mandatory fields: `token`, `user`, `message`, then `retry` and
    ///    `expire` when priority is [`Priority::Emergency`];
    /// 2. length limits: `message`, `device`, `title`, `url_title`, rendered
    ///    `url`, rendered `callback`;
    /// 3. value validity: `token`/`user` exact length, `retry` lower bound,
    ///    `expire` upper bound.
    ///
    /// Returns `Ok(())` iff every rule passes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check_mandatory()?;
        self.check_lengths()?;
        self.check_validity()
    }

    fn check_mandatory(&self) -> Result<(), ValidationError> {
        if self.token.is_empty() {
            return Err(ValidationError::Empty { field: "token" });
        }
        if self.user.is_empty() {
            return Err(ValidationError::Empty { field: "user" });
        }
        if self.message.is_empty() {
            return Err(ValidationError::Empty { field: "message" });
        }
        if self.priority == Priority::Emergency {
            if self.retry == 0 {
                return Err(ValidationError::RequiredForEmergency { field: "retry" });
            }
            if self.expire == 0 {
                return Err(ValidationError::RequiredForEmergency { field: "expire" });
            }
        }
        Ok(())
    }

    fn check_lengths(&self) -> Result<(), ValidationError> {
        check_max_chars("message", &self.message, MESSAGE_MAX_CHARS)?;
        check_max_chars("device", &self.device, DEVICE_MAX_CHARS)?;
        check_max_chars("title", &self.title, TITLE_MAX_CHARS)?;
        check_max_chars("url_title", &self.url_title, URL_TITLE_MAX_CHARS)?;
        if let Some(url) = self.url.as_ref() {
            check_max_chars("url", url.as_str(), URL_MAX_CHARS)?;
        }
        if let Some(callback) = self.callback.as_ref() {
            check_max_chars("callback", callback.as_str(), URL_MAX_CHARS)?;
        }
        Ok(())
    }

    fn check_validity(&self) -> Result<(), ValidationError> {
        check_exact_chars("token", &self.token, TOKEN_CHARS)?;
        check_exact_chars("user", &self.user, USER_KEY_CHARS)?;
        // Kept verbatim from the service docs: zero means "unset" and is only
        // mandatory at emergency priority, so it is not caught here.
        if self.retry != 0 && self.retry < EMERGENCY_RETRY_MIN_SECONDS {
            return Err(ValidationError::RetryBelowMinimum {
                min: EMERGENCY_RETRY_MIN_SECONDS,
                actual: self.retry,
            });
        }
        if self.expire > EXPIRE_MAX_SECONDS {
            return Err(ValidationError::ExpireAboveMaximum {
                max: EXPIRE_MAX_SECONDS,
                actual: self.expire,
            });
        }
        Ok(())
    }
}

fn check_max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

fn check_exact_chars(
    field: &'static str,
    value: &str,
    expected: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual != expected {
        return Err(ValidationError::WrongLength {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}
