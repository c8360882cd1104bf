use serde::Deserialize;

use crate::domain::{Message, Priority, Response, Sound, UnixTimestamp, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonResponse {
    #[serde(default)]
    status: i32,
    #[serde(default)]
    request: String,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    token: String,
    #[serde(default)]
    user: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    device: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    url_title: String,
    #[serde(default)]
    priority: String,
    #[serde(default)]
    timestamp: String,
    #[serde(default)]
    sound: String,
}

/// Encode a message into the flat form-field set sent to the service.
///
/// Validation runs first and short-circuits with the violated rule; the
/// encoding itself assumes a valid message. Optional fields at their default
/// value are omitted entirely rather than sent empty.
pub fn encode_message_form(message: &Message) -> Result<Vec<(String, String)>, ValidationError> {
    message.validate()?;

    let mut params = Vec::<(String, String)>::new();
    params.push(("token".to_owned(), message.token.clone()));
    params.push(("user".to_owned(), message.user.clone()));
    params.push(("message".to_owned(), message.message.clone()));

    if !message.device.is_empty() {
        params.push(("device".to_owned(), message.device.clone()));
    }
    if !message.title.is_empty() {
        params.push(("title".to_owned(), message.title.clone()));
    }
    if !message.url_title.is_empty() {
        params.push(("url_title".to_owned(), message.url_title.clone()));
    }
    if let Some(url) = message.url.as_ref() {
        let rendered = url.as_str();
        if !rendered.is_empty() {
            params.push(("url".to_owned(), rendered.to_owned()));
        }
    }
    if let Some(callback) = message.callback.as_ref() {
        let rendered = callback.as_str();
        if !rendered.is_empty() {
            params.push(("callback".to_owned(), rendered.to_owned()));
        }
    }
    if message.priority != Priority::Normal {
        params.push((Priority::FIELD.to_owned(), message.priority.value().to_string()));
    }
    if let Some(timestamp) = message.timestamp {
        params.push((UnixTimestamp::FIELD.to_owned(), timestamp.value().to_string()));
    }
    if let Some(name) = message.sound.name() {
        params.push((Sound::FIELD.to_owned(), name.to_owned()));
    }

    Ok(params)
}

/// Decode the service's JSON response body into a [`Response`].
///
/// Every field is optional in the body; absent fields keep their zero values.
pub fn decode_message_json_response(json: &str) -> Result<Response, TransportError> {
    let parsed: MessageJsonResponse = serde_json::from_str(json)?;

    Ok(Response {
        status: parsed.status,
        request: parsed.request,
        errors: parsed.errors,
        token: parsed.token,
        user: parsed.user,
        message: parsed.message,
        device: parsed.device,
        title: parsed.title,
        url: parsed.url,
        url_title: parsed.url_title,
        priority: parsed.priority,
        timestamp: parsed.timestamp,
        sound: parsed.sound,
    })
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::domain::{TOKEN_CHARS, USER_KEY_CHARS};

    use super::*;

    fn valid_message() -> Message {
        Message::new("a".repeat(TOKEN_CHARS), "u".repeat(USER_KEY_CHARS), "Message")
    }

    #[test]
    fn encode_minimal_message_emits_only_the_mandatory_fields() {
        let msg = valid_message();
        let params = encode_message_form(&msg).unwrap();

        assert_eq!(
            params,
            vec![
                ("token".to_owned(), "a".repeat(TOKEN_CHARS)),
                ("user".to_owned(), "u".repeat(USER_KEY_CHARS)),
                ("message".to_owned(), "Message".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_full_message_emits_every_populated_field() {
        let mut msg = valid_message();
        msg.device = "Device".to_owned();
        msg.title = "Title".to_owned();
        msg.url = Some(Url::parse("http://www.example.com/page").unwrap());
        msg.url_title = "Url_Title".to_owned();
        msg.callback = Some(Url::parse("https://example.com/receipt").unwrap());
        msg.priority = Priority::High;
        msg.timestamp = Some(UnixTimestamp::new(60));
        msg.sound = Sound::Cosmic;

        let params = encode_message_form(&msg).unwrap();

        assert_eq!(
            params,
            vec![
                ("token".to_owned(), "a".repeat(TOKEN_CHARS)),
                ("user".to_owned(), "u".repeat(USER_KEY_CHARS)),
                ("message".to_owned(), "Message".to_owned()),
                ("device".to_owned(), "Device".to_owned()),
                ("title".to_owned(), "Title".to_owned()),
                ("url_title".to_owned(), "Url_Title".to_owned()),
                ("url".to_owned(), "http://www.example.com/page".to_owned()),
                ("callback".to_owned(), "https://example.com/receipt".to_owned()),
                ("priority".to_owned(), "1".to_owned()),
                ("timestamp".to_owned(), "60".to_owned()),
                ("sound".to_owned(), "cosmic".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_omits_priority_at_normal_and_sound_at_default() {
        let mut msg = valid_message();
        msg.priority = Priority::Normal;
        msg.sound = Sound::Default;

        let params = encode_message_form(&msg).unwrap();
        assert!(!params.iter().any(|(k, _)| k == "priority"));
        assert!(!params.iter().any(|(k, _)| k == "sound"));
    }

    #[test]
    fn encode_emits_negative_priority_values() {
        let mut msg = valid_message();
        msg.priority = Priority::Lowest;
        let params = encode_message_form(&msg).unwrap();
        assert!(params.contains(&("priority".to_owned(), "-2".to_owned())));
    }

    #[test]
    fn encode_short_circuits_on_the_validator_error() {
        let mut msg = valid_message();
        msg.token = String::new();
        assert_eq!(
            encode_message_form(&msg),
            Err(ValidationError::Empty { field: "token" })
        );
    }

    #[test]
    fn encode_is_idempotent() {
        let mut msg = valid_message();
        msg.title = "Title".to_owned();
        msg.sound = Sound::Siren;

        let first = encode_message_form(&msg).unwrap();
        let second = encode_message_form(&msg).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn decode_minimal_body_leaves_absent_fields_at_zero() {
        let resp =
            decode_message_json_response(r#"{"status":1,"request":"abc","errors":[]}"#).unwrap();
        assert_eq!(resp.status, 1);
        assert_eq!(resp.request, "abc");
        assert!(resp.errors.is_empty());
        assert_eq!(resp.token, "");
        assert_eq!(resp.user, "");
        assert_eq!(resp.priority, "");
        assert!(resp.is_success());
    }

    #[test]
    fn decode_error_body_preserves_errors_and_echoed_fields() {
        let json = r#"
        {
          "status": 0,
          "request": "648d2c12-0e8b-42e5-b0c4-8f5c61b7f1c6",
          "errors": ["user identifier is invalid"],
          "user": "invalid",
          "message": "Message"
        }
        "#;

        let resp = decode_message_json_response(json).unwrap();
        assert_eq!(resp.status, 0);
        assert_eq!(resp.errors, vec!["user identifier is invalid".to_owned()]);
        assert_eq!(resp.user, "invalid");
        assert_eq!(resp.message, "Message");
        assert!(!resp.is_success());
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let resp =
            decode_message_json_response(r#"{"status":1,"request":"abc","receipt":"r1"}"#).unwrap();
        assert_eq!(resp.status, 1);
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode_message_json_response("{ not json }").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
