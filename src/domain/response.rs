#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Response returned by the Pushover message endpoint.
///
/// Populated solely by deserializing the service's JSON body; every field the
/// body omits keeps its zero value. The service echoes back rejected request
/// fields alongside the error strings.
pub struct Response {
    pub status: i32,
    pub request: String,
    pub errors: Vec<String>,

    pub token: String,
    pub user: String,
    pub message: String,
    pub device: String,
    pub title: String,
    pub url: String,
    pub url_title: String,
    pub priority: String,
    pub timestamp: String,
    pub sound: String,
}

impl Response {
    /// Whether the service accepted the message (`status == 1`).
    pub fn is_success(&self) -> bool {
        self.status == 1
    }
}
