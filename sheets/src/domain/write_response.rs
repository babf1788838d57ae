use serde::Deserialize;

/// Response of a write (append or update) call. The web app always answers
/// with HTTP 200; success or failure is carried in `status`.
#[derive(Debug, Clone, Deserialize)]
pub struct WriteResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl WriteResponse {
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}
