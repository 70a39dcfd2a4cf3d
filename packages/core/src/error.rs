// Типы ошибок
// Единая таксономия для всех трёх фронтендов (web, Android, iOS)

use thiserror::Error;

/// Ошибки ядра. Все терминальны для текущего запроса, ядро не делает retry.
///
/// Каждая ошибка несёт вид + человекочитаемую деталь, чтобы фронтенд мог
/// отрисовать сообщение без знания внутренностей ядра.
#[derive(Error, Debug)]
pub enum StegnoError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Key required: {0}")]
    MissingKey(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Forbidden parameter: {0}")]
    ForbiddenParameter(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Unsupported container: {0}")]
    UnsupportedContainer(String),

    #[error("Empty payload: {0}")]
    EmptyPayload(String),

    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    #[error("External capability failure: {0}")]
    ExternalCapabilityFailure(String),

    #[error("External capability timed out")]
    Timeout,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StegnoError>;

// Для WASM-биндингов
#[cfg(target_arch = "wasm32")]
impl From<StegnoError> for wasm_bindgen::JsValue {
    fn from(error: StegnoError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}
