use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("event has no `Records` array")]
    MissingRecords,

    #[error("record {index} is malformed: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("record {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index} has invalid base64 data: {source}")]
    InvalidBase64 {
        index: usize,
        #[source]
        source: base64::DecodeError,
    },

    #[error("failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),
}
