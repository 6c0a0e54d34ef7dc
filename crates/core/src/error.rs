use thiserror::Error;

/// Errors raised while decoding serialized rich content.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Expected a 'doc' node at the root of section '{section}', found '{found}'")]
    UnexpectedRoot { section: String, found: String },

    #[error("Invalid financial report block: {0}")]
    FinancialReport(#[source] serde_json::Error),
}
