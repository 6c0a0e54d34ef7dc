use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdfError {
    #[error("XHTML parse error: {0}")]
    Xhtml(#[from] roxmltree::Error),

    #[error("JSON content tree error: {0}")]
    Json(#[from] serde_json::Error),
}
