use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FinderError {
    #[error("Entrez request failed: {0}")]
    EntrezHttp(String),

    #[error("Entrez returned status {status}: {message}")]
    EntrezStatus { status: u16, message: String },

    #[error("failed to parse Entrez XML: {0}")]
    XmlParse(String),

    #[error("Assembly cross-reference carries no id")]
    MissingXrefId,

    #[error("invalid client configuration: {0}")]
    ClientConfig(String),
}
