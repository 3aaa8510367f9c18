use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a readable DOCX archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("malformed XML in {part}: {source}")]
    Xml {
        part: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("missing required part: {0}")]
    MissingPart(String),

    #[error("invalid DOCX: {0}")]
    InvalidDocx(String),

    #[error("invalid color literal: {0:?}")]
    InvalidColor(String),

    #[error("invalid length literal: {0:?}")]
    InvalidLength(String),
}

impl Error {
    pub(crate) fn xml(part: &str, source: roxmltree::Error) -> Self {
        Error::Xml {
            part: part.to_string(),
            source,
        }
    }
}
