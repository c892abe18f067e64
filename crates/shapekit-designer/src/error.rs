//! Error types for the designer crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DesignError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML writing error: {0}")]
    XmlWrite(String),

    /// The document is well-formed XML but does not describe a design.
    #[error("Malformed document: {reason}")]
    MalformedDocument { reason: String },

    /// An element names a shape variant the registry does not know.
    #[error("Unknown shape tag '{tag}'")]
    UnknownVariantTag { tag: String },

    #[error(transparent)]
    Core(#[from] shapekit_core::Error),
}

impl DesignError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the document content rather than I/O.
    pub fn is_document_error(&self) -> bool {
        match self {
            Self::Xml(_) | Self::MalformedDocument { .. } | Self::UnknownVariantTag { .. } => true,
            Self::Core(err) => err.is_color_error(),
            Self::Io(_) | Self::XmlWrite(_) => false,
        }
    }
}

pub type DesignResult<T> = Result<T, DesignError>;
