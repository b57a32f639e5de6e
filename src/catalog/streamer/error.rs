/// Errors that can occur while building records from a catalog stream.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The underlying byte source cannot be opened or read.
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] std::io::Error),

    /// Raw XML syntax error reported by the event source.
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// UTF-8 decoding error in a name or attribute value.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A start or end tag's canonical name is not in the vocabulary.
    #[error("unknown tag <{0}>")]
    UnknownTag(String),

    /// The event stream ended while the named element was still open.
    #[error("premature end of stream inside <{0}>")]
    PrematureEndOfStream(String),

    /// A leaf field's text cannot be coerced to its target type.
    #[error("malformed content: {0}")]
    MalformedContent(String),
}
