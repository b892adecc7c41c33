//! Error types surfaced by the lowering pass.

use thiserror::Error;

use crate::parse_util::ParseSourceSpan;

pub type Result<T> = std::result::Result<T, TransformError>;

/// Fatal lowering failures. A failed lowering call produces no output; the
/// host pipeline is responsible for turning the error into a diagnostic.
#[derive(Debug, Clone, Error)]
pub enum TransformError {
    /// A markup child handed over by the parser frontend has a syntactic
    /// kind outside the known set. The whole lowering call aborts.
    #[error("unsupported markup child kind `{kind}`")]
    UnsupportedChildKind {
        kind: String,
        span: Option<ParseSourceSpan>,
    },
}

/// Failures while printing an output tree as JavaScript source.
#[derive(Debug, Clone, Error)]
pub enum EmitError {
    /// A markup node survived lowering and reached the printer.
    #[error("cannot emit un-lowered markup")]
    UnloweredMarkup,
}
