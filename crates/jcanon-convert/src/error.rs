use jcanon_ast::AstError;
use jcanon_host::HostId;

/// Fatal conversion failures. Every variant means the engine does not
/// understand the host tree's shape and no partial result is usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("unsupported host node kind `{kind}` ({host:?})")]
    UnsupportedKind { kind: String, host: HostId },
    #[error("converting {context} from {host:?} produced no node")]
    MissingResult { context: &'static str, host: HostId },
    #[error("expected {expected} but found `{found}` ({host:?})")]
    UnexpectedShape {
        expected: &'static str,
        found: String,
        host: HostId,
    },
    #[error("nesting deeper than {limit} levels at {host:?}")]
    NestingTooDeep { limit: u32, host: HostId },
    #[error(transparent)]
    Ast(#[from] AstError),
}
