use const_format::formatcp;

pub const URYB: &str = "uryb";
pub const URYB_EXT: &str = ".uryb";
pub const USAGE: &str = formatcp!("usage: {URYB} [--tokens | --json] <file{URYB_EXT}>");

/// Deepest nesting of expressions, `and`/`or` chains and blocks the parser
/// accepts.
pub const MAX_NESTING_DEPTH: usize = 128;
