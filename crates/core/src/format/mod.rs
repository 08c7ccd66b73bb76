//! Canonical formatting of generated Go source

pub mod printer;

use crate::{
    error::{Error, Result},
    parser::GoParser,
    types::UNRECOGNISED,
};
pub use printer::Printer;

/// Preferred stand-in identifier for [`UNRECOGNISED`] while the source is
/// parsed. Same width as the sentinel so field alignment survives the swap.
const SENTINEL_PLACEHOLDER: &str = "_unrecognised_";

/// Swaps [`UNRECOGNISED`] for an identifier that does not already occur in
/// the source, so restoring never touches user identifiers.
pub(crate) struct Sentinel {
    placeholder: String,
}

impl Sentinel {
    pub(crate) fn for_source(source: &str) -> Self {
        let placeholder = std::iter::once(SENTINEL_PLACEHOLDER.to_string())
            .chain((0u32..).map(|n| format!("_unrecog{n:05}_")))
            .find(|candidate| !source.contains(candidate.as_str()))
            .unwrap_or_else(|| SENTINEL_PLACEHOLDER.to_string());
        Self { placeholder }
    }

    pub(crate) fn protect(&self, source: &str) -> String {
        source.replace(UNRECOGNISED, &self.placeholder)
    }

    pub(crate) fn restore(&self, source: &str) -> String {
        source.replace(&self.placeholder, UNRECOGNISED)
    }
}

/// Parse `source` as Go and print it canonically.
///
/// Fails with [`Error::FormatError`] when the input is not valid Go, which
/// for generated code means the generator itself is broken. Formatting is
/// idempotent.
pub fn source(source: &str) -> Result<String> {
    let sentinel = Sentinel::for_source(source);
    let protected = sentinel.protect(source);
    let mut parser = GoParser::new()?;
    let tree = parser
        .parse_strict("generated source", &protected)
        .map_err(|e| match e {
            Error::SyntaxError { .. } => Error::FormatError(e.to_string()),
            other => other,
        })?;

    let printed = Printer::new(&protected).print(&tree.root_node());
    Ok(sentinel.restore(&printed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalises_generated_layout() {
        let raw = "package ex\nimport (\n \"fmt\"\nstr \"strings\"\n)\ntype mockScanner struct {\nmScan func(s  fmt.Scanner) (int, error)\nmX func( a string) ()\n}\nfunc (sm mockScanner) Scan(s fmt.Scanner) (int, error) {\nreturn sm.mScan(s)\n}\n";
        let expected = "package ex\n\nimport (\n\t\"fmt\"\n\tstr \"strings\"\n)\n\ntype mockScanner struct {\n\tmScan func(s fmt.Scanner) (int, error)\n\tmX    func(a string)\n}\n\nfunc (sm mockScanner) Scan(s fmt.Scanner) (int, error) {\n\treturn sm.mScan(s)\n}\n";
        assert_eq!(source(raw).unwrap(), expected);
    }

    #[test]
    fn test_single_unnamed_result_drops_parentheses() {
        let raw = "package p\nfunc (wm mockWriter) Write(p []byte) (error) {\nreturn wm.mWrite(p)\n}\n";
        let formatted = source(raw).unwrap();
        assert!(formatted.contains("func (wm mockWriter) Write(p []byte) error {\n"));
    }

    #[test]
    fn test_named_results_keep_parentheses() {
        let raw = "package p\ntype mockR struct {\nmRead func(p []byte) (n int, err error)\n}\n";
        let formatted = source(raw).unwrap();
        assert!(formatted.contains("\tmRead func(p []byte) (n int, err error)\n"));
    }

    #[test]
    fn test_empty_struct_and_imports() {
        let raw = "package p\nimport (\n)\ntype mockAny struct {\n}\n";
        assert_eq!(
            source(raw).unwrap(),
            "package p\n\nimport ()\n\ntype mockAny struct{}\n"
        );
    }

    #[test]
    fn test_statement_without_return() {
        let raw = "package p\nfunc (sm mockSink) Put(b byte) () {\nsm.mPut(b)\n}\n";
        assert_eq!(
            source(raw).unwrap(),
            "package p\n\nfunc (sm mockSink) Put(b byte) {\n\tsm.mPut(b)\n}\n"
        );
    }

    #[test]
    fn test_sentinel_survives_formatting() {
        let raw = "package p\ntype mockOdd struct {\nmF func(c <unrecognised>) ()\n}\n";
        let formatted = source(raw).unwrap();
        assert!(formatted.contains("\tmF func(c <unrecognised>)\n"));
    }

    #[test]
    fn test_user_type_named_like_the_placeholder_is_kept() {
        let raw = "package p\ntype mockW struct {\nmW func(p _unrecognised_) ()\nmX func(c <unrecognised>) ()\n}\n";
        let formatted = source(raw).unwrap();
        assert!(formatted.contains("\tmW func(p _unrecognised_)\n"));
        assert!(formatted.contains("\tmX func(c <unrecognised>)\n"));
    }

    #[test]
    fn test_placeholder_has_sentinel_width() {
        let sentinel = Sentinel::for_source("type _unrecognised_ int");
        assert_eq!(sentinel.placeholder.len(), UNRECOGNISED.len());
        assert_ne!(sentinel.placeholder, SENTINEL_PLACEHOLDER);
        assert_eq!(
            Sentinel::for_source("package p").placeholder.len(),
            UNRECOGNISED.len()
        );
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let raw = "package p\nimport (\n \"io\"\n)\ntype mockRW struct {\nmRead func(p []byte) (n int, err error)\nmClose func() (error)\n}\nfunc (rm mockRW) Read(p []byte) (n int, err error) {\nreturn rm.mRead(p)\n}\nfunc (rm mockRW) Close() (error) {\nreturn rm.mClose()\n}\n";
        let once = source(raw).unwrap();
        let twice = source(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_invalid_source_is_a_format_error() {
        let err = source("package p\nfunc (x T) F( {\n").unwrap_err();
        assert!(matches!(err, Error::FormatError(_)), "got {err:?}");
    }

    #[test]
    fn test_adjacent_declarations_of_one_kind_stay_adjacent() {
        let raw = "package p\ntype mockA struct {\nmF func()\n}\nfunc (am mockA) F() {\nam.mF()\n}\nfunc (am mockA) G() {\nam.mG()\n}\n\n\n\nfunc (am mockA) H() {\nam.mH()\n}\n";
        assert_eq!(
            source(raw).unwrap(),
            "package p\n\ntype mockA struct {\n\tmF func()\n}\n\n\
             func (am mockA) F() {\n\tam.mF()\n}\n\
             func (am mockA) G() {\n\tam.mG()\n}\n\n\
             func (am mockA) H() {\n\tam.mH()\n}\n"
        );
    }

    #[test]
    fn test_doc_comment_opens_a_new_section() {
        let raw = "package p\nfunc (am mockA) F() {\nam.mF()\n}\n// G forwards\nfunc (am mockA) G() {\nam.mG()\n}\n";
        assert_eq!(
            source(raw).unwrap(),
            "package p\n\nfunc (am mockA) F() {\n\tam.mF()\n}\n\n\
             // G forwards\nfunc (am mockA) G() {\n\tam.mG()\n}\n"
        );
    }

    #[test]
    fn test_comments_stay_attached() {
        let raw = "package p\n// mockA is generated\ntype mockA struct {\n}\n";
        assert_eq!(
            source(raw).unwrap(),
            "package p\n\n// mockA is generated\ntype mockA struct{}\n"
        );
    }
}
