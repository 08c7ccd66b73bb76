use crate::{
    error::{Error, Result},
    parser::utils::{find_error_node, node_text, node_to_position},
};
use tree_sitter::{Parser, Tree};

/// Longest slice of source quoted back in a syntax error
const SNIPPET_LEN: usize = 40;

pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse `source` without rejecting syntax errors; the tree may contain
    /// `ERROR` nodes.
    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| Error::ParseError("Failed to parse source code".to_string()))
    }

    /// Parse `source` and fail on the first syntax error. `file` is only used
    /// to label the error.
    pub fn parse_strict(&mut self, file: &str, source: &str) -> Result<Tree> {
        let tree = self.parse(source)?;
        if let Some(bad) = find_error_node(tree.root_node()) {
            let position = node_to_position(&bad, true);
            let snippet: String = node_text(&bad, source)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .chars()
                .take(SNIPPET_LEN)
                .collect();
            return Err(Error::SyntaxError {
                file: file.to_string(),
                line: position.line + 1,
                column: position.character + 1,
                snippet,
            });
        }
        Ok(tree)
    }
}
