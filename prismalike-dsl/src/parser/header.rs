//! Block headers (`datasource db {`) in front of a body

use super::ast::BlockHeader;
use crate::lexer::SourceCursor;

/// Step over blank lines, comments and a `kind name {` header line.
///
/// `///` lines above the header become its comments and the last word before
/// the `{` its name. The cursor is left at the start of the body, so later
/// diagnostics keep their position in the whole text. Without a header the
/// cursor is put back where it was and `None` is returned.
pub fn skip_header(cursor: &mut SourceCursor<'_>) -> Option<BlockHeader> {
    let start = cursor.position();
    let mut comments = Vec::new();

    while !cursor.at_end() {
        let trimmed = cursor.skip_line().trim();

        if let Some(doc) = trimmed.strip_prefix("///") {
            comments.push(doc.trim().to_string());
        } else if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        } else if let Some(head) = trimmed.strip_suffix('{') {
            let name = head.split_whitespace().last().unwrap_or_default();
            return Some(BlockHeader::new(name).with_comments(comments));
        } else {
            break;
        }
    }

    cursor.restore(start);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::block::parse_block;
    use crate::parser::diagnostic::{EnvProblem, Problem};

    #[test]
    fn test_header_with_doc_comments() {
        let mut cursor = SourceCursor::new("\n/// Primary\n// note\ndatasource db {\n  a = 1\n}\n");
        let header = skip_header(&mut cursor);
        assert_eq!(
            header,
            Some(BlockHeader::new("db").with_comments(vec!["Primary".to_string()]))
        );
        assert_eq!((cursor.line(), cursor.column()), (5, 1));
    }

    #[test]
    fn test_no_header_restores_cursor() {
        let mut cursor = SourceCursor::new("\na = 1\n}\n");
        assert_eq!(skip_header(&mut cursor), None);
        assert!(cursor.at_start());
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
    }

    #[test]
    fn test_body_diagnostics_keep_file_positions() {
        let source = "/// Primary\ndatasource db {\n  provider = \"x\"\n  url = env(X)\n}\n";
        let mut cursor = SourceCursor::new(source);
        let header = skip_header(&mut cursor).unwrap_or_default();

        let result = parse_block(&mut cursor, &header);

        let diagnostic = &result.diagnostics()[0];
        assert_eq!(diagnostic.problem, Problem::Env(EnvProblem::UnexpectedSymbol('X')));
        assert_eq!((diagnostic.line, diagnostic.column), (4, 13));
    }
}
