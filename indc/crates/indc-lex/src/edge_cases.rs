//! Edge case tests for indc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, Lexer, Token, TokenKind};
    use indc_util::{Span, StringTable};

    fn lex_all(source: &str) -> (Vec<Token>, StringTable) {
        let mut strings = StringTable::new();
        let tokens = tokenize(source.as_bytes(), &mut strings).unwrap();
        (tokens, strings)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).0.into_iter().map(|t| t.kind).collect()
    }

    fn brace_balance(tokens: &[Token]) -> i64 {
        tokens.iter().fold(0, |depth, token| match token.kind {
            TokenKind::LBrace => depth + 1,
            TokenKind::RBrace => depth - 1,
            _ => depth,
        })
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_edge_only_newlines() {
        assert_eq!(kinds("\n\n\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_edge_only_spaces() {
        assert_eq!(kinds("   "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_edge_single_char_ident() {
        let (tokens, mut strings) = lex_all("x");
        assert_eq!(tokens[0].symbol, Some(strings.intern_str("x")));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let (tokens, strings) = lex_all(&format!("var {name}"));
        let symbol = tokens[1].symbol.unwrap();
        assert_eq!(strings.resolve(symbol).unwrap(), name.as_bytes());
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        assert_eq!(
            kinds("fn var import"),
            vec![TokenKind::Fn, TokenKind::Var, TokenKind::Import, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_integer_types() {
        use TokenKind::*;
        assert_eq!(
            kinds("i8 i16 i32 i64 u8 u16 u32 u64"),
            vec![I8, I16, I32, I64, U8, U16, U32, U64, Eof]
        );
    }

    #[test]
    fn test_edge_deep_nesting_closes_everything() {
        let mut source = String::new();
        for depth in 0..20 {
            source.push_str(&" ".repeat(depth * 4));
            source.push_str("a:\n");
        }
        let (tokens, _) = lex_all(&source);
        assert_eq!(brace_balance(&tokens), 0);
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::LBrace).count(),
            19
        );
    }

    #[test]
    fn test_edge_dedent_across_blank_lines() {
        use TokenKind::*;
        assert_eq!(
            kinds("a:\n    b\n\n\nc"),
            vec![Identifier, Colon, LBrace, Identifier, Semicolon, RBrace, Identifier, Semicolon, Eof]
        );
    }

    #[test]
    fn test_edge_crlf_is_rejected() {
        let mut strings = StringTable::new();
        let err = tokenize(b"a\r\nb", &mut strings).unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                byte: b'\r',
                span: Span::new(1, 2, 1),
            }
        );
    }

    #[test]
    fn test_edge_error_line_number() {
        let mut strings = StringTable::new();
        let err = tokenize(b"a\nb\n  $", &mut strings).unwrap_err();
        assert_eq!(err.span().line, 3);
        assert_eq!(err.span().start, 6);
    }

    #[test]
    fn test_edge_non_ascii_byte() {
        let mut strings = StringTable::new();
        let err = tokenize("\u{3bb}".as_bytes(), &mut strings).unwrap_err();
        assert!(matches!(
            err,
            LexError::UnexpectedCharacter { byte: 0xce, .. }
        ));
    }

    #[test]
    fn test_edge_string_across_lines_then_newline() {
        use TokenKind::*;
        let (tokens, _) = lex_all("\"a\nb\"\nx");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![String, Identifier, Semicolon, Eof]);
        assert_eq!(tokens[1].span.line, 3);
    }

    #[test]
    fn test_edge_semicolon_source_and_synthetic() {
        use TokenKind::*;
        assert_eq!(kinds("a;\nb"), vec![Identifier, Semicolon, Identifier, Semicolon, Eof]);
    }

    #[test]
    fn test_edge_source_braces_do_not_change_level() {
        use TokenKind::*;
        assert_eq!(
            kinds("{\n}\n"),
            vec![LBrace, RBrace, Eof]
        );
    }

    #[test]
    fn test_edge_handles_are_offsets() {
        let (tokens, strings) = lex_all("zz");
        let symbol = tokens[0].symbol.unwrap();
        assert_eq!(strings.resolve(symbol).unwrap(), b"zz");
        assert!(strings.resolve_terminated(symbol).unwrap().ends_with(&[0]));
    }

    #[test]
    fn test_edge_advance_after_error_is_eof() {
        let mut strings = StringTable::new();
        let mut lexer = Lexer::new(b"\"open", &mut strings);
        assert!(lexer.advance().is_err());
        assert!(lexer.advance().unwrap().is_eof());
    }

    #[test]
    fn test_edge_eof_span_at_end() {
        let (tokens, _) = lex_all("ab\n");
        let eof = tokens.last().unwrap();
        assert_eq!(eof.span, Span::new(3, 3, 2));
    }
}
