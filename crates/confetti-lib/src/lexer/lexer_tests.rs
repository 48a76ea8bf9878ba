use indoc::indoc;
use rowan::TextRange;

use super::{TokenKind, dump_tokens, tokenize, tokenize_bytes};
use crate::error::ErrorKind;
use crate::extensions::{Extension, Extensions};

fn snapshot(input: &str) -> String {
    snapshot_with(input, &Extensions::new())
}

fn snapshot_with(input: &str, extensions: &Extensions) -> String {
    let tokens = tokenize(input, extensions).expect("input should tokenize");
    dump_tokens(input, &tokens, false)
}

fn snapshot_raw(input: &str) -> String {
    let tokens = tokenize(input, &Extensions::new()).expect("input should tokenize");
    dump_tokens(input, &tokens, true)
}

fn error(input: &str) -> ErrorKind {
    error_with(input, &Extensions::new())
}

fn error_with(input: &str, extensions: &Extensions) -> ErrorKind {
    tokenize(input, extensions)
        .expect_err("input should fail to tokenize")
        .kind
}

fn contents(input: &str) -> Vec<String> {
    tokenize(input, &Extensions::new())
        .expect("input should tokenize")
        .into_iter()
        .filter(|t| t.kind.is_argument())
        .map(|t| t.content)
        .collect()
}

fn round_trip(input: &str, extensions: &Extensions) -> String {
    tokenize(input, extensions)
        .expect("input should tokenize")
        .iter()
        .map(|t| t.text(input))
        .collect()
}

#[test]
fn unquoted_arguments() {
    insta::assert_snapshot!(snapshot("foo bar baz"), @r#"
    UnquotedArgument "foo"
    UnquotedArgument "bar"
    UnquotedArgument "baz"
    "#);
}

#[test]
fn structure_with_trivia() {
    insta::assert_snapshot!(snapshot_raw("foo {\n  bar;\n} # done"), @r##"
    UnquotedArgument "foo"
    Whitespace " "
    BraceOpen "{"
    Newline "\n"
    Whitespace " "
    Whitespace " "
    UnquotedArgument "bar"
    Semicolon ";"
    Newline "\n"
    BraceClose "}"
    Whitespace " "
    Comment "# done"
    "##);
}

#[test]
fn quoted_with_escaped_quote() {
    insta::assert_snapshot!(snapshot(r#""a\"b" plain\;x"#), @r#"
    QuotedArgument "\"a\\\"b\"" => "a\"b"
    UnquotedArgument "plain\\;x" => "plain;x"
    "#);
}

#[test]
fn reserved_characters_split_unquoted_arguments() {
    insta::assert_snapshot!(snapshot("a;b{c}d#e"), @r#"
    UnquotedArgument "a"
    Semicolon ";"
    UnquotedArgument "b"
    BraceOpen "{"
    UnquotedArgument "c"
    BraceClose "}"
    UnquotedArgument "d"
    "#);
}

#[test]
fn quote_ends_unquoted_argument() {
    assert_eq!(contents(r#"key"value""#), ["key", "value"]);
}

#[test]
fn comment_content_excludes_delimiter() {
    let tokens = tokenize("# hello", &Extensions::new()).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].content, " hello");
}

#[test]
fn escapes_resolve_to_literal_scalars() {
    assert_eq!(contents(r#"a\#b \{x\} "q\\" "\é""#), ["a#b", "{x}", "q\\", "é"]);
}

#[test]
fn quoted_line_join() {
    let input = "\"one \\\ntwo\"";
    let tokens = tokenize(input, &Extensions::new()).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::QuotedArgument);
    assert_eq!(tokens[0].content, "one two");
    assert_eq!(tokens[0].text(input), input);
}

#[test]
fn quoted_line_join_crlf() {
    assert_eq!(contents("\"a\\\r\nb\""), ["ab"]);
}

#[test]
fn empty_quoted_arguments() {
    assert_eq!(contents(r#""" """""""#), ["", ""]);
}

#[test]
fn triple_quoted_spans_lines() {
    let input = indoc! {r#"
        """first
        second"""
    "#};
    assert_eq!(contents(input), ["first\nsecond"]);
}

#[test]
fn triple_quoted_inner_quotes() {
    assert_eq!(contents(r#""""a ""b"" c""""#), [r#"a ""b"" c"#]);
    assert_eq!(contents(r#""""say "hi" """"#), [r#"say "hi" "#]);
}

#[test]
fn triple_quoted_escaped_quote() {
    assert_eq!(contents(r#""""a\"""""#), [r#"a""#]);
}

#[test]
fn line_continuation() {
    insta::assert_snapshot!(snapshot_raw("foo \\\n bar"), @r#"
    UnquotedArgument "foo"
    Whitespace " "
    LineContinuation "\\\n"
    Whitespace " "
    UnquotedArgument "bar"
    "#);
}

#[test]
fn line_continuation_crlf_is_one_token() {
    let input = "foo \\\r\nbar";
    let tokens = tokenize(input, &Extensions::new()).unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::UnquotedArgument,
            TokenKind::Whitespace,
            TokenKind::LineContinuation,
            TokenKind::UnquotedArgument,
        ]
    );
    assert_eq!(tokens[2].text(input), "\\\r\n");
    assert_eq!(tokens[2].content, "");
}

#[test]
fn c_style_comments() {
    let exts = Extensions::new().with(Extension::CStyleComments);
    let input = "foo // line\nbar /* block\n */ baz";
    let tokens = tokenize(input, &exts).unwrap();
    let comments: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .map(|t| (t.content.as_str(), t.text(input)))
        .collect();
    assert_eq!(
        comments,
        [(" line", "// line"), (" block\n ", "/* block\n */")]
    );
    insta::assert_snapshot!(snapshot_with(input, &exts), @r#"
    UnquotedArgument "foo"
    UnquotedArgument "bar"
    UnquotedArgument "baz"
    "#);
}

#[test]
fn slashes_are_arguments_without_extension() {
    assert_eq!(contents("a // b /* c */"), ["a", "//", "b", "/*", "c", "*/"]);
}

#[test]
fn unterminated_block_comment() {
    let exts = Extensions::new().with(Extension::CStyleComments);
    assert_eq!(error_with("a /* never", &exts), ErrorKind::UnterminatedComment);
}

#[test]
fn expression_arguments() {
    let exts = Extensions::new().with(Extension::ExpressionArguments);
    insta::assert_snapshot!(snapshot_with("if (x > (y + 1)) then", &exts), @r#"
    UnquotedArgument "if"
    UnquotedArgument "(x > (y + 1))" => "x > (y + 1)"
    UnquotedArgument "then"
    "#);
}

#[test]
fn open_paren_is_reserved_with_expressions() {
    let exts = Extensions::new().with(Extension::ExpressionArguments);
    insta::assert_snapshot!(snapshot_with("call(arg)", &exts), @r#"
    UnquotedArgument "call"
    UnquotedArgument "(arg)" => "arg"
    "#);
    assert_eq!(contents("call(arg)"), ["call(arg)"]);
}

#[test]
fn incomplete_expression() {
    let exts = Extensions::new().with(Extension::ExpressionArguments);
    assert_eq!(error_with("(a\nb)", &exts), ErrorKind::IncompleteExpression);
    assert_eq!(error_with("((a)", &exts), ErrorKind::IncompleteExpression);
}

#[test]
fn punctuator_arguments() {
    let exts = Extensions::new().with_punctuators(["=", "=="]);
    insta::assert_snapshot!(snapshot_with("a==b=c", &exts), @r#"
    UnquotedArgument "a"
    UnquotedArgument "=="
    UnquotedArgument "b"
    UnquotedArgument "="
    UnquotedArgument "c"
    "#);
}

#[test]
fn punctuators_are_case_sensitive() {
    let exts = Extensions::new().with_punctuators(["AND"]);
    insta::assert_snapshot!(snapshot_with("xANDy and", &exts), @r#"
    UnquotedArgument "x"
    UnquotedArgument "AND"
    UnquotedArgument "y"
    UnquotedArgument "and"
    "#);
}

#[test]
fn punctuators_take_no_escapes() {
    let exts = Extensions::new().with_punctuators([r"\\"]);
    let tokens = tokenize(r"a\\b", &exts).unwrap();
    let contents: Vec<_> = tokens.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, ["a", r"\\", "b"]);
}

#[test]
fn punctuator_with_forbidden_scalar_is_illegal() {
    let exts = Extensions::new().with_punctuators(["=\u{7}"]);
    let err = tokenize("a =\u{7} b", &exts).unwrap_err();
    assert_eq!(err.kind, ErrorKind::IllegalCharacter(0x07));
    assert_eq!(err.span, TextRange::new(3.into(), 4.into()));
}

#[test]
fn markers() {
    let input = "\u{FEFF}foo\u{1A}";
    let tokens = tokenize(input, &Extensions::new()).unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::LeadingMarker,
            TokenKind::UnquotedArgument,
            TokenKind::TrailingMarker,
        ]
    );
    assert_eq!(tokens[0].span, TextRange::new(0.into(), 3.into()));
    assert_eq!(tokens[2].span, TextRange::new(6.into(), 7.into()));
}

#[test]
fn reversed_byte_order_mark() {
    let tokens = tokenize("\u{FFFE}a", &Extensions::new()).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::LeadingMarker);
    assert_eq!(tokens[0].content, "\u{FFFE}");
}

#[test]
fn substitute_only_stripped_at_end() {
    assert_eq!(error("a\u{1A}b"), ErrorKind::IllegalCharacter(0x1A));
}

#[test]
fn lossless_round_trip() {
    let exts = Extensions::new()
        .with(Extension::CStyleComments)
        .with(Extension::ExpressionArguments)
        .with_punctuators(["=>"]);
    let input = indoc! {r#"
        # heading
        server "main host" { // trailing
            listen 80 \
                443;
            when (a (b)) => """multi
        "line" """
            path "C:\\dir \
        continued" /* note */
        }
    "#};
    let input = format!("\u{FEFF}{input}\u{1A}");
    assert_eq!(round_trip(&input, &exts), input);
}

#[test]
fn spans_are_contiguous() {
    let input = "a \"b c\"\n{ d }";
    let tokens = tokenize(input, &Extensions::new()).unwrap();
    let mut expected_start = 0u32;
    for token in &tokens {
        assert_eq!(u32::from(token.span.start()), expected_start);
        expected_start = token.span.end().into();
    }
    assert_eq!(expected_start as usize, input.len());
}

#[test]
fn unclosed_quoted() {
    assert_eq!(error(r#""abc"#), ErrorKind::UnclosedQuoted);
    assert_eq!(error("\"ab\ncd\""), ErrorKind::UnclosedQuoted);
    assert_eq!(error(r#""""abc"""#), ErrorKind::UnclosedQuoted);
}

#[test]
fn escape_errors() {
    assert_eq!(error(r"ab\"), ErrorKind::IllegalEscape);
    assert_eq!(error(r"ab\ c"), ErrorKind::IllegalEscape);
    assert_eq!(error("ab\\\ncd"), ErrorKind::IllegalEscape);
    assert_eq!(error(r#""ab\"#), ErrorKind::IncompleteEscape);
    assert_eq!(error(r#""a\ b""#), ErrorKind::IllegalEscape);
    assert_eq!(error("\"\"\"a\\\nb\"\"\""), ErrorKind::IncompleteEscape);
    assert_eq!(error(r#""""a\ b""""#), ErrorKind::IllegalEscape);
    assert_eq!(error(r#""""a\"#), ErrorKind::IncompleteEscape);
    assert_eq!(error("a\\\u{7}"), ErrorKind::IllegalEscape);
}

#[test]
fn illegal_characters() {
    assert_eq!(error("a\u{1}b"), ErrorKind::IllegalCharacter(0x01));
    assert_eq!(error("# bell \u{7}"), ErrorKind::IllegalCharacter(0x07));
    assert_eq!(error("\"\u{7F}\""), ErrorKind::IllegalCharacter(0x7F));
    assert_eq!(error("\u{40000}"), ErrorKind::IllegalCharacter(0x40000));
    assert_eq!(error("ok \u{1B}"), ErrorKind::IllegalCharacter(0x1B));
}

#[test]
fn illegal_character_span() {
    let err = tokenize("ab \u{2}", &Extensions::new()).unwrap_err();
    assert_eq!(err.span, TextRange::new(3.into(), 4.into()));
    assert_eq!(err.to_string(), "illegal character U+0002");
}

#[test]
fn malformed_text() {
    let err = tokenize_bytes(b"foo \xff bar", &Extensions::new()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedText);
    assert_eq!(err.span, TextRange::new(4.into(), 5.into()));
}

#[test]
fn empty_input() {
    assert!(tokenize("", &Extensions::new()).unwrap().is_empty());
}
