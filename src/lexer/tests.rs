use super::*;
use crate::span::Span;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

fn lexemes(input: &str) -> Vec<String> {
    tokenize(input).into_iter().map(|t| t.lexeme).collect()
}

#[test]
fn empty_input_yields_exactly_one_eof() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].span, Span { line: 1, column: 1 });
}

#[test]
fn eof_is_always_last_and_never_earlier() {
    let tokens = tokenize("::gate Door:\ninit:\n• open\n::end");

    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    let earlier_eofs = tokens[..tokens.len() - 1]
        .iter()
        .filter(|t| t.kind == TokenKind::Eof)
        .count();
    assert_eq!(earlier_eofs, 0);
}

#[test]
fn gate_marker_always_classifies_as_gate() {
    assert_eq!(kinds("::gate"), vec![TokenKind::Gate, TokenKind::Eof]);
}

#[test]
fn all_keywords_classify() {
    assert_eq!(
        kinds("::gate ::end ::fuse when init"),
        vec![
            TokenKind::Gate,
            TokenKind::End,
            TokenKind::Fuse,
            TokenKind::When,
            TokenKind::Init,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unknown_marker_degrades_to_identifier() {
    assert_eq!(kinds("::bogus"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn leading_whitespace_is_skipped_not_tokenized() {
    assert_eq!(kinds("   a"), kinds("a"));
    assert_eq!(lexemes("   a"), lexemes("a"));
}

#[test]
fn unrecognized_character_is_silently_dropped() {
    // The `#` produces no token and raises no error.
    assert_eq!(
        kinds("a # b"),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(lexemes("a # b"), vec!["a", "b", ""]);
}

#[test]
fn newlines_are_not_folded() {
    assert_eq!(
        kinds("a\n\nb"),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn number_collects_the_maximal_digit_run() {
    let tokens = tokenize("1200");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "1200");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn dotted_action_name_is_one_identifier() {
    let tokens = tokenize("load.env");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "load.env");
}

#[test]
fn lone_colon_after_name_is_colon_punctuation() {
    assert_eq!(
        kinds("Door:"),
        vec![TokenKind::Identifier, TokenKind::Colon, TokenKind::Eof]
    );
    assert_eq!(lexemes("Door:")[0], "Door");
}

#[test]
fn init_keyword_survives_a_trailing_colon() {
    assert_eq!(
        kinds("init:"),
        vec![TokenKind::Init, TokenKind::Colon, TokenKind::Eof]
    );
}

#[test]
fn punctuation_tokens() {
    assert_eq!(
        kinds("• ; —"),
        vec![
            TokenKind::Bullet,
            TokenKind::Semi,
            TokenKind::Dash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn single_operators() {
    for op in ["=", "@", "%"] {
        let tokens = tokenize(op);
        assert_eq!(tokens[0].kind, TokenKind::Op);
        assert_eq!(tokens[0].lexeme, op);
    }
}

#[test]
fn operators_fold_a_trailing_equals() {
    assert_eq!(lexemes("==")[0], "==");
    assert_eq!(lexemes("@=")[0], "@=");
    assert_eq!(lexemes("%=")[0], "%=");

    let tokens = tokenize("==");
    assert_eq!(tokens[0].kind, TokenKind::Op);
    assert_eq!(tokens.len(), 2);
}

#[test]
fn assignment_with_spaces_is_three_tokens() {
    assert_eq!(
        kinds("a = b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Op,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn line_and_column_are_one_based_and_track_newlines() {
    let tokens = tokenize("::gate Door:\n• x");

    assert_eq!(tokens[0].span, Span { line: 1, column: 1 }); // ::gate
    assert_eq!(tokens[1].span, Span { line: 1, column: 8 }); // Door
    assert_eq!(
        tokens[2].span,
        Span {
            line: 1,
            column: 12
        }
    ); // :
    assert_eq!(
        tokens[3].span,
        Span {
            line: 1,
            column: 13
        }
    ); // newline
    assert_eq!(tokens[4].span, Span { line: 2, column: 1 }); // •
    assert_eq!(tokens[5].span, Span { line: 2, column: 3 }); // x
}

#[test]
fn tokenizing_twice_is_deterministic() {
    let input = "::gate Door:\ninit:\n• open\n::end";

    assert_eq!(tokenize(input), tokenize(input));
}
