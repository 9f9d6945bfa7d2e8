use super::*;
use crate::ast::{Expr, Gate, Stmt};
use crate::diagnostics::NoteReason;
use crate::lexer::tokenize;

#[test]
fn parses_a_gate_with_an_init_block() {
    let gate = parse(tokenize("::gate Door:\ninit:\n• open\n::end"));

    assert_eq!(
        gate,
        Gate {
            name: "Door".to_string(),
            body: vec![Stmt::Init {
                actions: vec!["open".to_string()],
            }],
        }
    );
}

#[test]
fn parses_a_fuse_block_with_a_binary_expression() {
    let gate = parse(tokenize("::gate X:\n::fuse when cond:\n• a = b\n::end"));

    assert_eq!(
        gate,
        Gate {
            name: "X".to_string(),
            body: vec![Stmt::Fuse {
                condition: "cond".to_string(),
                body: vec![Stmt::Expr(Expr::binary("a", "=", "b"))],
            }],
        }
    );
}

#[test]
fn parses_a_bare_bulleted_expression() {
    let gate = parse(tokenize("::gate G:\n• x = 1\n::end"));

    assert_eq!(
        gate.body,
        vec![Stmt::Expr(Expr::binary("x", "=", "1"))]
    );
}

#[test]
fn fuse_without_when_is_dropped_not_fatal() {
    let (gate, notes) = parse_with_notes(tokenize("::gate Y:\n::fuse foo\n::end"));

    assert_eq!(gate.name, "Y");
    assert!(gate.body.is_empty());
    assert!(notes
        .iter()
        .any(|n| n.reason == NoteReason::FuseMissingWhen));
}

#[test]
fn unexpected_tokens_are_skipped_one_at_a_time() {
    let (gate, notes) =
        parse_with_notes(tokenize("::gate G:\n666 ; garbage\n• ok\n::end"));

    assert_eq!(gate.body, vec![Stmt::Expr(Expr::bare("ok"))]);

    // Number, semi, identifier and newline each cost exactly one note.
    assert_eq!(notes.len(), 4);
    assert!(notes
        .iter()
        .all(|n| n.reason == NoteReason::UnexpectedToken));
}

#[test]
fn missing_end_marker_is_tolerated() {
    let gate = parse(tokenize("::gate G:\n• x\n"));

    assert_eq!(gate.name, "G");
    assert_eq!(gate.body, vec![Stmt::Expr(Expr::bare("x"))]);
}

#[test]
fn empty_input_degrades_to_a_nameless_empty_gate() {
    let gate = parse(tokenize(""));

    assert_eq!(
        gate,
        Gate {
            name: String::new(),
            body: Vec::new(),
        }
    );
}

#[test]
fn missing_colon_after_gate_name_is_tolerated() {
    let gate = parse(tokenize("::gate G\n• a\n::end"));

    assert_eq!(gate.name, "G");
    assert_eq!(gate.body, vec![Stmt::Expr(Expr::bare("a"))]);
}

#[test]
fn init_actions_keep_dotted_names_and_stop_at_operators() {
    let source = "::gate M:\ninit:\n• load.env\n• set.mode = SAFE\n::end";
    let (gate, notes) = parse_with_notes(tokenize(source));

    // `set.mode` is recorded; the trailing `= SAFE` falls outside the
    // init grammar and is skipped by recovery.
    assert_eq!(
        gate.body,
        vec![Stmt::Init {
            actions: vec!["load.env".to_string(), "set.mode".to_string()],
        }]
    );
    assert!(notes
        .iter()
        .all(|n| n.reason == NoteReason::UnexpectedToken));
    assert_eq!(notes.len(), 3);
}

#[test]
fn init_and_fuse_keep_source_order() {
    let source = "::gate main:\ninit:\n• boot\n::fuse when armed:\n• fire\n::end";
    let gate = parse(tokenize(source));

    assert_eq!(
        gate.body,
        vec![
            Stmt::Init {
                actions: vec!["boot".to_string()],
            },
            Stmt::Fuse {
                condition: "armed".to_string(),
                body: vec![Stmt::Expr(Expr::bare("fire"))],
            },
        ]
    );
}

#[test]
fn fuse_expressions_carry_operators_verbatim() {
    let source = "::gate F:\n::fuse when overheat:\n• burn.signal @ch4\n• sync.pulse = ENABLED\n::end";
    let gate = parse(tokenize(source));

    assert_eq!(
        gate.body,
        vec![Stmt::Fuse {
            condition: "overheat".to_string(),
            body: vec![
                Stmt::Expr(Expr::binary("burn.signal", "@", "ch4")),
                Stmt::Expr(Expr::binary("sync.pulse", "=", "ENABLED")),
            ],
        }]
    );
}

#[test]
fn parsing_the_same_tokens_twice_is_deterministic() {
    let tokens = tokenize("::gate D:\ninit:\n• a\n::fuse when c:\n• x = y\n::end");

    assert_eq!(parse(tokens.clone()), parse(tokens));
}

#[test]
fn parser_tolerates_a_stream_without_the_eof_sentinel() {
    let gate = Parser::new(Vec::new()).parse();

    assert_eq!(gate.name, "");
    assert!(gate.body.is_empty());
}
