/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver functions used to transform a token stream into the Helix AST.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `statements.rs`  → Statement-level grammar (init, fuse, expressions)
 * - `helpers.rs`     → Token matching, consumption, and navigation
 *
 * This file serves as the root coordinator of the parsing process and owns
 * the gate-level grammar.
 *
 * --------------------------------------------------------------------------
 * License:
 * This file is part of the Helix gate compiler project.
 *
 * HLXC is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::ast::Gate;
use crate::diagnostics::ParseNote;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// The core Helix recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
/// - The recovery notes recorded while parsing
///
/// The cursor is the parser's **only** state: instances are single-use,
/// one `Parser` per compilation. The grammar logic is implemented through
/// extension modules (`statements`, `helpers`) via additional
/// `impl Parser` blocks.
pub struct Parser {
    /// Complete list of tokens to be parsed.
    pub tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub current: usize,

    /// Recovery notes: one entry for every token the parser discarded and
    /// every malformed fuse it dropped. Observability only; notes never
    /// alter the tree and never fail the compilation.
    pub notes: Vec<ParseNote>,
}

/// Public entry point for the Helix parsing phase.
///
/// Builds a fresh `Parser`, runs the full recursive descent, and returns
/// the resulting gate. Parsing **never fails**: malformed input degrades
/// the tree instead of aborting, so a gate always comes back.
///
/// # Helix Compilation Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST → Emitter
/// ```
pub fn parse(tokens: Vec<Token>) -> Gate {
    parse_with_notes(tokens).0
}

/// Like [`parse`], but also returns the recovery notes recorded while
/// parsing, for callers that want to report what the lenient grammar
/// silently dropped.
pub fn parse_with_notes(tokens: Vec<Token>) -> (Gate, Vec<ParseNote>) {
    let mut parser = Parser::new(tokens);
    let gate = parser.parse();
    (gate, parser.notes)
}

impl Parser {
    /// Creates a parser over a token stream.
    ///
    /// The lexer guarantees a terminating `Eof` token; `peek` and
    /// `is_at_end` rely on that sentinel, so one is appended here if a
    /// caller hands over a stream without it.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Eof) {
            tokens.push(Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                span: Span::START,
            });
        }

        Self {
            tokens,
            current: 0,
            notes: Vec::new(),
        }
    }

    /// Parses the entire token stream into a single gate.
    pub fn parse(&mut self) -> Gate {
        self.gate()
    }

    /// Gate-level grammar:
    ///
    /// ```text
    /// Gate := [GATE] IDENT [COLON] [NEWLINE] Statement* END
    /// ```
    ///
    /// The leading marker, the colon and the newline are all consumed
    /// optionally, so minor formatting drift is tolerated rather than
    /// reported. The body loop runs until an `::end` marker is matched or
    /// the input runs out; a missing `::end` is not an error.
    fn gate(&mut self) -> Gate {
        self.match_kind(TokenKind::Gate);
        let name = self.gate_name();
        self.match_kind(TokenKind::Colon);
        self.match_kind(TokenKind::Newline);

        let mut body = Vec::new();

        while !self.match_kind(TokenKind::End) && !self.is_at_end() {
            if let Some(stmt) = self.statement() {
                body.push(stmt);
            }
        }

        Gate { name, body }
    }

    /// Takes the next token's lexeme as the gate name, or an empty name if
    /// the input is already exhausted. The name is not validated; whatever
    /// follows `::gate` is recorded verbatim.
    fn gate_name(&mut self) -> String {
        if self.is_at_end() {
            return String::new();
        }
        self.advance().lexeme
    }
}
