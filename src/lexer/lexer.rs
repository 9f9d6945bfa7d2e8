/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Single-pass scanner converting raw Helix source text into a
 *            finite token stream terminated by exactly one Eof token.
 *
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

use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Tokenizes a complete Helix source string.
///
/// Convenience entry point for the lexical analysis stage; callers that do
/// not need to hold on to the `Lexer` itself should use this.
///
/// The returned stream is never empty and always ends with exactly one
/// `TokenKind::Eof` token, no matter how short or garbled the input is.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens();
    lexer.tokens
}

/// The Helix scanner.
///
/// A single forward pass over the input with one character of lookahead
/// (`peek`) and explicit consumption (`advance`). Instances are single-use:
/// one `Lexer` tokenizes one source text.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
    pub tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new lexer instance from raw source code.
    ///
    /// The cursor starts at position 0, line 1, column 1, with an empty
    /// token output buffer.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// Repeatedly scans individual tokens until the end of the source is
    /// reached, then appends a final `Eof` token.
    ///
    /// # Behavior
    /// - Skips horizontal whitespace without emitting tokens
    /// - Drops unrecognized characters without a diagnostic
    /// - Guarantees a terminating `TokenKind::Eof` marker
    ///
    /// Results are written into `self.tokens`. Must be called exactly once
    /// per lexer instance.
    pub fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }

        let span = self.position();
        self.push(TokenKind::Eof, "", span);
    }

    /// Scans at most one token from the source stream.
    ///
    /// Consumes one character, classifies it, and routes to the specialized
    /// scanners for markers, identifiers, numbers and operators. Whitespace
    /// and unrecognized characters consume without emitting.
    fn scan_token(&mut self) {
        let span = self.position();
        let ch = self.advance();

        match ch {
            // Horizontal whitespace: skipped, never tokenized.
            ' ' | '\t' | '\r' => {}

            // Every line break is its own token; runs are not folded.
            '\n' => self.push(TokenKind::Newline, "\\n", span),

            // A doubled colon opens a `::`-marker (`::gate`, `::end`,
            // `::fuse`); a lone colon is the Colon punctuation token.
            ':' => {
                if self.peek() == ':' {
                    self.marker(span);
                } else {
                    self.push(TokenKind::Colon, ":", span);
                }
            }

            '•' => self.push(TokenKind::Bullet, "•", span),
            ';' => self.push(TokenKind::Semi, ";", span),
            '—' => self.push(TokenKind::Dash, "—", span),

            // Operator characters, optionally doubled with `=` (`==`).
            '=' | '@' | '%' => self.operator(ch, span),

            c if c.is_ascii_digit() => self.number(c, span),

            c if c.is_ascii_alphabetic() => self.identifier(c, span),

            // Anything else is silently dropped and scanning continues
            // from the next character. The lexer never fails.
            _ => {}
        }
    }

    /// Scans a `::`-marker lexeme.
    ///
    /// Called with the first `:` already consumed and the second one
    /// waiting in the lookahead. Collects the colon run plus the attached
    /// word and classifies it against the keyword table, so `::gate`,
    /// `::end` and `::fuse` come out as their own kinds while any other
    /// marker-shaped run degrades to an identifier.
    fn marker(&mut self, span: Span) {
        let mut text = String::from(':');

        while self.peek() == ':' || self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            text.push(self.advance());
        }

        let kind = keyword_kind(&text).unwrap_or(TokenKind::Identifier);
        self.push(kind, text, span);
    }

    /// Scans an identifier or bare keyword token.
    ///
    /// Collects the maximal run of letters, digits, `_` and `.` so dotted
    /// action names like `load.env` stay one token, then classifies the
    /// lexeme: `when` and `init` are keywords, everything else is an
    /// identifier. Case-sensitive.
    fn identifier(&mut self, first: char, span: Span) {
        let mut text = String::from(first);

        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' || self.peek() == '.' {
            text.push(self.advance());
        }

        let kind = keyword_kind(&text).unwrap_or(TokenKind::Identifier);
        self.push(kind, text, span);
    }

    /// Scans a numeric literal: the maximal run of decimal digits.
    fn number(&mut self, first: char, span: Span) {
        let mut text = String::from(first);

        while self.peek().is_ascii_digit() {
            text.push(self.advance());
        }

        self.push(TokenKind::Number, text, span);
    }

    /// Scans an operator token.
    ///
    /// `=`, `@` and `%` stand alone; if the next character is `=`, it is
    /// folded into the same token (`==`, `@=`, `%=`).
    fn operator(&mut self, first: char, span: Span) {
        let mut text = String::from(first);

        if self.peek() == '=' {
            text.push(self.advance());
        }

        self.push(TokenKind::Op, text, span);
    }

    /// Appends one finished token to the output buffer.
    fn push(&mut self, kind: TokenKind, lexeme: impl Into<String>, span: Span) {
        self.tokens.push(Token {
            kind,
            lexeme: lexeme.into(),
            span,
        });
    }

    /// The position of the next character to be consumed.
    fn position(&self) -> Span {
        Span {
            line: self.line,
            column: self.column,
        }
    }

    /// Advances the cursor by one character and returns it.
    ///
    /// A newline increments the line counter and resets the column to 1;
    /// any other character increments the column.
    ///
    /// Caller must ensure end of input has not been reached.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        ch
    }

    /// Returns the current character without consuming it, or `'\0'` at
    /// end of input.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// True once all characters have been consumed.
    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
