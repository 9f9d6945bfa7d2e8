/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types used by the Helix
 *            compiler during the lexing and parsing stages.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in the Helix language.
///
/// `TokenKind` is a closed set: every character run the lexer accepts maps
/// to exactly one of these kinds, and the parser drives its grammar off the
/// kind alone.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST → Emitter
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// The `::gate` block marker opening a gate declaration.
    Gate,

    /// The `::end` block marker closing a gate declaration.
    End,

    /// The `init` keyword introducing an initialization block.
    Init,

    /// The `::fuse` block marker introducing a conditional trigger.
    Fuse,

    /// The `when` keyword carrying a fuse block's guard condition.
    When,

    /// A user-defined name.
    ///
    /// Used for:
    /// - Gate names (`Door`)
    /// - Action names, including dotted ones (`load.env`)
    /// - Expression operands (`burn.signal`, `ch4`)
    Identifier,

    /// A numeric literal: the maximal run of decimal digits (`1200`).
    Number,

    /// A quoted string literal.
    ///
    /// Reserved for future surface syntax; the current lexer never
    /// produces it.
    String,

    /// A lone `:` following a gate name or a block keyword.
    Colon,

    /// The `•` marker introducing one bulleted action or expression.
    Bullet,

    /// The `;` separator.
    Semi,

    /// The `—` separator.
    Dash,

    /// An operator lexeme: `=`, `@` or `%`, optionally doubled with a
    /// trailing `=` (so `==` is a single token).
    Op,

    /// One line break. Consecutive line breaks are **not** folded; every
    /// `\n` in the source yields its own token.
    Newline,

    /// Horizontal whitespace.
    ///
    /// Reserved: the lexer skips whitespace instead of tokenizing it, so
    /// this kind never appears in a token stream.
    Space,

    /// End-of-input marker.
    ///
    /// Always appended as the **final token** during lexing and used by
    /// the parser to determine when input has been fully consumed.
    Eof,
}

/// Represents a **single lexical token** produced by the Helix lexer.
///
/// A `Token` is a fully classified unit of source code consisting of:
/// - A token category (`TokenKind`)
/// - The original source text (`lexeme`)
/// - The source position for diagnostics
///
/// # Example Tokens
/// ```text
/// ::gate   →  { kind: Gate,       lexeme: "::gate", span: 1:1 }
/// Door     →  { kind: Identifier, lexeme: "Door",   span: 1:8 }
/// 1200     →  { kind: Number,     lexeme: "1200",   span: 2:12 }
/// ```
///
/// Tokens are immutable once produced: the parser consumes them read-only
/// and they carry no identity beyond their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// Preserved verbatim: the parser threads operands, conditions and
    /// action names straight from here into the AST without interpretation.
    pub lexeme: String,

    /// The position of the token's **first character**, 1-based.
    pub span: Span,
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Prints only the token's lexeme (the exact source text), not its
    /// internal structure. Diagnostic messages care about *what the user
    /// wrote*; `Debug` remains available for developer introspection.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
