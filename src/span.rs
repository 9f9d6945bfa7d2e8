/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source position tracking shared by the lexer, the parser and
 *            the diagnostic printer.
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

use serde::Serialize;

/// A position in Helix source text.
///
/// Both coordinates are **1-based**: the first character of the source sits
/// at line 1, column 1. A newline advances the line and resets the column;
/// every other consumed character advances the column.
///
/// Spans are attached to every token the lexer produces and travel through
/// the pipeline unchanged, so diagnostics can always point back at the
/// exact character that produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// 1-based source line.
    pub line: usize,

    /// 1-based source column.
    pub column: usize,
}

impl Span {
    /// The position of the very first character of any source text.
    pub const START: Span = Span { line: 1, column: 1 };
}
