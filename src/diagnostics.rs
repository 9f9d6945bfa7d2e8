/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
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

use crate::error::HlxError;
use crate::lexer::token::Token;
use crate::span::Span;
use serde::Serialize;

/// Why the parser dropped something.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NoteReason {
    /// A token that starts no statement form was discarded and parsing
    /// resumed from the next token.
    UnexpectedToken,

    /// A `::fuse` marker was not followed by `when`; the whole fuse
    /// construct was dropped.
    FuseMissingWhen,
}

/// One record of the parser's discard-and-continue recovery policy.
///
/// The Helix grammar is lenient: it never aborts on malformed input, it
/// degrades the tree. A `ParseNote` is the trace that degradation leaves
/// behind, so drivers can surface what was silently skipped and tests can
/// assert on the policy directly. Notes carry no severity: they are not
/// errors and never fail a compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseNote {
    /// What happened.
    pub reason: NoteReason,

    /// The token at the point of recovery.
    pub token: Token,
}

impl ParseNote {
    /// A note for one discarded statement-start token.
    pub fn unexpected(token: Token) -> Self {
        Self {
            reason: NoteReason::UnexpectedToken,
            token,
        }
    }

    /// A note for a dropped `::fuse` construct missing its `when`.
    pub fn fuse_missing_when(token: Token) -> Self {
        Self {
            reason: NoteReason::FuseMissingWhen,
            token,
        }
    }

    /// Human-readable one-line description.
    ///
    /// The Eof token carries an empty lexeme, so it is shown as `<eof>`
    /// instead of an empty pair of backticks.
    pub fn message(&self) -> String {
        let shown = if self.token.lexeme.is_empty() {
            "<eof>"
        } else {
            self.token.lexeme.as_str()
        };

        match self.reason {
            NoteReason::UnexpectedToken => {
                format!("skipped unexpected token `{}`", shown)
            }
            NoteReason::FuseMissingWhen => {
                format!("dropped fuse block: expected `when`, found `{}`", shown)
            }
        }
    }
}

/// Renders human-friendly, compiler-style diagnostics for driver errors
/// and parse notes.
///
/// This printer:
/// - Formats errors and notes with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, simplified
/// for Helix and designed to remain readable without color.
pub struct DiagnosticPrinter {
    /// Full source code of the file being compiled.
    ///
    /// Stored as a single string so specific lines can be extracted for
    /// display.
    source: String,

    /// Name of the source file (e.g. `reactor.hlx`), used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[E_IO]: could not read reactor.hlx: No such file or directory
    /// help: expected a readable Helix source file (.hlx)
    /// ```
    ///
    /// Errors carrying a span additionally render the location block with
    /// the offending source line and a caret, in the same layout as
    /// [`DiagnosticPrinter::warn`].
    pub fn print(&self, error: &HlxError) {
        eprintln!("{}", self.render_error(error));
    }

    /// Prints a formatted warning for one parse note to stderr.
    ///
    /// # Output Example
    /// ```text
    /// warning: dropped fuse block: expected `when`, found `foo`
    ///   --> reactor.hlx:2:8
    ///    |
    ///  2 | ::fuse foo
    ///    |        ^
    /// ```
    pub fn warn(&self, note: &ParseNote) {
        eprintln!("{}", self.render_note(note));
    }

    /// Renders an error to its display string: the `error[CODE]: message`
    /// header, the location block when a span is present, and the help
    /// line when one is attached.
    pub fn render_error(&self, error: &HlxError) -> String {
        let mut out = error.to_string();

        if let Some(span) = error.span {
            out.push('\n');
            out.push_str(&self.location_block(span));
        }

        if let Some(help) = &error.help {
            out.push_str(&format!("\nhelp: {}", help));
        }

        out
    }

    /// Renders a parse note to its display string.
    pub fn render_note(&self, note: &ParseNote) -> String {
        format!(
            "warning: {}\n{}",
            note.message(),
            self.location_block(note.token.span)
        )
    }

    /// The shared location block: file/line/column pointer, the source
    /// line, and a caret underlining the 1-based column.
    fn location_block(&self, span: Span) -> String {
        // Lines are 1-indexed in diagnostics, but the line list is
        // 0-indexed; saturating_sub guards a zero line.
        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(span.line.saturating_sub(1)).unwrap_or(&"");

        let mut underline = String::new();
        for _ in 1..span.column {
            underline.push(' ');
        }
        underline.push('^');

        format!(
            "  --> {}:{}:{}\n   |\n{:>3} | {}\n   | {}",
            self.file_name, span.line, span.column, span.line, src_line, underline
        )
    }
}
