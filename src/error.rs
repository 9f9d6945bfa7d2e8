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

use crate::span::Span;
use std::fmt;

/// A fatal compiler-driver error.
///
/// The core pipeline is lenient by design and never produces one of these:
/// unrecognized characters are dropped, malformed constructs degrade the
/// tree, and *some* listing always comes out. `HlxError` exists for the
/// collaborators around the core, where failure is real: unreadable input,
/// unwritable output, bad command lines.
#[derive(Debug, Clone)]
pub struct HlxError {
    /// Stable error code (E_IO, E_USAGE, ...)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location, when the failure points at one.
    ///
    /// Driver errors (bad command line, unreadable file) have none; the
    /// diagnostic printer renders the location block only when a span is
    /// present.
    pub span: Option<Span>,

    /// Optional note / help text
    pub help: Option<String>,
}

impl HlxError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            span: None,
            help: None,
        }
    }

    /// I/O error (reading source, writing the listing)
    pub fn io_error(message: impl Into<String>) -> Self {
        Self::new("E_IO", message)
    }

    /// Command-line usage error
    pub fn usage_error(message: impl Into<String>) -> Self {
        Self::new("E_USAGE", message)
    }

    /// Attach a source location to the error (builder-style).
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for HlxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for HlxError {}
