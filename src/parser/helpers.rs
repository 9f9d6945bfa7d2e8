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

use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Returns the current token without consuming it.
    ///
    /// Always valid: the stream ends with an `Eof` sentinel and `advance`
    /// never moves past it.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Checks whether the current token has the given kind, without
    /// consuming it.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Matches a token kind and consumes it if present.
    ///
    /// The optional-consumption primitive the whole grammar is built on:
    /// advances and returns `true` on a match, leaves the cursor untouched
    /// and returns `false` otherwise. Safe to call at end of input.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advances one token forward and returns the consumed token.
    ///
    /// At end of input this returns the `Eof` sentinel without moving, so
    /// every parsing loop either makes progress or observes `is_at_end`.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// True once the cursor rests on the `Eof` sentinel.
    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }
}
