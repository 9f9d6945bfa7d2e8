/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * Statement-Level Parsing Logic
 *
 * This file contains all grammar rules responsible for parsing Helix
 * statements into their corresponding AST forms.
 *
 * It handles:
 * - Init blocks (`init:` with bulleted actions)
 * - Fuse blocks (`::fuse when <cond>:` with bulleted expressions)
 * - Bare bulleted expressions in a gate body
 * - The skip-one-token recovery policy for everything else
 *
 * This module forms the top layer of the recursive-descent grammar below
 * the gate driver in `parser.rs`.
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

use crate::ast::{Expr, Stmt};
use crate::diagnostics::ParseNote;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// Parses a single gate-body statement.
    ///
    /// This is the main dispatcher: it inspects the leading token and
    /// routes to the init, fuse or bare-expression grammar. A token that
    /// starts none of those forms is discarded through the recovery
    /// policy and `None` is returned; the gate loop simply moves on.
    /// Parsing never aborts on unexpected input, it degrades the tree.
    pub fn statement(&mut self) -> Option<Stmt> {
        // ------------------------------------------------------------
        // INIT BLOCK:
        // init [:] [newline] (• action [newline])*
        // ------------------------------------------------------------
        if self.match_kind(TokenKind::Init) {
            return Some(self.init_statement());
        }

        // ------------------------------------------------------------
        // FUSE BLOCK:
        // ::fuse when cond [:] [newline] (• expr [newline])*
        // ------------------------------------------------------------
        if self.match_kind(TokenKind::Fuse) {
            return self.fuse_statement();
        }

        // ------------------------------------------------------------
        // BARE EXPRESSION:
        // • expr [newline]
        // ------------------------------------------------------------
        if self.match_kind(TokenKind::Bullet) {
            let expr = self.expression();
            self.match_kind(TokenKind::Newline);
            return Some(Stmt::Expr(expr));
        }

        self.recover();
        None
    }

    /// Parses the body of an init block, the `init` keyword already
    /// consumed.
    ///
    /// Collects one action name per bullet. Each action is whatever single
    /// token follows the bullet, recorded verbatim; the loop ends at the
    /// first non-bullet token.
    fn init_statement(&mut self) -> Stmt {
        self.match_kind(TokenKind::Colon);
        self.match_kind(TokenKind::Newline);

        let mut actions = Vec::new();

        while self.match_kind(TokenKind::Bullet) {
            if self.is_at_end() {
                break;
            }
            actions.push(self.advance().lexeme);
            self.match_kind(TokenKind::Newline);
        }

        Stmt::Init { actions }
    }

    /// Parses the body of a fuse block, the `::fuse` marker already
    /// consumed.
    ///
    /// A fuse without a following `when` is malformed: the whole construct
    /// is dropped (a note is recorded, `None` comes back) and the gate
    /// loop continues scanning. This drop is the one statement form whose
    /// absence from the tree is the only visible sign of the problem.
    fn fuse_statement(&mut self) -> Option<Stmt> {
        if !self.check(TokenKind::When) {
            let token = self.peek().clone();
            self.notes.push(ParseNote::fuse_missing_when(token));
            return None;
        }
        self.advance();

        let condition = if self.is_at_end() {
            String::new()
        } else {
            self.advance().lexeme
        };

        self.match_kind(TokenKind::Colon);
        self.match_kind(TokenKind::Newline);

        let mut body = Vec::new();

        while self.match_kind(TokenKind::Bullet) {
            let expr = self.expression();
            self.match_kind(TokenKind::Newline);
            body.push(Stmt::Expr(expr));
        }

        Some(Stmt::Fuse { condition, body })
    }

    /// Parses one expression:
    ///
    /// ```text
    /// Expr := IDENT [OP IDENT]
    /// ```
    ///
    /// The left operand is whatever token sits under the cursor; if an
    /// operator follows, the token after it becomes the right operand.
    /// Operands are carried verbatim, never interpreted.
    fn expression(&mut self) -> Expr {
        let left = if self.is_at_end() {
            String::new()
        } else {
            self.advance().lexeme
        };

        if self.check(TokenKind::Op) {
            let operator = self.advance().lexeme;
            let right = if self.is_at_end() {
                String::new()
            } else {
                self.advance().lexeme
            };
            return Expr::binary(left, operator, right);
        }

        Expr::bare(left)
    }

    /// The parser's error-recovery policy: discard exactly one token,
    /// record a note, and let the caller retry from the next token.
    ///
    /// Making this a named method (rather than a catch-all side effect)
    /// keeps the policy visible and lets tests assert on it directly.
    fn recover(&mut self) {
        let token = self.advance();
        self.notes.push(ParseNote::unexpected(token));
    }
}
