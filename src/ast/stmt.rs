/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:      stmt.rs
 * Purpose:   The statement nodes of the Helix AST.
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

use crate::ast::Expr;
use serde::Serialize;

/// All statements that can appear in a gate body.
///
/// The set is closed: the emitter dispatches over it with an exhaustive
/// match, so adding a variant forces every traversal to handle it.
///
/// Ownership is strictly tree-shaped. A `Fuse` exclusively owns its child
/// statements through the `Vec`; no node is shared between parents, so
/// dropping a parent releases its whole subtree and recursive emission
/// always terminates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Stmt {
    /* ----------------------------- */
    /* INIT BLOCK                    */
    /* ----------------------------- */
    /// A block of bare initialization actions, in source order.
    Init { actions: Vec<String> },

    /* ----------------------------- */
    /* FUSE BLOCK                    */
    /* ----------------------------- */
    /// A conditionally-guarded list of child statements (typically
    /// expressions), keyed by a named condition.
    Fuse { condition: String, body: Vec<Stmt> },

    /* ----------------------------- */
    /* BARE EXPRESSION               */
    /* ----------------------------- */
    /// A bulleted expression appearing directly in a gate body, outside
    /// any fuse block.
    Expr(Expr),
}
