/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:      gate.rs
 * Purpose:   The root node of the Helix AST.
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

use crate::ast::Stmt;
use serde::Serialize;

/// A compiled gate: the top-level named construct of a Helix source file
/// and always the root of the AST.
///
/// The gate exclusively owns its body statements and, transitively, every
/// descendant node; dropping the gate releases the entire tree.
///
/// Built exclusively by the parser in a single top-to-bottom pass and
/// immutable afterwards. The lenient pipeline guarantees that *some* gate
/// always exists: for empty or completely garbled input, the worst case is
/// a gate with an empty name and an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gate {
    /// The gate's name, taken verbatim from the token after `::gate`.
    pub name: String,

    /// Top-level statements in source order.
    pub body: Vec<Stmt>,
}
