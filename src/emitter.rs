/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:      emitter.rs
 * Purpose:   Renders the Helix AST into the textual instruction listing.
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

use crate::ast::{Expr, Gate, Stmt};

/// The capability every AST node exposes: render yourself (and recursively
/// your children) into a textual instruction listing.
///
/// Emission is a pure formatter. Appends happen in document order,
/// depth-first, pre-order over children; nothing is computed or validated,
/// and emission never fails. The listing is documentation-grade
/// pseudo-assembly (comment lines plus `nop` placeholders), not an
/// assembleable program.
pub trait Emit {
    /// Appends this node's listing lines to the sink.
    fn emit(&self, out: &mut String);
}

impl Emit for Gate {
    /// A header line naming the gate, followed by each body statement's
    /// own emission, in order.
    fn emit(&self, out: &mut String) {
        out.push_str(&format!("; Gate: {}\n", self.name));

        for stmt in &self.body {
            stmt.emit(out);
        }
    }
}

impl Emit for Stmt {
    fn emit(&self, out: &mut String) {
        match self {
            // Block marker, then one descriptive line plus one placeholder
            // instruction per action.
            Stmt::Init { actions } => {
                out.push_str("    ; INIT BLOCK\n");
                for action in actions {
                    out.push_str(&format!("    ; action: {}\n", action));
                    out.push_str("    nop\n");
                }
            }

            // Header naming the guard condition, then each child node's
            // own emission, depth-first.
            Stmt::Fuse { condition, body } => {
                out.push_str(&format!("    ; FUSE WHEN {}\n", condition));
                for stmt in body {
                    stmt.emit(out);
                }
            }

            Stmt::Expr(expr) => expr.emit(out),
        }
    }
}

impl Emit for Expr {
    /// One descriptive line showing left/operator/right (operator and
    /// right omitted when absent), followed by one placeholder
    /// instruction.
    fn emit(&self, out: &mut String) {
        match (&self.operator, &self.right) {
            (Some(op), Some(right)) => {
                out.push_str(&format!("    ; expr: {} {} {}\n", self.left, op, right));
            }
            _ => {
                out.push_str(&format!("    ; expr: {}\n", self.left));
            }
        }
        out.push_str("    nop\n");
    }
}
