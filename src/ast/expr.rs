/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:      expr.rs
 * Purpose:   The expression node of the Helix AST.
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

/// A Helix expression: a left operand with an optional operator and right
/// operand.
///
/// Operands and operators are **opaque strings** carried through unchanged
/// from source text. Nothing in the compiler evaluates or validates them;
/// they are recorded by the parser and echoed by the emitter. The right
/// operand is only meaningful when an operator is present, which the two
/// constructors enforce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expr {
    /// Left operand, verbatim source text.
    pub left: String,

    /// Operator lexeme (`=`, `@`, `%`, `==`, ...), if any.
    pub operator: Option<String>,

    /// Right operand; present exactly when `operator` is.
    pub right: Option<String>,
}

impl Expr {
    /// An expression consisting of a single bare operand.
    pub fn bare(left: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            operator: None,
            right: None,
        }
    }

    /// A full `left op right` expression.
    pub fn binary(
        left: impl Into<String>,
        operator: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            operator: Some(operator.into()),
            right: Some(right.into()),
        }
    }
}
