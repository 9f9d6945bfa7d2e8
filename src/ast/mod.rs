/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Root module for the Helix abstract syntax tree.
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

/// Expression nodes.
pub mod expr;

/// Statement nodes.
pub mod stmt;

/// The gate root node.
pub mod gate;

pub use expr::Expr;
pub use gate::Gate;
pub use stmt::Stmt;
