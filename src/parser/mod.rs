/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Helix recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Statement parsing
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse(tokens)` entry points
/// - Drives the gate-level grammar
pub mod parser;

/// Statement-level parsing:
/// - init blocks
/// - fuse blocks
/// - bare bulleted expressions
/// - the skip-one-token recovery policy
pub mod statements;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
/// - cursor navigation
pub mod helpers;

#[cfg(test)]
mod tests;

/// Re-export the public parse entry points so callers can use
/// `crate::parser::parse(...)`.
pub use parser::{parse, parse_with_notes, Parser};
