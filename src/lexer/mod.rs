/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for Helix lexical analysis.
 *
 * This module wires together the lexer sub-modules:
 *   - Token and token-kind definitions
 *   - The reserved keyword table
 *   - The scanner itself
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

/// Token categories and the token record.
pub mod token;

/// Reserved keyword classification.
pub mod keywords;

/// The scanner: source text in, token stream out.
pub mod lexer;

#[cfg(test)]
mod tests;

/// Re-export the main entry points so callers can use
/// `crate::lexer::tokenize(...)`.
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
