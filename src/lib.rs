/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root for the Helix gate compiler library.
 *
 * The compilation pipeline:
 *
 *   Source → Lexer → Tokens → Parser → AST → Emitter → Listing
 *
 * Each stage is a pure transformation with no shared mutable state, and
 * none of them can fail: garbled input degrades the tree instead of
 * aborting, so some listing always comes out. File I/O and the command
 * line live in the binary (`main.rs`), not here.
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

pub mod ast;
pub mod diagnostics;
pub mod emitter;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

use emitter::Emit;

/// Compiles Helix source text straight to its instruction listing.
///
/// Runs the full pipeline in one call. Deterministic: the same source
/// always produces the same listing. Never fails; for empty or garbled
/// input the worst case is the header line of a nameless gate.
pub fn compile(source: &str) -> String {
    let tokens = lexer::tokenize(source);
    let gate = parser::parse(tokens);

    let mut listing = String::new();
    gate.emit(&mut listing);
    listing
}
