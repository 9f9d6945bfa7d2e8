/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines the reserved keyword table for the Helix language.
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

use crate::lexer::token::TokenKind;

/// Classifies an identifier-class lexeme as a **reserved Helix keyword**.
///
/// This function is used exclusively by the lexer during tokenization to
/// distinguish user-defined identifiers from the fixed set of language
/// markers and keywords. Unlike most languages, Helix keywords do not share
/// a single `Keyword` kind: each reserved word is its own token kind, since
/// the parser dispatches on it directly.
///
/// # Parameters
/// - `word`: The identifier-class string extracted from source code.
///
/// # Returns
/// - `Some(kind)` if the word is reserved.
/// - `None` if the word should be treated as a normal identifier.
///
/// # Helix Examples
/// ```text
/// ::gate    -> TokenKind::Gate
/// ::end     -> TokenKind::End
/// ::fuse    -> TokenKind::Fuse
/// when      -> TokenKind::When
/// init      -> TokenKind::Init
/// Door      -> identifier
/// load.env  -> identifier
/// ```
///
/// The lookup is an exact, case-sensitive string match against a fixed,
/// compile-time-known table. Any future language keywords should be added
/// here.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "::gate" => Some(TokenKind::Gate),
        "::end" => Some(TokenKind::End),
        "::fuse" => Some(TokenKind::Fuse),
        "when" => Some(TokenKind::When),
        "init" => Some(TokenKind::Init),
        _ => None,
    }
}
