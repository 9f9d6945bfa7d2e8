/*
 * ==========================================================================
 * HLXC - The Helix Gate Compiler
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line driver for the Helix gate compiler.
 *
 * The driver is the thin shell around the core pipeline: it reads the
 * source file, runs lexer/parser/emitter, and writes the listing. All the
 * fallible work (file I/O, argument handling) lives here; the pipeline
 * itself never fails.
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

use hlxc::diagnostics::DiagnosticPrinter;
use hlxc::emitter::Emit;
use hlxc::error::HlxError;
use hlxc::{lexer, parser};
use std::fs;
use std::path::PathBuf;
use std::process;

const USAGE: &str = "usage: hlxc <input.hlx> [-o <output.asm>] [--emit-tokens] [--emit-ast] [--warn]";

/// Resolved command-line options.
struct Options {
    input: PathBuf,
    output: PathBuf,
    emit_tokens: bool,
    emit_ast: bool,
    warn: bool,
}

/// Parses the command line.
///
/// One positional input file; the output path defaults to the input path
/// with its extension replaced by `.asm`.
fn parse_args(args: Vec<String>) -> Result<Options, HlxError> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut emit_tokens = false;
    let mut emit_ast = false;
    let mut warn = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let path = iter.next().ok_or_else(|| {
                    HlxError::usage_error("missing path after -o").with_help(USAGE)
                })?;
                output = Some(PathBuf::from(path));
            }
            "--emit-tokens" => emit_tokens = true,
            "--emit-ast" => emit_ast = true,
            "--warn" => warn = true,
            _ if arg.starts_with('-') => {
                return Err(
                    HlxError::usage_error(format!("unknown flag `{arg}`")).with_help(USAGE)
                );
            }
            _ => {
                if input.is_some() {
                    return Err(
                        HlxError::usage_error("more than one input file").with_help(USAGE)
                    );
                }
                input = Some(PathBuf::from(arg));
            }
        }
    }

    let input = input.ok_or_else(|| HlxError::usage_error("no input file").with_help(USAGE))?;
    let output = output.unwrap_or_else(|| input.with_extension("asm"));

    Ok(Options {
        input,
        output,
        emit_tokens,
        emit_ast,
        warn,
    })
}

/// Runs one compilation: read, tokenize, parse, emit, write.
fn run(options: &Options) -> Result<(), HlxError> {
    let source = fs::read_to_string(&options.input).map_err(|err| {
        HlxError::io_error(format!("could not read {}: {}", options.input.display(), err))
            .with_help("expected a readable Helix source file (.hlx)")
    })?;

    let tokens = lexer::tokenize(&source);

    if options.emit_tokens {
        let json = serde_json::to_string_pretty(&tokens)
            .map_err(|err| HlxError::new("E_JSON", format!("could not serialize tokens: {err}")))?;
        println!("{json}");
    }

    let (gate, notes) = parser::parse_with_notes(tokens);

    if options.warn {
        let printer =
            DiagnosticPrinter::new(options.input.display().to_string(), source.as_str());
        for note in &notes {
            printer.warn(note);
        }
    }

    if options.emit_ast {
        let json = serde_json::to_string_pretty(&gate)
            .map_err(|err| HlxError::new("E_JSON", format!("could not serialize AST: {err}")))?;
        println!("{json}");
    }

    // The banner lives here rather than in the emitter so that core
    // emission stays deterministic.
    let mut listing = String::new();
    listing.push_str(&format!(
        "; hlxc {} (generated {})\n",
        env!("CARGO_PKG_VERSION"),
        chrono::Local::now().to_rfc3339()
    ));
    gate.emit(&mut listing);

    fs::write(&options.output, listing).map_err(|err| {
        HlxError::io_error(format!("could not write {}: {}", options.output.display(), err))
    })?;

    println!("Compilation complete.");
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = parse_args(args).and_then(|options| run(&options));

    if let Err(err) = result {
        // Driver errors carry no span, so the printer renders the header
        // and help lines without a location block.
        DiagnosticPrinter::new("hlxc", "").print(&err);
        process::exit(1);
    }
}
