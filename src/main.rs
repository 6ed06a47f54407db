//! CLI tool to inspect and check slate source files.

use std::fs;
use std::process::ExitCode;

use slate_lexer::{Scanner, TokenKind};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: slate-lex <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens  Print the token stream of each file");
        eprintln!("  check   Report lexical errors in each file");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  slate-lex tokens program.slate");
        eprintln!("  slate-lex check program.slate");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "tokens" => {
                had_error |= print_tokens(&content);
            }
            "check" => {
                let errors = check_file(path, &content);
                if errors == 0 {
                    eprintln!("{path}: ok");
                } else {
                    eprintln!("{path}: {errors} lexical error(s)");
                    had_error = true;
                }
            }
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Dump one token per line; returns whether any error token appeared.
fn print_tokens(content: &str) -> bool {
    let mut scanner = Scanner::new(content);
    let mut had_error = false;
    loop {
        let token = scanner.scan_token();
        if token.kind == TokenKind::Eof {
            return had_error;
        }
        had_error |= token.kind == TokenKind::Error;
        println!("{:>5}  {:<14} {}", token.line, format!("{:?}", token.kind), token.text);
    }
}

/// Report every error token with its source line for context.
fn check_file(path: &str, content: &str) -> usize {
    let mut scanner = Scanner::new(content);
    let mut errors = 0;
    loop {
        let token = scanner.scan_token();
        match token.kind {
            TokenKind::Eof => return errors,
            TokenKind::Error => {
                errors += 1;
                eprintln!("{path}:{}: {}", token.line, token.text);
                eprintln!("    {}", scanner.line_text(&token));
            }
            _ => {}
        }
    }
}
