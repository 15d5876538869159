use log::*;
use std::fs;
use std::path::Path;

use crate::error::{Result, SynthfixError};

/// Delete a method from the source file at `path`, identified by a literal
/// signature substring such as `"public static void foo()"`.
///
/// The deleted span runs from the signature line through the line holding the
/// matching closing brace, plus one blank line immediately above the
/// signature if present. Fails with [`SynthfixError::SignatureNotFound`] when
/// the signature does not occur in the file.
///
/// Each call re-reads the file, so removing several methods from one file in
/// sequence works regardless of order.
pub fn remove_method(path: &Path, signature: &str) -> Result<()> {
    let content = fs::read_to_string(path)?;

    let updated = remove_method_from_source(&content, signature)
        .ok_or_else(|| {
            SynthfixError::signature_not_found(
                path.display().to_string(),
                signature,
            )
        })?;

    info!("removed method '{}' from {}", signature, path.display());
    fs::write(path, updated)?;

    Ok(())
}

fn remove_method_from_source(content: &str, signature: &str) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();
    let sig_idx = lines.iter().position(|l| l.contains(signature))?;

    let end_idx = find_closing_brace(&lines, sig_idx)?;

    // Swallow one blank line above the signature so no double blank is left.
    let mut start_idx = sig_idx;
    if start_idx > 0 && lines[start_idx - 1].trim().is_empty() {
        start_idx -= 1;
    }

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    out.extend_from_slice(&lines[..start_idx]);
    out.extend_from_slice(&lines[end_idx + 1..]);

    let mut updated = out.join("\n");
    if content.ends_with('\n') {
        updated.push('\n');
    }

    Some(updated)
}

/// Balanced-brace scan from `start` to the line closing the method body.
///
/// Best-effort rather than a full parser: `//` comment tails are dropped and
/// string/char literal contents blanked before counting, which covers the
/// brace-in-comment and brace-in-literal cases generated code produces.
fn find_closing_brace(lines: &[&str], start: usize) -> Option<usize> {
    let mut depth: i64 = 0;
    let mut opened = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in strip_noise(line).chars() {
            match ch {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' => {
                    depth -= 1;
                    if opened && depth <= 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
    }

    None
}

/// Blank out string/char literal contents and drop `//` comment tails.
fn strip_noise(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    let mut in_string = false;
    let mut in_char = false;

    while let Some(ch) = chars.next() {
        if in_string || in_char {
            match ch {
                '\\' => {
                    // Escape sequence: consume the next char too.
                    chars.next();
                }
                '"' if in_string => in_string = false,
                '\'' if in_char => in_char = false,
                _ => {}
            }
            out.push(' ');
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                out.push(' ');
            }
            '\'' => {
                in_char = true;
                out.push(' ');
            }
            '/' if chars.peek() == Some(&'/') => break,
            _ => out.push(ch),
        }
    }

    out
}
