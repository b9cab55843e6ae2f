//! Line-oriented parser for the solver's raw output dump.
//!
//! The format is a flat sequence of tagged blocks interleaved with
//! free-standing diagnostic lines:
//!
//! ```text
//! <Dataset 1.0.1>
//! <indep frequency 3>
//! +1.00000000000e+09
//! ...
//! </indep>
//! <dep 1.v frequency>
//! +9.98000000000e-01-j4.47000000000e-02
//! ...
//! </dep>
//! ```
//!
//! Parsing is total: malformed input never aborts. Bad value lines and
//! count mismatches become warnings, solver error lines become captured
//! errors, and input with no dataset at all yields a parse-error status.

use indexmap::IndexMap;
use num_complex::Complex64;

use crate::dataset::{Dataset, Status, Vector};

struct OpenBlock {
    name: String,
    dependencies: Vec<String>,
    independent: bool,
    declared: Option<usize>,
    values: Vec<Complex64>,
}

/// Parse a solver output dump. Total: all failure is reported through the
/// returned dataset's status, errors and warnings.
pub fn parse(raw: &str) -> Dataset {
    let mut ds = Dataset {
        status: Status::NotRun,
        version: None,
        vectors: IndexMap::new(),
        errors: Vec::new(),
        warnings: Vec::new(),
        raw: raw.to_string(),
    };

    if raw.trim().is_empty() {
        ds.status = Status::ParseError;
        ds.errors.push("empty output".to_string());
        return ds;
    }

    let mut block: Option<OpenBlock> = None;

    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(mut open) = block.take() {
            let closing = if open.independent { "</indep>" } else { "</dep>" };
            if line == closing {
                close_block(&mut ds, open);
            } else {
                match parse_value(line) {
                    Some(v) => open.values.push(v),
                    None => ds.warnings.push(format!(
                        "line {line_no}: unparseable value '{line}' in vector {}",
                        open.name
                    )),
                }
                block = Some(open);
            }
            continue;
        }

        if let Some(version) = header_version(line) {
            if ds.version.is_none() {
                ds.version = Some(version);
            }
            continue;
        }
        if let Some(open) = open_block(line, line_no, &mut ds.warnings) {
            block = Some(open);
            continue;
        }

        let lower = line.to_lowercase();
        if lower.starts_with("error") || lower.starts_with("fatal") || lower.contains("error:") {
            ds.errors.push(line.to_string());
        } else if lower.starts_with("warning") {
            ds.warnings.push(line.to_string());
        }
    }

    if let Some(open) = block {
        ds.warnings
            .push(format!("unterminated block for vector {}", open.name));
        close_block(&mut ds, open);
    }

    if ds.version.is_none() && ds.vectors.is_empty() {
        ds.status = Status::ParseError;
        if ds.errors.is_empty() {
            ds.errors.push("no valid dataset found".to_string());
        }
    } else if !ds.errors.is_empty() {
        ds.status = Status::Error;
    } else {
        ds.status = Status::Success;
    }
    ds
}

fn close_block(ds: &mut Dataset, open: OpenBlock) {
    if let Some(declared) = open.declared {
        if declared != open.values.len() {
            ds.warnings.push(format!(
                "vector {}: declared {declared} values, parsed {}",
                open.name,
                open.values.len()
            ));
        }
    }
    // Re-declaring a name replaces the earlier entry, so a name is never
    // independent and dependent at once.
    ds.vectors.insert(
        open.name,
        Vector {
            values: open.values,
            dependencies: open.dependencies,
            independent: open.independent,
        },
    );
}

/// `<Dataset <version>>` -> version token.
fn header_version(line: &str) -> Option<String> {
    let body = tag_body(line)?;
    let mut tokens = body.split_whitespace();
    if tokens.next() != Some("Dataset") {
        return None;
    }
    tokens.next().map(str::to_string)
}

/// `<indep <name> <count>>` or `<dep <name> <dep-name>*>`.
fn open_block(line: &str, line_no: usize, warnings: &mut Vec<String>) -> Option<OpenBlock> {
    let body = tag_body(line)?;
    let mut tokens = body.split_whitespace();
    match tokens.next()? {
        "indep" => {
            let name = tokens.next()?.to_string();
            let declared = match tokens.next() {
                Some(count) => match count.parse::<usize>() {
                    Ok(n) => Some(n),
                    Err(_) => {
                        warnings.push(format!(
                            "line {line_no}: bad element count '{count}' for vector {name}"
                        ));
                        None
                    }
                },
                None => {
                    warnings.push(format!(
                        "line {line_no}: missing element count for vector {name}"
                    ));
                    None
                }
            };
            Some(OpenBlock {
                name,
                dependencies: Vec::new(),
                independent: true,
                declared,
                values: Vec::new(),
            })
        }
        "dep" => {
            let name = tokens.next()?.to_string();
            Some(OpenBlock {
                name,
                dependencies: tokens.map(str::to_string).collect(),
                independent: false,
                declared: None,
                values: Vec::new(),
            })
        }
        _ => None,
    }
}

fn tag_body(line: &str) -> Option<&str> {
    line.strip_prefix('<')?.strip_suffix('>')
}

/// Parse one value line: a signed-exponential real, optionally followed
/// (no embedded whitespace) by a sign-prefixed `j` imaginary part, as in
/// `-1.5e-3+j2.0e0`.
pub(crate) fn parse_value(s: &str) -> Option<Complex64> {
    let s = s.trim();
    if s.is_empty() || s.contains(char::is_whitespace) {
        return None;
    }
    match imag_marker(s) {
        Some(pos) => {
            let re: f64 = s[..pos].parse().ok()?;
            let sign = if s.as_bytes()[pos] == b'-' { -1.0 } else { 1.0 };
            let im: f64 = s[pos + 2..].parse().ok()?;
            Some(Complex64::new(re, sign * im))
        }
        None => {
            let re: f64 = s.parse().ok()?;
            Some(Complex64::new(re, 0.0))
        }
    }
}

/// Byte offset of the `+`/`-` introducing the `j` marker, if present. The
/// search starts at 1 so the real part's own sign is never taken.
fn imag_marker(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (1..s.len().saturating_sub(1))
        .find(|&i| (bytes[i] == b'+' || bytes[i] == b'-') && bytes[i + 1] == b'j')
}
