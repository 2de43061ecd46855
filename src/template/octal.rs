// ABOUTME: Rewrites YAML 1.1 octal integers (e.g. `mode: 0440`) as decimal.
// ABOUTME: serde_yaml reads them as strings, but compose loaders treat them as numbers.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// A line opening a literal or folded block scalar: `key: |`, `- >-`.
static BLOCK_SCALAR_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:-\s+)*(?:[^#\s][^#]*?:\s+)?[|>][-+1-9]*\s*(?:#.*)?$")
        .expect("invalid block scalar regex")
});

/// A plain leading-zero octal value after an optional key or sequence dash.
static OCTAL_SCALAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?P<lead>\s*(?:-\s+)*(?:[^#\s'"\[{][^#'"]*?:\s+)?)(?P<num>[-+]?0[0-7]+)(?P<tail>\s*(?:#.*)?)$"#,
    )
    .expect("invalid octal scalar regex")
});

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn octal_to_decimal(literal: &str) -> Option<i64> {
    let (negative, digits) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let value = i64::from_str_radix(digits, 8).ok()?;
    Some(if negative { -value } else { value })
}

/// Replace block-style plain scalars such as `0644` with their decimal value.
///
/// Quoted scalars, comments and the contents of `|`/`>` block scalars are
/// left alone. Flow collections (`{mode: 0644}`) are not rewritten.
pub fn normalize_octal_ints(input: &str) -> Cow<'_, str> {
    let mut out = String::with_capacity(input.len());
    let mut changed = false;
    let mut block_indent: Option<usize> = None;

    for raw in input.split_inclusive('\n') {
        let line = raw.trim_end_matches(['\n', '\r']);
        let ending = &raw[line.len()..];

        if let Some(parent) = block_indent {
            if line.trim().is_empty() || indent_of(line) > parent {
                out.push_str(raw);
                continue;
            }
            block_indent = None;
        }

        if BLOCK_SCALAR_START.is_match(line) {
            block_indent = Some(indent_of(line));
            out.push_str(raw);
            continue;
        }

        let rewritten = OCTAL_SCALAR.captures(line).and_then(|caps| {
            octal_to_decimal(&caps["num"])
                .map(|value| format!("{}{}{}", &caps["lead"], value, &caps["tail"]))
        });

        match rewritten {
            Some(line) => {
                changed = true;
                out.push_str(&line);
                out.push_str(ending);
            }
            None => out.push_str(raw),
        }
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(input)
    }
}
