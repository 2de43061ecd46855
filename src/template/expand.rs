// ABOUTME: Shell-style environment variable substitution.
// ABOUTME: Replaces $NAME and ${NAME}; undefined variables become empty strings.

/// Substitute `$NAME` and `${NAME}` references in `input` using `lookup`.
///
/// `$NAME` takes the longest run of ASCII letters, digits and underscores.
/// `${...}` looks up everything between the braces. A `$` followed by
/// anything else, or a `${` with no closing brace, is kept as written.
/// Names `lookup` does not know resolve to the empty string.
pub fn expand_vars<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => {
                    out.push_str(&lookup(&braced[..end]).unwrap_or_default());
                    rest = &braced[end + 1..];
                }
                None => {
                    out.push('$');
                    rest = after;
                }
            }
            continue;
        }

        let name_len = after
            .find(|c: char| !is_name_char(c))
            .unwrap_or(after.len());
        if name_len == 0 {
            out.push('$');
            rest = after;
        } else {
            out.push_str(&lookup(&after[..name_len]).unwrap_or_default());
            rest = &after[name_len..];
        }
    }

    out.push_str(rest);
    out
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lookup against the current process environment.
pub(crate) fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// [`expand_vars`] against the current process environment.
pub fn expand_env(input: &str) -> String {
    expand_vars(input, env_lookup)
}
