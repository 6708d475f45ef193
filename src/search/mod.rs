//! Search term sanitation for backend pattern-match clauses.

/// Characters with syntactic meaning in the backend's composite-filter
/// expression. They carry no meaning in a restaurant or menu search, so
/// they are dropped outright rather than escaped.
const STRIPPED: [char; 6] = [',', '(', ')', '\'', '"', '.'];

/// Escape user input so it can be embedded in a pattern-match clause.
///
/// Order matters: literal backslashes are doubled before the wildcard
/// escapes are inserted, otherwise the inserted escapes would themselves be
/// escaped and the wildcards would go live again.
pub fn sanitize(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect()
}
