//! Page URL construction.

use url::{Position, Url};

/// Append `path` to the path of `base`.
///
/// Exactly one `/` separates the existing path from the appended one, no
/// matter whether `path` starts with a separator. `path` is spliced in as
/// written and never re-parsed, so dot segments, backslashes and escapes
/// reach the server unchanged. Query and fragment of `base` are preserved.
/// Works the same for `app://` and `http(s)://`.
pub(crate) fn join_path(base: &Url, path: &str) -> String {
    let prefix = base.path().strip_suffix('/').unwrap_or(base.path());
    let segment = path.strip_prefix('/').unwrap_or(path);
    format!(
        "{}{prefix}/{segment}{}",
        &base[..Position::BeforePath],
        &base[Position::AfterPath..]
    )
}

/// Build the page URL reported for an event at `path` on `domain`.
pub(crate) fn page_url(domain: &Url, path: &str) -> String {
    join_path(domain, path)
}
