use regex::Regex;

/// Characters that may appear inside a GitHub username token. Anything else
/// (or the string edge) separates tokens.
const USERNAME_BOUNDARY_CLASS: &str = r"[^A-Za-z0-9_-]";

/// Whether `username` appears in `message` as a whole token, ignoring case.
///
/// `octocat` matches `"deployed by octocat"` and `"(octocat)"` but not
/// `"octocategories"`.
#[must_use]
pub fn contains_github_username(message: &str, username: &str) -> bool {
    let pattern = format!(
        "(?i)(^|{USERNAME_BOUNDARY_CLASS}){}({USERNAME_BOUNDARY_CLASS}|$)",
        regex::escape(username)
    );

    Regex::new(&pattern).is_ok_and(|re| re.is_match(message))
}
