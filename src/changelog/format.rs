/// Heading every generated changelog starts with
pub const CHANGELOG_HEADER: &str = "## Changelog\n\n";

/// Render entries as release notes: the header, then one entry per line
pub fn format_changelog<S: AsRef<str>>(lines: &[S]) -> String {
    let body: Vec<&str> = lines.iter().map(|l| l.as_ref()).collect();
    format!("{}{}", CHANGELOG_HEADER, body.join("\n"))
}
