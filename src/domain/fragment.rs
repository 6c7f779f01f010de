/// Whether a fragment name contains at least one of the allowed keywords.
pub fn has_allowed_keyword(name: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|key| name.contains(key.as_str()))
}

/// Collect the fragment names that carry none of the allowed keywords.
///
/// The entry named `ignore` is skipped. Result keeps input order.
pub fn malformed_fragments<'a, I>(names: I, ignore: &str, allowed: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| *name != ignore)
        .filter(|name| !has_allowed_keyword(name, allowed))
        .map(str::to_string)
        .collect()
}
