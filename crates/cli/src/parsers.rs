/// Normalise `--ext` input (`cs`, `.cs`, `*.cs`) to a file-name suffix with a leading dot.
///
/// # Errors
/// Returns an error message for an empty extension or one containing a path separator.
pub fn parse_suffix(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    let ext = trimmed
        .strip_prefix("*.")
        .or_else(|| trimmed.strip_prefix('.'))
        .unwrap_or(trimmed);
    if ext.is_empty() {
        return Err("Extension must not be empty".to_string());
    }
    if ext.contains(['/', '\\']) {
        return Err(format!("Invalid extension: {s}"));
    }
    Ok(format!(".{ext}"))
}

/// Parse a strictly positive depth.
///
/// # Errors
/// Returns an error message if the value is not a positive integer.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("Value must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid number: {s}")),
    }
}
