use nextfire_config::{Generation, validate_identifier};

/// Parse a Cloud Function name.
///
/// The name becomes a CommonJS export of `server.js`, so it must be a valid
/// JavaScript identifier: a letter, `_` or `$`, followed by letters, digits,
/// `_` or `$`.
///
/// # Examples
///
/// Valid: ssr, _next, $app, nextServer2
/// Invalid: 2fast, my-app, my.app, ""
pub fn parse_function_name(s: &str) -> Result<String, String> {
    validate_identifier(s)?;
    Ok(s.to_string())
}

/// Parse a Cloud Functions generation: `1`, `2`, `v1`, `v2`, `gcfv1`, `gcfv2`.
pub fn parse_generation(s: &str) -> Result<Generation, String> {
    s.parse()
}

/// Parse a deployment region. Only emptiness is rejected; Firebase validates
/// the region itself at deploy time.
pub fn parse_region(s: &str) -> Result<String, String> {
    let region = s.trim();
    if region.is_empty() {
        return Err("Region cannot be empty".to_string());
    }
    Ok(region.to_string())
}
