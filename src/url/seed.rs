use crate::url::authority;
use crate::ValidationError;
use url::Url;

/// Validates a seed URL typed by the user
///
/// The seed must start with `http://` or `https://`, parse as a URL and carry
/// a host. Surrounding whitespace is trimmed.
///
/// # Returns
///
/// * `Ok(Url)` - The parsed seed
/// * `Err(ValidationError)` - The seed cannot be crawled
pub fn validate_seed_url(input: &str) -> Result<Url, ValidationError> {
    let input = input.trim();

    if !(input.starts_with("http://") || input.starts_with("https://")) {
        return Err(ValidationError::InvalidScheme(input.to_string()));
    }

    let url = Url::parse(input).map_err(|e| ValidationError::MalformedUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    if authority(&url).is_none() {
        return Err(ValidationError::MissingHost(input.to_string()));
    }

    Ok(url)
}
