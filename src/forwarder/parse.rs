use crate::{Error, Result};

/// Returns the segment between the first and second `=` of a `key=value`
/// body. The key is not checked and the value is not URL-decoded, so
/// `text=a=b` yields `a`.
pub fn extract_text(body: &str) -> Result<&str> {
    body.split('=')
        .nth(1)
        .ok_or_else(|| Error::malformed_body(body))
}
