//! Share links
//!
//! Tokens travel in the fragment of a URL (the part after `#`), which
//! browsers never send to the server. The token is percent-encoded with a
//! strict set so `+`, `/` and `=` survive every copy/paste path intact.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use url::Url;

use crate::crypto::Token;
use crate::error::{SealError, SealResult};

/// Build a share link by placing the token in the fragment of `base`
///
/// Any fragment already on `base` is replaced. Path and query are kept.
pub fn build_link(base: &str, token: &Token) -> SealResult<String> {
    let mut url = parse_base(base)?;

    let encoded = utf8_percent_encode(token.as_str(), NON_ALPHANUMERIC).to_string();
    url.set_fragment(Some(&encoded));

    Ok(url.into())
}

/// Check that `base` can carry share links
pub fn validate_base(base: &str) -> SealResult<()> {
    parse_base(base).map(|_| ())
}

fn parse_base(base: &str) -> SealResult<Url> {
    let url = Url::parse(base)
        .map_err(|e| SealError::Link(format!("Invalid base URL '{}': {}", base, e)))?;

    if url.cannot_be_a_base() {
        return Err(SealError::Link(format!(
            "Base URL '{}' cannot carry a fragment link",
            base
        )));
    }

    Ok(url)
}

/// Pull a token out of a share link, or accept a bare token
///
/// The result is only percent-decoded, never validated. Opening the token
/// is what tells whether it is any good.
pub fn extract_token(input: &str) -> SealResult<Token> {
    let input = input.trim();

    let raw = match Url::parse(input) {
        Ok(url) => match url.fragment() {
            Some(fragment) if !fragment.is_empty() => fragment.to_string(),
            _ => {
                return Err(SealError::Link(
                    "Link has no fragment to read a token from".to_string(),
                ))
            }
        },
        Err(_) => input.to_string(),
    };

    let decoded = percent_decode_str(&raw)
        .decode_utf8()
        .map_err(|e| SealError::Link(format!("Token is not valid UTF-8 after decoding: {}", e)))?;

    Ok(Token::from(decoded.into_owned()))
}
