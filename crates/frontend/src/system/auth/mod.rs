//! Credential access for authenticated backend calls.
//!
//! The session cookie is owned by the backend; the frontend only reads it.
//! Callers that need a bearer token take a [`TokenProvider`] instead of
//! reaching into `document.cookie` themselves, so tests can substitute one.

use std::rc::Rc;

use wasm_bindgen::JsCast;

const AUTH_COOKIE_NAME: &str = "auth_token";

/// Returns the current bearer token, if any.
pub type TokenProvider = Rc<dyn Fn() -> Option<String>>;

/// Extract a cookie value from a `document.cookie` style header string.
pub fn token_from_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name && !value.trim().is_empty() {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

/// Read the auth token from the browser cookie jar.
pub fn current_auth_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    token_from_cookie(&cookies, AUTH_COOKIE_NAME)
}

/// Production provider backed by the `auth_token` cookie.
pub fn cookie_token_provider() -> TokenProvider {
    Rc::new(current_auth_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        let header = "theme=dark; auth_token=abc123; lang=en";
        assert_eq!(token_from_cookie(header, "auth_token"), Some("abc123".to_string()));
    }

    #[test]
    fn missing_or_empty_token_yields_none() {
        assert_eq!(token_from_cookie("theme=dark", "auth_token"), None);
        assert_eq!(token_from_cookie("auth_token=; theme=dark", "auth_token"), None);
        assert_eq!(token_from_cookie("", "auth_token"), None);
    }

    #[test]
    fn does_not_match_cookie_name_prefixes() {
        let header = "auth_token_backup=zzz; auth_token=real";
        assert_eq!(token_from_cookie(header, "auth_token"), Some("real".to_string()));
    }
}
