//! Flash messages carried across a redirect in a signed cookie.
//!
//! A redirect to the list page sets a `flash` cookie holding
//! `<category>:<urlencoded text>`, signed with the server key. The list
//! handler takes it out of the jar and sends the removal back, so the message
//! is rendered by exactly one page. Unsigned or tampered values are ignored.

use crate::models::{Flash, FlashKind};
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

/// Name of the cookie a pending flash travels in.
pub const FLASH_COOKIE: &str = "flash";

/// Cookie value for `flash`.
pub fn encode_flash(flash: &Flash) -> String {
    format!(
        "{}:{}",
        flash.kind.as_str(),
        urlencoding::encode(&flash.message)
    )
}

/// Parse a cookie value written by [`encode_flash`].
pub fn decode_flash(value: &str) -> Option<Flash> {
    let (kind, message) = value.split_once(':')?;
    let kind = kind.parse::<FlashKind>().ok()?;
    let message = urlencoding::decode(message).ok()?.into_owned();
    if message.is_empty() {
        return None;
    }
    Some(Flash { kind, message })
}

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// 303 redirect to the list page with `flash` pending in `jar`.
pub fn redirect_to_list(jar: SignedCookieJar, flash: &Flash) -> (SignedCookieJar, Redirect) {
    (jar.add(flash_cookie(encode_flash(flash))), Redirect::to("/"))
}

/// Take the pending flash out of `jar`.
///
/// The returned jar carries the cookie removal and must be part of the
/// response.
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };
    let flash = decode_flash(cookie.value());
    (jar.remove(flash_cookie(String::new())), flash)
}
