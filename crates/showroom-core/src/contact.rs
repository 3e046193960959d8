//! `wa.me` deep links for "contact the dealer" buttons.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in a URI component (RFC 3986 unreserved set
/// plus the sub-delims browsers keep in `encodeURIComponent`).
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The inquiry text pre-filled in the chat.
#[must_use]
pub fn contact_message(item_name: &str) -> String {
    format!("Halo, saya tertarik dengan mobil {item_name}. Bisa minta informasi lebih lanjut?")
}

/// Builds a `wa.me` link to `number` with the inquiry for `item_name`.
#[must_use]
pub fn contact_link(number: &str, item_name: &str) -> String {
    let encoded = utf8_percent_encode(&contact_message(item_name), URI_COMPONENT).to_string();
    format!("https://wa.me/{number}?text={encoded}")
}
