//! Author resolution: recover who wrote a message from the host's rendered DOM.
//!
//! The host client only renders the avatar/header on the first message of a
//! consecutive run by the same author, so a message without an avatar is
//! resolved by walking backward through preceding list items until one with
//! an avatar is found. Resolution is best-effort and never fails: fields that
//! cannot be read degrade to [`UNKNOWN`] or the empty string.
//!
//! All DOM access goes through the [`MessageView`] capability trait so this
//! module never touches elements or events directly and can be tested against
//! a plain in-memory tree.

#[cfg(test)]
#[path = "author_test.rs"]
mod author_test;

use serde::Serialize;

/// Placeholder for any field that could not be resolved from the host DOM.
pub const UNKNOWN: &str = "Unknown";

/// Read-only view of one rendered chat message.
///
/// Implementations decide how fields map onto the host contract; the resolver
/// only relies on the semantics below.
pub trait MessageView: Sized {
    /// Trimmed author display name from the message header, if rendered.
    /// Names inside a quoted/reply context must not be returned.
    fn username(&self) -> Option<String>;

    /// Source URL of the primary author avatar, if rendered. Avatars inside
    /// a quoted/reply context must not be returned.
    fn avatar_url(&self) -> Option<String>;

    /// Trimmed message body text.
    fn content(&self) -> Option<String>;

    /// ISO-8601 timestamp attribute of the message.
    fn timestamp(&self) -> Option<String>;

    /// The host's list-item identifier attribute.
    fn list_item_id(&self) -> Option<String>;

    /// The message inside the nearest preceding sibling list item that
    /// contains one, or `None` at the list boundary.
    fn prev_message(&self) -> Option<Self>;
}

/// Resolved author/message metadata. Produced fresh per [`resolve`] call and
/// never mutated afterwards.
///
/// `user_id` is either a decimal digit string or [`UNKNOWN`], never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorInfo {
    pub username: String,
    pub user_id: String,
    pub message_content: String,
    pub timestamp_iso: String,
    pub list_item_id: String,
}

/// Extract the numeric user id from an avatar URL.
///
/// Matches the digit run immediately following an `/avatars/` or `/users/`
/// path segment (the `/avatars/` form is checked first). Returns `None` when
/// neither segment is followed by at least one digit.
#[must_use]
pub fn parse_user_id(url: &str) -> Option<String> {
    digits_after(url, "/avatars/").or_else(|| digits_after(url, "/users/"))
}

/// The digit run following the first occurrence of `marker` that is actually
/// followed by digits.
fn digits_after(url: &str, marker: &str) -> Option<String> {
    let mut rest = url;
    while let Some(pos) = rest.find(marker) {
        rest = &rest[pos + marker.len()..];
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len > 0 {
            return Some(rest[..len].to_owned());
        }
    }
    None
}

/// Resolve the author and metadata of `message`.
///
/// Username and user id come from the message itself when it renders an
/// avatar; otherwise from the nearest preceding sibling message that does
/// (the start of the visual group). Content, timestamp, and list-item id
/// always come from `message`, not from the fallback ancestor.
#[must_use]
pub fn resolve<M: MessageView>(message: &M) -> AuthorInfo {
    let mut username = message.username();
    let mut user_id = message.avatar_url().and_then(|url| parse_user_id(&url));

    if user_id.is_none() {
        let mut cursor = message.prev_message();
        while let Some(prev) = cursor {
            if let Some(url) = prev.avatar_url() {
                // The avatar-bearing ancestor is the author of the visual
                // group; prefer its name over the (usually absent) local one.
                user_id = parse_user_id(&url);
                if let Some(name) = prev.username() {
                    username = Some(name);
                }
                break;
            }
            cursor = prev.prev_message();
        }
    }

    if user_id.is_none() {
        log::warn!("user id could not be resolved from the message or any preceding sibling");
    }

    AuthorInfo {
        username: username.unwrap_or_else(|| UNKNOWN.to_owned()),
        user_id: user_id.unwrap_or_else(|| UNKNOWN.to_owned()),
        message_content: message.content().unwrap_or_default(),
        timestamp_iso: message.timestamp().unwrap_or_default(),
        list_item_id: message.list_item_id().unwrap_or_default(),
    }
}

/// Extract the server/guild context id from a location pathname.
///
/// `segment` is the zero-based index into the `/`-separated path; for a path
/// like `/channels/<guild>/<channel>` the guild sits at segment 2. Missing or
/// empty segments resolve to [`UNKNOWN`].
#[must_use]
pub fn context_id_from_path(path: &str, segment: usize) -> String {
    path.split('/')
        .nth(segment)
        .filter(|s| !s.is_empty())
        .map_or_else(|| UNKNOWN.to_owned(), ToOwned::to_owned)
}
