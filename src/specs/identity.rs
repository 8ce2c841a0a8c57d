// src/specs/identity.rs

use crate::core::html::{ImgAttr, attr, first_img_tag, tags_to_spaces};
use crate::core::sanitize::{last_token, non_empty, normalize_ws};
use crate::record::Identity;

/// Read (username, avatar, uid) from a sender/receiver cell.
///
/// The avatar `<img>` carries all three (`alt`, `src`, `data-uid`). When it has no
/// usable `alt`, or there is no image at all, the last word of the cell's text
/// becomes the username. Avatar and uid never fall back to text.
pub fn extract_identity(td_html: &str) -> Identity {
    let mut id = Identity::default();

    if let Some(tag) = first_img_tag(td_html) {
        id.username = attr(tag, ImgAttr::Alt).and_then(non_empty);
        id.avatar = attr(tag, ImgAttr::Src).and_then(non_empty);
        id.uid = attr(tag, ImgAttr::Uid).and_then(non_empty);
    }

    if id.username.is_none() {
        let text = normalize_ws(&tags_to_spaces(td_html));
        id.username = last_token(&text).map(|t| s!(t));
    }

    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_supplies_all_three() {
        let td = r#"<img src="https://x/a.png" alt="alice" data-uid="1001" />"#;
        let id = extract_identity(td);
        assert_eq!(id.username.as_deref(), Some("alice"));
        assert_eq!(id.avatar.as_deref(), Some("https://x/a.png"));
        assert_eq!(id.uid.as_deref(), Some("1001"));
    }

    #[test]
    fn alt_wins_over_trailing_text() {
        let td = r#"<a href="/member/alice"><img src="a.png" alt="alice" class="avatar"></a> Alice"#;
        assert_eq!(extract_identity(td).username.as_deref(), Some("alice"));
    }

    #[test]
    fn text_only_cell_uses_last_token() {
        let id = extract_identity("  Foo   Bar  ");
        assert_eq!(id.username.as_deref(), Some("Bar"));
        assert_eq!(id.avatar, None);
        assert_eq!(id.uid, None);
    }

    #[test]
    fn image_without_alt_falls_back_to_text_but_keeps_src() {
        let td = r#"<img src="https://x/b.png" data-uid="7"><a href="/member/bob">bob</a>"#;
        let id = extract_identity(td);
        assert_eq!(id.username.as_deref(), Some("bob"));
        assert_eq!(id.avatar.as_deref(), Some("https://x/b.png"));
        assert_eq!(id.uid.as_deref(), Some("7"));
    }

    #[test]
    fn tags_separate_words() {
        // Tags become spaces, so "x" and "carol" stay apart
        let id = extract_identity("<b>x</b><i>carol</i>");
        assert_eq!(id.username.as_deref(), Some("carol"));
    }

    #[test]
    fn blank_alt_counts_as_missing() {
        let id = extract_identity(r#"<img alt="  " src="c.png"> dave"#);
        assert_eq!(id.username.as_deref(), Some("dave"));
    }

    #[test]
    fn empty_cell_is_all_none() {
        assert_eq!(extract_identity(""), Identity::default());
        assert_eq!(extract_identity("<span></span>"), Identity::default());
    }
}
