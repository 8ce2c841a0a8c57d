// src/core/html.rs
// Textual HTML helpers tailored to the tx page. No DOM: fixed patterns only.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static FIELD_ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<tr>\s*<td[^>]*>\s*([^<]+)\s*</td>\s*<td[^>]*>(.*?)</td>\s*</tr>")
        .expect("field row pattern")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern"));
static IMG_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<img[^>]*>").expect("img pattern"));
static ALT_ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\balt="([^"]+)""#).expect("alt pattern"));
static SRC_ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\bsrc="([^"]+)""#).expect("src pattern"));
static UID_ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"data-uid="([^"]+)""#).expect("uid pattern"));

/// Label → raw value HTML for every `<tr><td>LABEL</td><td>VALUE</td></tr>` on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldTable {
    fields: HashMap<String, String>,
}

impl FieldTable {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.fields.contains_key(label)
    }

    /// Bilingual lookup. The first label wins whenever it is present, even if its value is empty.
    pub fn lookup(&self, (primary, fallback): (&str, &str)) -> Option<&str> {
        self.get(primary).or_else(|| self.get(fallback))
    }

    pub fn has_any(&self, (primary, fallback): (&str, &str)) -> bool {
        self.contains(primary) || self.contains(fallback)
    }
}

/// Scan every two-cell row. Labels and values are trimmed; values keep their inner tags.
/// A repeated label overwrites the earlier row.
pub fn field_table(doc: &str) -> FieldTable {
    let mut fields = HashMap::new();
    for caps in FIELD_ROW_RE.captures_iter(doc) {
        let label = caps[1].trim().to_string();
        let value = caps[2].trim().to_string();
        fields.insert(label, value);
    }
    FieldTable { fields }
}

/// Remove everything that looks like `<...>`. Not nesting-aware.
pub fn strip_tags(s: &str) -> String {
    TAG_RE.replace_all(s, "").into_owned()
}

/// Like [`strip_tags`], but each tag becomes a space so adjacent text stays separated.
pub fn tags_to_spaces(s: &str) -> String {
    TAG_RE.replace_all(s, " ").into_owned()
}

/// First `<img ...>` tag in `s`, as written.
pub fn first_img_tag(s: &str) -> Option<&str> {
    IMG_TAG_RE.find(s).map(|m| m.as_str())
}

/// Avatar `<img>` attributes the identity cell carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImgAttr {
    Alt,
    Src,
    Uid,
}

impl ImgAttr {
    fn pattern(self) -> &'static Regex {
        match self {
            ImgAttr::Alt => &ALT_ATTR_RE,
            ImgAttr::Src => &SRC_ATTR_RE,
            ImgAttr::Uid => &UID_ATTR_RE,
        }
    }
}

/// First non-empty double-quoted value of `which` inside a single tag.
/// `alt`/`src` must start at a word boundary: `src` never matches inside `xsrc`.
pub fn attr(tag: &str, which: ImgAttr) -> Option<&str> {
    which
        .pattern()
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
