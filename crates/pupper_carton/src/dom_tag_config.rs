//! HTML tag and doctype tables.

use phf::{phf_map, phf_set};

/// Elements that never have children or a closing tag.
static VOID_TAGS: phf::Set<&'static str> = phf_set! {
    "area",
    "base",
    "br",
    "col",
    "embed",
    "hr",
    "img",
    "input",
    "link",
    "meta",
    "param",
    "source",
    "track",
    "wbr",
};

/// Check if a tag is a void element (`<br>`, `<img>`, ...).
#[inline]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(tag)
}

/// Doctype shortcuts accepted after `doctype`.
static DOCTYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "html" => "<!DOCTYPE html>",
    "xml" => r#"<?xml version="1.0" encoding="utf-8" ?>"#,
    "transitional" => r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#,
    "strict" => r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#,
    "frameset" => r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Frameset//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd">"#,
    "1.1" => r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">"#,
    "basic" => r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML Basic 1.1//EN" "http://www.w3.org/TR/xhtml-basic/xhtml-basic11.dtd">"#,
    "mobile" => r#"<!DOCTYPE html PUBLIC "-//WAPFORUM//DTD XHTML Mobile 1.2//EN" "http://www.openmobilealliance.org/tech/DTD/xhtml-mobile12.dtd">"#,
    "plist" => r#"<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">"#,
};

/// Full declaration for a doctype shortcut, matched case-insensitively.
pub fn doctype_declaration(name: &str) -> Option<&'static str> {
    DOCTYPES.get(name.to_ascii_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_tags() {
        assert!(is_void_tag("br"));
        assert!(is_void_tag("img"));
        assert!(is_void_tag("input"));
        assert!(!is_void_tag("div"));
        assert!(!is_void_tag("template"));
        // Lookups are case-sensitive, like the pug renderer
        assert!(!is_void_tag("BR"));
    }

    #[test]
    fn test_doctype_shortcuts() {
        assert_eq!(doctype_declaration("html"), Some("<!DOCTYPE html>"));
        assert_eq!(doctype_declaration("HTML"), Some("<!DOCTYPE html>"));
        assert!(doctype_declaration("xml").is_some_and(|d| d.starts_with("<?xml")));
        assert!(doctype_declaration("strict").is_some_and(|d| d.contains("Strict")));
        assert_eq!(doctype_declaration("custom"), None);
    }
}
