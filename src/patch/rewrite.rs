//! Splicing the replacement link into the document.

use crate::utils::html::escape_attr;

use super::locate::StyleBlock;

/// Build the replacement `<link>` element for a stylesheet href.
pub fn link_tag(href: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{}">"#, escape_attr(href))
}

/// Replace `block` in `text` with a stylesheet link pointing at `href`.
///
/// Everything outside the block is preserved byte for byte.
pub fn apply(text: &str, block: StyleBlock, href: &str) -> String {
    let link = link_tag(href);
    let mut out = String::with_capacity(text.len() - (block.end - block.start) + link.len());
    out.push_str(&text[..block.start]);
    out.push_str(&link);
    out.push_str(&text[block.end..]);
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::locate_style_block;

    #[test]
    fn test_link_tag_default_href() {
        assert_eq!(
            link_tag("css/styles.css"),
            r#"<link rel="stylesheet" href="css/styles.css">"#
        );
    }

    #[test]
    fn test_link_tag_escapes_href() {
        assert_eq!(
            link_tag(r#"a"b.css"#),
            r#"<link rel="stylesheet" href="a&quot;b.css">"#
        );
    }

    #[test]
    fn test_apply_replaces_block() {
        let text = "<html><style>body{color:red}</style></html>";
        let block = locate_style_block(text).unwrap().unwrap();

        assert_eq!(
            apply(text, block, "css/styles.css"),
            r#"<html><link rel="stylesheet" href="css/styles.css"></html>"#
        );
    }

    #[test]
    fn test_apply_preserves_surrounding_content() {
        let text = "<!DOCTYPE html>\n<html>\n<head>\n<style>\nh1 { color: blue; }\n</style>\n</head>\n<body>\n<h1>Hi</h1>\n</body>\n</html>\n";
        let block = locate_style_block(text).unwrap().unwrap();
        let patched = apply(text, block, "css/styles.css");

        assert!(patched.starts_with("<!DOCTYPE html>\n<html>\n<head>\n"));
        assert!(patched.ends_with("\n</head>\n<body>\n<h1>Hi</h1>\n</body>\n</html>\n"));
        assert!(patched.contains(r#"<link rel="stylesheet" href="css/styles.css">"#));
        assert!(!patched.contains("<style>"));
        assert!(!patched.contains("</style>"));
    }

    #[test]
    fn test_apply_custom_href() {
        let text = "<style>a{}</style>";
        let block = locate_style_block(text).unwrap().unwrap();

        assert_eq!(
            apply(text, block, "assets/site.css"),
            r#"<link rel="stylesheet" href="assets/site.css">"#
        );
    }
}
