//! Embed snippet generation.

use crate::config::embed;
use crate::models::HexColor;

/// Embed URL for a design with the given background.
pub fn embed_url(background: &HexColor) -> String {
    let bg = String::from(js_sys::encode_uri_component(background.as_str()));
    format!("{}?bg={bg}", embed::BASE_URL)
}

/// `<iframe>` snippet referencing the design.
pub fn iframe_snippet(background: &HexColor) -> String {
    iframe_tag(&embed_url(background))
}

fn iframe_tag(src: &str) -> String {
    format!(
        r#"<iframe src="{src}" width="{}" height="{}" frameborder="0"></iframe>"#,
        embed::WIDTH,
        embed::HEIGHT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iframe_tag() {
        assert_eq!(
            iframe_tag("https://gridforge.app/embed?bg=%23fff"),
            r#"<iframe src="https://gridforge.app/embed?bg=%23fff" width="100%" height="500" frameborder="0"></iframe>"#
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_iframe_snippet() {
        let color = HexColor::parse("#ABCDEF").unwrap();
        assert_eq!(
            iframe_snippet(&color),
            r#"<iframe src="https://gridforge.app/embed?bg=%23ABCDEF" width="100%" height="500" frameborder="0"></iframe>"#
        );
    }

    #[wasm_bindgen_test]
    fn test_embed_url_keeps_case() {
        let color = HexColor::parse("#abc").unwrap();
        assert_eq!(embed_url(&color), "https://gridforge.app/embed?bg=%23abc");
    }
}
