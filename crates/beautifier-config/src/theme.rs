/// Snippet window theme: token palette and code window chrome colors.
use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Visual style for one token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenStyle {
    pub color: HexColor,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl TokenStyle {
    pub const fn plain(color: HexColor) -> Self {
        Self {
            color,
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(color: HexColor) -> Self {
        Self {
            color,
            bold: true,
            italic: false,
        }
    }

    pub const fn italic(color: HexColor) -> Self {
        Self {
            color,
            bold: false,
            italic: true,
        }
    }
}

const PURPLE_400: HexColor = HexColor::rgb(0xc0, 0x84, 0xfc);
const ORANGE_400: HexColor = HexColor::rgb(0xfb, 0x92, 0x3c);
const GREEN_400: HexColor = HexColor::rgb(0x4a, 0xde, 0x80);
const ZINC_100: HexColor = HexColor::rgb(0xf4, 0xf4, 0xf5);
const ZINC_400: HexColor = HexColor::rgb(0xa1, 0xa1, 0xaa);
const ZINC_500: HexColor = HexColor::rgb(0x71, 0x71, 0x7a);
const ZINC_600: HexColor = HexColor::rgb(0x52, 0x52, 0x5b);
const YELLOW_300: HexColor = HexColor::rgb(0xfd, 0xe0, 0x47);
const BLUE_300: HexColor = HexColor::rgb(0x93, 0xc5, 0xfd);
const ROSE_400: HexColor = HexColor::rgb(0xfb, 0x71, 0x85);
const AMBER_200: HexColor = HexColor::rgb(0xfd, 0xe6, 0x8a);
const SKY_300: HexColor = HexColor::rgb(0x7d, 0xd3, 0xfc);

/// Per-classification styles, keyed by the classification tag names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenColors {
    pub keyword: TokenStyle,
    pub string: TokenStyle,
    pub number: TokenStyle,
    pub comment: TokenStyle,
    pub function: TokenStyle,
    pub class_name: TokenStyle,
    pub tag: TokenStyle,
    pub attr: TokenStyle,
    pub operator: TokenStyle,
    pub punctuation: TokenStyle,
    pub boolean: TokenStyle,
    pub builtin: TokenStyle,
    pub variable: TokenStyle,
    pub property: TokenStyle,
    pub selector: TokenStyle,
    pub constant: TokenStyle,
    pub char: TokenStyle,
}

impl Default for TokenColors {
    fn default() -> Self {
        Self {
            keyword: TokenStyle::bold(PURPLE_400),
            string: TokenStyle::plain(ORANGE_400),
            number: TokenStyle::plain(GREEN_400),
            comment: TokenStyle::italic(ZINC_500),
            function: TokenStyle::plain(YELLOW_300),
            class_name: TokenStyle::bold(BLUE_300),
            tag: TokenStyle::plain(ROSE_400),
            attr: TokenStyle::plain(AMBER_200),
            operator: TokenStyle::plain(SKY_300),
            punctuation: TokenStyle::plain(ZINC_400),
            boolean: TokenStyle::plain(ROSE_400),
            builtin: TokenStyle::italic(BLUE_300),
            variable: TokenStyle::plain(ZINC_100),
            property: TokenStyle::plain(AMBER_200),
            selector: TokenStyle::plain(ROSE_400),
            constant: TokenStyle::plain(ROSE_400),
            char: TokenStyle::plain(ORANGE_400),
        }
    }
}

impl TokenColors {
    /// Looks up a style by classification tag (`"class-name"`, `"attr"`, ...).
    /// Unknown tags have no style.
    pub fn by_tag(&self, tag: &str) -> Option<&TokenStyle> {
        let style = match tag {
            "keyword" => &self.keyword,
            "string" => &self.string,
            "number" => &self.number,
            "comment" => &self.comment,
            "function" => &self.function,
            "class-name" => &self.class_name,
            "tag" => &self.tag,
            "attr" => &self.attr,
            "operator" => &self.operator,
            "punctuation" => &self.punctuation,
            "boolean" => &self.boolean,
            "builtin" => &self.builtin,
            "variable" => &self.variable,
            "property" => &self.property,
            "selector" => &self.selector,
            "constant" => &self.constant,
            "char" => &self.char,
            _ => return None,
        };
        Some(style)
    }
}

/// Colors of the code window drawn in snippet mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetTheme {
    pub window_bg: HexColor,
    pub window_border: HexColor,
    pub header_bg: HexColor,
    pub header_separator: HexColor,
    pub title_color: HexColor,
    pub title_suffix_color: HexColor,
    pub text_color: HexColor,
    pub traffic_lights: [HexColor; 3],
    pub tokens: TokenColors,
}

impl Default for SnippetTheme {
    fn default() -> Self {
        Self {
            window_bg: HexColor::rgba(0x1a, 0x1b, 0x26, 242),
            window_border: HexColor::rgba(255, 255, 255, 26),
            header_bg: HexColor::rgba(255, 255, 255, 13),
            header_separator: HexColor::rgba(255, 255, 255, 13),
            title_color: ZINC_400,
            title_suffix_color: ZINC_600,
            text_color: ZINC_100,
            traffic_lights: [
                HexColor::rgb(0xff, 0x5f, 0x56),
                HexColor::rgb(0xff, 0xbd, 0x2e),
                HexColor::rgb(0x27, 0xc9, 0x3f),
            ],
            tokens: TokenColors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_round_trip() {
        let theme = SnippetTheme::default();
        let json = serde_json::to_string_pretty(&theme).unwrap();
        let parsed: SnippetTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn test_partial_token_colors_fill_defaults() {
        let json = r##"{"keyword": {"color": "#FF0000"}}"##;
        let colors: TokenColors = serde_json::from_str(json).unwrap();
        assert_eq!(colors.keyword, TokenStyle::plain(HexColor::rgb(255, 0, 0)));
        assert_eq!(colors.string, TokenColors::default().string);
    }

    #[test]
    fn test_by_tag_known_and_unknown() {
        let colors = TokenColors::default();
        assert_eq!(colors.by_tag("class-name"), Some(&colors.class_name));
        assert_eq!(colors.by_tag("attr"), Some(&colors.attr));
        assert!(colors.by_tag("regex").is_none());
        assert!(colors.by_tag("").is_none());
    }

    #[test]
    fn test_comment_style_is_italic() {
        let colors = TokenColors::default();
        assert!(colors.comment.italic);
        assert!(!colors.comment.bold);
        assert!(colors.keyword.bold);
    }
}
