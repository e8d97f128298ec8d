//! Markup snippets linking a thumbnail to its original.
//!
//! One [`MarkupStyle`] is chosen per run and every input is rendered with it:
//!
//! ```text
//! markdown  [![Title](a/t_b.png)](a/b.png)
//! hugo      {{< figure src="a/t_b.png" link="a/b.png" title="" >}}
//! ```
//!
//! Paths are interpolated as given, without escaping or validation.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Blog system the snippet is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MarkupStyle {
    /// A Markdown image wrapped in a link to the original.
    #[default]
    Markdown,
    /// Hugo's `figure` shortcode.
    Hugo,
}

impl MarkupStyle {
    pub fn render(self, original: &Path, thumbnail: &Path) -> String {
        let (original, thumbnail) = (original.display(), thumbnail.display());
        match self {
            Self::Markdown => format!("[![Title]({thumbnail})]({original})"),
            Self::Hugo => {
                format!(r#"{{{{< figure src="{thumbnail}" link="{original}" title="" >}}}}"#)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_links_thumbnail_to_original() {
        let line = MarkupStyle::Markdown.render(Path::new("a/b.png"), Path::new("a/t_b.png"));
        assert_eq!(line, "[![Title](a/t_b.png)](a/b.png)");
    }

    #[test]
    fn hugo_figure_shortcode() {
        let line = MarkupStyle::Hugo.render(Path::new("a/b.png"), Path::new("a/t_b.png"));
        assert_eq!(line, r#"{{< figure src="a/t_b.png" link="a/b.png" title="" >}}"#);
    }

    #[test]
    fn paths_are_not_escaped() {
        let line = MarkupStyle::Markdown.render(
            Path::new("my photos/b (1).jpg"),
            Path::new("thumbs/b (1).jpg"),
        );
        assert_eq!(line, "[![Title](thumbs/b (1).jpg)](my photos/b (1).jpg)");
    }

    #[test]
    fn default_is_markdown() {
        assert_eq!(MarkupStyle::default(), MarkupStyle::Markdown);
    }

    #[test]
    fn parses_names_case_insensitively() {
        use clap::ValueEnum;
        assert_eq!(MarkupStyle::from_str("HUGO", true), Ok(MarkupStyle::Hugo));
        assert_eq!(MarkupStyle::from_str("Markdown", true), Ok(MarkupStyle::Markdown));
        assert!(MarkupStyle::from_str("wordpress", true).is_err());
    }

    #[test]
    fn deserializes_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            style: MarkupStyle,
        }
        let w: Wrapper = toml::from_str(r#"style = "hugo""#).unwrap();
        assert_eq!(w.style, MarkupStyle::Hugo);
    }
}
