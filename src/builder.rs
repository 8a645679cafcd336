use super::*;

/// Plans Google Docs update requests from Markdown input.
///
/// Each [`convert`](MarkdownConverter::convert) call runs on fresh state, so a
/// configured converter can be cloned and reused freely.
#[derive(Clone, Debug, Default)]
pub struct MarkdownConverter {
    pub(crate) config: Config,
}

impl MarkdownConverter {
    /// Create a [`MarkdownConverter`] with a custom [`Config`].
    ///
    /// ```rust
    /// # use md2gdocs::{Config, MarkdownConverter};
    /// let converter = MarkdownConverter::with_config(Config {
    ///     bold_header_rows: false,
    ///     ..Default::default()
    /// });
    /// ```
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Configure the font used for inline code and fenced code blocks.
    pub fn code_font_family(&mut self, family: impl Into<String>) -> &mut Self {
        self.config.code_font_family = family.into();
        self
    }

    /// Configure whether the first table row is bolded when the source
    /// declares a header.
    pub fn bold_header_rows(&mut self, bold: bool) -> &mut Self {
        self.config.bold_header_rows = bold;
        self
    }
}
