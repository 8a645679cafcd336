use super::*;

mod convert_states;

pub(crate) use convert_states::ConvertState;

impl MarkdownConverter {
    /// Convert Markdown into an ordered list of Docs update requests.
    ///
    /// `start_index` is the 1-based body position the content is inserted at.
    /// The returned list is self-consistent: applied in order as one
    /// `batchUpdate`, every index is valid at the moment the service reaches
    /// it. Splitting the list across batches breaks that guarantee (bullet
    /// creation removes the TAB characters that encode list nesting, and the
    /// later requests are planned around exactly those removals).
    ///
    /// ```rust
    /// # use md2gdocs::MarkdownConverter;
    /// let requests = MarkdownConverter::default().convert("Here is **bold** text", 1)?;
    /// assert_eq!(requests.len(), 2);
    /// # Ok::<(), md2gdocs::ConvertError>(())
    /// ```
    pub fn convert(
        self,
        markdown: &str,
        start_index: usize,
    ) -> Result<Vec<Request>, ConvertError> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        // Index 0 addresses the body start marker itself; the service only
        // accepts writes from 1 on.
        let start_index = start_index.max(1);

        let parser = Parser::new_ext(markdown, options);
        ConvertState::new(self.config, start_index).convert(parser)
    }
}
