use super::*;

mod events;
mod helpers;

pub(crate) use helpers::*;

/// An open inline style and where it began.
#[derive(Debug)]
pub(crate) struct StyleFrame {
    start: usize,
    style: TextStyle,
}

/// All state of one conversion.
///
/// Constructed fresh per `convert` call, mutated only by the event handlers,
/// read once by the assembler. There is no shared state between calls.
pub(crate) struct ConvertState<'i> {
    /// 1-based Docs cursor; every planner advances through this.
    cursor: usize,
    start_index: usize,
    /// Plain text destined for the single opening insert.
    buffer: String,
    /// Whether the current line holds content still missing its `\n`.
    line_has_content: bool,
    /// Open inline style frames, innermost last.
    style_stack: Vec<StyleFrame>,
    /// Mirror of the parser's open tags; every close must match.
    nested_context: Vec<Tag<'i>>,
    paragraph_start: Option<usize>,
    heading: Option<(HeadingLevel, usize)>,
    code_start: Option<usize>,
    /// Start cursor of each open blockquote, outermost first.
    blockquotes: Vec<usize>,
    /// Kinds of the open lists, outermost first.
    list_stack: Vec<ListKind>,
    top_list: Option<TopLevelList>,
    /// TABs owed to the current list item, paid on its first append.
    pending_item_tabs: Option<usize>,
    /// Set when a top-level list closes; the next block clears the bullet
    /// formatting the service would otherwise propagate onto it.
    just_exited_list: bool,
    /// Depth of open image tags; alt text is suppressed while nonzero.
    in_image: usize,
    /// Count of every TAB buffered so far, for the image index repair.
    tabs_so_far: usize,
    /// Cell buffer while between `table_open` and `table_close`.
    table: Option<TableState>,
    plan: Plan,
    config: Config,
}

impl<'i> ConvertState<'i> {
    pub(crate) fn new(config: Config, start_index: usize) -> Self {
        Self {
            cursor: start_index,
            start_index,
            buffer: String::new(),
            line_has_content: false,
            style_stack: vec![],
            nested_context: vec![],
            paragraph_start: None,
            heading: None,
            code_start: None,
            blockquotes: vec![],
            list_stack: vec![],
            top_list: None,
            pending_item_tabs: None,
            just_exited_list: false,
            in_image: 0,
            tabs_so_far: 0,
            table: None,
            plan: Plan::default(),
            config,
        }
    }

    /// Walk the whole event stream, then hand the plan to the assembler.
    pub(crate) fn convert(
        mut self,
        events: impl Iterator<Item = Event<'i>>,
    ) -> Result<Vec<Request>, ConvertError> {
        for event in events {
            self.convert_one_event(event)?;
        }
        self.finish()
    }

    fn finish(self) -> Result<Vec<Request>, ConvertError> {
        if let Some(tag) = self.nested_context.last() {
            return Err(ConvertError::MalformedMarkdown(format!(
                "unclosed {tag:?} at end of input"
            )));
        }
        debug_assert!(self.style_stack.is_empty());
        debug_assert!(self.list_stack.is_empty());
        debug_assert!(self.blockquotes.is_empty());
        debug_assert!(self.table.is_none());
        Ok(crate::assembly::assemble(
            self.start_index,
            self.buffer,
            self.plan,
        ))
    }
}
