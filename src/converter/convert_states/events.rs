use super::*;

impl<'i> ConvertState<'i> {
    pub(crate) fn convert_one_event(&mut self, event: Event<'i>) -> Result<(), ConvertError> {
        tracing::debug!(?event, cursor = self.cursor);

        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag)?,
            Event::Text(ref text) => self.sink_text(text),
            Event::Code(ref code) => self.code_span(code),
            // Soft line breaks collapse to spaces; hard breaks keep the line
            // break.
            Event::SoftBreak => self.sink_text(" "),
            Event::HardBreak => self.sink_text("\n"),
            Event::Rule => self.horizontal_rule(),
            Event::TaskListMarker(checked) => self.sink_text(if checked {
                CHECKBOX_CHECKED
            } else {
                CHECKBOX_UNCHECKED
            }),
            Event::Html(ref html) | Event::InlineHtml(ref html) => {
                tracing::warn!(%html, "html has no docs mapping; keeping it as plain text");
                self.sink_text(html);
            }
            Event::InlineMath(ref math) | Event::DisplayMath(ref math) => {
                tracing::warn!(%math, "math has no docs mapping; keeping it as plain text");
                self.sink_text(math);
            }
            Event::FootnoteReference(ref label) => {
                tracing::warn!(%label, "footnote reference has no docs mapping; keeping its label");
                self.sink_text(label);
            }
        }
        Ok(())
    }

    pub(crate) fn start_tag(&mut self, tag: Tag<'i>) {
        match &tag {
            Tag::Paragraph => {
                self.paragraph_start = Some(self.cursor);
            }
            Tag::Heading { level, .. } => {
                self.heading = Some((*level, self.cursor));
            }
            Tag::BlockQuote(_) => {
                self.blockquotes.push(self.cursor);
            }
            Tag::CodeBlock(_) => {
                // Fenced and indented blocks style the same way; the info
                // string is dropped (no syntax highlighting in Docs).
                self.code_start = Some(self.cursor);
            }
            Tag::List(first_number) => {
                self.just_exited_list = false;
                let kind = if first_number.is_some() {
                    // Docs presets restart numbering, so the source's first
                    // number is not kept.
                    ListKind::Ordered
                } else {
                    ListKind::Bullet
                };
                if self.list_stack.is_empty() {
                    self.top_list = Some(TopLevelList::open(kind, self.cursor));
                }
                self.list_stack.push(kind);
            }
            Tag::Item => {
                self.terminate_line();
                self.pending_item_tabs = Some(self.list_stack.len().saturating_sub(1));
            }
            Tag::Table(_) => {
                // Column alignments have no Docs equivalent.
                self.table = Some(TableState::new());
            }
            Tag::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.start_row(true);
                }
            }
            Tag::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    table.start_row(false);
                }
            }
            Tag::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    table.start_cell();
                }
            }
            Tag::Emphasis => self.push_style(TextStyle::italic()),
            Tag::Strong => self.push_style(TextStyle::bold()),
            Tag::Strikethrough => self.push_style(TextStyle::strikethrough()),
            Tag::Link { dest_url, .. } => self.push_style(TextStyle::link_to(dest_url)),
            Tag::Image { dest_url, .. } => {
                self.plan_image(dest_url);
                self.in_image += 1;
            }
            Tag::HtmlBlock => {}
            Tag::FootnoteDefinition(_) | Tag::MetadataBlock(_) => {
                tracing::warn!(?tag, "block has no docs mapping; its text falls through");
            }
        }
        self.nested_context.push(tag);
    }

    pub(crate) fn end_tag(&mut self, tag: TagEnd) -> Result<(), ConvertError> {
        match self.nested_context.pop() {
            Some(open) if open.to_end() == tag => {}
            open => {
                return Err(ConvertError::MalformedMarkdown(format!(
                    "{tag:?} closed {open:?}"
                )));
            }
        }

        match tag {
            TagEnd::Paragraph => {
                let start = self.paragraph_start.take().expect("paragraph was opened");
                if self.list_stack.is_empty() {
                    self.delete_bullets_if_just_exited(start);
                }
                self.newline();
            }
            TagEnd::Heading(_) => {
                let (level, start) = self.heading.take().expect("heading was opened");
                // An empty heading still needs one newline to have a
                // paragraph to style.
                let empty = self.cursor == start;
                if empty {
                    self.newline();
                }
                self.delete_bullets_if_just_exited(start);
                self.plan.push_para_style(
                    start,
                    self.cursor,
                    ParagraphStyle::named(named_style(level)),
                );
                if !empty {
                    self.newline();
                }
            }
            TagEnd::BlockQuote => {
                let start = self.blockquotes.pop().expect("blockquote was opened");
                let depth = self.blockquotes.len() + 1;
                if self.cursor > start {
                    let indent = self.config.blockquote_indent_pt * depth as f64;
                    self.plan
                        .push_para_style(start, self.cursor, ParagraphStyle::blockquote(indent));
                    self.plan
                        .push_text_style(start, self.cursor, TextStyle::italic());
                }
            }
            TagEnd::CodeBlock => {
                let start = self.code_start.take().expect("code block was opened");
                if self.cursor > start {
                    self.delete_bullets_if_just_exited(start);
                    let font = TextStyle::code_font(&self.config.code_font_family);
                    self.plan.push_text_style(start, self.cursor, font);
                    self.plan
                        .push_para_style(start, self.cursor, ParagraphStyle::code_shading());
                    self.newline();
                }
            }
            TagEnd::List(_) => {
                self.list_stack.pop().expect("list was opened");
                if self.list_stack.is_empty() {
                    let top = self.top_list.take().expect("top-level list was tracked");
                    if self.cursor > top.start {
                        self.plan
                            .push_bullets(top.start, self.cursor, top.kind.preset(), top.tabs);
                    }
                    self.just_exited_list = true;
                }
            }
            TagEnd::Item => {
                if self.pending_item_tabs.is_some() {
                    // The item never buffered anything; give it its empty
                    // line (TABs included, so the depth survives).
                    self.newline();
                } else {
                    self.terminate_line();
                }
                self.pending_item_tabs = None;
            }
            TagEnd::Table => {
                let state = self.table.take().expect("table was opened");
                if let Some(table) = state.plan(self.cursor, &self.config)? {
                    if let Some((start, end)) = table.header {
                        self.plan.push_text_style(start, end, TextStyle::bold());
                    }
                    self.cursor += table.footprint;
                    self.line_has_content = false;
                    self.plan.push_table(table);
                }
            }
            TagEnd::TableHead | TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    table.end_row();
                }
            }
            TagEnd::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    table.end_cell();
                }
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link => {
                self.pop_style();
            }
            TagEnd::Image => {
                self.in_image -= 1;
            }
            TagEnd::HtmlBlock | TagEnd::FootnoteDefinition | TagEnd::MetadataBlock(_) => {}
        }
        Ok(())
    }

    /// Inline code: buffered like any text, styled monospace over its range.
    fn code_span(&mut self, code: &str) {
        if self.in_image > 0 {
            return;
        }
        if let Some(table) = self.table.as_mut() {
            if table.in_cell() {
                table.push_text(code);
            }
            return;
        }
        let start = self.cursor;
        self.append(code);
        let style = TextStyle::inline_code(&self.config.code_font_family);
        self.plan.push_text_style(start, self.cursor, style);
    }

    /// Docs has no rule element; an empty paragraph with a bottom border
    /// draws the same separator.
    fn horizontal_rule(&mut self) {
        self.terminate_line();
        let start = self.cursor;
        self.newline();
        self.delete_bullets_if_just_exited(start);
        self.plan
            .push_para_style(start, self.cursor, ParagraphStyle::horizontal_rule());
    }

    /// An inline image occupies exactly one index.
    fn plan_image(&mut self, uri: &str) {
        if self.in_image > 0 {
            return;
        }
        if self.table.as_ref().is_some_and(TableState::in_cell) {
            tracing::warn!(%uri, "images inside table cells are not supported; skipping");
            return;
        }
        if !is_plausible_uri(uri) {
            tracing::warn!(
                %uri,
                index = self.cursor,
                "image destination is not a usable uri; skipping"
            );
            return;
        }
        self.plan.push_image(PendingImage {
            index: self.cursor,
            uri: uri.to_owned(),
            tabs_before: self.tabs_so_far,
        });
        self.cursor += 1;
        self.line_has_content = true;
    }
}
