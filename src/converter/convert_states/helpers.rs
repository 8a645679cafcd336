use super::*;

impl<'i> ConvertState<'i> {
    /// Route inline text to wherever it currently belongs: dropped inside
    /// image alt text, into the open table cell, or appended to the buffer.
    pub(crate) fn sink_text(&mut self, text: &str) {
        if self.in_image > 0 {
            return;
        }
        if let Some(table) = self.table.as_mut() {
            if table.in_cell() {
                table.push_text(text);
            } else {
                tracing::trace!(text, "dropping text outside any table cell");
            }
            return;
        }
        self.append(text);
    }

    /// Append to the text buffer and advance the cursor.
    ///
    /// The cursor counts Unicode scalar values, not bytes. A list item's TAB
    /// prefix goes in front of its first append so the service can read the
    /// nesting level off the paragraph.
    pub(crate) fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(tabs) = self.pending_item_tabs.take() {
            if tabs > 0 {
                for _ in 0..tabs {
                    self.buffer.push('\t');
                }
                self.cursor += tabs;
                self.tabs_so_far += tabs;
                if let Some(top) = self.top_list.as_mut() {
                    top.tabs += tabs;
                }
            }
        }
        self.buffer.push_str(text);
        self.cursor += text.chars().count();
        self.line_has_content = !text.ends_with('\n');
        tracing::trace!(text, cursor = self.cursor, "buffered");
    }

    pub(crate) fn newline(&mut self) {
        self.append("\n");
    }

    /// Close the current line if something is on it. Tight list items carry
    /// no paragraph of their own, so item transitions call this instead of
    /// relying on a paragraph close.
    pub(crate) fn terminate_line(&mut self) {
        if self.line_has_content {
            self.newline();
        }
    }

    pub(crate) fn push_style(&mut self, style: TextStyle) {
        tracing::trace!(?style, cursor = self.cursor, "opening style frame");
        self.style_stack.push(StyleFrame {
            start: self.cursor,
            style,
        });
    }

    /// Close the innermost style frame and record its range. Frames that saw
    /// no text (inside table cells or image alt) vanish through the
    /// zero-length guard.
    pub(crate) fn pop_style(&mut self) {
        let frame = self
            .style_stack
            .pop()
            .expect("style close follows its open");
        self.plan
            .push_text_style(frame.start, self.cursor, frame.style);
    }

    /// The service propagates bullet formatting onto whatever paragraph
    /// follows a list; the first block after `list_close` clears it.
    pub(crate) fn delete_bullets_if_just_exited(&mut self, start: usize) {
        if !self.just_exited_list {
            return;
        }
        self.just_exited_list = false;
        if self.cursor > start {
            tracing::debug!(start, end = self.cursor, "clearing inherited bullets");
            self.plan.push_bullet_delete(start, self.cursor);
        }
    }
}

pub(crate) fn named_style(level: HeadingLevel) -> NamedStyleType {
    match level {
        HeadingLevel::H1 => NamedStyleType::Heading1,
        HeadingLevel::H2 => NamedStyleType::Heading2,
        HeadingLevel::H3 => NamedStyleType::Heading3,
        HeadingLevel::H4 => NamedStyleType::Heading4,
        HeadingLevel::H5 => NamedStyleType::Heading5,
        HeadingLevel::H6 => NamedStyleType::Heading6,
    }
}
