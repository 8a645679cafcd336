//! Final assembly: one pass that turns the planned operations into the
//! ordered request list.
//!
//! Correctness lives here. Every index-dependent operation was deferred until
//! the walker knew the final text layout; this module fixes the order the
//! service will apply them in and repairs the two index shifts that order
//! implies:
//!
//! 1. text styles, paragraph styles, and bullet operations apply *before*
//!    inline images exist, so each of their coordinates drops by the number
//!    of images recorded below it;
//! 2. each `createParagraphBullets` removes the TABs inside its range, so
//!    every bullet operation after it shifts down by the TABs already
//!    removed, and every image index drops by the TABs buffered before it.

use super::*;

#[derive(Debug)]
pub(crate) struct StyleRange {
    start: usize,
    end: usize,
    style: TextStyle,
}

#[derive(Debug)]
pub(crate) struct ParaRange {
    start: usize,
    end: usize,
    style: ParagraphStyle,
}

#[derive(Debug)]
pub(crate) struct BulletRange {
    start: usize,
    end: usize,
    preset: BulletPreset,
    /// TABs the service removes when applying this range.
    tabs: usize,
}

/// Everything the walker planned, in recording order.
#[derive(Debug, Default)]
pub(crate) struct Plan {
    text_styles: Vec<StyleRange>,
    para_styles: Vec<ParaRange>,
    bullet_creates: Vec<BulletRange>,
    bullet_deletes: Vec<(usize, usize)>,
    tables: Vec<PlannedTable>,
    images: Vec<PendingImage>,
}

impl Plan {
    /// Record an inline style over `[start, end)`; zero-length ranges are
    /// dropped here so no caller has to care.
    pub(crate) fn push_text_style(&mut self, start: usize, end: usize, style: TextStyle) {
        if start >= end {
            tracing::trace!(start, end, "suppressing empty style range");
            return;
        }
        self.text_styles.push(StyleRange { start, end, style });
    }

    pub(crate) fn push_para_style(&mut self, start: usize, end: usize, style: ParagraphStyle) {
        debug_assert!(start < end);
        self.para_styles.push(ParaRange { start, end, style });
    }

    pub(crate) fn push_bullets(
        &mut self,
        start: usize,
        end: usize,
        preset: BulletPreset,
        tabs: usize,
    ) {
        self.bullet_creates.push(BulletRange {
            start,
            end,
            preset,
            tabs,
        });
    }

    pub(crate) fn push_bullet_delete(&mut self, start: usize, end: usize) {
        self.bullet_deletes.push((start, end));
    }

    pub(crate) fn push_table(&mut self, table: PlannedTable) {
        self.tables.push(table);
    }

    pub(crate) fn push_image(&mut self, image: PendingImage) {
        self.images.push(image);
    }
}

/// Produce the final ordered request list.
pub(crate) fn assemble(start_index: usize, buffer: String, plan: Plan) -> Vec<Request> {
    let Plan {
        text_styles,
        para_styles,
        bullet_creates,
        bullet_deletes,
        tables,
        images,
    } = plan;

    // Recorded in document order, so this stays ascending.
    let image_indices: Vec<usize> = images.iter().map(|image| image.index).collect();
    let deimage = |x: usize| x - image_indices.iter().take_while(|&&i| i < x).count();

    let mut requests = Vec::new();

    // 1. The whole text buffer in one insert. Styling ranges of existing text
    //    afterwards leaves no inheritance path between fragments, which is
    //    what keeps styles from bleeding.
    if !buffer.is_empty() {
        requests.push(Request::InsertText {
            location: Location { index: start_index },
            text: buffer,
        });
    }

    // 2. Tables, each immediately followed by its cell content. Inserting the
    //    table at its cursor position splits the already-inserted buffer text
    //    exactly where the walker left the seam.
    for table in &tables {
        requests.push(Request::InsertTable {
            location: Location {
                index: deimage(table.index),
            },
            rows: table.rows,
            columns: table.columns,
        });
        for (index, text) in &table.cells {
            requests.push(Request::InsertText {
                location: Location {
                    index: deimage(*index),
                },
                text: text.clone(),
            });
        }
    }

    // 3. Inline styles. Identical ranges collapse into one request (bold and
    //    italic over the same span compose); the map keys keep them in
    //    document order.
    let mut merged: BTreeMap<(usize, usize), TextStyle> = BTreeMap::new();
    for range in text_styles {
        let key = (deimage(range.start), deimage(range.end));
        if key.0 >= key.1 {
            continue;
        }
        merged
            .entry(key)
            .and_modify(|style| style.merge(&range.style))
            .or_insert(range.style);
    }
    for ((start, end), style) in merged {
        let fields = style.fields_mask();
        requests.push(Request::UpdateTextStyle {
            range: DocRange {
                start_index: start,
                end_index: end,
            },
            text_style: style,
            fields,
        });
    }

    // 4. Paragraph styles, outermost range first so that a nested blockquote
    //    covering the same paragraphs applies later and its deeper indent
    //    wins.
    let para_styles = para_styles
        .into_iter()
        .enumerate()
        .sorted_by_key(|(seq, para)| (para.start, Reverse(para.end), Reverse(*seq)));
    for (_, para) in para_styles {
        let (start, end) = (deimage(para.start), deimage(para.end));
        if start >= end {
            tracing::trace!(start, end, "paragraph range vanished under image shift");
            continue;
        }
        let fields = para.style.fields_mask();
        requests.push(Request::UpdateParagraphStyle {
            range: DocRange {
                start_index: start,
                end_index: end,
            },
            paragraph_style: para.style,
            fields,
        });
    }

    // 5. Bullet creation. Applying a range removes its TABs, so each later
    //    range shifts down by everything already removed.
    let tabs_before = |x: usize| {
        bullet_creates
            .iter()
            .filter(|create| create.start < x)
            .map(|create| create.tabs)
            .sum::<usize>()
    };
    let mut removed = 0;
    for create in &bullet_creates {
        requests.push(Request::CreateParagraphBullets {
            range: DocRange {
                start_index: deimage(create.start) - removed,
                end_index: deimage(create.end) - removed,
            },
            bullet_preset: create.preset,
        });
        removed += create.tabs;
    }

    // 6. Bullet removal for blocks that would otherwise inherit list
    //    formatting; these run after every create, so they see all earlier
    //    TAB removals.
    for (start, end) in bullet_deletes {
        let tabs_removed = tabs_before(start);
        requests.push(Request::DeleteParagraphBullets {
            range: DocRange {
                start_index: deimage(start) - tabs_removed,
                end_index: deimage(end) - tabs_removed,
            },
        });
    }

    // 7. Images last. Their indices already count earlier images (each one is
    //    present by the time the next applies) and only need the TAB
    //    correction.
    for image in images {
        requests.push(Request::InsertInlineImage {
            location: Location {
                index: image.index - image.tabs_before,
            },
            uri: image.uri,
        });
    }

    requests
}
