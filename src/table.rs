use super::*;

/// Cell buffer filled while the walker is between `table_open` and
/// `table_close`.
///
/// Cells hold plain text only; inline formatting inside a cell is flattened
/// to its text. Nothing is planned until the table closes, because the index
/// math needs the full row and column counts.
#[derive(Debug, Default)]
pub(crate) struct TableState {
    rows: Vec<Vec<String>>,
    current_row: Vec<String>,
    cell: Option<String>,
    has_header: bool,
}

/// A fully laid-out table, ready for the assembler.
///
/// `cells` carry absolute insertion indices per the layout contract for empty
/// tables: cell `(r, c)` of an `R`x`C` table inserted at `T` begins at
/// `T + 3 + r * (2C + 1) + c * 2`, plus the lengths of every cell text
/// inserted into this table before it (insertions shift what follows).
/// The `+ 3` offset and the strides are load-bearing; if the service ever
/// changes them this is the first module to break.
#[derive(Debug)]
pub(crate) struct PlannedTable {
    pub(crate) index: usize,
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    /// `(insertion index, text)` per non-empty cell, row-major.
    pub(crate) cells: Vec<(usize, String)>,
    /// Accumulated range of the header row's text, when it gets bolded.
    pub(crate) header: Option<(usize, usize)>,
    /// Total index cost: `2 + R * (2C + 1)` for the structure plus all cell
    /// text.
    pub(crate) footprint: usize,
}

impl TableState {
    pub(crate) fn new() -> Self {
        TableState::default()
    }

    pub(crate) fn start_row(&mut self, header: bool) {
        self.current_row = Vec::new();
        if header {
            self.has_header = true;
        }
    }

    pub(crate) fn end_row(&mut self) {
        let row = std::mem::take(&mut self.current_row);
        if !row.is_empty() {
            self.rows.push(row);
        }
    }

    pub(crate) fn start_cell(&mut self) {
        self.cell = Some(String::new());
    }

    pub(crate) fn end_cell(&mut self) {
        let cell = self.cell.take().unwrap_or_default();
        self.current_row.push(cell);
    }

    pub(crate) fn in_cell(&self) -> bool {
        self.cell.is_some()
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        if let Some(cell) = self.cell.as_mut() {
            cell.push_str(text);
        }
    }

    /// Normalize ragged rows and lay the table out at `table_start`.
    ///
    /// Returns `None` for a table with no rows or no columns, mirroring how
    /// the walker skips degenerate tables instead of planning them.
    pub(crate) fn plan(
        self,
        table_start: usize,
        config: &Config,
    ) -> Result<Option<PlannedTable>, ConvertError> {
        let TableState {
            mut rows,
            has_header,
            ..
        } = self;

        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        if rows.is_empty() || columns == 0 {
            tracing::warn!("table closed with no cells; skipping");
            return Ok(None);
        }

        for (r, row) in rows.iter_mut().enumerate() {
            let missing = columns - row.len();
            if missing > config.table_padding_cap {
                return Err(ConvertError::TableShape {
                    row: r,
                    have: row.len(),
                    want: columns,
                    cap: config.table_padding_cap,
                });
            }
            row.resize(columns, String::new());
        }

        let row_count = rows.len();
        let row_stride = 2 * columns + 1;
        let mut cells = Vec::new();
        let mut inserted = 0;
        let mut header_end = None;
        for (r, row) in rows.iter().enumerate() {
            for (c, text) in row.iter().enumerate() {
                if text.is_empty() {
                    continue;
                }
                let base = table_start + 3 + r * row_stride + c * 2;
                let index = base + inserted;
                inserted += text.chars().count();
                if r == 0 {
                    header_end = Some(base + inserted);
                }
                cells.push((index, text.clone()));
            }
        }

        let header = (config.bold_header_rows && has_header)
            .then_some(header_end)
            .flatten()
            .map(|end| (table_start + 3, end));

        tracing::debug!(
            table_start,
            row_count,
            columns,
            text_chars = inserted,
            "planned table"
        );
        Ok(Some(PlannedTable {
            index: table_start,
            rows: row_count,
            columns,
            cells,
            header,
            footprint: 2 + row_count * row_stride + inserted,
        }))
    }
}
