use super::*;

/// Which kind of list a frame on the nesting stack came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    /// One preset per list kind; the Docs service derives the per-level
    /// glyphs and numbering from the preset plus each paragraph's leading
    /// TAB count.
    pub(crate) fn preset(self) -> BulletPreset {
        match self {
            ListKind::Bullet => BulletPreset::BulletDiscCircleSquare,
            ListKind::Ordered => BulletPreset::NumberedDecimalAlphaRoman,
        }
    }
}

/// The outermost list currently open.
///
/// Contiguous items at every depth of one top-level list become a single
/// bullet range, so only the bottom of the nesting stack needs bookkeeping:
/// where the list began and how many TABs its items buffered. The TAB count
/// rides along to the assembler, which shifts every later bullet operation by
/// the TABs the service removes when it applies this one.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TopLevelList {
    pub(crate) kind: ListKind,
    pub(crate) start: usize,
    pub(crate) tabs: usize,
}

impl TopLevelList {
    pub(crate) fn open(kind: ListKind, start: usize) -> Self {
        TopLevelList {
            kind,
            start,
            tabs: 0,
        }
    }
}
