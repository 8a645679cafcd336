//! Plan native Google Docs structure from Markdown.
//! [md2gdocs] walks a [CommonMark] token stream (with the GFM *tables*,
//! *strikethrough*, and *task list* extensions) and produces one ordered
//! batch of Google Docs `batchUpdate` requests: heading styles, bulleted and
//! numbered lists with correct nesting, bold/italic/strikethrough runs with
//! no style bleed, blockquotes, tables with correctly indexed cell content,
//! links, inline and fenced code, inline images, task lists, and horizontal
//! rules.
//!
//! [md2gdocs]: index.html
//! [CommonMark]: https://spec.commonmark.org/
//!
//! # Getting Started
//!
//! ```rust
//! use md2gdocs::{batch_update_body, MarkdownConverter};
//!
//! let markdown = "\
//! # Release notes
//!
//! - faster sync
//! - fewer surprises
//! ";
//!
//! let requests = MarkdownConverter::default().convert(markdown, 1)?;
//! let body = serde_json::to_value(batch_update_body(requests))?;
//! assert_eq!(
//!     body["requests"][0]["insertText"]["text"],
//!     "Release notes\nfaster sync\nfewer surprises\n",
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The request list is deterministic — same input, byte-identical output —
//! and self-consistent: applied in order as a single `batchUpdate`, every
//! index is valid at the moment the service reaches it. The converter does no
//! I/O; shipping the batch (and handling the service's errors) belongs to the
//! caller.
//!
//! # How it stays index-correct
//!
//! The Docs API is an index-shifting stream: every insertion moves everything
//! behind it, text styles are inherited from adjacent characters, and bullet
//! creation silently removes the TAB characters that encode list nesting.
//! The converter therefore never interleaves inserts with styling. It buffers
//! the whole document into one `insertText`, records every style as a range
//! over text that will already exist, and repairs the remaining shifts
//! (TAB removal, late image insertion) in a final assembly pass.

use std::{cmp::Reverse, collections::BTreeMap};

use itertools::Itertools;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;

mod assembly;
mod builder;
mod config;
mod converter;
mod error;
mod image;
mod list;
mod requests;
mod table;
#[cfg(test)]
mod test;

use crate::{
    assembly::Plan,
    config::{
        BLOCKQUOTE_BORDER_PADDING_PT, BLOCKQUOTE_BORDER_WIDTH_PT, BORDER_GRAY, CHECKBOX_CHECKED,
        CHECKBOX_UNCHECKED, CODE_BACKGROUND, CODE_FONT_WEIGHT, HR_BORDER_WIDTH_PT, HR_PADDING_PT,
        LINK_BLUE,
    },
    image::{is_plausible_uri, PendingImage},
    list::{ListKind, TopLevelList},
    table::{PlannedTable, TableState},
};
pub use crate::{
    builder::MarkdownConverter,
    config::Config,
    error::ConvertError,
    requests::{
        batch_update_body, BatchUpdateBody, BulletPreset, Color, DashStyle, Dimension, DocRange,
        Link, Location, NamedStyleType, OptionalColor, ParagraphBorder, ParagraphStyle, Request,
        RgbColor, Shading, TextStyle, Unit, WeightedFontFamily,
    },
};
