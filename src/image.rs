/// An `insertInlineImage` waiting for assembly.
///
/// Images apply after every other operation, so `index` is still in the
/// walker's cursor coordinates; `tabs_before` lets the assembler compensate
/// for the TABs that bullet creation will have removed by then.
#[derive(Clone, Debug)]
pub(crate) struct PendingImage {
    pub(crate) index: usize,
    pub(crate) uri: String,
    pub(crate) tabs_before: usize,
}

/// Light sanity check on an image destination.
///
/// The service accepts any URI it can fetch (public HTTPS or Drive); we only
/// reject values that cannot be a URI at all.
pub(crate) fn is_plausible_uri(src: &str) -> bool {
    !src.is_empty() && !src.chars().any(char::is_whitespace) && src.contains("://")
}
