//! Markup filter pipeline for rendered menu HTML.
//!
//! Post-render adjustments applied to the markup string the host renderer
//! produced. The transforms are literal substring splices, not DOM-aware:
//! they rely on the tag adjacency the upstream renderer emits (an anchor
//! immediately inside each list item). Unexpected markup shapes produce
//! odd but non-crashing output.

use tracing::debug;

use crate::args::MenuArgs;

/// Trait for markup filters in the pipeline.
pub trait MarkupFilter: Send + Sync {
    /// Filter name for debugging.
    fn name(&self) -> &str;

    /// Process the input markup and return the adjusted output.
    fn process(&self, input: &str) -> String;
}

/// Pipeline of markup filters applied in sequence.
pub struct MarkupPipeline {
    filters: Vec<Box<dyn MarkupFilter>>,
}

impl MarkupPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add<F: MarkupFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// The standard list-item stripping pipeline: fuse `<li>` wrappers into
    /// their anchors, then collapse the result to a single line.
    pub fn strip_li() -> Self {
        Self::new().add(StripListItems).add(CollapseWhitespace)
    }

    /// Process markup through all filters in the pipeline.
    pub fn process(&self, input: &str) -> String {
        self.filters
            .iter()
            .fold(input.to_string(), |acc, filter| filter.process(&acc))
    }
}

impl Default for MarkupPipeline {
    fn default() -> Self {
        Self::strip_li()
    }
}

/// Filter that fuses `<li>` wrapper tags into the anchors they contain.
///
/// Four literal replacements, applied in sequence over the whole string:
/// `"><a"` and `"</a>"` are removed first, then `"<li"` becomes `"<a"` and
/// `"</li"` becomes `"</a"`. Each list item's attributes end up on the
/// anchor that replaces it, so the container's direct children are anchors
/// rather than list items.
pub struct StripListItems;

impl MarkupFilter for StripListItems {
    fn name(&self) -> &str {
        "strip_list_items"
    }

    fn process(&self, input: &str) -> String {
        input
            .replace("><a", "")
            .replace("</a>", "")
            .replace("<li", "<a")
            .replace("</li", "</a")
    }
}

/// Filter that collapses markup to a single physical line.
///
/// Trims leading/trailing whitespace, then removes every carriage return,
/// then every line feed.
pub struct CollapseWhitespace;

impl MarkupFilter for CollapseWhitespace {
    fn name(&self) -> &str {
        "collapse_whitespace"
    }

    fn process(&self, input: &str) -> String {
        input.trim().replace('\r', "").replace('\n', "")
    }
}

/// Normalize rendered menu markup according to the render args.
///
/// When `strip_li` is anything other than `Some(true)` the markup passes
/// through byte-identical (no trimming either). Otherwise the standard
/// [`MarkupPipeline::strip_li`] pipeline runs.
pub fn normalize(markup: &str, args: &MenuArgs) -> String {
    if args.strip_li != Some(true) {
        debug!(menu = %args.menu, "strip_li disabled; leaving markup untouched");
        return markup.to_string();
    }

    MarkupPipeline::strip_li().process(markup)
}
