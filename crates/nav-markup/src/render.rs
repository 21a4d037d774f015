//! Explicit two-stage render pipeline.
//!
//! The host framework's before/after adjustment hooks become an explicit
//! call sequence here: default the args, let the host render with them,
//! then normalize the markup it produced. One config type flows through
//! both stages.

use crate::args::MenuArgs;
use crate::filter::normalize;

/// Render a menu through the full adjustment pipeline.
///
/// Applies [`MenuArgs::with_defaults`], hands the adjusted args to the
/// host-supplied `render` closure (which owns menu lookup, tree traversal,
/// and per-item HTML generation), and normalizes the markup it returns.
pub fn render_menu<F>(args: MenuArgs, render: F) -> String
where
    F: FnOnce(&MenuArgs) -> String,
{
    let args = args.with_defaults();
    let markup = render(&args);
    normalize(&markup, &args)
}
