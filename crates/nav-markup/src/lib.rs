//! Navigation menu argument defaulting and markup normalization.
//!
//! A framework-independent adjustment layer around a host menu renderer,
//! applied in two stages:
//! - [`MenuArgs::with_defaults`] adjusts the render configuration before
//!   markup is generated (no fallback, no list wrapper, `<nav>` container,
//!   class derived from the menu name).
//! - [`normalize`] adjusts the rendered markup afterward, fusing `<li>`
//!   wrappers into their anchors and collapsing the result to one line.
//!
//! The host owns menu lookup, tree traversal, and per-item HTML
//! generation; [`render_menu`] composes the two stages around a
//! host-supplied render closure.

mod args;
mod filter;
mod render;
mod slug;
mod wrap;

pub use args::{Container, FallbackFn, MenuArgs};
pub use filter::{CollapseWhitespace, MarkupFilter, MarkupPipeline, StripListItems, normalize};
pub use render::render_menu;
pub use slug::slugify;
pub use wrap::expand_items_wrap;
