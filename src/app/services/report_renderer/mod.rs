//! Briefing renderers
//!
//! Two independent renderers over the same decoded data: a labeled text
//! block for humans and a JSON document for machines. Both consume the
//! assembled [`Briefing`](crate::app::models::Briefing) and derive nothing
//! of their own, so the two outputs cannot drift apart on edge cases such
//! as a missing trend.
//!
//! Numeric values are rendered with one decimal place in both modes. That
//! is purely a display policy; the briefing keeps full precision.

pub mod json;
pub mod text;

#[cfg(test)]
pub mod tests;

// Re-export the renderer entry points
pub use json::render_json;
pub use text::render_text;
