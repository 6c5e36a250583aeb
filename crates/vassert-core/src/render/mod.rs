//! Human-readable rendering of values and verdicts.
//!
//! The line format produced here is parsed by existing tooling, so spacing
//! and punctuation are fixed: `Got       `, `Expect == `, `Expect != `,
//! `Got            `, `Expect deep != `, `⟦…⟧` and ` for v.<path>`.

pub mod value_render;
pub mod verdict_render;

pub use value_render::{render_side, render_value, ABSENT, NIL};
pub use verdict_render::{
    deep_lines, join_block, render, render_block, render_nil_check, render_result, NIL_LITERAL,
};
