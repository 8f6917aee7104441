//! Plain-text-to-screenplay pipeline: formatting, scene-block conversion
//! and parsing. Everything here is synchronous, pure and total over its
//! input; malformed lines are skipped, never errors.

mod convert;
mod formatter;
mod parser;

pub use convert::convert_to_script;
pub use formatter::{format_script, Style};
pub use parser::{parse, render_script};
