//! Human-readable stream dump for debugging and snapshot tests.
//!
//! One line per token:
//!
//! ```text
//! 0  MESSAGE_START "Car" id=1 @0
//! 1    FIELD_START "serialNumber" id=2 @0
//! 2      NONE uint64 le size=8 @0
//! 3    FIELD_END
//! 4  MESSAGE_END
//! ```
//!
//! End tokens print only their signal. Sizes are shown for leaves and for
//! any token with a non-zero or variable size. `@?` is an unknown offset.

use std::fmt::Write as _;

use codec_ir_core::Colors;

use super::TokenStream;
use crate::token::{Offset, Size, Token};

/// Render `stream` one token per line.
///
/// Works on any stream, well-formed or not; depth saturates at zero on
/// stray end tokens.
pub fn dump(stream: &TokenStream, colors: Colors) -> String {
    let mut out = String::new();
    let width = width_for_count(stream.len());
    let mut depth = 0usize;

    for (position, token) in stream.iter().enumerate() {
        let signal = token.signal();
        if signal.is_end() {
            depth = depth.saturating_sub(1);
        }

        let pos = format!("{position:>width$}");
        let indent = "  ".repeat(depth);
        write!(out, "{}  {indent}{signal}", colors.paint(colors.muted, &pos)).unwrap();
        if !signal.is_end() {
            out.push_str(&describe(token, colors));
        }
        out.push('\n');

        if signal.is_start() {
            depth += 1;
        }
    }

    out
}

fn describe(token: &Token, colors: Colors) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !token.name().is_empty() {
        parts.push(colors.paint(colors.name, &format!("{:?}", token.name())));
    }
    if let Some(id) = token.id() {
        parts.push(colors.paint(colors.muted, &format!("id={id}")));
    }
    if let Some(xref) = token.xref_id() {
        parts.push(colors.paint(colors.muted, &format!("xref={xref}")));
    }
    if let Some(primitive) = token.primitive_type() {
        parts.push(colors.paint(colors.encoding, primitive.name()));
    }
    if let Some(order) = token.byte_order() {
        parts.push(colors.paint(colors.encoding, order.label()));
    }

    let size = token.size();
    match size {
        Size::Variable => parts.push(colors.paint(colors.deferred, "size=var")),
        Size::Fixed(0) if !token.signal().is_encoding() => {}
        Size::Fixed(n) => parts.push(colors.paint(colors.muted, &format!("size={n}"))),
    }

    match token.offset() {
        Offset::At(n) => parts.push(colors.paint(colors.muted, &format!("@{n}"))),
        Offset::Unknown => parts.push(colors.paint(colors.deferred, "@?")),
    }

    let mut out = String::new();
    for part in parts {
        out.push(' ');
        out.push_str(&part);
    }
    out
}

/// Digits needed to print the largest position of a stream of `count` tokens.
fn width_for_count(count: usize) -> usize {
    count.saturating_sub(1).max(1).ilog10() as usize + 1
}
