//! Per-tool request handling. Each handler returns the rendered response text; lookup
//! failures are rendered as content, never returned as protocol errors.

pub(super) mod categories;
pub(super) mod deployment;
pub(super) mod quickstart;
pub(super) mod stack;
pub(super) mod tool_reference;
