//! CLI support for the `mergestats` binary.
//!
//! Output formatting utilities are in [`output`].

pub mod output;
