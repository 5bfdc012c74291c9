//! CLI subcommands.

pub mod refund;
pub mod seed;
