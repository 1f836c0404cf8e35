//! Built-in knowledge base.
//!
//! Each submodule holds the signatures for one ecosystem. Order matters:
//! sections and the entries inside them are listed in match priority, so a
//! narrow signature (a PostgreSQL-port `ECONNREFUSED`) must come before a
//! broad one (any `ECONNREFUSED`). Database therefore precedes Network.

use crate::structs::pattern_def::PatternDef;

pub mod node;
pub mod typescript;
pub mod react;
pub mod nextjs;
pub mod python;
pub mod rust;
pub mod go;
pub mod database;
pub mod docker;
pub mod git;
pub mod network;
pub mod package_managers;
pub mod build_tools;
pub mod system;

const SECTIONS: &[&[PatternDef]] = &[
    node::PATTERNS,
    typescript::PATTERNS,
    react::PATTERNS,
    nextjs::PATTERNS,
    python::PATTERNS,
    rust::PATTERNS,
    go::PATTERNS,
    database::PATTERNS,
    docker::PATTERNS,
    git::PATTERNS,
    network::PATTERNS,
    package_managers::PATTERNS,
    build_tools::PATTERNS,
    system::PATTERNS,
];

/// All built-in definitions in priority order.
pub fn builtin_definitions() -> impl Iterator<Item = &'static PatternDef> {
    SECTIONS.iter().flat_map(|section| section.iter())
}
