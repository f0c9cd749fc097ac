//! Tracing subscriber setup.
//!
//! ```bash
//! SWL_LOG=debug swlc expr input.swift
//! SWL_LOG=swl_expr=trace SWL_LOG_FORMAT=text swlc expr input.swift
//! ```
//!
//! Nothing is installed unless `SWL_LOG` is set. Output goes to stderr so
//! it never mixes with generated code on stdout.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
///
/// `SWL_LOG` uses `RUST_LOG` filter syntax. `SWL_LOG_FORMAT=text` selects
/// flat lines instead of the default indented tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(directives) = std::env::var("SWL_LOG") else {
            return;
        };
        let filter = EnvFilter::builder().parse_lossy(directives);

        if std::env::var("SWL_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("text")) {
            Registry::default()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .init();
        } else {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_indent_lines(true)
                .with_targets(true)
                .with_writer(std::io::stderr);
            Registry::default().with(filter).with(tree).init();
        }
    });
}
