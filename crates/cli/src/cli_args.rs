//! Command-line argument parsing.
//!
//! Flags override the corresponding keys of the menu definition file, so
//! the same menu can be reused with a different page size or default.

use clap::Parser;

/// Command-line arguments for the `pick` binary.
///
/// `pick` shows an interactive single-select prompt for a YAML menu
/// definition and prints the selected value to stdout, so shell scripts
/// can capture it:
///
/// ```bash
/// environment=$(pick deploy-menu.yml)
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)]
pub struct Args {
    /// Path to the menu definition YAML file.
    #[arg(num_args(1))]
    pub menu_path: String,

    /// Maximum number of list rows shown at once.
    ///
    /// Overrides the menu file's `page_size`. Defaults to 7.
    #[arg(long, short = 'p')]
    pub page_size: Option<usize>,

    /// Stop at the list edges instead of wrapping around.
    ///
    /// Overrides the menu file's `loop` key.
    #[arg(long, action)]
    pub no_loop: bool,

    /// Value of the choice to pre-select.
    ///
    /// Overrides the menu file's `default` key. Silently ignored when it
    /// matches no selectable choice.
    #[arg(long, short = 'd')]
    pub default: Option<String>,

    /// Force the ASCII glyph set even on unicode-capable terminals.
    #[arg(long, action)]
    pub ascii: bool,
}
