use std::process::ExitCode;

use clap::Parser;
use log::debug;

use term_pick_cli::cli_args::Args;
use term_pick_cli::error::{Error, Result};
use term_pick_cli::menu;
use term_pick_cli::prompt;
use term_pick_cli::prompt::glyphs;

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Menu path: `{}`", args.menu_path);

    let mut menu = menu::load_menu(&args.menu_path)?;

    // Command-line flags win over the menu file's own keys
    if args.page_size.is_some() {
        menu.page_size = args.page_size;
    }
    if args.no_loop {
        menu.wrap = Some(false);
    }
    if args.default.is_some() {
        menu.default = args.default.clone();
    }

    let select = menu.to_select()?;
    let theme = menu.theme()?;
    let glyph_set = if args.ascii {
        &glyphs::ASCII
    } else {
        glyphs::detect()
    };

    let value = prompt::run(select, theme, glyph_set)?;

    // Frames went to stderr; only the answer lands on stdout
    println!("{value}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Interrupted) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
