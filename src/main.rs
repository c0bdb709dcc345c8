// SPDX-License-Identifier: MPL-2.0
use iced_vitrine::app::{self, Flags};
use iced_vitrine::assembly;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    // `iced_vitrine assemble <sections-dir> <output>` builds the static
    // page and exits; anything else launches the showcase window.
    if let Ok(Some(command)) = args.subcommand() {
        if command == "assemble" {
            return run_assemble(args);
        }
        eprintln!("unknown command '{command}'; did you mean 'assemble'?");
        return ExitCode::FAILURE;
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        content_dir: args.opt_value_from_str("--content-dir").unwrap_or(None),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("failed to start: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_assemble(mut args: pico_args::Arguments) -> ExitCode {
    let rest = args.finish();
    let mut rest = rest.into_iter();

    let sections_dir = rest
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sections"));
    let output = rest
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("index.html"));

    match assembly::assemble_page(&sections_dir, &output) {
        Ok(()) => {
            println!("{} built from partials.", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("build failed: {e}");
            ExitCode::FAILURE
        }
    }
}
