use std::{io, process::ExitCode};

use expense_core::{
    cli::{
        self,
        output::{self, OutputPreferences},
        CliArgs, Command,
    },
    config::ConfigManager,
};

fn main() -> ExitCode {
    expense_core::init();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            output::error(err);
            eprintln!("{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };
    output::set_preferences(OutputPreferences { color: args.color });

    if args.command == Command::Help {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    let manager = ConfigManager::new();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = cli::run(&args, &manager, &mut stdout.lock(), &mut stderr.lock());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            output::error(err);
            ExitCode::FAILURE
        }
    }
}
