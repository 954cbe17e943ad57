use std::process::ExitCode;

use crop_advisor_cli::commands::{self, recommendations};

fn main() -> ExitCode {
    commands::execute(|args, config, now| recommendations::run(args, config, now))
}
