use std::process::ExitCode;

use crop_advisor_cli::commands::{self, risk_assessment};

fn main() -> ExitCode {
    commands::execute(|args, config, now| risk_assessment::run(args, config, now))
}
