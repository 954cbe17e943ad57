use std::process::ExitCode;

use crop_advisor_cli::commands::{self, product_catalog};

fn main() -> ExitCode {
    commands::execute(|args, config, now| product_catalog::run(args, config, now))
}
