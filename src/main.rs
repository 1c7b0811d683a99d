use std::process::ExitCode;

use git_track::{cli, ui::output};

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
