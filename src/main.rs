use std::process::ExitCode;

fn main() -> ExitCode {
    match curious_fractions::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
