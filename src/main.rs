use std::process::ExitCode;

fn main() -> ExitCode {
    match sanity::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
