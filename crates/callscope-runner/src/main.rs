use std::process::ExitCode;

fn main() -> ExitCode {
    callscope_runner::run()
}
