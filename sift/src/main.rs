use std::process::ExitCode;

use sift_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    sift_driver::run(&argument)
}
