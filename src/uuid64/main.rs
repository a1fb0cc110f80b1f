use std::io;
use std::process;

use uuid64::api::{run, ExitStatus};

fn main() {
    let mut stdin = io::stdin().lock();
    let (output, status) = run(std::env::args_os().skip(1), &mut stdin);

    match status {
        ExitStatus::Success => println!("{}", output),
        ExitStatus::Error => eprintln!("{}", output),
    }
    process::exit(status.code());
}
