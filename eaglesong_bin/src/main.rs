//! Hash all of standard input with Eaglesong and print the digest as one line
//! of lowercase hex. Arguments and environment variables are ignored.

use eaglesong_vectors::{Eaglesong, MAX_INPUT_LEN};
use std::io;
use std::process::exit;

fn hash_stdin() -> anyhow::Result<()> {
    // Both handles stay locked for the whole run. Nothing reaches stdout
    // until the digest is ready.
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    eaglesong_vectors::run(&Eaglesong, stdin, stdout, MAX_INPUT_LEN)?;
    Ok(())
}

fn main() {
    if let Err(e) = hash_stdin() {
        eprintln!("eaglesong: {}", e);
        exit(1);
    }
}
