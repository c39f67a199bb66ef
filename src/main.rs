//! carbonlog main entrypoint.

use carbonlog::run;

fn main() {
    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(d) = e.detail() {
            eprintln!("       {}", d);
        }
        std::process::exit(1);
    }
}
