//! expenselog main entrypoint.

use expenselog::run;
use expenselog::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
