//! timekeeper main entrypoint.

use timekeeper::run;
use timekeeper::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
