//! rWorkoutLog main entrypoint.

use rworkoutlog::run;
use rworkoutlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
