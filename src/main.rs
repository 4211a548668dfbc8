//! HealthSurvey main entrypoint.

use healthsurvey::{init_logging, run, ui::messages::error};

fn main() {
    init_logging();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
