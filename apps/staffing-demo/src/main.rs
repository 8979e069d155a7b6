//! # Staffing Demo Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load `DemoConfig` from `STAFFING_*` environment variables
//! 3. Run the roster walkthrough, then the calculator walkthrough
//! 4. Print the report to stdout (text or JSON)

use staffing_demo::error::AppError;

fn main() -> Result<(), AppError> {
    // The actual setup is in lib.rs for better testability
    staffing_demo::run()
}
