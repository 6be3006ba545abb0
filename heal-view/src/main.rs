//! Application entry point for the wound-healing timeline viewer.
//!
//! This binary sets up logging and eframe/egui, then delegates all
//! interactive logic and rendering to [`Viewer`] from the `viewer`
//! module.

mod viewer;

use tracing_subscriber::EnvFilter;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// Log output goes through `tracing`; set `RUST_LOG` to adjust the
/// filter (it defaults to `heal_view=info`). The window itself is
/// configured with default [`eframe::NativeOptions`] and everything
/// else is handled by [`Viewer`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("heal_view=info")),
        )
        .init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Wound Healing Timeline",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new()))
        }),
    )
}
