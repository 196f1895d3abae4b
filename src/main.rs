mod config;
mod constants;
mod guide;
mod paths;
pub mod theme;
mod ui;

use bevy::prelude::*;
use bevy::winit::WinitSettings;
use bevy_egui::EguiPlugin;

use constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

#[cfg(debug_assertions)]
const LOG_FILE_NAME: &str = "framecraft.log";

/// Marks where a new run starts in the shared log file.
#[cfg(debug_assertions)]
fn write_session_banner(logs_dir: &std::path::Path) {
    use std::io::Write;

    let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(logs_dir.join(LOG_FILE_NAME))
    else {
        return;
    };
    let rule = "=".repeat(80);
    let _ = writeln!(
        file,
        "\n{rule}\nFramecraft session {}\n{rule}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
}

/// Debug builds log to stdout and to `logs/framecraft.log`.
/// `RUST_LOG` overrides the default filter.
#[cfg(debug_assertions)]
fn setup_logging(logs_dir: &std::path::Path) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    write_session_banner(logs_dir);

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME));
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,framecraft=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();

    Some(guard)
}

#[cfg(not(debug_assertions))]
fn setup_logging(_logs_dir: &std::path::Path) -> Option<()> {
    None
}

fn main() {
    // Held until exit so buffered log lines are flushed
    let _log_guard = match paths::ensure_directories() {
        Ok(logs_dir) => setup_logging(&logs_dir),
        Err(e) => {
            eprintln!("Failed to create application directories: {}", e);
            None
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Framecraft Composition Guides".into(),
                resolution: (DEFAULT_WINDOW_WIDTH as u32, DEFAULT_WINDOW_HEIGHT as u32).into(),
                ..default()
            }),
            ..default()
        }))
        // Only repaint on input or an explicit redraw request
        .insert_resource(WinitSettings::desktop_app())
        .add_plugins(EguiPlugin::default())
        .add_plugins(config::ConfigPlugin)
        .add_plugins(guide::GuidePlugin)
        .add_plugins(ui::UiPlugin)
        .run();
}
