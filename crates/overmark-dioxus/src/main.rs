use dioxus::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

#[cfg(test)]
mod tests;

use overmark_config::{Config, LayerConfig};
use ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("overmark starting up");

    // Resolve once up front so bad input fails before a window opens.
    let (content_path, _layers) = resolve_launch_settings();

    if !content_path.is_file() {
        eprintln!(
            "Error: Content path '{}' is not a readable file",
            content_path.display()
        );
        process::exit(1);
    }

    log::info!("viewing content from {}", content_path.display());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

/// Determine the content file and layering from the CLI argument or the
/// config file.
fn resolve_launch_settings() -> (PathBuf, LayerConfig) {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        2 => (PathBuf::from(&args[1]), LayerConfig::default()),
        1 => match Config::load() {
            Ok(Some(config)) => (config.content_path, config.layers),
            Ok(None) => {
                eprintln!("Error: No content path provided and no config file found");
                eprintln!("Usage: {} <content-file>", program_name());
                eprintln!(
                    "Or create a config file at {}",
                    Config::config_path().display()
                );
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <content-file>", program_name());
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {} [content-file]", program_name());
            process::exit(1);
        }
    }
}

fn program_name() -> String {
    env::args()
        .next()
        .unwrap_or_else(|| "overmark-dioxus".to_string())
}

// The desktop launcher takes a plain function, so the root re-resolves the
// launch settings instead of closing over them.
fn app_root() -> Element {
    let (content_path, layers) = resolve_launch_settings();

    rsx! {
        App { content_path: content_path, layers: layers }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("overmark")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
