//! Main window creation.

use tauri::webview::PageLoadEvent;
use tauri::window::Color;
use tauri::{Manager, Runtime, Theme, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tracing::{debug, warn};

use crate::core::config::{
    APP_NAME, MAIN_WINDOW, WINDOW_BACKGROUND, WINDOW_HEIGHT, WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH,
    WINDOW_WIDTH,
};

/// Creates the dark main window. It stays hidden until the first page load
/// finishes.
pub fn create_main_window<R: Runtime, M: Manager<R>>(manager: &M) -> tauri::Result<WebviewWindow<R>> {
    let (r, g, b) = WINDOW_BACKGROUND;
    let builder = WebviewWindowBuilder::new(manager, MAIN_WINDOW, WebviewUrl::App("index.html".into()))
        .title(APP_NAME)
        .inner_size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .min_inner_size(WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT)
        .theme(Some(Theme::Dark))
        .background_color(Color(r, g, b, 255))
        .visible(false)
        .on_page_load(|window, payload| {
            if matches!(payload.event(), PageLoadEvent::Finished) {
                debug!("Page loaded, showing {}", window.label());
                if let Err(e) = window.show() {
                    warn!("Could not show main window: {}", e);
                }
            }
        });

    #[cfg(target_os = "macos")]
    let builder = builder
        .title_bar_style(tauri::TitleBarStyle::Overlay)
        .hidden_title(true);

    builder.build()
}
