//! Desktop shell of the `AffiliateHub` portal.
//!
//! The composition root builds an [`AppContext`] from the initialized feature slices and hands
//! it to [`PortalApp::launch`]; every component reads it back with `use_context`.

mod components;
mod context;
mod navigator;
mod routes;
mod session;
mod views;

pub use crate::context::AppContext;
pub use crate::routes::Route;

use crate::components::App;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

const STYLE: &str = include_str!("../assets/portal.css");

#[derive(Debug)]
pub struct PortalApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for PortalApp {
    fn default() -> Self {
        Self { title: "AffiliateHub".to_owned(), width: 1280.0, height: 820.0 }
    }
}

impl PortalApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and runs the UI until it is closed.
    pub fn launch(self, context: AppContext) {
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><style>{STYLE}</style>"#
        ));

        LaunchBuilder::desktop().with_cfg(cfg).with_context(context).launch(App);
    }
}
