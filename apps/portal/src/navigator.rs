use ahub::features::access::{NavigationMode, Navigator};
use dioxus::prelude::{Navigator as DioxusNavigator, navigator};

/// Lets the access gate drive the Dioxus router.
///
/// Capture it with [`RouterNavigator::current`] while rendering; it can then be moved into
/// effects and event handlers.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    router: DioxusNavigator,
}

impl RouterNavigator {
    /// The router of the calling component.
    pub fn current() -> Self {
        Self { router: navigator() }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&mut self, path: &str, mode: NavigationMode) {
        let target = path.to_owned();
        match mode {
            NavigationMode::Push => self.router.push(target),
            NavigationMode::Replace => self.router.replace(target),
        };
    }
}
