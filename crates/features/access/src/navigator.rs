/// How a navigation affects the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationMode {
    /// Adds an entry; the back button returns to the current page.
    Push,
    /// Overwrites the current entry; used for login redirects so back does not loop.
    Replace,
}

/// The router capability the gate drives. Implemented by the UI router.
pub trait Navigator {
    fn navigate(&mut self, path: &str, mode: NavigationMode);

    fn push(&mut self, path: &str) {
        self.navigate(path, NavigationMode::Push);
    }

    fn replace(&mut self, path: &str) {
        self.navigate(path, NavigationMode::Replace);
    }
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, path: &str, mode: NavigationMode) {
        (**self).navigate(path, mode);
    }
}
