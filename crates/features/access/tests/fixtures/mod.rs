use ahub_access::{NavigationMode, Navigator};
use ahub_kernel::domain::role::Role;
use ahub_kernel::domain::session::{Session, SessionUser};

/// Navigator that records every navigation it is asked to perform.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visits: Vec<(String, NavigationMode)>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str, mode: NavigationMode) {
        self.visits.push((path.to_owned(), mode));
    }
}

pub fn signed_in(role: Role) -> Session {
    Session::authenticated(SessionUser::new(format!("{role}-1"), role).with_display_name("Test"))
}
