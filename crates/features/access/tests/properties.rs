mod fixtures;

use ahub_access::standard::standard_routes;
use ahub_access::{AccessGate, GateView, NavigationMode};
use ahub_kernel::domain::access::AccessPolicy;
use ahub_kernel::domain::config::RoutesConfig;
use ahub_kernel::domain::role::Role;
use ahub_kernel::domain::session::Session;
use fixtures::{RecordingNavigator, signed_in};
use proptest::prelude::*;
use proptest::sample::select;

fn gate() -> AccessGate {
    AccessGate::new(standard_routes().expect("standard routes"), &RoutesConfig::default())
        .expect("gate")
}

fn location() -> impl Strategy<Value = String> {
    let known = select(
        standard_routes()
            .expect("standard routes")
            .iter()
            .map(|d| d.pattern.replace(":id", "7"))
            .collect::<Vec<_>>(),
    );
    let random = prop::collection::vec("[a-z0-9-]{1,8}", 0..4).prop_map(|s| format!("/{}", s.join("/")));
    (known, random, "(\\?[a-z]=[0-9])?", any::<bool>()).prop_map(|(known, random, query, pick)| {
        format!("{}{query}", if pick { known } else { random })
    })
}

fn role() -> impl Strategy<Value = Role> {
    select(Role::ALL.to_vec())
}

proptest! {
    #[test]
    fn restricted_pages_never_render_for_other_roles(path in location(), role in role()) {
        let gate = gate();
        let mut nav = RecordingNavigator::default();
        let policy = gate.table().policy_for(&path);

        let view = gate.enforce(&signed_in(role), &path, &mut nav);

        if let AccessPolicy::RoleRestricted(allowed) = policy.normalized() {
            prop_assert_eq!(matches!(view, GateView::Page { .. }), allowed.allows(role));
        }
        prop_assert!(nav.visits.is_empty());
    }

    #[test]
    fn anonymous_visitors_redirect_at_most_once(path in location()) {
        let gate = gate();
        let mut nav = RecordingNavigator::default();

        let view = gate.enforce(&Session::anonymous(), &path, &mut nav);

        if gate.table().policy_for(&path) == AccessPolicy::Public {
            prop_assert!(nav.visits.is_empty());
            prop_assert!(matches!(view, GateView::Page { .. }), "expected a page, got {:?}", view);
        } else {
            prop_assert_eq!(view, GateView::Redirecting);
            prop_assert_eq!(nav.visits.len(), 1);
            prop_assert_eq!(nav.visits[0].1, NavigationMode::Replace);
            let (target, _) = &nav.visits[0];
            prop_assert!(target.starts_with("/login?next=/"));
        }
    }

    #[test]
    fn loading_dominates(path in location()) {
        let gate = gate();
        let mut nav = RecordingNavigator::default();
        prop_assert_eq!(gate.enforce(&Session::loading(), &path, &mut nav), GateView::Loading);
        prop_assert!(nav.visits.is_empty());
    }
}
