use ahub::domain::config::PortalConfig;
use ahub::domain::role::Role;
use ahub::features::access::Access;
use ahub::features::navigation::Navigation;
use ahub::features::session::Sessions;
use ahub::kernel::security::guard::{Chrome, GuardDecision};

#[test]
fn registers_every_slice() {
    let registry = ahub::init(&PortalConfig::default()).expect("init");

    assert_eq!(registry.len(), ahub::features::ENABLED.len());
    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, ahub::features::ENABLED);
    assert!(ahub::features::is_enabled("Navigation"));
    assert!(!ahub::features::is_enabled("Licensing"));
}

#[test]
fn every_menu_link_points_at_a_known_route() {
    let registry = ahub::init(&PortalConfig::default()).expect("init");
    let access = registry.get::<Access>().expect("access slice");
    let navigation = registry.get::<Navigation>().expect("navigation slice");

    for role in Role::ALL {
        let mut links = Vec::new();
        collect_paths(navigation.resolver.for_role(role), &mut links);
        for path in links {
            assert!(
                access.gate.table().resolve(path).is_some(),
                "{role} menu links to unregistered {path}"
            );
        }
    }
}

#[test]
fn menu_links_never_lead_a_role_to_a_denied_page() {
    let registry = ahub::init(&PortalConfig::default()).expect("init");
    let access = registry.get::<Access>().expect("access slice");
    let navigation = registry.get::<Navigation>().expect("navigation slice");
    let sessions = registry.get::<Sessions>().expect("session slice");
    assert!(sessions.store.is_loading());

    for role in Role::ALL {
        let session = ahub::domain::session::Session::authenticated(
            ahub::domain::session::SessionUser::new("u", role),
        );
        let mut links = Vec::new();
        collect_paths(navigation.resolver.for_role(role), &mut links);
        for path in links {
            let decision = access.gate.decide(&session, path);
            assert!(
                decision == GuardDecision::Render(Chrome::Layout),
                "{role} sees {path} in the menu but gets {decision:?}"
            );
        }
    }
}

fn collect_paths<'a>(menu: &'a [ahub::domain::menu::MenuItem], out: &mut Vec<&'a str>) {
    for item in menu {
        match item.path() {
            Some(path) => out.push(path),
            None => collect_paths(item.children(), out),
        }
    }
}
