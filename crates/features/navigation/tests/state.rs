use ahub_kernel::domain::config::{NavigationConfig, PortalConfig};
use ahub_kernel::domain::language::Language;
use ahub_kernel::domain::role::Role;
use ahub_navigation::{MenuExpansionState, NavigationError, NavigationState, RoleMenuResolver};
use proptest::prelude::*;

fn admin_state() -> (RoleMenuResolver, NavigationState) {
    let resolver = RoleMenuResolver::default();
    let state = NavigationState::new(resolver.for_role(Role::Admin), &NavigationConfig::default());
    (resolver, state)
}

#[test]
fn sidebar_mounts_all_collapsed() {
    let (resolver, state) = admin_state();
    for key in state.expansion().keys() {
        assert!(!state.is_expanded(key));
    }
    assert_eq!(
        MenuExpansionState::for_menu(resolver.for_role(Role::Admin)),
        state.expansion().clone()
    );
}

#[test]
fn every_role_starts_with_no_group_open() {
    let resolver = RoleMenuResolver::default();
    for role in Role::ALL {
        let state = NavigationState::new(resolver.for_role(role), &NavigationConfig::default());
        assert!(state.expansion().expanded_keys().is_empty(), "{role}");
        assert!(state.expansion().keys().all(|key| !state.is_expanded(key)), "{role}");
    }
}

#[test]
fn several_groups_can_be_open_at_once() {
    let (_, mut state) = admin_state();
    assert!(state.toggle("settings").expect("settings"));
    assert!(state.toggle("logs").expect("logs"));
    assert!(state.is_expanded("settings"));
    assert!(state.is_expanded("logs"));
    assert!(!state.is_expanded("performance"));
}

#[test]
fn reveal_opens_the_enclosing_group() {
    let (resolver, mut state) = admin_state();
    assert!(state.reveal(resolver.for_role(Role::Admin), "/settings/platform"));
    assert_eq!(state.expansion().expanded_keys(), vec!["settings"]);
    assert!(!state.reveal(resolver.for_role(Role::Admin), "/nowhere"));
}

#[test]
fn language_switching() {
    let (_, mut state) = admin_state();
    assert_eq!(state.language(), Language::En);
    assert_eq!(state.set_language("fr-FR").expect("fr"), Language::Fr);
    assert_eq!(state.language(), Language::Fr);

    let err = state.set_language("de").expect_err("unsupported");
    assert!(matches!(err, NavigationError::UnsupportedLanguage { .. }));
    assert_eq!(state.language(), Language::Fr);
}

#[test]
fn languages_outside_configuration_are_rejected() {
    let config = NavigationConfig {
        languages: vec![Language::Fr],
        default_language: Language::Es,
        ..NavigationConfig::default()
    };
    let mut state = NavigationState::new(&[], &config);

    assert_eq!(state.languages(), &[Language::Es, Language::Fr]);
    assert!(state.set_language("en").is_err());
}

#[test]
fn init_creates_slice() {
    let slice = ahub_navigation::init(&PortalConfig::default()).expect("init should succeed");
    let navigation = slice.downcast::<ahub_navigation::Navigation>().expect("downcast");
    assert!(!navigation.resolver.for_role(Role::Admin).is_empty());
}

proptest! {
    #[test]
    fn toggling_one_key_leaves_the_others(toggles in prop::collection::vec(0usize..6, 0..24), target in 0usize..6) {
        let resolver = RoleMenuResolver::default();
        let mut state = MenuExpansionState::for_menu(resolver.for_role(Role::Admin));
        let mut keys: Vec<String> = state.keys().map(str::to_owned).collect();
        keys.sort();
        prop_assume!(keys.len() == 6);

        for i in toggles {
            state.toggle(&keys[i]).expect("known key");
        }
        let before: Vec<bool> = keys.iter().map(|k| state.is_expanded(k)).collect();

        state.toggle(&keys[target]).expect("known key");

        for (i, key) in keys.iter().enumerate() {
            if i == target {
                prop_assert_ne!(state.is_expanded(key), before[i]);
            } else {
                prop_assert_eq!(state.is_expanded(key), before[i]);
            }
        }
    }
}
