use ahub_domain::access::AccessPolicy;
use ahub_domain::language::Language;
use ahub_domain::role::{Role, RoleSet};
use ahub_domain::session::{Session, SessionUser};
use serde_json::json;

#[test]
fn role_parsing_is_case_insensitive() {
    assert_eq!(Role::parse("Merchant"), Some(Role::Merchant));
    assert_eq!(Role::parse("  ADMIN "), Some(Role::Admin));
    assert_eq!(Role::parse("commercial"), Some(Role::Commercial));
    assert_eq!(Role::parse("superuser"), None);
    assert!("".parse::<Role>().is_err());
}

#[test]
fn role_set_lists_roles_in_stable_order() {
    let set: RoleSet = [Role::Admin, Role::Merchant].into_iter().collect();
    assert_eq!(set.to_string(), "merchant, admin");
    assert!(set.allows(Role::Merchant));
    assert!(!set.allows(Role::Influencer));
    assert_eq!(RoleSet::empty().to_string(), "");
}

#[test]
fn role_set_serializes_as_names() {
    let set = RoleSet::MERCHANT | RoleSet::ADMIN;
    let value = serde_json::to_value(set).expect("serialize");
    assert_eq!(value, json!(["merchant", "admin"]));

    let back: RoleSet = serde_json::from_value(json!(["ADMIN", "merchant"])).expect("deserialize");
    assert_eq!(back, set);
}

#[test]
fn empty_restriction_normalizes_to_any_authenticated() {
    assert_eq!(AccessPolicy::restricted([]).normalized(), AccessPolicy::AnyAuthenticated);
    assert_eq!(
        AccessPolicy::restricted([Role::Admin]).normalized(),
        AccessPolicy::RoleRestricted(RoleSet::ADMIN)
    );
    assert!(!AccessPolicy::Public.requires_session());
}

#[test]
fn session_user_tolerates_unknown_roles() {
    let user: SessionUser = serde_json::from_value(json!({
        "userId": "u-1",
        "role": "partner",
        "displayName": "Ana"
    }))
    .expect("unknown role must not fail the session");

    assert_eq!(user.role, None);
    assert_eq!(user.display_name, "Ana");

    let session = Session::authenticated(user);
    assert!(session.is_authenticated());
    assert_eq!(session.user_id(), Some("u-1"));
    assert_eq!(session.role(), None);
}

#[test]
fn loading_session_is_never_authenticated() {
    let mut session = Session::authenticated(SessionUser::new("u-2", Role::Admin));
    session.loading = true;
    assert!(!session.is_authenticated());
    assert!(!Session::loading().is_authenticated());
}

#[test]
fn language_codes_accept_regional_tags() {
    assert_eq!(Language::from_code("fr-CA"), Some(Language::Fr));
    assert_eq!(Language::from_code("ES_mx"), Some(Language::Es));
    assert_eq!(Language::from_code("de"), None);
    assert_eq!(Language::Fr.to_string(), "fr");
}
