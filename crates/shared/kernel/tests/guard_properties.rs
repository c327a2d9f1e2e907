use ahub_kernel::prelude::*;
use proptest::prelude::*;

fn role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn role_set() -> impl Strategy<Value = RoleSet> {
    (0u8..16).prop_map(RoleSet::from_bits_truncate)
}

fn policy() -> impl Strategy<Value = AccessPolicy> {
    prop_oneof![
        Just(AccessPolicy::Public),
        Just(AccessPolicy::AnyAuthenticated),
        role_set().prop_map(AccessPolicy::RoleRestricted),
    ]
}

proptest! {
    #[test]
    fn restricted_page_renders_iff_role_allowed(role in role(), allowed in role_set()) {
        prop_assume!(!allowed.is_empty());
        let session = Session::authenticated(SessionUser::new("u", role));
        let decision = RouteGuard::evaluate(&session, AccessPolicy::RoleRestricted(allowed));

        if allowed.allows(role) {
            prop_assert_eq!(decision, GuardDecision::Render(Chrome::Layout));
        } else {
            prop_assert_eq!(decision, GuardDecision::Denied { allowed });
        }
    }

    #[test]
    fn loading_renders_only_the_placeholder(
        policy in policy(),
        role in prop::option::of(role()),
        signed_in in any::<bool>(),
    ) {
        let user = signed_in.then(|| SessionUser {
            user_id: "u".to_owned(),
            role,
            display_name: String::new(),
            subscription_plan: None,
        });
        let session = Session { user, loading: true };

        prop_assert_eq!(RouteGuard::evaluate(&session, policy), GuardDecision::Loading);
    }

    #[test]
    fn anonymous_visitors_are_sent_to_login(policy in policy()) {
        let decision = RouteGuard::evaluate(&Session::anonymous(), policy);
        if policy == AccessPolicy::Public {
            prop_assert_eq!(decision, GuardDecision::Render(Chrome::Bare));
        } else {
            prop_assert_eq!(decision, GuardDecision::RedirectToLogin);
        }
    }

    #[test]
    fn signed_in_users_never_lose_the_layout(policy in policy(), role in role()) {
        let session = Session::authenticated(SessionUser::new("u", role));
        let decision = RouteGuard::evaluate(&session, policy);
        prop_assert_ne!(decision, GuardDecision::Render(Chrome::Bare));
        prop_assert_ne!(decision, GuardDecision::RedirectToLogin);
    }

    #[test]
    fn empty_allow_list_matches_any_authenticated(role in role()) {
        let session = Session::authenticated(SessionUser::new("u", role));
        prop_assert_eq!(
            RouteGuard::evaluate(&session, AccessPolicy::RoleRestricted(RoleSet::empty())),
            RouteGuard::evaluate(&session, AccessPolicy::AnyAuthenticated)
        );
    }
}
