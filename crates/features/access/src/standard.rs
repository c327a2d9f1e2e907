//! The portal's route contract.
//!
//! Public pages need no session, feature areas need any session, and three routes are
//! reserved to specific roles: campaign and product creation (merchants and admins) and the
//! platform settings (admins only).

use crate::error::AccessError;
use crate::table::RouteTable;
use ahub_kernel::domain::access::{AccessPolicy, RouteDefinition};
use ahub_kernel::domain::constants::paths;
use ahub_kernel::domain::role::RoleSet;

const PUBLIC: AccessPolicy = AccessPolicy::Public;
const SIGNED_IN: AccessPolicy = AccessPolicy::AnyAuthenticated;
const SELLERS: AccessPolicy = AccessPolicy::RoleRestricted(RoleSet::MERCHANT.union(RoleSet::ADMIN));
const ADMINS: AccessPolicy = AccessPolicy::RoleRestricted(RoleSet::ADMIN);

/// `(pattern, page, policy)` for every page the portal serves.
pub const STANDARD_ROUTES: &[(&str, &str, AccessPolicy)] = &[
    (paths::HOME, "home", PUBLIC),
    (paths::LOGIN, "login", PUBLIC),
    (paths::REGISTER, "register", PUBLIC),
    (paths::PRICING, "pricing", PUBLIC),
    (paths::MARKETPLACE, "marketplace", PUBLIC),
    (paths::MARKETPLACE_PRODUCT, "marketplace-product", PUBLIC),
    (paths::TERMS, "terms", PUBLIC),
    (paths::PRIVACY, "privacy", PUBLIC),
    (paths::CONTACT, "contact", PUBLIC),
    (paths::GETTING_STARTED, "getting-started", SIGNED_IN),
    (paths::DASHBOARD, "dashboard", SIGNED_IN),
    (paths::MESSAGES, "messages", SIGNED_IN),
    (paths::CAMPAIGNS, "campaigns", SIGNED_IN),
    (paths::CAMPAIGN_CREATE, "campaign-create", SELLERS),
    (paths::CAMPAIGN_DETAIL, "campaign-detail", SIGNED_IN),
    (paths::TRACKING_LINKS, "tracking-links", SIGNED_IN),
    (paths::SUBSCRIPTION, "subscription", SIGNED_IN),
    (paths::PRODUCTS, "products", SIGNED_IN),
    (paths::PRODUCT_CREATE, "product-create", SELLERS),
    (paths::AFFILIATES, "affiliates", SIGNED_IN),
    (paths::AFFILIATE_REQUESTS, "affiliate-requests", SIGNED_IN),
    (paths::AFFILIATE_PAYOUTS, "affiliate-payouts", SIGNED_IN),
    (paths::AFFILIATE_COUPONS, "affiliate-coupons", SIGNED_IN),
    (paths::ADVERTISERS, "advertisers", SIGNED_IN),
    (paths::MODERATION, "moderation", SIGNED_IN),
    (paths::USERS, "users", SIGNED_IN),
    (paths::PERFORMANCE, "performance", SIGNED_IN),
    (paths::PERFORMANCE_CONVERSIONS, "performance-conversions", SIGNED_IN),
    (paths::PERFORMANCE_CLICKS, "performance-clicks", SIGNED_IN),
    (paths::PERFORMANCE_COMMISSIONS, "performance-commissions", SIGNED_IN),
    (paths::PERFORMANCE_LEADS, "performance-leads", SIGNED_IN),
    (paths::PERFORMANCE_REPORTS, "performance-reports", SIGNED_IN),
    (paths::LOGS_POSTBACKS, "logs-postbacks", SIGNED_IN),
    (paths::LOGS_AUDIT, "logs-audit", SIGNED_IN),
    (paths::LOGS_WEBHOOKS, "logs-webhooks", SIGNED_IN),
    (paths::SETTINGS_PERSONAL, "settings-personal", SIGNED_IN),
    (paths::SETTINGS_SECURITY, "settings-security", SIGNED_IN),
    (paths::SETTINGS_NOTIFICATIONS, "settings-notifications", SIGNED_IN),
    (paths::SETTINGS_COMPANY, "settings-company", SIGNED_IN),
    (paths::SETTINGS_AFFILIATES, "settings-affiliates", SIGNED_IN),
    (paths::SETTINGS_INTEGRATIONS, "settings-integrations", SIGNED_IN),
    (paths::SETTINGS_REGISTRATION, "settings-registration", SIGNED_IN),
    (paths::SETTINGS_MLM, "settings-mlm", SIGNED_IN),
    (paths::SETTINGS_PERMISSIONS, "settings-permissions", SIGNED_IN),
    (paths::SETTINGS_USERS, "settings-users", SIGNED_IN),
    (paths::SETTINGS_PLATFORM, "settings-platform", ADMINS),
    (paths::SETTINGS_SMTP, "settings-smtp", SIGNED_IN),
    (paths::SETTINGS_EMAILS, "settings-emails", SIGNED_IN),
    (paths::SETTINGS_WHITE_LABEL, "settings-white-label", SIGNED_IN),
];

/// Builds the route table from [`STANDARD_ROUTES`].
///
/// # Errors
/// Propagates [`RouteTable::register`] failures.
pub fn standard_routes() -> Result<RouteTable, AccessError> {
    let mut table = RouteTable::new();
    for &(pattern, page, policy) in STANDARD_ROUTES {
        table.register(RouteDefinition::new(pattern, page, policy))?;
    }
    Ok(table)
}
