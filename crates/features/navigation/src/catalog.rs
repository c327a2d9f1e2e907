//! The sidebar, declared once.
//!
//! Every entry states which roles see it; role menus are projections of this tree. A group
//! survives the projection only if it keeps at least one child.

use ahub_kernel::domain::constants::paths;
use ahub_kernel::domain::menu::{MenuItem, MenuTarget};
use ahub_kernel::domain::role::{Role, RoleSet};
use std::borrow::Cow;

#[derive(Debug)]
pub(crate) enum Node {
    Link(&'static str),
    Group { key: &'static str, children: &'static [Entry] },
}

#[derive(Debug)]
pub(crate) struct Entry {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    visible: RoleSet,
    node: Node,
}

const fn link(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    path: &'static str,
    visible: RoleSet,
) -> Entry {
    Entry { id, label, icon, visible, node: Node::Link(path) }
}

const fn group(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    visible: RoleSet,
    children: &'static [Entry],
) -> Entry {
    Entry { id, label, icon, visible, node: Node::Group { key: id, children } }
}

const EVERYONE: RoleSet = RoleSet::EVERYONE;
const ADMIN: RoleSet = RoleSet::ADMIN;
const SELLERS: RoleSet = RoleSet::MERCHANT.union(RoleSet::ADMIN);
const EARNERS: RoleSet = RoleSet::INFLUENCER.union(RoleSet::MERCHANT).union(RoleSet::ADMIN);
const PROMOTERS: RoleSet = RoleSet::INFLUENCER.union(RoleSet::ADMIN).union(RoleSet::COMMERCIAL);
const PROSPECTORS: RoleSet = RoleSet::ADMIN.union(RoleSet::COMMERCIAL);
const LEAD_OWNERS: RoleSet = SELLERS.union(RoleSet::COMMERCIAL);

#[rustfmt::skip]
const CAMPAIGNS: &[Entry] = &[
    link("list", "My campaigns", "list", paths::CAMPAIGNS, EVERYONE),
    link("create", "New campaign", "plus", paths::CAMPAIGN_CREATE, SELLERS),
];

#[rustfmt::skip]
const PRODUCTS: &[Entry] = &[
    link("catalog", "Catalog", "boxes", paths::PRODUCTS, SELLERS),
    link("create", "New product", "plus", paths::PRODUCT_CREATE, SELLERS),
];

#[rustfmt::skip]
const AFFILIATES: &[Entry] = &[
    link("list", "My affiliates", "user-check", paths::AFFILIATES, SELLERS),
    link("requests", "Requests", "user-plus", paths::AFFILIATE_REQUESTS, SELLERS),
    link("payouts", "Payouts", "wallet", paths::AFFILIATE_PAYOUTS, SELLERS),
    link("coupons", "Coupons", "ticket", paths::AFFILIATE_COUPONS, SELLERS),
];

#[rustfmt::skip]
const PERFORMANCE: &[Entry] = &[
    link("overview", "Overview", "gauge", paths::PERFORMANCE, EVERYONE),
    link("conversions", "Conversions", "badge-check", paths::PERFORMANCE_CONVERSIONS, EVERYONE),
    link("commissions", "Commissions", "coins", paths::PERFORMANCE_COMMISSIONS, EARNERS),
    link("clicks", "Clicks", "mouse-pointer-click", paths::PERFORMANCE_CLICKS, SELLERS),
    link("leads", "Leads", "target", paths::PERFORMANCE_LEADS, LEAD_OWNERS),
    link("reports", "Reports", "file-bar-chart", paths::PERFORMANCE_REPORTS, SELLERS),
];

#[rustfmt::skip]
const LOGS: &[Entry] = &[
    link("postbacks", "Postbacks", "send", paths::LOGS_POSTBACKS, SELLERS),
    link("audit", "Audit trail", "history", paths::LOGS_AUDIT, ADMIN),
    link("webhooks", "Webhooks", "webhook", paths::LOGS_WEBHOOKS, ADMIN),
];

#[rustfmt::skip]
const SETTINGS: &[Entry] = &[
    link("personal", "Personal", "user", paths::SETTINGS_PERSONAL, EVERYONE),
    link("security", "Security", "lock", paths::SETTINGS_SECURITY, EVERYONE),
    link("notifications", "Notifications", "bell", paths::SETTINGS_NOTIFICATIONS, EARNERS),
    link("company", "Company", "briefcase", paths::SETTINGS_COMPANY, SELLERS),
    link("affiliates", "Affiliate program", "handshake", paths::SETTINGS_AFFILIATES, SELLERS),
    link("integrations", "Integrations", "plug", paths::SETTINGS_INTEGRATIONS, SELLERS),
    link("registration", "Registration", "clipboard-list", paths::SETTINGS_REGISTRATION, ADMIN),
    link("mlm", "MLM levels", "network", paths::SETTINGS_MLM, ADMIN),
    link("permissions", "Permissions", "key-round", paths::SETTINGS_PERMISSIONS, ADMIN),
    link("users", "Users", "users-round", paths::SETTINGS_USERS, ADMIN),
    link("platform", "Platform", "server-cog", paths::SETTINGS_PLATFORM, ADMIN),
    link("smtp", "SMTP", "mail", paths::SETTINGS_SMTP, ADMIN),
    link("emails", "Email templates", "mails", paths::SETTINGS_EMAILS, ADMIN),
    link("white-label", "White label", "palette", paths::SETTINGS_WHITE_LABEL, ADMIN),
];

#[rustfmt::skip]
pub(crate) const CATALOG: &[Entry] = &[
    link("getting-started", "Getting started", "rocket", paths::GETTING_STARTED, EVERYONE),
    link("dashboard", "Dashboard", "layout-dashboard", paths::DASHBOARD, EVERYONE),
    link("messages", "Messages", "message-square", paths::MESSAGES, EVERYONE),
    link("marketplace", "Marketplace", "store", paths::MARKETPLACE, EVERYONE),
    link("advertisers", "Advertisers", "building-2", paths::ADVERTISERS, PROSPECTORS),
    group("campaigns", "Campaigns", "megaphone", EVERYONE, CAMPAIGNS),
    group("products", "Products", "package", SELLERS, PRODUCTS),
    group("affiliates", "Affiliates", "users", SELLERS, AFFILIATES),
    link("tracking-links", "Tracking links", "link", paths::TRACKING_LINKS, PROMOTERS),
    link("moderation", "Moderation", "shield-check", paths::MODERATION, ADMIN),
    link("users", "Users", "user-cog", paths::USERS, ADMIN),
    group("performance", "Performance", "chart-line", EVERYONE, PERFORMANCE),
    group("logs", "Logs", "scroll-text", SELLERS, LOGS),
    link("subscription", "Subscription", "credit-card", paths::SUBSCRIPTION, EVERYONE),
    group("settings", "Settings", "settings", EVERYONE, SETTINGS),
];

/// Projects the catalog onto one role.
pub(crate) fn project(entries: &[Entry], role: Role) -> Vec<MenuItem> {
    entries.iter().filter(|e| e.visible.allows(role)).filter_map(|e| e.project(role)).collect()
}

impl Entry {
    fn project(&self, role: Role) -> Option<MenuItem> {
        let target = match &self.node {
            Node::Link(path) => MenuTarget::Link { path: Cow::Borrowed(*path) },
            Node::Group { key, children } => {
                let children = project(children, role);
                if children.is_empty() {
                    return None;
                }
                MenuTarget::Group { key: Cow::Borrowed(*key), children }
            }
        };

        Some(MenuItem {
            id: Cow::Borrowed(self.id),
            label: Cow::Borrowed(self.label),
            icon: Cow::Borrowed(self.icon),
            target,
        })
    }
}
