//! Role claims and route paths shared by the route table, menus and the portal router.

// Role claims as sent by the backend
pub const INFLUENCER: &str = "influencer";
pub const MERCHANT: &str = "merchant";
pub const ADMIN: &str = "admin";
pub const COMMERCIAL: &str = "commercial";

/// Route paths.
pub mod paths {
    // Public
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const PRICING: &str = "/pricing";
    pub const MARKETPLACE: &str = "/marketplace";
    pub const MARKETPLACE_PRODUCT: &str = "/marketplace/:id";
    pub const TERMS: &str = "/legal/terms";
    pub const PRIVACY: &str = "/legal/privacy";
    pub const CONTACT: &str = "/contact";

    // Shared workspace
    pub const GETTING_STARTED: &str = "/getting-started";
    pub const DASHBOARD: &str = "/dashboard";
    pub const MESSAGES: &str = "/messages";
    pub const CAMPAIGNS: &str = "/campaigns";
    pub const CAMPAIGN_CREATE: &str = "/campaigns/create";
    pub const CAMPAIGN_DETAIL: &str = "/campaigns/:id";
    pub const TRACKING_LINKS: &str = "/tracking-links";
    pub const SUBSCRIPTION: &str = "/subscription";

    // Merchant catalogue and affiliates
    pub const PRODUCTS: &str = "/products";
    pub const PRODUCT_CREATE: &str = "/products/create";
    pub const AFFILIATES: &str = "/affiliates";
    pub const AFFILIATE_REQUESTS: &str = "/affiliates/requests";
    pub const AFFILIATE_PAYOUTS: &str = "/affiliates/payouts";
    pub const AFFILIATE_COUPONS: &str = "/affiliates/coupons";

    // Administration
    pub const ADVERTISERS: &str = "/advertisers";
    pub const MODERATION: &str = "/moderation";
    pub const USERS: &str = "/users";

    // Performance
    pub const PERFORMANCE: &str = "/performance";
    pub const PERFORMANCE_CONVERSIONS: &str = "/performance/conversions";
    pub const PERFORMANCE_CLICKS: &str = "/performance/clicks";
    pub const PERFORMANCE_COMMISSIONS: &str = "/performance/commissions";
    pub const PERFORMANCE_LEADS: &str = "/performance/leads";
    pub const PERFORMANCE_REPORTS: &str = "/performance/reports";

    // Logs
    pub const LOGS_POSTBACKS: &str = "/logs/postbacks";
    pub const LOGS_AUDIT: &str = "/logs/audit";
    pub const LOGS_WEBHOOKS: &str = "/logs/webhooks";

    // Settings
    pub const SETTINGS_PERSONAL: &str = "/settings/personal";
    pub const SETTINGS_SECURITY: &str = "/settings/security";
    pub const SETTINGS_NOTIFICATIONS: &str = "/settings/notifications";
    pub const SETTINGS_COMPANY: &str = "/settings/company";
    pub const SETTINGS_AFFILIATES: &str = "/settings/affiliates";
    pub const SETTINGS_INTEGRATIONS: &str = "/settings/integrations";
    pub const SETTINGS_REGISTRATION: &str = "/settings/registration";
    pub const SETTINGS_MLM: &str = "/settings/mlm";
    pub const SETTINGS_PERMISSIONS: &str = "/settings/permissions";
    pub const SETTINGS_USERS: &str = "/settings/users";
    pub const SETTINGS_PLATFORM: &str = "/settings/platform";
    pub const SETTINGS_SMTP: &str = "/settings/smtp";
    pub const SETTINGS_EMAILS: &str = "/settings/emails";
    pub const SETTINGS_WHITE_LABEL: &str = "/settings/white-label";
}
