//! Static content shown in the site footer.

use crate::icons::Icon;

/// A single navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkItem {
    pub name: &'static str,
    pub href: &'static str,
}

/// A named, ordered column of links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLinkCategory {
    pub name: &'static str,
    pub links: &'static [LinkItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialProfile {
    pub name: &'static str,
    pub icon: Icon,
    pub href: &'static str,
}

/// Everything the footer renders apart from the copyright year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterContent {
    pub brand_name: &'static str,
    pub description: &'static str,
    pub socials: &'static [SocialProfile],
    pub categories: &'static [FooterLinkCategory],
    pub legal: &'static [LinkItem],
}

const fn link(name: &'static str, href: &'static str) -> LinkItem {
    LinkItem { name, href }
}

static SHOP_LINKS: [LinkItem; 5] = [
    link("New Arrivals", "/shop/new"),
    link("Best Sellers", "/shop/best-sellers"),
    link("Home Goods", "/shop/home"),
    link("Gift Cards", "/shop/gift-cards"),
    link("Sale", "/shop/sale"),
];

static COMPANY_LINKS: [LinkItem; 5] = [
    link("About Us", "/about"),
    link("Careers", "/careers"),
    link("Press", "/press"),
    link("Sustainability", "/sustainability"),
    link("Journal", "/journal"),
];

static SUPPORT_LINKS: [LinkItem; 5] = [
    link("Help Center", "/help"),
    link("Shipping", "/help/shipping"),
    link("Returns", "/help/returns"),
    link("Order Status", "/orders"),
    link("Contact", "/contact"),
];

static CATEGORIES: [FooterLinkCategory; 3] = [
    FooterLinkCategory {
        name: "Shop",
        links: &SHOP_LINKS,
    },
    FooterLinkCategory {
        name: "Company",
        links: &COMPANY_LINKS,
    },
    FooterLinkCategory {
        name: "Support",
        links: &SUPPORT_LINKS,
    },
];

static SOCIALS: [SocialProfile; 3] = [
    SocialProfile {
        name: "Facebook",
        icon: Icon::Facebook,
        href: "https://facebook.com/northwindsupply",
    },
    SocialProfile {
        name: "Instagram",
        icon: Icon::Instagram,
        href: "https://instagram.com/northwindsupply",
    },
    SocialProfile {
        name: "Twitter",
        icon: Icon::Twitter,
        href: "https://twitter.com/northwindsupply",
    },
];

static LEGAL_LINKS: [LinkItem; 3] = [
    link("Privacy Policy", "/privacy"),
    link("Terms of Service", "/terms"),
    link("Cookie Policy", "/cookies"),
];

static STOREFRONT: FooterContent = FooterContent {
    brand_name: "Northwind Supply",
    description: "Thoughtfully made goods for everyday living, shipped from \
                  our workshop straight to your door.",
    socials: &SOCIALS,
    categories: &CATEGORIES,
    legal: &LEGAL_LINKS,
};

impl FooterContent {
    /// The storefront's footer content.
    pub fn storefront() -> &'static FooterContent {
        &STOREFRONT
    }
}
