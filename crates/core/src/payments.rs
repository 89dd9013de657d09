//! Subscription package catalog.
//!
//! Amounts live server-side only; checkout requests reference a package by
//! id and the amount charged always comes from this table, never from the
//! client.

use serde::{Serialize, Serializer};

/// Credit allowance attached to a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credits {
    Limited(u32),
    Unlimited,
}

impl Serialize for Credits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Credits::Limited(n) => serializer.serialize_u32(*n),
            Credits::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Package {
    #[serde(skip)]
    pub id: &'static str,
    pub name: &'static str,
    pub amount: f64,
    pub currency: &'static str,
    pub credits: Credits,
    pub duration: &'static str,
    pub description: &'static str,
}

impl Package {
    /// Amount in the currency's minor unit, as the Stripe API expects.
    pub fn amount_cents(&self) -> i64 {
        (self.amount * 100.0).round() as i64
    }
}

/// All purchasable packages.
pub const PACKAGES: &[Package] = &[
    Package {
        id: "pro_monthly",
        name: "Pro Monthly",
        amount: 19.0,
        currency: "usd",
        credits: Credits::Limited(500),
        duration: "monthly",
        description: "Pro plan - 500 credits per month",
    },
    Package {
        id: "pro_yearly",
        name: "Pro Yearly",
        amount: 190.0,
        currency: "usd",
        credits: Credits::Limited(6000),
        duration: "yearly",
        description: "Pro plan - 6000 credits per year (20% discount)",
    },
    Package {
        id: "enterprise_monthly",
        name: "Enterprise Monthly",
        amount: 99.0,
        currency: "usd",
        credits: Credits::Unlimited,
        duration: "monthly",
        description: "Enterprise plan - Unlimited credits per month",
    },
    Package {
        id: "enterprise_yearly",
        name: "Enterprise Yearly",
        amount: 990.0,
        currency: "usd",
        credits: Credits::Unlimited,
        duration: "yearly",
        description: "Enterprise plan - Unlimited credits per year (20% discount)",
    },
];

/// Look up a package by id.
pub fn find_package(id: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|p| p.id == id)
}
