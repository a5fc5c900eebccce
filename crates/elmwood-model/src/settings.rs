// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
    pub youtube: String,
}

/// Per-person social links shown on team cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
}

/// Site-wide settings singleton. Created from the static fixture when the
/// store has no row yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name: String,
    pub tagline: String,
    pub logo: String,
    pub logo_light: String,
    pub favicon: String,
    pub open_hours: String,
    pub phone: String,
    pub alternate_phone: String,
    pub email: String,
    pub whatsapp: String,
    pub address: String,
    pub map_embed_url: String,
    pub social_links: SocialLinks,
    pub copyright: String,
}
