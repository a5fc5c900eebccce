// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Common read surface every listed content entity exposes, so one fallback
/// policy can filter and sort all categories the same way the store does.
pub trait ContentRecord {
    fn id(&self) -> u64;
    fn is_active(&self) -> bool;
    fn sort_order(&self) -> i64;

    fn slug(&self) -> Option<&str> {
        None
    }
    fn category(&self) -> Option<&str> {
        None
    }
    /// Sort key for date-ordered listings (`YYYY-MM-DD`, newest first).
    fn date_key(&self) -> Option<&str> {
        None
    }
}

macro_rules! impl_content_record {
    ($ty:ty) => {
        impl ContentRecord for $ty {
            fn id(&self) -> u64 {
                self.id
            }
            fn is_active(&self) -> bool {
                self.is_active
            }
            fn sort_order(&self) -> i64 {
                self.order
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slider {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub button_text: String,
    pub button_link: String,
    pub is_active: bool,
    pub order: i64,
}

impl_content_record!(Slider);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub icon: String,
    pub image: String,
    pub features: Vec<String>,
    pub is_active: bool,
    pub order: i64,
}

impl ContentRecord for Service {
    fn id(&self) -> u64 {
        self.id
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn sort_order(&self) -> i64 {
        self.order
    }
    fn slug(&self) -> Option<&str> {
        Some(&self.slug)
    }
}

/// About-page singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub video_url: String,
    pub features: Vec<String>,
    pub mission: String,
    pub vision: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub designation: String,
    pub description: String,
    pub image: String,
    pub social: crate::SocialProfile,
    pub is_active: bool,
    pub order: i64,
}

impl_content_record!(TeamMember);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: u64,
    pub name: String,
    pub designation: String,
    pub review: String,
    pub rating: u8,
    pub image: String,
    pub is_active: bool,
    pub order: i64,
}

impl_content_record!(Testimonial);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub image: String,
    pub is_active: bool,
    pub order: i64,
}

impl ContentRecord for GalleryImage {
    fn id(&self) -> u64 {
        self.id
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn sort_order(&self) -> i64 {
        self.order
    }
    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: String,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub views: u64,
    pub is_active: bool,
    pub order: i64,
}

impl ContentRecord for BlogPost {
    fn id(&self) -> u64 {
        self.id
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn sort_order(&self) -> i64 {
        self.order
    }
    fn slug(&self) -> Option<&str> {
        Some(&self.slug)
    }
    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
    fn date_key(&self) -> Option<&str> {
        Some(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub is_active: bool,
    pub order: i64,
}

impl ContentRecord for Event {
    fn id(&self) -> u64 {
        self.id
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn sort_order(&self) -> i64 {
        self.order
    }
    fn slug(&self) -> Option<&str> {
        Some(&self.slug)
    }
    fn date_key(&self) -> Option<&str> {
        Some(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub id: u64,
    pub number: i64,
    pub suffix: String,
    pub title: String,
    pub is_active: bool,
    pub order: i64,
}

impl_content_record!(Statistic);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: u64,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub is_active: bool,
    pub order: i64,
}

impl ContentRecord for Faq {
    fn id(&self) -> u64 {
        self.id
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn sort_order(&self) -> i64 {
        self.order
    }
    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivingOption {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub amenities: Vec<String>,
    pub is_active: bool,
    pub order: i64,
}

impl_content_record!(LivingOption);

/// Home-page popup singleton; served to the caller only while active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePopup {
    pub is_active: bool,
    pub title: String,
    pub content: String,
    pub image: String,
    pub button_text: String,
    pub button_link: String,
    pub show_once: bool,
}
