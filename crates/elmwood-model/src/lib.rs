#![forbid(unsafe_code)]
//! Elmwood House domain model SSOT.
//!
//! Everything the wire and the stores agree on lives here: the content
//! entities served to the website, the intake records (leads, visitors,
//! admission applications), and the bundled static dataset used when no
//! database is attached.

mod admission;
mod content;
pub mod fixtures;
mod lead;
mod settings;
mod slug;

pub use admission::{
    mint_application_id, step_key, AdmissionApplication, AdmissionContact, AdmissionStatus,
    APPLICATION_ID_PREFIX,
};
pub use content::{
    AboutPage, BlogPost, ContentRecord, Event, Faq, GalleryImage, HomePopup, LivingOption,
    Service, Slider, Statistic, TeamMember, Testimonial,
};
pub use lead::{
    Lead, LeadNote, LeadPriority, LeadSource, LeadStatus, NewLead, NewVisitor, Visitor,
    VisitorStatus,
};
pub use settings::{SiteSettings, SocialLinks, SocialProfile};
pub use slug::slugify;

pub const CRATE_NAME: &str = "elmwood-model";
