// SPDX-License-Identifier: Apache-2.0

//! Bundled fallback dataset served whenever the document store is absent,
//! unreachable, or returns nothing for a category. Shapes mirror what the
//! store would return so callers cannot tell which source answered.

use crate::{
    AboutPage, BlogPost, Event, Faq, GalleryImage, HomePopup, LivingOption, Service,
    SiteSettings, Slider, SocialLinks, SocialProfile, Statistic, TeamMember, Testimonial,
};

const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

#[must_use]
pub fn site_settings() -> SiteSettings {
    SiteSettings {
        site_name: "Elmwood House".to_string(),
        tagline: "Senior Living & Care".to_string(),
        logo: "/images/elmwood-logo.png".to_string(),
        logo_light: "/images/elmwood-logo-light.png".to_string(),
        favicon: "/images/elmwood-favicon.png".to_string(),
        open_hours: "Mon-Sun 9:00 AM - 6:00 PM".to_string(),
        phone: "+91 98600 41520".to_string(),
        alternate_phone: "+91 98600 41521".to_string(),
        email: "hello@elmwoodhouse.in".to_string(),
        whatsapp: "+919860041520".to_string(),
        address: "Elmwood House, 14 Orchard Lane, Baner, Pune, Maharashtra 411045".to_string(),
        map_embed_url: "https://www.google.com/maps/embed?pb=elmwood-house-baner".to_string(),
        social_links: SocialLinks {
            facebook: "https://facebook.com/elmwoodhouse".to_string(),
            twitter: "https://twitter.com/elmwoodhouse".to_string(),
            linkedin: "https://linkedin.com/company/elmwoodhouse".to_string(),
            instagram: "https://instagram.com/elmwoodhouse".to_string(),
            youtube: "https://youtube.com/@elmwoodhouse".to_string(),
        },
        copyright: "Copyright Elmwood House. All Rights Reserved.".to_string(),
    }
}

#[must_use]
pub fn sliders() -> Vec<Slider> {
    vec![
        Slider {
            id: 1,
            title: "Round-the-Clock Nursing Care".to_string(),
            subtitle: "For Fully Dependent Residents".to_string(),
            description: "Skilled nursing, condition-based meals and physiotherapy support \
                          for residents who need complete care."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            button_text: "Learn More".to_string(),
            button_link: "/services".to_string(),
            is_active: true,
            order: 1,
        },
        Slider {
            id: 2,
            title: "Assisted Living".to_string(),
            subtitle: "Help With Daily Life".to_string(),
            description: "Personalised assistance with daily routines so residents keep \
                          their independence in a safe, supportive home."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            button_text: "Our Services".to_string(),
            button_link: "/services".to_string(),
            is_active: true,
            order: 2,
        },
        Slider {
            id: 3,
            title: "Independent Senior Living".to_string(),
            subtitle: "An Active Community".to_string(),
            description: "Comfortable rooms, wellness programs and a warm community for \
                          active seniors."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            button_text: "Explore the House".to_string(),
            button_link: "/living-options".to_string(),
            is_active: true,
            order: 3,
        },
        // Kept for the seasonal campaign; switched off outside the season.
        Slider {
            id: 4,
            title: "Monsoon Wellness Week".to_string(),
            subtitle: "Seasonal Program".to_string(),
            description: "A week of indoor wellness activities, health checks and warm \
                          meals for residents and visiting families."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            button_text: "See Schedule".to_string(),
            button_link: "/events".to_string(),
            is_active: false,
            order: 4,
        },
    ]
}

#[must_use]
pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            title: "Bedridden Care with 24/7 Nursing".to_string(),
            slug: "bedridden-care-with-24-7-nursing".to_string(),
            short_description: "Complete support for fully dependent residents with \
                                round-the-clock skilled nursing."
                .to_string(),
            description: "Our bedridden care program covers everything a fully dependent \
                          resident needs: skilled nursing on every shift, pressure-relief \
                          bedding, bedside physiotherapy and meals matched to medical \
                          condition."
                .to_string(),
            icon: "icon-nursing".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            features: vec![
                "Dedicated nursing supervision on every shift".to_string(),
                "Diet plans matched to condition and doctor's advice".to_string(),
                "Bedside physiotherapy to maintain mobility".to_string(),
                "Medication management and daily monitoring".to_string(),
            ],
            is_active: true,
            order: 1,
        },
        Service {
            id: 2,
            title: "Assisted Living with Daily Support".to_string(),
            slug: "assisted-living-with-daily-support".to_string(),
            short_description: "Personalised help with dressing, bathing, mobility and \
                                daily tasks."
                .to_string(),
            description: "Residents keep their routines and their dignity while our \
                          caregivers handle the parts of the day that have become hard: \
                          bathing, dressing, mobility and medication."
                .to_string(),
            icon: "icon-care".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            features: vec![
                "Personal assistance with daily activities".to_string(),
                "Activity-based recovery and memory programs".to_string(),
                "Timely nutritious meals".to_string(),
                "Regular health monitoring".to_string(),
            ],
            is_active: true,
            order: 2,
        },
        Service {
            id: 3,
            title: "Independent Living with Optional Care".to_string(),
            slug: "independent-living-with-optional-care".to_string(),
            short_description: "Community living for active seniors, with care available \
                                whenever it is wanted."
                .to_string(),
            description: "Private rooms, shared gardens, games and group outings for \
                          seniors who manage on their own but want staff nearby and \
                          company at the table."
                .to_string(),
            icon: "icon-community".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            features: vec![
                "Hobby circles, games and cultural evenings".to_string(),
                "Optional yoga, stretching and fitness sessions".to_string(),
                "Nutritious meals for active living".to_string(),
                "Staff on call around the clock".to_string(),
            ],
            is_active: true,
            order: 3,
        },
        Service {
            id: 4,
            title: "Condition-Based Meals".to_string(),
            slug: "condition-based-meals".to_string(),
            short_description: "Six fresh meals a day, matched to dietary needs and \
                                medical advice."
                .to_string(),
            description: "Our in-house kitchen prepares diabetic-friendly, low-sodium, \
                          soft and liquid diets alongside the regular vegetarian menu, \
                          all under a nutritionist's guidance."
                .to_string(),
            icon: "icon-meals".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            features: vec![
                "Six meals daily from the in-house kitchen".to_string(),
                "Allergy-safe preparation".to_string(),
                "Soft food and liquid diet options".to_string(),
                "Festival and fasting menus".to_string(),
            ],
            is_active: true,
            order: 4,
        },
        Service {
            id: 5,
            title: "Physiotherapy & Wellness".to_string(),
            slug: "physiotherapy-wellness".to_string(),
            short_description: "Daily physiotherapy, yoga and wellness sessions for \
                                strength and mobility."
                .to_string(),
            description: "Daily physiotherapy sessions, morning yoga, meditation and \
                          light workouts keep residents moving, with individual plans \
                          for those recovering from illness or surgery."
                .to_string(),
            icon: "icon-wellness".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            features: vec![
                "Daily physiotherapy sessions".to_string(),
                "Yoga and meditation classes".to_string(),
                "Cognitive and memory exercises".to_string(),
            ],
            is_active: true,
            order: 5,
        },
        Service {
            id: 6,
            title: "Doctor Visits & Health Tracking".to_string(),
            slug: "doctor-visits-health-tracking".to_string(),
            short_description: "Regular consultations, daily vitals and coordination \
                                with specialists."
                .to_string(),
            description: "A visiting physician, daily vitals monitoring, medication \
                          dispensing and detailed health records for every resident, \
                          shared with families on request."
                .to_string(),
            icon: "icon-medical".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            features: vec![
                "Daily vital checkups".to_string(),
                "Medication dispensing and charting".to_string(),
                "Wound and catheter care".to_string(),
                "Coordination with doctors and family".to_string(),
            ],
            is_active: true,
            order: 6,
        },
    ]
}

#[must_use]
pub fn about_page() -> AboutPage {
    AboutPage {
        title: "About Elmwood House".to_string(),
        subtitle: "A Home Where Seniors Live with Dignity and Purpose".to_string(),
        description: "Elmwood House is a senior living facility in Pune offering \
                      independent living, assisted living and skilled nursing care with \
                      trained caregivers on duty around the clock."
            .to_string(),
        long_description: "Moving a parent into care is one of the hardest decisions a \
                           family makes. We built Elmwood House to make that decision \
                           easier: small resident groups, caregivers who stay for years, \
                           a visiting physician, and a kitchen that treats diet as part \
                           of treatment.\n\nEvery resident gets a care plan reviewed \
                           monthly, and every family gets a direct line to the care \
                           manager."
            .to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        video_url: "https://www.youtube.com/watch?v=elmwood-house-tour".to_string(),
        features: vec![
            "Trained nursing and caregiver support, day and night".to_string(),
            "Daily vitals monitoring and medication management".to_string(),
            "Doctor visits and emergency medical assistance".to_string(),
            "Six nutritious vegetarian meals daily".to_string(),
            "Physiotherapy, occupational therapy and counselling".to_string(),
        ],
        mission: "To give senior citizens dignified, compassionate care so their later \
                  years are lived in comfort and respect."
            .to_string(),
        vision: "To be the most trusted senior care home in the region, known for the \
                 warmth of its community as much as the quality of its care."
            .to_string(),
    }
}

#[must_use]
pub fn team_members() -> Vec<TeamMember> {
    let social = SocialProfile {
        facebook: "#".to_string(),
        twitter: "#".to_string(),
        linkedin: "#".to_string(),
    };
    vec![
        TeamMember {
            id: 1,
            name: "Dr. Sudhir Vaidya".to_string(),
            designation: "Medical Director".to_string(),
            description: "Two decades of geriatric practice; leads the visiting physician \
                          program."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            social: social.clone(),
            is_active: true,
            order: 1,
        },
        TeamMember {
            id: 2,
            name: "Mrs. Anagha Kale".to_string(),
            designation: "Care Manager".to_string(),
            description: "Runs resident care plans and is the family's first point of \
                          contact."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            social: social.clone(),
            is_active: true,
            order: 2,
        },
        TeamMember {
            id: 3,
            name: "Mr. Nikhil Sathe".to_string(),
            designation: "Administrator".to_string(),
            description: "Keeps the house running, from admissions to housekeeping."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            social: social.clone(),
            is_active: true,
            order: 3,
        },
        TeamMember {
            id: 4,
            name: "Sister Mary D'Souza".to_string(),
            designation: "Head Nurse".to_string(),
            description: "Leads the nursing team and the night-duty roster.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            social,
            is_active: true,
            order: 4,
        },
    ]
}

#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Prakash Joglekar".to_string(),
            designation: "Son of Resident".to_string(),
            review: "My mother has been at Elmwood House for two years. The staff know \
                     her moods, her diet, her medicines - she is looked after the way \
                     we would look after her ourselves."
                .to_string(),
            rating: 5,
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 1,
        },
        Testimonial {
            id: 2,
            name: "Shubhada Karnik".to_string(),
            designation: "Daughter of Resident".to_string(),
            review: "The medical care is meticulous and the weekly updates mean we never \
                     feel out of touch. Baba has made friends here and looks forward to \
                     the evening games."
                .to_string(),
            rating: 5,
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 2,
        },
        Testimonial {
            id: 3,
            name: "Dr. Ashok Palande".to_string(),
            designation: "Family Member".to_string(),
            review: "As a physician I checked the medication charting closely before \
                     admitting my uncle. It is better kept than in many hospitals."
                .to_string(),
            rating: 4,
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 3,
        },
    ]
}

#[must_use]
pub fn gallery_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage {
            id: 1,
            title: "Garden Walkway".to_string(),
            category: "facility".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 1,
        },
        GalleryImage {
            id: 2,
            title: "Private Rooms".to_string(),
            category: "rooms".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 2,
        },
        GalleryImage {
            id: 3,
            title: "Dining Hall".to_string(),
            category: "facility".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 3,
        },
        GalleryImage {
            id: 4,
            title: "Evening Games".to_string(),
            category: "activities".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 4,
        },
        GalleryImage {
            id: 5,
            title: "Medical Room".to_string(),
            category: "medical".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 5,
        },
        GalleryImage {
            id: 6,
            title: "Morning Yoga".to_string(),
            category: "activities".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 6,
        },
    ]
}

#[must_use]
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Helping Seniors Fight Loneliness".to_string(),
            slug: "helping-seniors-fight-loneliness".to_string(),
            excerpt: "Isolation is the quietest health risk in old age. Five habits that \
                      keep elders connected."
                .to_string(),
            content: "Loneliness shortens lives as surely as illness does. The habits \
                      that counter it are small and repeatable: a fixed call time with \
                      family, one group activity a day, a neighbour to eat with, a \
                      device they can actually use, and a community where company is \
                      built into the routine."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            author: "Dr. Sudhir Vaidya".to_string(),
            category: "Health Tips".to_string(),
            date: "2026-01-15".to_string(),
            views: 0,
            is_active: true,
            order: 1,
        },
        BlogPost {
            id: 2,
            title: "Nutrition After Seventy".to_string(),
            slug: "nutrition-after-seventy".to_string(),
            excerpt: "Appetite shrinks, needs do not. What an elder's plate should \
                      actually contain."
                .to_string(),
            content: "Calcium and vitamin D for bones, protein at every meal for \
                      muscle, fibre for digestion, and water on a schedule rather than \
                      on thirst. Our kitchen builds every menu around these four, then \
                      adjusts for diabetes, blood pressure and swallowing difficulty."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            author: "Nutritionist Ketaki Bhave".to_string(),
            category: "Nutrition".to_string(),
            date: "2026-01-10".to_string(),
            views: 0,
            is_active: true,
            order: 2,
        },
        BlogPost {
            id: 3,
            title: "A Family Guide to Memory Care".to_string(),
            slug: "a-family-guide-to-memory-care".to_string(),
            excerpt: "What changes when a parent has dementia, and what good memory care \
                      looks like."
                .to_string(),
            content: "Memory care is structure: the same faces, the same routine, rooms \
                      that are easy to read, and staff trained to redirect rather than \
                      correct. Families should look for secured outdoor space, cognitive \
                      activities on the daily schedule, and honest conversations about \
                      what the disease will ask of everyone."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            author: "Mrs. Anagha Kale".to_string(),
            category: "Care Guide".to_string(),
            date: "2026-01-05".to_string(),
            views: 0,
            is_active: true,
            order: 3,
        },
    ]
}

#[must_use]
pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: "Diwali at Elmwood".to_string(),
            slug: "diwali-at-elmwood".to_string(),
            date: "2026-11-06".to_string(),
            time: "6:00 PM".to_string(),
            location: "Main Hall".to_string(),
            description: "Lamps, rangoli, a cultural program by residents and a festive \
                          dinner. Families are welcome."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 1,
        },
        Event {
            id: 2,
            title: "Free Health Check-up Camp".to_string(),
            slug: "free-health-check-up-camp".to_string(),
            date: "2026-09-12".to_string(),
            time: "9:00 AM - 4:00 PM".to_string(),
            location: "Medical Wing".to_string(),
            description: "Blood pressure, blood sugar, eye screening and a physician \
                          consultation, free for visitors over sixty."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 2,
        },
        Event {
            id: 3,
            title: "Gentle Yoga Workshop".to_string(),
            slug: "gentle-yoga-workshop".to_string(),
            date: "2026-08-20".to_string(),
            time: "7:00 AM".to_string(),
            location: "Garden".to_string(),
            description: "Chair yoga and breathing practice for seniors, led by a \
                          certified instructor."
                .to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            is_active: true,
            order: 3,
        },
    ]
}

#[must_use]
pub fn home_popup() -> HomePopup {
    HomePopup {
        is_active: false,
        title: "Come See Elmwood House".to_string(),
        content: "Book a free visit and meet the people who would care for your family."
            .to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        button_text: "Book a Visit".to_string(),
        button_link: "/contact".to_string(),
        show_once: true,
    }
}

#[must_use]
pub fn statistics() -> Vec<Statistic> {
    vec![
        Statistic {
            id: 1,
            number: 120,
            suffix: "+".to_string(),
            title: "Residents at Home".to_string(),
            is_active: true,
            order: 1,
        },
        Statistic {
            id: 2,
            number: 45,
            suffix: "+".to_string(),
            title: "Trained Staff".to_string(),
            is_active: true,
            order: 2,
        },
        Statistic {
            id: 3,
            number: 12,
            suffix: "+".to_string(),
            title: "Years of Care".to_string(),
            is_active: true,
            order: 3,
        },
        Statistic {
            id: 4,
            number: 97,
            suffix: "%".to_string(),
            title: "Family Satisfaction".to_string(),
            is_active: true,
            order: 4,
        },
    ]
}

#[must_use]
pub fn faqs() -> Vec<Faq> {
    vec![
        Faq {
            id: 1,
            question: "What kinds of care does Elmwood House offer?".to_string(),
            answer: "Independent living, assisted living and skilled nursing care, with \
                     round-the-clock caregivers, daily vitals monitoring, doctor visits, \
                     six vegetarian meals a day, housekeeping, laundry, physiotherapy \
                     and a full activity calendar."
                .to_string(),
            category: "services".to_string(),
            is_active: true,
            order: 1,
        },
        Faq {
            id: 2,
            question: "What medical assistance is part of the basic plan?".to_string(),
            answer: "Daily vital checks, medication dispensing, diabetes charting and \
                     insulin administration, catheter and feeding-tube management, wound \
                     care, a nurse on duty at all hours, and emergency coordination with \
                     nearby hospitals."
                .to_string(),
            category: "services".to_string(),
            is_active: true,
            order: 2,
        },
        Faq {
            id: 3,
            question: "How are residents kept engaged?".to_string(),
            answer: "The activity team runs a weekly plan of music evenings, indoor \
                     games, memory activities, festival celebrations, reading sessions, \
                     garden walks, yoga and movie screenings."
                .to_string(),
            category: "services".to_string(),
            is_active: true,
            order: 3,
        },
        Faq {
            id: 4,
            question: "Can residents request food of their choice?".to_string(),
            answer: "Within medical limits, yes. The kitchen takes standing preferences \
                     and daily requests, and prepares festival and fasting menus \
                     alongside prescribed diets."
                .to_string(),
            category: "food".to_string(),
            is_active: true,
            order: 4,
        },
        Faq {
            id: 5,
            question: "Who plans the meals?".to_string(),
            answer: "A consulting nutritionist signs off every menu. Residents with \
                     diabetes, hypertension or swallowing difficulty get individual \
                     plans reviewed monthly."
                .to_string(),
            category: "food".to_string(),
            is_active: true,
            order: 5,
        },
        Faq {
            id: 6,
            question: "How is pricing decided?".to_string(),
            answer: "Pricing depends on the level of care and the room type. After a \
                     pre-admission assessment we share a single monthly figure with no \
                     hidden charges; medicines and consumables are billed at cost."
                .to_string(),
            category: "pricing".to_string(),
            is_active: true,
            order: 6,
        },
        Faq {
            id: 7,
            question: "Can families visit freely?".to_string(),
            answer: "Visiting hours run 9 AM to 6 PM every day, and families can join \
                     meals with a day's notice. Video calls are arranged for families \
                     living away."
                .to_string(),
            category: "visits".to_string(),
            is_active: true,
            order: 7,
        },
        Faq {
            id: 8,
            question: "How does admission work?".to_string(),
            answer: "A six-step application: basic information, address, references, \
                     medical history, a health assessment and guardian details. The \
                     care team reviews it and schedules a pre-admission visit within a \
                     week."
                .to_string(),
            category: "visits".to_string(),
            is_active: true,
            order: 8,
        },
    ]
}

#[must_use]
pub fn living_options() -> Vec<LivingOption> {
    vec![
        LivingOption {
            id: 1,
            title: "Skilled Nursing Care".to_string(),
            description: "For fully dependent residents: skilled nursing on every shift, \
                          condition-based meals and complete daily care."
                .to_string(),
            price: "Contact for Pricing".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            amenities: vec![
                "Nursing supervision on every shift".to_string(),
                "Pressure-relief bedding".to_string(),
                "Bedside physiotherapy".to_string(),
                "Oxygen and suction support".to_string(),
            ],
            is_active: true,
            order: 1,
        },
        LivingOption {
            id: 2,
            title: "Assisted Living".to_string(),
            description: "Help with daily routines in a private room, with nursing staff \
                          nearby and activities downstairs."
                .to_string(),
            price: "Contact for Pricing".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            amenities: vec![
                "Personal assistance with daily tasks".to_string(),
                "Daily physiotherapy as needed".to_string(),
                "Regular health monitoring".to_string(),
                "Emergency call button in every room".to_string(),
            ],
            is_active: true,
            order: 2,
        },
        LivingOption {
            id: 3,
            title: "Independent Living".to_string(),
            description: "Private rooms and a full community calendar for seniors who \
                          manage on their own."
                .to_string(),
            price: "Contact for Pricing".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            amenities: vec![
                "Private furnished rooms".to_string(),
                "Community activities and outings".to_string(),
                "Optional wellness programs".to_string(),
                "Staff available around the clock".to_string(),
            ],
            is_active: true,
            order: 3,
        },
    ]
}
