use log::{debug, error};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::config::PLACEHOLDER_IMAGE;
use crate::lightbox::GalleryItem;

pub const HERO_IMAGE: &str = "/assets/bhasin-hero.jpg";
pub const LOGO_IMAGE: &str = "/assets/bhasin-logo.jpeg";
pub const PORTRAIT_IMAGE: &str = "/assets/dr-damini-portrait.jpg";
pub const FACILITY_IMAGE: &str = "/assets/clinic-facility.jpg";
pub const TECHNOLOGY_IMAGE: &str = "/assets/clinic-technology.jpg";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

pub const SERVICE_CATEGORIES: &[ServiceCategory] = &[
    ServiceCategory {
        key: "preventive",
        title: "Preventive Care",
        description: "Routine check-ups, cleanings, screenings, and prevention-first planning.",
        bullets: &["Dental check-ups", "Professional cleanings", "Fluoride therapy", "Oral cancer screening"],
    },
    ServiceCategory {
        key: "cosmetic",
        title: "Cosmetic Dentistry",
        description: "Confident smiles with whitening, veneers, bonding, and smile design.",
        bullets: &["Teeth whitening", "Veneers", "Smile makeovers", "Cosmetic bonding"],
    },
    ServiceCategory {
        key: "restorative",
        title: "Restorative Treatments",
        description: "Repair and restore function with modern, durable materials and techniques.",
        bullets: &["Fillings", "Crowns & bridges", "Root canal therapy", "Dentures"],
    },
    ServiceCategory {
        key: "sedation",
        title: "Sedation Dentistry",
        description: "Anxiety-friendly care designed around comfort, safety, and gentle treatment.",
        bullets: &["Conscious sedation", "Pain\u{2011}minimizing protocols", "Personalized planning", "Calm environment"],
    },
];

/// Values accepted by the service select of both forms, in category order.
pub const SERVICE_OPTIONS: &[&str] = &[
    "Preventive Care",
    "Cosmetic Dentistry",
    "Restorative Treatments",
    "Sedation Dentistry",
];

pub const TRUST_BADGES: &[&str] = &[
    "7+ Years of Excellence",
    "Advanced Technology",
    "Pain\u{2011}Free Treatments",
];

/// Completed-treatment tallies shown as animated counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub end: i64,
    pub label: &'static str,
}

impl Outcome {
    /// Counters tick through the last thousand only.
    pub fn start(&self) -> i64 {
        (self.end - 1000).max(0)
    }

    pub fn step(&self) -> i64 {
        if self.end >= 10_000 {
            100
        } else {
            50
        }
    }
}

pub const OUTCOMES: &[Outcome] = &[
    Outcome { end: 10_000, label: "Dental Implants" },
    Outcome { end: 5_000, label: "Invisible Aligners" },
    Outcome { end: 7_000, label: "Digital Smile designs" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const WHY_CHOOSE_US: &[Highlight] = &[
    Highlight {
        title: "Experienced, Patient\u{2011}First Care",
        description: "Our experienced dentist follows a patient\u{2011}first approach, focusing on comfort, care, and individual needs.",
    },
    Highlight {
        title: "Comprehensive Dental Care Under One Roof",
        description: "Complete dental services in one place for convenience, continuity of care, and consistent treatment quality.",
    },
    Highlight {
        title: "Advanced and Hygienic Clinical Setup",
        description: "A modern, well\u{2011}equipped, hygienic environment with strict safety and sterilisation standards.",
    },
    Highlight {
        title: "Honest Guidance & Transparent Treatment Plans",
        description: "Clear, honest explanations with no hidden steps, so you can make informed decisions confidently.",
    },
    Highlight {
        title: "Comfortable, Stress\u{2011}Free Dental Experience",
        description: "A calm, welcoming space designed to reduce anxiety from the moment you enter.",
    },
    Highlight {
        title: "Trust Beyond Treatment",
        description: "We aim to build lasting confidence and trust with every patient, beyond just dental procedures.",
    },
];

pub const FEATURES: &[Highlight] = &[
    Highlight {
        title: "Quality Healthcare Services",
        description: "Strict hygiene and sterilisation protocols for safe, reliable, high\u{2011}quality dental care.",
    },
    Highlight {
        title: "Expert Care",
        description: "Treatments personally supervised and performed under the guidance of Dr Damini Bhasin.",
    },
    Highlight {
        title: "Professional Medical Care",
        description: "Friendly yet professional support so patients feel informed, comfortable, and confident.",
    },
    Highlight {
        title: "Modern Equipment",
        description: "Updated equipment and advanced technology for accurate diagnosis and improved comfort.",
    },
    Highlight {
        title: "State\u{2011}of\u{2011}the\u{2011}Art Facilities",
        description: "A clean, modern, relaxing clinic environment designed to reduce dental anxiety.",
    },
    Highlight {
        title: "Support",
        description: "We\u{2019}re here to guide you whenever you need assistance with dental concerns.",
    },
    Highlight {
        title: "Affordable Treatment",
        description: "Cost\u{2011}effective care without compromising on safety, materials, or results.",
    },
];

pub const FIRST_VISIT: &[Highlight] = &[
    Highlight {
        title: "Comfort-first assessment",
        description: "We start with a gentle examination and clear explanation. No rushing, no pressure.",
    },
    Highlight {
        title: "Personalized treatment plan",
        description: "Options, timelines, and costs are discussed upfront so you can decide confidently.",
    },
    Highlight {
        title: "Efficient appointments",
        description: "Modern diagnostics help us reduce chair-time while keeping results precise.",
    },
];

pub const ABOUT_VALUES: &[Highlight] = &[
    Highlight {
        title: "Evidence-based treatment",
        description: "Clear options, transparent recommendations, and long-term planning.",
    },
    Highlight {
        title: "Patient-first communication",
        description: "You\u{2019}ll always know what\u{2019}s happening, why it matters, and what comes next.",
    },
    Highlight {
        title: "Premium clinical standards",
        description: "Strict hygiene protocols and a clean, modern facility.",
    },
];

pub const FACILITY_POINTS: &[&str] = &[
    "Modern treatment rooms and equipment",
    "Hygiene-first sterilization protocols",
    "Friendly staff and relaxed waiting area",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: "2017",
        title: "Clinic established",
        description: "Founded in Pitampura with a focus on premium, patient-first dentistry.",
    },
    Milestone {
        year: "Today",
        title: "Comfort-first care",
        description: "Advanced technology and conscious sedation options for pain-minimized treatments.",
    },
];

pub const TECH_ITEMS: &[Highlight] = &[
    Highlight {
        title: "Precision diagnostics",
        description: "Modern imaging and planning for predictable outcomes.",
    },
    Highlight {
        title: "Comfort-focused procedures",
        description: "Gentle techniques designed to minimize discomfort.",
    },
    Highlight {
        title: "Clean, modern operatories",
        description: "A calm environment with premium clinical standards.",
    },
];

pub const TECH_PILLARS: &[Highlight] = &[
    Highlight {
        title: "Conscious sedation",
        description: "For anxious patients and longer procedures, we plan comfort-forward options with safety as the priority.",
    },
    Highlight {
        title: "Sterilization & safety",
        description: "Strict hygiene protocols and a clean environment for every visit and every procedure.",
    },
    Highlight {
        title: "Gentle clinical workflow",
        description: "Clear steps, transparent recommendations, and a calm experience from consultation to follow-up.",
    },
];

pub const DENTAL_TREATMENTS: &[&str] = &[
    "Root Canal Treatment",
    "Tooth\u{2011}Coloured Filling",
    "Silver\u{2011}Coloured Filling",
    "Crown and Bridge",
    "Partial and Complete Denture",
    "Oral Prophylaxis and Polishing",
    "Tooth Whitening",
    "Painless Tooth Extraction",
    "Smile Designing",
    "Dental Implants",
    "Tooth Jewellery",
    "Invisible Braces",
];

pub const DIAGNOSTIC_TESTS: &[&str] = &[
    "Dental X\u{2011}Ray",
    "Blood Test",
    "Urine Test",
    "Sugar Test",
    "Blood Pressure Test",
    "Sputum, Stool, and Semen Tests",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Aditi S.",
        quote: "Super clean clinic and very gentle treatment. The team explained everything clearly and I felt genuinely cared for.",
        rating: 5,
    },
    Testimonial {
        name: "Rohit K.",
        quote: "I was anxious about the procedure but the experience was calm and painless. Highly recommended in Pitampura.",
        rating: 5,
    },
    Testimonial {
        name: "Neha M.",
        quote: "Excellent attention to detail. My smile makeover looks natural and the process was smooth throughout.",
        rating: 5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub q: &'static str,
    pub a: &'static str,
}

pub const HOME_FAQS: &[Faq] = &[
    Faq {
        q: "Do you provide painless dental treatments?",
        a: "Yes, we use modern techniques and equipment to ensure maximum comfort during procedures, including painless extractions.",
    },
    Faq {
        q: "Are cosmetic dental treatments available?",
        a: "Yes, we offer smile designing, tooth whitening, tooth jewellery, and invisible braces.",
    },
    Faq {
        q: "Do you provide dental implants and dentures?",
        a: "Yes, we offer both dental implants and partial or complete dentures based on patient needs.",
    },
    Faq {
        q: "Is the clinic suitable for children and elderly patients?",
        a: "Absolutely. We provide dental care for patients of all age groups with customised treatment plans.",
    },
    Faq {
        q: "Do you offer diagnostic tests at the clinic?",
        a: "Yes, we provide dental X\u{2011}rays and essential medical tests to support safe and effective dental treatments.",
    },
];

pub const HOURS: &[(&str, &str)] = &[
    ("Mon\u{2013}Sat", "10:00 AM \u{2013} 2:00 PM \u{2022} 5:00 PM \u{2013} 9:00 PM"),
    ("Sunday", "By appointment"),
];

pub const ABOUT_GALLERY: &[GalleryItem] = &[
    GalleryItem {
        src: FACILITY_IMAGE,
        alt: "Clinic reception and patient waiting area",
        caption: "Reception & waiting area",
    },
    GalleryItem {
        src: TECHNOLOGY_IMAGE,
        alt: "Modern dental technology equipment",
        caption: "Technology & equipment",
    },
];

pub const TECHNOLOGY_GALLERY: &[GalleryItem] = &[
    GalleryItem {
        src: TECHNOLOGY_IMAGE,
        alt: "Advanced dental technology equipment used at the clinic",
        caption: "Modern diagnostics",
    },
    GalleryItem {
        src: FACILITY_IMAGE,
        alt: "Clinic reception and waiting area",
        caption: "Clean, calm environment",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub items: &'static [GalleryItem],
}

pub const GALLERY_CATEGORIES: &[GalleryCategory] = &[
    GalleryCategory {
        key: "facility",
        label: "Facility",
        items: &[
            GalleryItem {
                src: FACILITY_IMAGE,
                alt: "Clinic reception and patient waiting area",
                caption: "Reception & waiting area",
            },
            GalleryItem {
                src: PLACEHOLDER_IMAGE,
                alt: "Clinic corridor and interiors",
                caption: "Clinic interiors (add photo)",
            },
            GalleryItem {
                src: PLACEHOLDER_IMAGE,
                alt: "Treatment room",
                caption: "Treatment room (add photo)",
            },
            GalleryItem {
                src: PLACEHOLDER_IMAGE,
                alt: "Sterilization area",
                caption: "Sterilization zone (add photo)",
            },
        ],
    },
    GalleryCategory {
        key: "technology",
        label: "Technology",
        items: &[
            GalleryItem {
                src: TECHNOLOGY_IMAGE,
                alt: "Advanced dental technology equipment used at the clinic",
                caption: "Modern diagnostics",
            },
            GalleryItem {
                src: PLACEHOLDER_IMAGE,
                alt: "Comfort-focused dental chair setup",
                caption: "Comfort-focused operatory (add photo)",
            },
            GalleryItem {
                src: PLACEHOLDER_IMAGE,
                alt: "Intra-oral scan workflow",
                caption: "Digital planning (add photo)",
            },
            GalleryItem {
                src: PLACEHOLDER_IMAGE,
                alt: "Sterilization equipment",
                caption: "Safety & sterilization (add photo)",
            },
        ],
    },
    GalleryCategory {
        key: "team",
        label: "Team",
        items: &[
            GalleryItem {
                src: PORTRAIT_IMAGE,
                alt: "Professional portrait of Dr. Damini Bhasin",
                caption: "Dr. Damini Bhasin",
            },
            GalleryItem {
                src: PLACEHOLDER_IMAGE,
                alt: "Clinic team assisting patients",
                caption: "Front desk team (add photo)",
            },
            GalleryItem {
                src: PLACEHOLDER_IMAGE,
                alt: "Clinic staff preparing a treatment room",
                caption: "Clinical assistants (add photo)",
            },
            GalleryItem {
                src: PLACEHOLDER_IMAGE,
                alt: "Team group photo",
                caption: "Team group photo (add photo)",
            },
        ],
    },
];

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServiceFaq {
    pub q: String,
    pub a: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServiceDetail {
    pub key: String,
    pub title: String,
    pub summary: String,
    pub process: Vec<String>,
    pub benefits: Vec<String>,
    pub faqs: Vec<ServiceFaq>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServiceGroup {
    pub key: String,
    pub title: String,
    pub description: String,
    pub services: Vec<ServiceDetail>,
}

const CATALOGUE_JSON: &str = include_str!("../content/services.json");

pub fn parse_catalogue(json: &str) -> Result<Vec<ServiceGroup>, serde_json::Error> {
    serde_json::from_str(json)
}

static CATALOGUE: Lazy<Vec<ServiceGroup>> = Lazy::new(|| match parse_catalogue(CATALOGUE_JSON) {
    Ok(groups) => {
        debug!("Loaded {} service groups", groups.len());
        groups
    }
    Err(e) => {
        error!("Failed to parse service catalogue: {}", e);
        Vec::new()
    }
});

/// Detailed service catalogue for the services page. Empty if the embedded
/// data fails to parse.
pub fn service_catalogue() -> &'static [ServiceGroup] {
    &CATALOGUE
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn service_options_follow_categories() {
        let titles: Vec<&str> = SERVICE_CATEGORIES.iter().map(|c| c.title).collect();
        assert_eq!(titles, SERVICE_OPTIONS);
    }

    #[test]
    fn gallery_captions_are_unique_per_gallery() {
        let galleries = GALLERY_CATEGORIES
            .iter()
            .map(|category| category.items)
            .chain([ABOUT_GALLERY, TECHNOLOGY_GALLERY]);
        for items in galleries {
            let captions: HashSet<&str> = items.iter().map(|item| item.caption).collect();
            assert_eq!(captions.len(), items.len());
        }
    }

    #[test]
    fn outcome_counters_cover_the_last_thousand() {
        assert_eq!(OUTCOMES[0].start(), 9_000);
        assert_eq!(OUTCOMES[0].step(), 100);
        assert_eq!(OUTCOMES[1].start(), 4_000);
        assert_eq!(OUTCOMES[1].step(), 50);
        assert_eq!(Outcome { end: 300, label: "" }.start(), 0);
    }

    #[test]
    fn embedded_catalogue_parses() {
        let groups = parse_catalogue(CATALOGUE_JSON).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].services.len(), 12);
        assert_eq!(groups[1].services.len(), 6);
        assert!(groups
            .iter()
            .flat_map(|group| &group.services)
            .all(|service| !service.process.is_empty() && !service.faqs.is_empty()));
        assert_eq!(service_catalogue().len(), 2);
    }

    #[test]
    fn malformed_catalogue_is_an_error() {
        assert!(parse_catalogue("[{\"key\": 1}]").is_err());
    }

    #[test]
    fn testimonial_ratings_are_out_of_five() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
