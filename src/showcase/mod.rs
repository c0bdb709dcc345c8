// SPDX-License-Identifier: MPL-2.0
//! Showcase content model and its interactive state machines.
//!
//! The page is a fixed, ordered run of sections; the order here is the
//! single source of truth shared by the scrolled view, the header anchors
//! and the static-page assembly step. Section copy lives in the Fluent
//! bundles; the structured content (stats, services, process steps,
//! reviews) is data here so views stay declarative.

pub mod carousel;
pub mod form;
pub mod gallery;
pub mod lightbox;
pub mod prefetch;
pub mod validate;

pub use carousel::Carousel;
pub use form::ConsultationForm;
pub use gallery::{Category, CategoryFilter, Project, ProjectCollection};
pub use lightbox::Lightbox;
pub use prefetch::ImageCache;

/// Page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Intro,
    Why,
    Promise,
    Process,
    ServicesCarousel,
    Gallery,
    ServicesGrid,
    Partner,
    Reviews,
    Consultation,
}

impl SectionId {
    pub const ALL: [SectionId; 11] = [
        SectionId::Hero,
        SectionId::Intro,
        SectionId::Why,
        SectionId::Promise,
        SectionId::Process,
        SectionId::ServicesCarousel,
        SectionId::Gallery,
        SectionId::ServicesGrid,
        SectionId::Partner,
        SectionId::Reviews,
        SectionId::Consultation,
    ];

    /// Anchor slug; also the partial file name in the sections directory.
    pub fn slug(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Intro => "intro",
            SectionId::Why => "why",
            SectionId::Promise => "promise",
            SectionId::Process => "process",
            SectionId::ServicesCarousel => "services-carousel",
            SectionId::Gallery => "gallery",
            SectionId::ServicesGrid => "services-grid",
            SectionId::Partner => "partner",
            SectionId::Reviews => "reviews",
            SectionId::Consultation => "consultation",
        }
    }

    /// i18n key for the section heading (and the header link where one
    /// exists).
    pub fn title_key(self) -> &'static str {
        match self {
            SectionId::Hero => "section-hero",
            SectionId::Intro => "section-intro",
            SectionId::Why => "section-why",
            SectionId::Promise => "section-promise",
            SectionId::Process => "section-process",
            SectionId::ServicesCarousel => "section-services",
            SectionId::Gallery => "section-gallery",
            SectionId::ServicesGrid => "section-services-grid",
            SectionId::Partner => "section-partner",
            SectionId::Reviews => "section-reviews",
            SectionId::Consultation => "section-consultation",
        }
    }

    /// Nominal layout height used to position reveal targets and anchor
    /// scrolling within the page. The scrolled column uses the same values
    /// so content coordinates and reveal regions agree.
    pub fn design_height(self) -> f32 {
        match self {
            SectionId::Hero => 720.0,
            SectionId::Intro => 420.0,
            SectionId::Why => 560.0,
            SectionId::Promise => 360.0,
            SectionId::Process => 560.0,
            SectionId::ServicesCarousel => 520.0,
            SectionId::Gallery => 900.0,
            SectionId::ServicesGrid => 620.0,
            SectionId::Partner => 320.0,
            SectionId::Reviews => 480.0,
            SectionId::Consultation => 680.0,
        }
    }

    /// Sections that get a link in the header navigation.
    pub const NAV: [SectionId; 5] = [
        SectionId::Intro,
        SectionId::ServicesCarousel,
        SectionId::Gallery,
        SectionId::Reviews,
        SectionId::Consultation,
    ];

    /// Content offset of this section's top edge.
    pub fn anchor_offset(self) -> f32 {
        let mut offset = 0.0;
        for section in SectionId::ALL {
            if section == self {
                break;
            }
            offset += section.design_height();
        }
        offset
    }
}

/// Total nominal height of the page content.
pub fn page_height() -> f32 {
    SectionId::ALL.iter().map(|s| s.design_height()).sum()
}

/// A stat counter in the intro strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u64,
    pub label_key: &'static str,
}

/// The studio's headline numbers.
pub const STATS: [Stat; 4] = [
    Stat {
        value: 250,
        label_key: "stat-projects",
    },
    Stat {
        value: 12,
        label_key: "stat-years",
    },
    Stat {
        value: 18,
        label_key: "stat-designers",
    },
    Stat {
        value: 32,
        label_key: "stat-awards",
    },
];

/// A service card, shown both in the carousel and the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title_key: &'static str,
    pub blurb_key: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        title_key: "service-full-design-title",
        blurb_key: "service-full-design-blurb",
    },
    Service {
        title_key: "service-space-planning-title",
        blurb_key: "service-space-planning-blurb",
    },
    Service {
        title_key: "service-lighting-title",
        blurb_key: "service-lighting-blurb",
    },
    Service {
        title_key: "service-furniture-title",
        blurb_key: "service-furniture-blurb",
    },
    Service {
        title_key: "service-styling-title",
        blurb_key: "service-styling-blurb",
    },
    Service {
        title_key: "service-renovation-title",
        blurb_key: "service-renovation-blurb",
    },
];

/// One step of the studio's process timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub title_key: &'static str,
    pub blurb_key: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        title_key: "process-consult-title",
        blurb_key: "process-consult-blurb",
    },
    ProcessStep {
        title_key: "process-concept-title",
        blurb_key: "process-concept-blurb",
    },
    ProcessStep {
        title_key: "process-build-title",
        blurb_key: "process-build-blurb",
    },
    ProcessStep {
        title_key: "process-reveal-title",
        blurb_key: "process-reveal-blurb",
    },
];

/// A client review. Quotes are content, not UI chrome, so they are plain
/// text rather than i18n keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub author: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
}

pub const REVIEWS: [Review; 3] = [
    Review {
        author: "Claire Dumont",
        location: "Lyon",
        quote: "They turned a dark ground floor into the brightest room of the house. We live in the kitchen now.",
    },
    Review {
        author: "Tomas Eriksen",
        location: "Oslo",
        quote: "Every deadline held, every sample arrived when promised. The final reveal still felt like a surprise.",
    },
    Review {
        author: "Amira Haddad",
        location: "Marseille",
        quote: "Three apartments with them so far. The brief meetings alone are worth the fee.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_order_matches_the_page() {
        assert_eq!(SectionId::ALL.first(), Some(&SectionId::Hero));
        assert_eq!(SectionId::ALL.last(), Some(&SectionId::Consultation));
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<&str> = SectionId::ALL.iter().map(|s| s.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SectionId::ALL.len());
    }

    #[test]
    fn anchor_offsets_accumulate_heights() {
        assert_eq!(SectionId::Hero.anchor_offset(), 0.0);
        assert_eq!(
            SectionId::Intro.anchor_offset(),
            SectionId::Hero.design_height()
        );

        let last = SectionId::Consultation;
        assert_eq!(
            last.anchor_offset() + last.design_height(),
            page_height()
        );
    }

    #[test]
    fn nav_sections_are_a_subset_of_the_page() {
        for section in SectionId::NAV {
            assert!(SectionId::ALL.contains(&section));
        }
    }
}
