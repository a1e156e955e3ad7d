use crate::components::badge::BadgeColor;

/// Kind of engagement, shown as a colored badge on case study cards
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ProductDesign,
    DesignSystem,
    Research,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::ProductDesign => "Product Design",
            Category::DesignSystem => "Design System",
            Category::Research => "Research",
        }
    }

    pub fn badge_color(self) -> BadgeColor {
        match self {
            Category::ProductDesign => BadgeColor::Rose,
            Category::DesignSystem => BadgeColor::Sky,
            Category::Research => BadgeColor::Emerald,
        }
    }
}

pub struct Tool {
    pub slug: &'static str,
    pub name: &'static str,
    pub logo: &'static str,
}

pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct CaseStudy {
    pub slug: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub year: u16,
    pub summary: &'static str,
    pub category: Category,
    pub tools: &'static [&'static str],
    pub sections: &'static [Section],
    /// Show the interactive phone prototype on the case study page
    pub has_prototype: bool,
}

pub const TOOLS: &[Tool] = &[
    Tool { slug: "figma", name: "Figma", logo: "/public/logos/figma.svg" },
    Tool { slug: "framer", name: "Framer", logo: "/public/logos/framer.svg" },
    Tool { slug: "rust", name: "Rust", logo: "/public/logos/rust.svg" },
    Tool { slug: "leptos", name: "Leptos", logo: "/public/logos/leptos.svg" },
    Tool { slug: "tailwind", name: "Tailwind CSS", logo: "/public/logos/tailwind.svg" },
    Tool { slug: "maze", name: "Maze", logo: "/public/logos/maze.svg" },
];

pub fn find_tool(slug: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|tool| tool.slug == slug)
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        slug: "stage-door",
        title: "Stage Door",
        client: "City Ballet",
        year: 2024,
        summary: "A mobile ticket wallet that gets audiences from the box office to their seats without a single printout.",
        category: Category::ProductDesign,
        tools: &["figma", "framer", "maze"],
        sections: &[
            Section {
                heading: "The problem",
                body: "Printed tickets were the single biggest cause of queues at the door. Patrons bought on mobile but were handed PDFs that were hard to find on the night.",
            },
            Section {
                heading: "The approach",
                body: "We built a wallet around one job: show the right QR code as fast as possible. Upcoming performances sit on the first screen, one tap opens the code, and everything else lives behind a side menu.",
            },
            Section {
                heading: "The outcome",
                body: "Door throughput went up by a third in the first season and printed tickets dropped below five percent of admissions.",
            },
        ],
        has_prototype: true,
    },
    CaseStudy {
        slug: "tessera",
        title: "Tessera",
        client: "Northwind Bank",
        year: 2023,
        summary: "A token-based design system shared by four product teams, from Figma libraries to production components.",
        category: Category::DesignSystem,
        tools: &["figma", "tailwind", "rust", "leptos"],
        sections: &[
            Section {
                heading: "Context",
                body: "Four teams were shipping four slightly different buttons. Every visual change meant four tickets and four reviews.",
            },
            Section {
                heading: "What we built",
                body: "Design tokens exported from Figma drive both the component library and the marketing site, so a color change ships everywhere from one pull request.",
            },
        ],
        has_prototype: false,
    },
    CaseStudy {
        slug: "first-visit",
        title: "First Visit",
        client: "Museum of Making",
        year: 2022,
        summary: "Diary studies and unmoderated tests that reshaped how first-time visitors plan a day out.",
        category: Category::Research,
        tools: &["maze", "figma"],
        sections: &[
            Section {
                heading: "Method",
                body: "Twenty households kept a planning diary for two weeks before their visit, followed by remote tests of three navigation concepts.",
            },
            Section {
                heading: "Findings",
                body: "Visitors planned around food and rest, not exhibits. The planning view in the ticket prototype came directly out of this work.",
            },
        ],
        has_prototype: false,
    },
];

pub fn find_case_study(slug: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|study| study.slug == slug)
}
