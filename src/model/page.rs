//! Dashboard pages and the profile intake sections.

use std::fmt;
use std::str::FromStr;

/// A top-level page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Page {
    /// Home dashboard assembled from summary widgets.
    #[default]
    Dashboard,
    /// Case management list.
    Cases,
    /// Precedent research list.
    Precedents,
    /// Profile intake.
    Profile,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Cases, Page::Precedents, Page::Profile];

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Cases => "Case Management",
            Page::Precedents => "Precedent Research",
            Page::Profile => "Legal Profile",
        }
    }

    /// Command-line / config name.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Cases => "cases",
            Page::Precedents => "precedents",
            Page::Profile => "profile",
        }
    }

    /// Header caption, typed out when the page is shown.
    pub fn caption(self) -> &'static str {
        match self {
            Page::Dashboard => "Ready to strengthen your legal arguments...",
            Page::Cases => "Manage your legal cases and track progress...",
            Page::Precedents => "Discover relevant legal precedents to strengthen your cases...",
            Page::Profile => "Complete your legal profile for personalized AI assistance...",
        }
    }

    fn index(self) -> usize {
        match self {
            Page::Dashboard => 0,
            Page::Cases => 1,
            Page::Precedents => 2,
            Page::Profile => 3,
        }
    }

    /// Next page, wrapping around.
    pub fn next(self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous page, wrapping around.
    pub fn prev(self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Unknown page name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page {0:?} (expected dashboard, cases, precedents or profile)")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// One step of the profile intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSection {
    /// Section heading.
    pub title: &'static str,
    /// One-line explanation under the heading.
    pub description: &'static str,
}

/// Profile intake sections in the order they are filled in.
pub const PROFILE_SECTIONS: [ProfileSection; 6] = [
    ProfileSection {
        title: "Basic Information",
        description: "Your professional contact information",
    },
    ProfileSection {
        title: "Legal Education & Bar",
        description: "Law school and bar admission details",
    },
    ProfileSection {
        title: "Practice Areas",
        description: "Your legal specialties and practice areas",
    },
    ProfileSection {
        title: "Professional Experience",
        description: "Your current firm and legal experience",
    },
    ProfileSection {
        title: "Legal Technology",
        description: "Technology tools and AI experience",
    },
    ProfileSection {
        title: "Legal Resume/CV",
        description: "Upload your legal resume or CV",
    },
];
