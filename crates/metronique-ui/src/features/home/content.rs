//! Static landing page copy.

/// Product name shown in the navigation bar.
pub const BRAND: &str = "Metronique Docs";
/// Document title.
pub const PAGE_TITLE: &str = "Metronique Docs - Simplify your speed work environment";

/// Hero headline, first line.
pub const HERO_TITLE: &str = "Create. Collaborate.";
/// Hero headline, highlighted second line.
pub const HERO_HIGHLIGHT: &str = "Accomplish More.";
/// Hero paragraph.
pub const HERO_BODY: &str = "The complete document editing platform with real-time collaboration, \
                             multimedia support, and enterprise-grade security.";

/// Feature grid heading.
pub const FEATURES_HEADING: &str = "Powerful Features";
/// Feature grid subheading.
pub const FEATURES_SUBHEADING: &str =
    "Everything you need to create, collaborate, and deliver excellence";

/// Call-to-action heading.
pub const CTA_HEADING: &str = "Ready to transform your workflow?";
/// Call-to-action paragraph.
pub const CTA_BODY: &str = "Join thousands of teams already using Metronique Docs";
/// Call-to-action button label.
pub const CTA_BUTTON: &str = "Start Free Trial";

/// One feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Glyph standing in for the icon.
    pub glyph: &'static str,
    /// Card title.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
}

/// Feature grid entries in display order.
pub const FEATURES: [Feature; 12] = [
    Feature {
        glyph: "👥",
        title: "Real-Time Collaboration",
        description: "Work together seamlessly with live cursors and instant updates",
    },
    Feature {
        glyph: "💬",
        title: "Comments & Feedback",
        description: "Discuss changes with threaded comments and mentions",
    },
    Feature {
        glyph: "🎬",
        title: "Video Integration",
        description: "Embed and edit videos directly in your documents",
    },
    Feature {
        glyph: "🎵",
        title: "Audio Support",
        description: "Add voice notes, music, and podcasts to your content",
    },
    Feature {
        glyph: "🖼",
        title: "Rich Media",
        description: "Insert images, GIFs, and graphics with drag-and-drop",
    },
    Feature {
        glyph: "🔒",
        title: "Access Control",
        description: "Enterprise-grade security with granular permissions",
    },
    Feature {
        glyph: "🔗",
        title: "Easy Sharing",
        description: "Share documents with custom links and expiration dates",
    },
    Feature {
        glyph: "⇅",
        title: "Import/Export",
        description: "Support for all major formats including PDF, DOCX, and more",
    },
    Feature {
        glyph: "☁",
        title: "Cloud Sync",
        description: "Access your documents anywhere, anytime, on any device",
    },
    Feature {
        glyph: "🗂",
        title: "File Management",
        description: "Organize with folders, tags, and smart search",
    },
    Feature {
        glyph: "⚡",
        title: "Lightning Fast",
        description: "Optimized performance for documents of any size",
    },
    Feature {
        glyph: "🌐",
        title: "Multi-Language",
        description: "Create and collaborate in over 100 languages",
    },
];

/// In-page navigation anchors.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Features", "#features"),
    ("Documentation", "#docs"),
    ("Tutorials", "#tutorials"),
    ("Help", "#help"),
];

/// Footer columns: heading and link labels.
pub const FOOTER_COLUMNS: [(&str, [&str; 4]); 5] = [
    ("Products", ["Docs", "Sheets", "Slides", "Forms"]),
    (
        "Resources",
        ["Documentation", "Tutorials", "Blogs", "API Reference"],
    ),
    ("Support", ["Help Center", "Contact Us", "Bug Report", "Feedback"]),
    ("Community", ["Forums", "Discord", "Events", "Partners"]),
    ("Company", ["About", "Careers", "Sales", "Press Kit"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn feature_titles_are_unique() {
        let titles: HashSet<_> = FEATURES.iter().map(|feature| feature.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
        assert!(FEATURES.iter().all(|feature| !feature.description.is_empty()));
    }
}
