//! Portfolio catalogue and marketing copy for the public site.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/`, `/work`, and `/work/:slug` render from these static tables. Nothing
//! here is editable at runtime; the admin project board keeps its own list.

#[cfg(test)]
#[path = "work_test.rs"]
mod work_test;

/// One entry on the `/work` page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkProject {
    pub slug: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub year: &'static str,
    /// Accent class for the card header.
    pub accent: &'static str,
}

pub static WORK: [WorkProject; 8] = [
    WorkProject {
        slug: "ecommerce-platform",
        title: "E-Commerce Platform",
        category: "Web Development",
        description: "Modern e-commerce solution with seamless checkout and inventory management",
        tags: &["React", "Node.js", "Stripe"],
        year: "2024",
        accent: "accent--blue",
    },
    WorkProject {
        slug: "healthcare-app",
        title: "Healthcare App",
        category: "Mobile App",
        description: "Patient management system with telemedicine capabilities",
        tags: &["React Native", "Firebase", "WebRTC"],
        year: "2024",
        accent: "accent--green",
    },
    WorkProject {
        slug: "real-estate-portal",
        title: "Real Estate Portal",
        category: "Web Development",
        description: "Property listing platform with virtual tours and mortgage calculator",
        tags: &["Next.js", "PostgreSQL", "Maps API"],
        year: "2023",
        accent: "accent--orange",
    },
    WorkProject {
        slug: "fitness-tracker",
        title: "Fitness Tracker",
        category: "Mobile App",
        description: "AI-powered workout planning and nutrition tracking application",
        tags: &["Flutter", "TensorFlow", "HealthKit"],
        year: "2024",
        accent: "accent--purple",
    },
    WorkProject {
        slug: "saas-dashboard",
        title: "SaaS Dashboard",
        category: "Web Development",
        description: "Analytics dashboard with real-time data visualization",
        tags: &["Vue.js", "D3.js", "WebSocket"],
        year: "2023",
        accent: "accent--indigo",
    },
    WorkProject {
        slug: "food-delivery-app",
        title: "Food Delivery App",
        category: "Mobile App",
        description: "On-demand food delivery with live tracking and payment integration",
        tags: &["React Native", "Google Maps", "Stripe"],
        year: "2023",
        accent: "accent--yellow",
    },
    WorkProject {
        slug: "learning-management-system",
        title: "Learning Management System",
        category: "Web Development",
        description: "Online education platform with video streaming and assessments",
        tags: &["React", "AWS", "Video.js"],
        year: "2024",
        accent: "accent--teal",
    },
    WorkProject {
        slug: "social-media-app",
        title: "Social Media App",
        category: "Mobile App",
        description: "Content sharing platform with stories and live streaming",
        tags: &["React Native", "Firebase", "Stream API"],
        year: "2023",
        accent: "accent--pink",
    },
];

/// Look up a catalogue entry by its URL slug.
pub fn find_by_slug(slug: &str) -> Option<&'static WorkProject> {
    WORK.iter().find(|p| p.slug == slug)
}

/// Slugs featured in the landing page's "Selected Work" strip.
pub const SELECTED_WORK: [&str; 4] = ["ecommerce-platform", "fitness-tracker", "saas-dashboard", "real-estate-portal"];

pub fn selected_work() -> Vec<&'static WorkProject> {
    SELECTED_WORK.iter().filter_map(|slug| find_by_slug(slug)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Web Development",
        description: "Custom websites built with cutting-edge technologies for optimal performance \
                      and user experience.",
        features: ["Responsive Design", "SEO Optimized", "Fast Loading"],
    },
    Service {
        title: "App Development",
        description: "Native and cross-platform mobile applications that deliver seamless experiences \
                      across all devices.",
        features: ["iOS & Android", "Cross-Platform", "Cloud Integration"],
    },
    Service {
        title: "Maintenance & Support",
        description: "Ongoing support and maintenance to keep your digital products running smoothly and securely.",
        features: ["24/7 Monitoring", "Security Updates", "Performance Optimization"],
    },
];

/// Hero stat strip: `(value, label)`.
pub const HERO_STATS: [(&str, &str); 3] =
    [("50+", "Projects Delivered"), ("100%", "Client Satisfaction"), ("5+", "Years Experience")];

/// Landing page section anchors, in navbar order: `(fragment, label)`.
pub const SECTIONS: [(&str, &str); 4] =
    [("#services", "Services"), ("#work", "Work"), ("#about", "About"), ("#contact", "Contact")];
