//! Static copy shown on the pages.

use neura_core::Route;

/// An animated stat: the counter target plus its caption.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

/// A pricing tier on the services page.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const TAGLINE: &str = "Neural. Digital. Different.";

pub const HERO_INTRO: &str = "We craft premium digital experiences that merge cutting-edge \
    technology with stunning design. Transform your vision into reality with NEURA.";

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: 150, suffix: "+", label: "Projects Delivered" },
    Stat { value: 98, suffix: "%", label: "Client Satisfaction" },
    Stat { value: 50, suffix: "+", label: "Global Clients" },
];

pub const ABOUT_STATS: [Stat; 4] = [
    Stat { value: 150, suffix: "+", label: "Projects Delivered" },
    Stat { value: 80, suffix: "+", label: "Happy Clients" },
    Stat { value: 5, suffix: "+", label: "Years Experience" },
    Stat { value: 12, suffix: "", label: "Team Members" },
];

pub const SERVICES: [Card; 6] = [
    Card {
        title: "Web Development",
        description: "Custom web applications built with cutting-edge technologies and best practices.",
    },
    Card {
        title: "UI/UX Design",
        description: "Beautiful, intuitive interfaces that users love and remember.",
    },
    Card {
        title: "Mobile Apps",
        description: "Native and cross-platform mobile solutions for iOS and Android.",
    },
    Card {
        title: "E-Commerce",
        description: "Scalable online stores that drive conversions and revenue.",
    },
    Card {
        title: "Performance",
        description: "Lightning-fast websites optimized for speed and SEO.",
    },
    Card {
        title: "Consulting",
        description: "Strategic guidance to accelerate your digital transformation.",
    },
];

pub const PROCESS: [ProcessStep; 4] = [
    ProcessStep {
        number: "01",
        title: "Discovery",
        description: "We dive deep into your business goals, target audience, and project requirements.",
    },
    ProcessStep {
        number: "02",
        title: "Design",
        description: "Our designers craft beautiful, user-centric interfaces that align with your brand.",
    },
    ProcessStep {
        number: "03",
        title: "Development",
        description: "We build robust, scalable solutions using the latest technologies and best practices.",
    },
    ProcessStep {
        number: "04",
        title: "Launch",
        description: "We deploy your project and provide ongoing support to ensure continued success.",
    },
];

pub const FEATURED: [Project; 4] = [
    Project {
        title: "FinTech Dashboard",
        category: "Web Application",
        description: "Real-time financial analytics platform",
        tags: &[],
    },
    Project {
        title: "E-Commerce Platform",
        category: "Online Store",
        description: "Next-gen shopping experience",
        tags: &[],
    },
    Project {
        title: "SaaS Product",
        category: "Web Application",
        description: "Cloud-based project management",
        tags: &[],
    },
    Project {
        title: "Mobile Banking App",
        category: "Mobile App",
        description: "Secure digital banking solution",
        tags: &[],
    },
];

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "TechFlow SaaS",
        category: "Web Application",
        description: "A modern SaaS platform for project management with real-time collaboration features",
        tags: &["React", "Node.js", "PostgreSQL", "WebSocket"],
    },
    Project {
        title: "LuxeStore",
        category: "E-Commerce",
        description: "Premium e-commerce platform for luxury fashion with seamless checkout experience",
        tags: &["Next.js", "Stripe", "Tailwind", "Framer Motion"],
    },
    Project {
        title: "FitnessPro",
        category: "Mobile App",
        description: "Fitness tracking app with personalized workout plans and nutrition guidance",
        tags: &["React Native", "Firebase", "Redux", "Charts"],
    },
    Project {
        title: "CryptoVault",
        category: "Web3 Platform",
        description: "Secure cryptocurrency wallet with portfolio tracking and trading features",
        tags: &["Web3.js", "Ethereum", "React", "TypeScript"],
    },
    Project {
        title: "MindfulSpace",
        category: "Wellness Platform",
        description: "Meditation and mindfulness app with guided sessions and progress tracking",
        tags: &["Vue.js", "Audio API", "PWA", "Animation"],
    },
    Project {
        title: "DataViz Pro",
        category: "Analytics Dashboard",
        description: "Advanced data visualization platform for business intelligence and reporting",
        tags: &["D3.js", "React", "Python", "API"],
    },
];

pub const TIERS: [Tier; 4] = [
    Tier {
        name: "Landing Page",
        description: "Perfect for product launches, campaigns, or lead generation",
        price: "Starting at $999",
        features: &[
            "Single page design",
            "Contact form",
            "Mobile responsive",
            "SEO optimized",
            "Fast loading",
        ],
        popular: false,
    },
    Tier {
        name: "Business Website",
        description: "Complete online presence for your business",
        price: "Starting at $2,499",
        features: &[
            "Up to 10 pages",
            "CMS integration",
            "Contact forms",
            "Blog section",
            "Analytics setup",
            "Social media integration",
        ],
        popular: true,
    },
    Tier {
        name: "E-Commerce",
        description: "Full-featured online store with payment processing",
        price: "Starting at $4,999",
        features: &[
            "Product catalog",
            "Shopping cart",
            "Payment gateway",
            "Order management",
            "Customer accounts",
            "Inventory tracking",
        ],
        popular: false,
    },
    Tier {
        name: "Custom Web App",
        description: "Tailored solutions for complex business needs",
        price: "Custom pricing",
        features: &[
            "Custom functionality",
            "Database design",
            "API integration",
            "User authentication",
            "Admin dashboard",
            "Scalable architecture",
        ],
        popular: false,
    },
];

pub const EXTRA_SERVICES: [Card; 6] = [
    Card {
        title: "UI/UX Design",
        description: "Beautiful, intuitive interfaces that users love",
    },
    Card {
        title: "Brand Identity",
        description: "Logo design, color schemes, and brand guidelines",
    },
    Card {
        title: "SEO Optimization",
        description: "Get found on Google with our SEO strategies",
    },
    Card {
        title: "Maintenance & Support",
        description: "Ongoing updates, security, and technical support",
    },
    Card {
        title: "Performance Optimization",
        description: "Lightning-fast loading speeds and smooth interactions",
    },
    Card {
        title: "Analytics & Tracking",
        description: "Understand your users with detailed analytics",
    },
];

pub const STORY: [&str; 3] = [
    "Founded in 2019, NEURA emerged from a simple belief: the web should be more than \
     functional, it should be extraordinary. We started as a small team of designers and \
     developers who were tired of seeing bland, cookie-cutter websites dominate the digital \
     landscape.",
    "Today, we're a full-service digital agency specializing in creating premium web \
     experiences that don't just look good, they perform. From startups to established brands, \
     we've helped over 80 clients transform their digital presence and achieve measurable results.",
    "Our approach combines cutting-edge technology with timeless design principles. We believe \
     in building websites that are fast, accessible, and optimized for conversion, without \
     sacrificing aesthetics or user experience.",
];

pub const VALUES: [Card; 4] = [
    Card {
        title: "Innovation First",
        description: "We stay ahead of the curve, leveraging cutting-edge technologies to build \
            future-proof solutions.",
    },
    Card {
        title: "Client-Centric",
        description: "Your success is our success. We work closely with you to understand and \
            exceed your expectations.",
    },
    Card {
        title: "Quality Obsessed",
        description: "Every pixel, every line of code matters. We're committed to delivering \
            excellence in everything we do.",
    },
    Card {
        title: "Transparent Process",
        description: "No surprises. We keep you informed every step of the way with clear \
            communication and regular updates.",
    },
];

pub const SKILLS: [&str; 6] = [
    "React & Next.js",
    "UI/UX Design",
    "TypeScript",
    "Node.js",
    "Cloud Architecture",
    "SEO & Analytics",
];

pub const EMAIL: &str = "hello@neura.agency";
pub const PHONE: &str = "+1 (234) 567-890";
pub const LOCATION: &str = "San Francisco, CA";

pub const HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

/// Stats animated on a page, if it has any.
pub fn stats_for(route: Route) -> &'static [Stat] {
    match route {
        Route::Home => &HERO_STATS,
        Route::About => &ABOUT_STATS,
        Route::Services | Route::Portfolio | Route::Contact => &[],
    }
}
