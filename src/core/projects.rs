use fnv::FnvHashSet;
use smallvec::SmallVec;

/// Synthetic filter label that matches every project.
pub const ALL_CATEGORY: &str = "All";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub live_url: &'static str,
    pub repo_url: &'static str,
    pub category: &'static str,
}

pub type Categories = SmallVec<[&'static str; 8]>;

/// "All" followed by each distinct category in first-appearance order.
pub fn categories(projects: &[Project]) -> Categories {
    let mut seen = FnvHashSet::default();
    let mut out = Categories::new();
    out.push(ALL_CATEGORY);
    for p in projects {
        if seen.insert(p.category) {
            out.push(p.category);
        }
    }
    out
}

const IMG_ECOMMERCE: &str =
    "https://image2url.com/r2/bucket2/images/1766831889258-9325760f-9904-437f-9e60-964114459350.png";
const IMG_KOLIKOWEAR: &str =
    "https://image2url.com/r2/bucket2/images/1766831800783-2bef50f8-f40b-4e16-b389-4cb9cd618e1b.png";
const IMG_TEAM: &str =
    "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=800";
const IMG_AI: &str =
    "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=800";
const IMG_FOOD: &str =
    "https://images.pexels.com/photos/262978/pexels-photo-262978.jpeg?auto=compress&cs=tinysrgb&w=800";
const IMG_DASHBOARD: &str =
    "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=800";
const IMG_CARDS: &str =
    "https://images.pexels.com/photos/6664308/pexels-photo-6664308.jpeg?auto=compress&cs=tinysrgb&w=800";

const RESTAURANT_BLURB: &str = "A beautiful restaurant website featuring online menu, reservation system, order tracking, and payment integration.";

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "A modern e-commerce platform built with React and Node.js",
        long_description: "A full-stack e-commerce solution featuring user authentication, payment processing, inventory management, and an admin dashboard. Built with React and Tailwind CSS.",
        image: IMG_ECOMMERCE,
        tech: &["React", "Tailwind", "Node.js", "Stripe"],
        live_url: "https://tmp-challenge.vercel.app",
        repo_url: "#",
        category: "Full Stack",
    },
    Project {
        id: 2,
        title: "KolikoWear Ecommerce",
        description: "Interactive 3D portfolio with Three.js animations",
        long_description: "An immersive 3D portfolio website showcasing creative web development skills. Features interactive 3D models, particle systems, and smooth animations using Three.js and GSAP.",
        image: IMG_KOLIKOWEAR,
        tech: &["Three.js", "React", "GSAP", "WebGL"],
        live_url: "https://kolikowearshop.vercel.app/",
        repo_url: "#",
        category: "Web App",
    },
    Project {
        id: 3,
        title: "Task Management",
        description: "Collaborative task management with real-time updates",
        long_description: "A comprehensive task management application with real-time collaboration features, drag-and-drop functionality, team management, and progress tracking.",
        image: IMG_TEAM,
        tech: &["React", "Firebase", "Tailwind CSS"],
        live_url: "https://dicsonmoblog.netlify.app",
        repo_url: "#",
        category: "Web App",
    },
    Project {
        id: 4,
        title: "AI Chat Interface",
        description: "Modern chat interface with AI integration",
        long_description: "An intelligent chat interface with AI-powered responses, message history, file sharing, and real-time typing indicators.",
        image: IMG_AI,
        tech: &["React", "OpenAI API", "WebSocket"],
        live_url: "https://kolikolandingpage.netlify.app/",
        repo_url: "#",
        category: "AI/ML",
    },
    Project {
        id: 5,
        title: "Foodies Plug",
        description: "Food vendor platform with online ordering",
        long_description: RESTAURANT_BLURB,
        image: IMG_FOOD,
        tech: &["React.js", "Firebase", "Tailwind"],
        live_url: "https://foodiesplug.vercel.app",
        repo_url: "#",
        category: "Frontend",
    },
    Project {
        id: 6,
        title: "Hospital CMS",
        description: "End-to-end management for health facilities",
        long_description: "A complete hospital management system designed to streamline patient registration, appointment scheduling, and doctor management.",
        image: IMG_DASHBOARD,
        tech: &["React", "Firebase", "FastAPI"],
        live_url: "https://empathycarelandingpage.vercel.app",
        repo_url: "#",
        category: "Management System",
    },
    Project {
        id: 9,
        title: "Blackjack Game",
        description: "Interactive web-based card game",
        long_description: "A fun and engaging Blackjack game built with React. Features chip management and automated dealer logic.",
        image: IMG_CARDS,
        tech: &["React", "JavaScript", "Tailwind"],
        live_url: "https://blackjackgame-sand.vercel.app/",
        repo_url: "#",
        category: "Game Development",
    },
    Project {
        id: 10,
        title: "Koliko Dashboard",
        description: "End-to-end management for Ecommerce",
        long_description: "A complete dashboard system designed to streamline patient registration, appointment scheduling, and doctor management.",
        image: IMG_DASHBOARD,
        tech: &["React", "Firebase", "FastAPI"],
        live_url: "https://kolikoadmin-pmq4.vercel.app/",
        repo_url: "#",
        category: "Management System",
    },
    Project {
        id: 11,
        title: "Ping Coming landingpage",
        description: "Food vendor platform with online ordering",
        long_description: RESTAURANT_BLURB,
        image: IMG_FOOD,
        tech: &["React.js", "Firebase", "Tailwind"],
        live_url: "https://ping-coming-three.vercel.app/",
        repo_url: "#",
        category: "Frontend",
    },
    Project {
        id: 12,
        title: "Huddle Landingpage",
        description: "Food vendor platform with online ordering",
        long_description: RESTAURANT_BLURB,
        image: IMG_FOOD,
        tech: &["React.js", "Firebase", "Tailwind"],
        live_url: "https://huddle-landing-page-taupe-one.vercel.app/",
        repo_url: "#",
        category: "Frontend",
    },
];
