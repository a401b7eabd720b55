//! Static project catalog consumed by the gallery.
//!
//! Items are immutable for the session; the engine only ever reads them.

/// One project entry shown as a card and expanded in the detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_link: Option<String>,
    pub repo_link: Option<String>,
}

impl GalleryItem {
    pub fn new(
        title: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
            description: description.into(),
            technologies: Vec::new(),
            live_link: None,
            repo_link: None,
        }
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_live_link(mut self, url: impl Into<String>) -> Self {
        self.live_link = Some(url.into());
        self
    }

    pub fn with_repo_link(mut self, url: impl Into<String>) -> Self {
        self.repo_link = Some(url.into());
        self
    }
}

/// Built-in project collection shown by the site.
pub fn default_collection() -> Vec<GalleryItem> {
    fn item(
        title: &str,
        image: &str,
        description: &str,
        technologies: &[&str],
    ) -> GalleryItem {
        GalleryItem::new(title, image, description)
            .with_technologies(technologies.iter().copied())
            .with_live_link("#")
            .with_repo_link("#")
    }

    vec![
        item(
            "Digital Landscape",
            "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=400",
            "A modern web application built with React and Node.js",
            &["React", "Node.js", "MongoDB"],
        ),
        item(
            "Modern Interface",
            "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?w=400",
            "E-commerce platform with real-time features",
            &["Vue.js", "Firebase", "Tailwind CSS"],
        ),
        item(
            "Tech Innovation",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400",
            "Full-stack application with authentication",
            &["Next.js", "TypeScript", "PostgreSQL"],
        ),
        item(
            "Creative Workspace",
            "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=400",
            "Mobile application with cross-platform support",
            &["React Native", "Redux", "Firebase"],
        ),
        item(
            "Code Architecture",
            "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=400",
            "Data visualization dashboard",
            &["D3.js", "Angular", "Express"],
        ),
        item(
            "AI Solutions",
            "https://images.unsplash.com/photo-1558655146-d09347e92766?w=400",
            "AI-powered recommendation system",
            &["Python", "TensorFlow", "Flask"],
        ),
        item(
            "Blockchain Platform",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400",
            "Blockchain-based smart contract platform",
            &["Solidity", "Ethereum", "Web3.js"],
        ),
        item(
            "Data Visualization",
            "https://images.unsplash.com/photo-1507238691740-187a5b1d37b8?w=400",
            "Real-time collaboration tool",
            &["Socket.io", "React", "MongoDB"],
        ),
        item(
            "Smart Editor",
            "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=400",
            "Code editor with AI assistance",
            &["Monaco Editor", "OpenAI API", "Next.js"],
        ),
        item(
            "Learning Platform",
            "https://images.unsplash.com/photo-1516116216624-53e697fedbea?w=400",
            "E-learning platform with interactive courses",
            &["React", "GraphQL", "AWS"],
        ),
        item(
            "VR Experience",
            "https://images.unsplash.com/photo-1593642532400-2682810df593?w=400",
            "Virtual reality experience",
            &["Three.js", "WebXR", "JavaScript"],
        ),
        item(
            "Project Management",
            "https://images.unsplash.com/photo-1551434678-e076c223a692?w=400",
            "Project management tool",
            &["Vue.js", "Vuex", "Node.js"],
        ),
        item(
            "Security Analysis",
            "https://images.unsplash.com/photo-1587620962725-abab7fe55159?w=400",
            "Cybersecurity analysis platform",
            &["Python", "Django", "React"],
        ),
        item(
            "IoT Automation",
            "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=400",
            "IoT home automation system",
            &["MQTT", "Raspberry Pi", "Node-RED"],
        ),
        item(
            "AR Mobile App",
            "https://images.unsplash.com/photo-1550063873-ab792950096b?w=400",
            "Augmented reality mobile app",
            &["ARKit", "Unity", "C#"],
        ),
        item(
            "Cloud Infrastructure",
            "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?w=400",
            "Scalable cloud infrastructure solution",
            &["AWS", "Terraform", "Docker"],
        ),
        item(
            "Motion Graphics",
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=400",
            "Interactive motion graphics portfolio",
            &["GSAP", "Canvas API", "JavaScript"],
        ),
        item(
            "Music Streaming",
            "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=400",
            "Music streaming platform with social features",
            &["React", "Web Audio API", "Express"],
        ),
        item(
            "Health Tracker",
            "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=400",
            "Health and fitness tracking application",
            &["Flutter", "Firebase", "TensorFlow Lite"],
        ),
        item(
            "Game Development",
            "https://images.unsplash.com/photo-1556438064-2d7646166914?w=400",
            "Browser-based multiplayer game",
            &["Phaser.js", "Socket.io", "Node.js"],
        ),
    ]
}
