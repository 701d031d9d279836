//! Static portfolio content
//!
//! Everything shown on the main screen that is not user input: projects
//! offered in the services carousel, technologies, biography and links.
//! None of it changes at runtime.

/// Offered services behind a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDetails {
    pub title: &'static str,
    /// Ordered list of offered services
    pub services: &'static [&'static str],
}

/// A services carousel card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Bundled thumbnail name
    pub image: &'static str,
    /// Glyph drawn in place of the card icon
    pub icon: &'static str,
    pub tags: &'static [&'static str],
    pub details: ProjectDetails,
}

/// Technology shown in the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechLogo {
    pub name: &'static str,
    pub logo_url: &'static str,
}

/// Outbound contact link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const OWNER_NAME: &str = "Giovana";
pub const OWNER_INITIALS: &str = "GV";

pub const INTRO_GREETING: &str = "Olá, me chamo Giovana.";
pub const INTRO_TAGLINE: &str = "Transformo ideias em experiências digitais. Com paixão por código \
limpo e design elegante, construo aplicações web completas, do backend ao frontend.";
pub const INTRO_CTA: &str = "Conhecer mais";

pub const HERO_TITLE: &str = "Transformando ideias em";
pub const HERO_HIGHLIGHT: &str = "código";
pub const HERO_SUBTITLE: &str = "Desenvolvimento web, mobile e automações. Soluções tecnológicas \
completas para impulsionar seu negócio no mundo digital.";
pub const HERO_CTA: &str = "Conheça meu trabalho";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Olá! Me chamo Giovana, tenho 29 anos e sou desenvolvedora apaixonada por tecnologia, \
movida por desafios e pela criação de soluções digitais modernas.",
    "Sou formada em Química, mas minha curiosidade e interesse pela área de tecnologia me \
levaram a realizar uma transição de carreira. Atualmente, curso Análise e Desenvolvimento \
de Sistemas, onde aprimoro constantemente minhas habilidades técnicas.",
    "A união entre minha base científica e a programação me proporciona uma visão analítica, \
organizada e estratégica para resolver problemas, desenvolver aplicações eficientes e \
entregar soluções de alta qualidade.",
];

pub const SERVICES_INTRO: &str =
    "Conheça alguns dos serviços que ofereço e exemplos do que posso desenvolver para você.";

pub const QUOTE_INTRO: &str =
    "Preencha o formulário abaixo e entrarei em contato para discutirmos seu projeto.";

pub const CONTACT_INTRO: &str = "Me encontre nas redes sociais ou entre em contato diretamente.";

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Páginas Web Interativas",
        description: "Desenvolvimento de interfaces modernas e responsivas com React e \
TypeScript. Criação de experiências digitais que engajam usuários.",
        image: "project-web.jpg",
        icon: "</>",
        tags: &["React", "TypeScript", "Tailwind CSS"],
        details: ProjectDetails {
            title: "Páginas Web Interativas",
            services: &[
                "Landing pages modernas e responsivas",
                "Sites institucionais com design personalizado",
                "E-commerce e lojas virtuais",
                "Dashboards e painéis administrativos",
                "Portfólios e sites pessoais",
                "Blogs e sistemas de conteúdo",
            ],
        },
    },
    Project {
        title: "Aplicativos Mobile",
        description: "Aplicativos nativos e híbridos com React Native. Design intuitivo e \
performance otimizada para iOS e Android.",
        image: "project-app.jpg",
        icon: "[▯]",
        tags: &["React Native", "Expo", "Mobile"],
        details: ProjectDetails {
            title: "Aplicativos Mobile",
            services: &[
                "Apps nativos para iOS e Android",
                "Aplicativos de delivery e marketplace",
                "Apps de gestão e produtividade",
                "Aplicativos de redes sociais",
                "Apps com integração de pagamentos",
                "Notificações push e funcionalidades offline",
            ],
        },
    },
    Project {
        title: "APIs Robustas",
        description: "Desenvolvimento de APIs RESTful escaláveis com Node.js e Python. \
Arquitetura limpa e documentação completa.",
        image: "project-api.jpg",
        icon: "[≡]",
        tags: &["Node.js", "Python", "REST API"],
        details: ProjectDetails {
            title: "APIs Robustas",
            services: &[
                "APIs RESTful escaláveis",
                "Integração com bancos de dados",
                "Autenticação e autorização segura",
                "Documentação completa com Swagger",
                "Webhooks e integrações de terceiros",
                "Microserviços e arquitetura distribuída",
            ],
        },
    },
    Project {
        title: "Automações de Processos",
        description: "Automatização de fluxos de trabalho com Python e N8N. Integração de \
sistemas e otimização de processos empresariais.",
        image: "project-automation.jpg",
        icon: "[⚙]",
        tags: &["Python", "N8N", "Automação"],
        details: ProjectDetails {
            title: "Automações de Processos",
            services: &[
                "Chatbots para atendimento ao cliente",
                "Automatização de agenda e agendamentos",
                "Integração entre sistemas (CRM, ERP, etc.)",
                "Automação de marketing e email",
                "Scraping e extração de dados",
                "Workflows personalizados com N8N",
            ],
        },
    },
];

pub const TECH_LOGOS: [TechLogo; 6] = [
    TechLogo {
        name: "React",
        logo_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
    },
    TechLogo {
        name: "React Native",
        logo_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
    },
    TechLogo {
        name: "Node.js",
        logo_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
    },
    TechLogo {
        name: "Python",
        logo_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
    },
    TechLogo {
        name: "TypeScript",
        logo_url:
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg",
    },
    TechLogo {
        name: "N8N",
        logo_url: "https://n8n.io/favicon.ico",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/giovanavictoria",
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/giivict",
    },
    SocialLink {
        label: "WhatsApp",
        url: "https://wa.me/5511941998168",
    },
];

/// All carousel projects in display order
pub fn projects() -> &'static [Project] {
    &PROJECTS
}
