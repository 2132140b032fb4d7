//! Languages that localize the interface but share the short project content.

use super::{ProjectDetails, ProjectTable, Translation};

const SHARED_PROJECTS: ProjectTable = ProjectTable {
    master_cpp: ProjectDetails {
        title: "Master C++",
        description: "C++ Programming",
        long_description: "High-performance programming.",
        features: &["Modern C++"],
    },
    testing_tools: ProjectDetails {
        title: "Testing Tools",
        description: "QA Tools",
        long_description: "Software testing toolkit.",
        features: &["Automation"],
    },
    agentic_stack: ProjectDetails {
        title: "Agentic Stack",
        description: "AI Agents",
        long_description: "Autonomous AI systems.",
        features: &["Orchestration"],
    },
    networking: ProjectDetails {
        title: "Networking",
        description: "Network Protocols",
        long_description: "Deep dive into networks.",
        features: &["TCP/IP"],
    },
    ai_tools: ProjectDetails {
        title: "AI Tools",
        description: "AI for Coding",
        long_description: "Productivity with AI.",
        features: &["Prompt Engineering"],
    },
    sbc: ProjectDetails {
        title: "Master SBC",
        description: "Single Board Computers",
        long_description: "Hardware programming.",
        features: &["IoT"],
    },
    python: ProjectDetails {
        title: "Master Python",
        description: "Python Programming",
        long_description: "Python from basics to advanced.",
        features: &["Data Science"],
    },
    machine_learning: ProjectDetails {
        title: "Machine Learning",
        description: "ML & AI",
        long_description: "Foundations of AI.",
        features: &["Neural Networks"],
    },
    design_patterns: ProjectDetails {
        title: "Design Patterns",
        description: "Architecture",
        long_description: "Software patterns.",
        features: &["SOLID"],
    },
};

pub(super) static ZH: Translation = Translation {
    title: "学习技术中心",
    subtitle: "掌握现代技术的门户，从网络到人工智能和硬件。",
    footer_rights: "(C) Noam Gold AI 2026",
    feedback: "发送反馈",
    visit_site: "查看详情",
    go_to_site: "前往页面",
    search_placeholder: "搜索话题...",
    no_results: "未找到符合搜索条件的项目。",
    share: "分享中心",
    export_results: "导出 JSON",
    clear: "清除",
    font_size: "字体大小",
    projects: SHARED_PROJECTS,
};

pub(super) static HI: Translation = Translation {
    title: "लर्न टेक हब",
    subtitle: "नेटवर्किंग से लेकर एआई और हार्डवेयर तक, आधुनिक तकनीक में महारत हासिल करने का आपका प्रवेश द्वार।",
    footer_rights: "(C) Noam Gold AI 2026",
    feedback: "प्रतिक्रिया भेजें",
    visit_site: "विवरण देखें",
    go_to_site: "पेज पर जाएं",
    search_placeholder: "विषय खोजें...",
    no_results: "आपकी खोज से मेल खाने वाला कोई प्रोजेक्ट नहीं मिला।",
    share: "हब साझा करें",
    export_results: "JSON निर्यात करें",
    clear: "साफ़ करें",
    font_size: "फ़ॉन्ट आकार",
    projects: SHARED_PROJECTS,
};

pub(super) static RU: Translation = Translation {
    title: "Технологический учебный центр",
    subtitle: "Ваш путь к освоению современных технологий: от сетей до ИИ и оборудования.",
    footer_rights: "(C) Noam Gold AI 2026",
    feedback: "Отправить отзыв",
    visit_site: "Подробнее",
    go_to_site: "Перейти на страницу",
    search_placeholder: "Поиск тем...",
    no_results: "Проекты не найдены.",
    share: "Поделиться",
    export_results: "Экспорт JSON",
    clear: "Очистить",
    font_size: "Размер шрифта",
    projects: SHARED_PROJECTS,
};

pub(super) static DE: Translation = Translation {
    title: "Tech-Lernzentrum",
    subtitle: "Ihr Tor zur Beherrschung moderner Technologien, von Netzwerken bis hin zu KI und Hardware.",
    footer_rights: "(C) Noam Gold AI 2026",
    feedback: "Feedback senden",
    visit_site: "Details anzeigen",
    go_to_site: "Zur Seite",
    search_placeholder: "Themen suchen...",
    no_results: "Keine Projekte gefunden.",
    share: "Teilen",
    export_results: "JSON exportieren",
    clear: "Löschen",
    font_size: "Schriftgröße",
    projects: SHARED_PROJECTS,
};

pub(super) static ES: Translation = Translation {
    title: "Centro de Aprendizaje Tech",
    subtitle: "Su puerta de entrada para dominar la tecnología moderna, desde redes hasta IA y hardware.",
    footer_rights: "(C) Noam Gold AI 2026",
    feedback: "Enviar comentarios",
    visit_site: "Ver detalles",
    go_to_site: "Ir a la página",
    search_placeholder: "Buscar temas...",
    no_results: "No se encontraron proyectos.",
    share: "Compartir",
    export_results: "Exportar JSON",
    clear: "Limpiar",
    font_size: "Tamaño de fuente",
    projects: SHARED_PROJECTS,
};

pub(super) static FR: Translation = Translation {
    title: "Hub d'Apprentissage Tech",
    subtitle: "Votre porte d'entrée vers la maîtrise des technologies modernes, des réseaux à l'IA et au matériel.",
    footer_rights: "(C) Noam Gold AI 2026",
    feedback: "Envoyer des commentaires",
    visit_site: "Voir les détails",
    go_to_site: "Aller à la page",
    search_placeholder: "Rechercher des sujets...",
    no_results: "Aucun projet trouvé.",
    share: "Partager",
    export_results: "Exporter JSON",
    clear: "Effacer",
    font_size: "Taille de police",
    projects: SHARED_PROJECTS,
};
