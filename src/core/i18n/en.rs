use super::{ProjectDetails, ProjectTable, Translation};

pub(super) static EN: Translation = Translation {
    title: "Learn Tech Hub",
    subtitle: "Your gateway to mastering modern technology, from networking to AI and hardware.",
    footer_rights: "(C) Noam Gold AI 2026",
    feedback: "Send Feedback",
    visit_site: "View Details",
    go_to_site: "Go to Page",
    search_placeholder: "Search topics...",
    no_results: "No projects found matching your search.",
    share: "Share Hub",
    export_results: "Export JSON",
    clear: "Clear",
    font_size: "Font Size",
    projects: ProjectTable {
        master_cpp: ProjectDetails {
            title: "Master C++",
            description: "Master high-performance programming with C++ from basics to system architecture.",
            long_description: "Dive into the world of low-level programming. Learn memory management, OOP principles, and modern C++ features. This course covers everything from basic syntax to high-performance systems engineering.",
            features: &[
                "Modern C++ (17/20/23)",
                "Memory Management",
                "STL & Generic Programming",
                "Systems Architecture",
            ],
        },
        testing_tools: ProjectDetails {
            title: "Testing Tools Hub",
            description: "Comprehensive toolkit for modern software testing and quality assurance.",
            long_description: "A central repository for the best AI-driven and manual testing tools. Learn about end-to-end testing, unit testing, and automation frameworks to ensure high-quality software delivery.",
            features: &[
                "AI-Powered Test Generation",
                "End-to-End Automation",
                "Performance Benchmarking",
                "Quality Metrics Dashboard",
            ],
        },
        agentic_stack: ProjectDetails {
            title: "Master Agentic Stack",
            description: "Build autonomous AI agents and intelligent multi-agent workflows.",
            long_description: "Learn to build complex AI systems that can reason, plan, and execute tasks autonomously. This curriculum covers agent orchestration, tool use, memory management, and multi-agent collaboration frameworks.",
            features: &[
                "Agent Orchestration",
                "Tool & Function Calling",
                "Memory & Context Management",
                "Autonomous Workflows",
            ],
        },
        networking: ProjectDetails {
            title: "Learn Networking",
            description: "Deep dive into network protocols, architecture, and security fundamentals.",
            long_description: "Master the fundamental building blocks of the internet. This comprehensive course takes you from the basics of LANs and WANs to advanced routing protocols and network security. Perfect for aspiring network engineers and sysadmins.",
            features: &[
                "TCP/IP & OSI Models",
                "Subnetting & Addressing",
                "Routing Protocols (OSPF, BGP)",
                "Network Security Basics",
            ],
        },
        ai_tools: ProjectDetails {
            title: "Master AI Coding Tools",
            description: "Unlock the power of AI-assisted development and boost your productivity.",
            long_description: "Learn how to leverage state-of-the-art AI tools to write cleaner code faster. We cover everything from GitHub Copilot and ChatGPT to specialized coding agents.",
            features: &[
                "AI Prompt Engineering",
                "Automated Refactoring",
                "Code Generation Strategies",
                "Debugging with AI",
            ],
        },
        sbc: ProjectDetails {
            title: "Master SBC",
            description: "Explore the world of Single Board Computers like Raspberry Pi and Arduino.",
            long_description: "Dive into the hardware world with Single Board Computers. Learn to interface with sensors, control actuators, and build IoT devices using platforms like Raspberry Pi and ESP32.",
            features: &[
                "GPIO Programming",
                "Sensor Integration",
                "IoT Connectivity",
                "Linux for Embedded Systems",
            ],
        },
        python: ProjectDetails {
            title: "Master Python",
            description: "Comprehensive guide to Python programming, from basics to advanced topics.",
            long_description: "From your first 'Hello World' to complex data science projects. This curriculum covers modern Python patterns, asynchronous programming, and popular frameworks.",
            features: &[
                "Data Structures & Algorithms",
                "Object-Oriented Programming",
                "AsyncIO & Concurrency",
                "Web Frameworks (FastAPI/Django)",
            ],
        },
        machine_learning: ProjectDetails {
            title: "Machine Learning Masterclass",
            description: "Master the foundations of Machine Learning and Edge AI.",
            long_description: "A deep dive into the world of Machine Learning, focusing on algorithms, data processing, and deploying models to edge devices. This masterclass bridges the gap between theory and real-world application.",
            features: &[
                "Neural Networks",
                "Edge AI Deployment",
                "Data Preprocessing",
                "TensorFlow & PyTorch",
            ],
        },
        design_patterns: ProjectDetails {
            title: "Master Design Patterns",
            description: "Master software architecture with essential design patterns and best practices.",
            long_description: "Explore the fundamental blueprints of software engineering. This guide covers classic Gang of Four patterns, modern architectural styles, and principles for writing maintainable, scalable code.",
            features: &[
                "Creational Patterns",
                "Structural Patterns",
                "Behavioral Patterns",
                "SOLID Principles",
            ],
        },
    },
};
