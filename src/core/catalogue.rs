use serde::Serialize;

/// Joins a catalogue record to its per-language content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKey {
    MasterCpp,
    TestingTools,
    AgenticStack,
    Networking,
    AiTools,
    Sbc,
    Python,
    MachineLearning,
    DesignPatterns,
}

impl ContentKey {
    pub const ALL: [ContentKey; 9] = [
        ContentKey::MasterCpp,
        ContentKey::TestingTools,
        ContentKey::AgenticStack,
        ContentKey::Networking,
        ContentKey::AiTools,
        ContentKey::Sbc,
        ContentKey::Python,
        ContentKey::MachineLearning,
        ContentKey::DesignPatterns,
    ];
}

/// One entry of the catalogue. Serialized with the field names used by the
/// exported `search_results.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub id: &'static str,
    #[serde(rename = "image")]
    pub image_url: &'static str,
    #[serde(rename = "link")]
    pub external_link: &'static str,
    #[serde(rename = "translationKey")]
    pub content_key: ContentKey,
}

static CATALOGUE: [ProjectRecord; 9] = [
    ProjectRecord {
        id: "master-cpp",
        image_url: "https://images.unsplash.com/photo-1515879218367-8466d910aaa4?auto=format&fit=crop&q=80&w=800",
        external_link: "https://cplusplus-master.vercel.app",
        content_key: ContentKey::MasterCpp,
    },
    ProjectRecord {
        id: "testing-tools",
        image_url: "https://images.unsplash.com/photo-1516116216624-53e697fedbea?auto=format&fit=crop&q=80&w=800",
        external_link: "https://ai-testing-hub.vercel.app/",
        content_key: ContentKey::TestingTools,
    },
    ProjectRecord {
        id: "agentic-stack",
        image_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&q=80&w=800",
        external_link: "https://agentic-stack.vercel.app",
        content_key: ContentKey::AgenticStack,
    },
    ProjectRecord {
        id: "networking",
        image_url: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80&w=800",
        external_link: "https://net-learn.vercel.app",
        content_key: ContentKey::Networking,
    },
    ProjectRecord {
        id: "ai-tools",
        image_url: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?auto=format&fit=crop&q=80&w=800",
        external_link: "https://master-ai-code-tools.vercel.app",
        content_key: ContentKey::AiTools,
    },
    ProjectRecord {
        id: "sbc",
        image_url: "https://images.unsplash.com/photo-1555679427-1f6dfcce943b?auto=format&fit=crop&q=80&w=800",
        external_link: "https://maker-forge.vercel.app",
        content_key: ContentKey::Sbc,
    },
    ProjectRecord {
        id: "python",
        image_url: "https://images.unsplash.com/photo-1526379095098-d400fd0bf935?auto=format&fit=crop&q=80&w=800",
        external_link: "https://master-python.vercel.app",
        content_key: ContentKey::Python,
    },
    ProjectRecord {
        id: "machine-learning",
        image_url: "https://images.unsplash.com/photo-1515879218367-8466d910aaa4?auto=format&fit=crop&q=80&w=800",
        external_link: "https://edge-ai-masterclass.vercel.app/",
        content_key: ContentKey::MachineLearning,
    },
    ProjectRecord {
        id: "design-patterns",
        image_url: "https://images.unsplash.com/photo-1504639725590-34d0984388bd?auto=format&fit=crop&q=80&w=800",
        external_link: "https://designpatterns.vercel.app",
        content_key: ContentKey::DesignPatterns,
    },
];

/// The full catalogue in display order.
pub fn catalogue() -> &'static [ProjectRecord] {
    &CATALOGUE
}

pub fn find(id: &str) -> Option<&'static ProjectRecord> {
    CATALOGUE.iter().find(|record| record.id == id)
}
