use super::{ProjectDetails, ProjectTable, Translation};

pub(super) static HE: Translation = Translation {
    title: "מרכז למידת טכנולוגיה",
    subtitle: "השער שלך לשליטה בטכנולוגיה מודרנית, מרשתות ועד בינה מלאכותית וחומרה.",
    footer_rights: "(C) נעם גולד AI 2026",
    feedback: "שלח משוב",
    visit_site: "הצג פרטים",
    go_to_site: "עבור לאתר",
    search_placeholder: "חפש נושאים...",
    no_results: "לא נמצאו פרויקטים תואמים לחיפוש שלך.",
    share: "שתף",
    export_results: "ייצא JSON",
    clear: "נקה",
    font_size: "גודל גופן",
    projects: ProjectTable {
        master_cpp: ProjectDetails {
            title: "מומחה C++",
            description: "שלטו בתכנות ביצועים גבוהים עם C++ מהיסודות ועד ארכיטקטורת מערכות.",
            long_description: "צללו לעולם התכנות ברמה נמוכה. למדו ניהול זיכרון, עקרונות OOP ותכונות C++ מודרניות.",
            features: &[
                "C++ מודרני (17/20/23)",
                "ניהול זיכרון",
                "STL ותכנות גנרי",
                "ארכיטקטורת מערכות",
            ],
        },
        testing_tools: ProjectDetails {
            title: "מרכז כלי בדיקה",
            description: "ערכת כלים מקיפה לבדיקות תוכנה מודרניות ואבטחת איכות.",
            long_description: "מאגר מרכזי לכלי הבדיקה הטובים ביותר, מונעי AI וידניים. למדו על בדיקות מקצה לקצה, בדיקות יחידה ומסגרות אוטומציה להבטחת תוכנה באיכות גבוהה.",
            features: &[
                "יצירת בדיקות מונעת AI",
                "אוטומציה מקצה לקצה",
                "בדיקות ביצועים",
                "לוח מדדי איכות",
            ],
        },
        agentic_stack: ProjectDetails {
            title: "מומחה Agentic Stack",
            description: "בניית סוכני AI אוטונומיים ותהליכי עבודה אינטליגנטיים מרובי סוכנים.",
            long_description: "למדו לבנות מערכות בינה מלאכותית מורכבות שיכולות להסיק, לתכנן ולבצע משימות באופן אוטונומי.",
            features: &[
                "ניהול סוכנים (Orchestration)",
                "קריאה לכלים ופונקציות",
                "ניהול זיכרון והקשר",
                "תהליכי עבודה אוטונומיים",
            ],
        },
        networking: ProjectDetails {
            title: "למד רשתות",
            description: "צלילה עמוקה לפרוטוקולי רשת, ארכיטקטורה ויסודות אבטחת מידע.",
            long_description: "שלטו באבני היסוד של האינטרנט.",
            features: &[
                "מודלי TCP/IP ו-OSI",
                "תת-רשתות וכתובות",
                "פרוטוקולי ניתוב (OSPF, BGP)",
                "יסודות אבטחת רשת",
            ],
        },
        ai_tools: ProjectDetails {
            title: "כלי פיתוח AI",
            description: "שחרר את כוחו של הפיתוח בסיוע בינה מלאכותית.",
            long_description: "למדו כיצד לנצל כלי בינה מלאכותית מתקדמים לכתיבת קוד נקי ומהיר יותר.",
            features: &[
                "הנדסת פרומפטים ל-AI",
                "Refactoring אוטומטי",
                "אסטרטגיות יצירת קוד",
                "דיבאגינג עם AI",
            ],
        },
        sbc: ProjectDetails {
            title: "מומחה מחשבי לוח יחיד",
            description: "חקור את עולם מחשבי הלוח היחיד (SBC) כמו Raspberry Pi ו-Arduino.",
            long_description: "צללו לעולם החומרה עם מחשבי לוח יחיד.",
            features: &[
                "תכנות GPIO",
                "אינטגרציה עם חיישנים",
                "קישוריות IoT",
                "לינוקס למערכות משובצות",
            ],
        },
        python: ProjectDetails {
            title: "שלוט בפייתון",
            description: "מדריך מקיף לתכנות בפייתון, מהיסודות ועד לנושאים מתקדמים.",
            long_description: "מה-'Hello World' הראשון שלכם ועד פרויקטים מורכבים במדעי הנתונים.",
            features: &[
                "מבני נתונים ואלגוריתמים",
                "תכנות מונחה עצמים",
                "AsyncIO ומקביליות",
                "פריימוורקים ל-Web (FastAPI/Django)",
            ],
        },
        machine_learning: ProjectDetails {
            title: "מאסטר בקורס למידת מכונה",
            description: "שלטו ביסודות של למידת מכונה ו-Edge AI.",
            long_description: "צלילה עמוקה לעולם של למידת מכונה.",
            features: &[
                "רשתות עצביות",
                "פריסת Edge AI",
                "עיבוד מקדים של נתונים",
                "TensorFlow & PyTorch",
            ],
        },
        design_patterns: ProjectDetails {
            title: "תבניות עיצוב",
            description: "שלוט בארכיטקטורת תוכנה עם תבניות עיצוב חיוניות.",
            long_description: "חקור את אבני היסוד של הנדסת תוכנה.",
            features: &[
                "תבניות יצירה",
                "תבניות מבנה",
                "תבניות התנהגות",
                "עקרונות SOLID",
            ],
        },
    },
};
