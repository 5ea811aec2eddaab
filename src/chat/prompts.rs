//! Prompt and system-message tables.
//!
//! A pure data table over the closed (Style, Language) space. Templates
//! substitute the user's topic and the current daf; nothing here touches
//! I/O or state.

use crate::types::{DafRef, Language, Style};

/// System message for a (style, language) pair.
pub fn system_message(style: Style, language: Language) -> &'static str {
    match (style, language) {
        (Style::Main, Language::En) => {
            "You are an expert study partner with deep knowledge of the Talmud. \
             You explain Talmudic topics clearly, using relevant sources and examples. \
             Tailor your responses to the questioner's level of knowledge."
        }
        (Style::Main, Language::He) => {
            "אתה חברותא מומחה עם ידע מעמיק בתלמוד. אתה מסביר נושאים תלמודיים בבהירות, \
             תוך שימוש במקורות ודוגמאות רלוונטיות. התאם את התשובות שלך לרמת הידע של השואל."
        }
        (Style::Traditional, Language::En) => {
            "You are an expert study partner with deep knowledge of the Talmud. \
             You explain Talmudic topics clearly, using relevant sources and examples. \
             Focus on the traditional explanation of the text."
        }
        (Style::Traditional, Language::He) => {
            "אתה חברותא מומחה עם ידע מעמיק בתלמוד. אתה מסביר נושאים תלמודיים בבהירות, \
             תוך שימוש במקורות ודוגמאות רלוונטיות. התמקד בהסבר המסורתי של הטקסט."
        }
        (Style::Modern, Language::En) => {
            "You are an expert study partner with deep knowledge of the Talmud and its \
             modern implications. You explain how Talmudic topics are relevant to modern life."
        }
        (Style::Modern, Language::He) => {
            "אתה חברותא מומחה עם ידע מעמיק בתלמוד ובהשלכותיו המודרניות. \
             אתה מסביר כיצד נושאים תלמודיים רלוונטיים לחיים המודרניים."
        }
    }
}

/// Render the user prompt for a (style, language) pair.
pub fn prompt(style: Style, message: &str, daf: &DafRef, language: Language) -> String {
    match (style, language) {
        (Style::Main, Language::En) => format!(
            "Topic: \"{message}\"\n\
             Tractate: {masechet}, Daf: {daf}\n\n\
             Instructions:\n\
             1. Explain the topic as it appears in the Gemara.\n\
             2. Mention relevant sources and opinions of sages.\n\
             3. If the topic is not directly related to the current daf, explain the connection or suggest a close topic from the daf.\n\
             4. Use clear and understandable language.\n\n\
             Response:",
            masechet = daf.masechet,
            daf = daf.daf,
        ),
        (Style::Main, Language::He) => format!(
            "נושא: \"{message}\"\n\
             מסכת: {masechet}, דף: {daf}\n\n\
             הנחיות:\n\
             1. הסבר את הנושא כפי שהוא מופיע בגמרא.\n\
             2. ציין מקורות ודעות רלוונטיות של חכמים.\n\
             3. אם הנושא אינו קשור ישירות לדף הנוכחי, הסבר את הקשר או הצע נושא קרוב מהדף.\n\
             4. השתמש בשפה ברורה ומובנת.\n\n\
             תשובה:",
            masechet = daf.masechet,
            daf = daf.daf,
        ),
        (Style::Traditional, Language::En) => format!(
            "Topic: \"{message}\"\n\
             Tractate: {masechet}, Daf: {daf}\n\n\
             Instructions:\n\
             1. Explain the topic as it appears in the Gemara, using traditional interpretation.\n\
             2. Mention relevant sources and opinions of sages.\n\
             3. Emphasize important halachic concepts and principles.\n\
             4. Use clear and understandable language.\n\n\
             Traditional Explanation:",
            masechet = daf.masechet,
            daf = daf.daf,
        ),
        (Style::Traditional, Language::He) => format!(
            "נושא: \"{message}\"\n\
             מסכת: {masechet}, דף: {daf}\n\n\
             הנחיות:\n\
             1. הסבר את הנושא כפי שהוא מופיע בגמרא, תוך שימוש בפרשנות מסורתית.\n\
             2. ציין מקורות ודעות רלוונטיות של חכמים.\n\
             3. הדגש מושגים ועקרונות הלכתיים חשובים.\n\
             4. השתמש בשפה ברורה ומובנת.\n\n\
             הסבר מסורתי:",
            masechet = daf.masechet,
            daf = daf.daf,
        ),
        (Style::Modern, Language::En) => format!(
            "Topic: \"{message}\"\n\
             Tractate: {masechet}, Daf: {daf}\n\n\
             Instructions:\n\
             1. Briefly explain the modern significance of the topic (up to 50 words).\n\
             2. Address ethical, social, or practical implications in our time.\n\
             3. If possible, give a modern example of the Talmudic principle.\n\
             4. Use clear language relevant to a modern audience.\n\n\
             Modern Significance:",
            masechet = daf.masechet,
            daf = daf.daf,
        ),
        (Style::Modern, Language::He) => format!(
            "נושא: \"{message}\"\n\
             מסכת: {masechet}, דף: {daf}\n\n\
             הנחיות:\n\
             1. הסבר בקצרה את המשמעות המודרנית של הנושא (עד 50 מילים).\n\
             2. התייחס להשלכות אתיות, חברתיות או מעשיות בימינו.\n\
             3. אם אפשר, תן דוגמה מודרנית לעיקרון התלמודי.\n\
             4. השתמש בשפה ברורה ורלוונטית לקהל מודרני.\n\n\
             משמעות מודרנית:",
            masechet = daf.masechet,
            daf = daf.daf,
        ),
    }
}

/// System message for popular-topics generation.
pub fn topics_system_message() -> &'static str {
    "You are a Talmud expert. Provide accurate main topics from the specified daf."
}

/// Prompt asking for three bilingual topics as JSON.
pub fn topics_prompt(masechet: &str, daf: u32) -> String {
    format!(
        "List 3 main topics discussed in {masechet} {daf} in both English and Hebrew. \
         Format as JSON: \
         {{ \"en\": [\"topic1\", \"topic2\", \"topic3\"], \"he\": [\"נושא1\", \"נושא2\", \"נושא3\"] }}"
    )
}
