use std::collections::BTreeMap;

use tracing::debug;

use crate::application::ReplySelector;
use crate::domain::DEFAULT_CONTEXT;

const GENERAL: &[&str] = &[
    "I understand you're asking about digital systems. Could you tell me which specific software or platform you need help with?",
    "That's a great digital literacy question! Let me help you step by step.",
    "I'd be happy to assist with your digital query. What specific task are you trying to accomplish?",
];

const DOCUMENTS: &[&str] = &[
    "For document help, I can guide you through formatting, saving, or sharing documents. What specifically do you need?",
    "Document processing can include Word, Google Docs, or PDF files. Which one are you working with?",
    "I can help with creating barangay reports, certificates, or announcements. What document are you working on?",
];

const SPREADSHEETS: &[&str] = &[
    "Spreadsheets are great for barangay data! Are you working with Excel, Google Sheets, or another program?",
    "I can help with formulas, data organization, or creating charts for barangay reports.",
    "For spreadsheets, we can work on budgeting, resident lists, or event planning. What do you need?",
];

const PRESENTATIONS: &[&str] = &[
    "Presentations help share barangay updates effectively. Are you using PowerPoint, Google Slides, or another tool?",
    "I can assist with slide design, content organization, or presentation delivery.",
    "Let me help you create engaging presentations for barangay meetings or community updates.",
];

const COMMUNICATION: &[&str] = &[
    "Digital communication tools can include email, messaging apps, or video calls. Which one do you need help with?",
    "I can guide you through setting up email, group chats, or video meetings for barangay coordination.",
    "Effective communication is key! Tell me which platform you're using and what you need to accomplish.",
];

const INTERNET: &[&str] = &[
    "Internet browsing and online services are essential. Are you having trouble with websites, searches, or online forms?",
    "I can help with safe browsing, finding information online, or using government portals.",
    "Let me assist you with internet-related tasks. What specific website or online service are you trying to use?",
];

/// Used only when neither the requested nor the default category has replies.
const LAST_RESORT: &str = "I'm having trouble reaching the assistant right now. Please try again shortly.";

/// Topic-keyed table of canned replies used when the chat endpoint fails.
#[derive(Debug, Clone)]
pub struct FallbackResponder {
    categories: BTreeMap<String, Vec<String>>,
    default_category: String,
}

impl FallbackResponder {
    pub fn new(default_category: impl Into<String>) -> Self {
        Self {
            categories: BTreeMap::new(),
            default_category: default_category.into(),
        }
    }

    /// The six built-in topics, with `general` as the default.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_CONTEXT)
            .with_category("general", GENERAL)
            .with_category("documents", DOCUMENTS)
            .with_category("spreadsheets", SPREADSHEETS)
            .with_category("presentations", PRESENTATIONS)
            .with_category("communication", COMMUNICATION)
            .with_category("internet", INTERNET)
    }

    pub fn with_category<S: AsRef<str>>(mut self, name: impl Into<String>, replies: &[S]) -> Self {
        self.categories.insert(
            name.into(),
            replies.iter().map(|r| r.as_ref().to_string()).collect(),
        );
        self
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Candidate replies for a context, or the default category's when the
    /// context is unknown or has no replies.
    pub fn candidates(&self, context: &str) -> &[String] {
        match self.categories.get(context) {
            Some(replies) if !replies.is_empty() => replies.as_slice(),
            _ => self
                .categories
                .get(&self.default_category)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }

    pub fn reply(&self, context: &str, selector: &mut dyn ReplySelector) -> &str {
        let candidates = self.candidates(context);
        if candidates.is_empty() {
            return LAST_RESORT;
        }

        let index = selector.pick(candidates.len()).min(candidates.len() - 1);
        debug!(
            "Fallback reply for context '{}': candidate {} of {}",
            context,
            index + 1,
            candidates.len()
        );
        &candidates[index]
    }
}

impl Default for FallbackResponder {
    fn default() -> Self {
        Self::builtin()
    }
}
