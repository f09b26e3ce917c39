//! ModuleId - the five lessons, in course order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;
use crate::domain::profile::Track;

/// One of the five learning modules.
///
/// Serialized as its number (1..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ModuleId {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl ModuleId {
    /// First module of the course.
    pub const FIRST: ModuleId = ModuleId::One;

    /// Last module; completing it leads to the final screen.
    pub const LAST: ModuleId = ModuleId::Five;

    /// Returns all modules in order.
    pub fn all() -> &'static [ModuleId] {
        &[
            ModuleId::One,
            ModuleId::Two,
            ModuleId::Three,
            ModuleId::Four,
            ModuleId::Five,
        ]
    }

    /// 1-based module number.
    pub fn number(&self) -> u8 {
        match self {
            ModuleId::One => 1,
            ModuleId::Two => 2,
            ModuleId::Three => 3,
            ModuleId::Four => 4,
            ModuleId::Five => 5,
        }
    }

    /// 0-based position (index into the key array).
    pub fn index(&self) -> usize {
        usize::from(self.number() - 1)
    }

    /// The module after this one, `None` for the last.
    pub fn next(&self) -> Option<ModuleId> {
        match self {
            ModuleId::One => Some(ModuleId::Two),
            ModuleId::Two => Some(ModuleId::Three),
            ModuleId::Three => Some(ModuleId::Four),
            ModuleId::Four => Some(ModuleId::Five),
            ModuleId::Five => None,
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModuleId::One => "How AI Works",
            ModuleId::Two => "Parameters & Control",
            ModuleId::Three => "The CRISP Framework",
            ModuleId::Four => "Web-Grounding",
            ModuleId::Five => "Data Security",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            ModuleId::One => "The Prediction Engine",
            ModuleId::Two => "Consistency vs. Creativity",
            ModuleId::Three => "Structure Your Thoughts",
            ModuleId::Four => "Static vs. Dynamic Knowledge",
            ModuleId::Five => "The No-Go List",
        }
    }

    /// Learning-theory note shown beneath each lesson.
    pub fn design_note(&self) -> &'static str {
        match self {
            ModuleId::One => "Cognitive Load Theory: Breaking down the abstract 'token' concept into concrete cost/capacity units to reduce intrinsic load.",
            ModuleId::Two => "Kolb's Experiential Learning: Concrete Experience (simulator) precedes Reflective Observation (theory).",
            ModuleId::Three => "Scaffolding (Vygotsky): Providing a rigid framework (CRISP) that can be removed as learner autonomy increases.",
            ModuleId::Four => "Constructivism: Learners construct understanding by comparing divergent outputs (grounded vs non-grounded).",
            ModuleId::Five => "Situated Learning: Presenting security protocols within authentic, high-stakes business narratives.",
        }
    }

    /// Track-specific aside for this lesson, if any.
    ///
    /// Practitioners see the plain lesson. Foundation learners get a key
    /// takeaway in the first three modules; advanced learners get a deep dive
    /// in every module.
    pub fn callout(&self, track: Track) -> Option<TrackCallout> {
        match (track, self) {
            (Track::Practitioner, _) => None,
            (Track::Foundation, ModuleId::One) => Some(TrackCallout::takeaway(
                "Think of tokens like a budget. Longer inputs cost more and use up the model's \"memory.\" \
                 When your document is too long, the AI might forget your instructions or make things up. \
                 Keep prompts focused and concise when possible.",
            )),
            (Track::Foundation, ModuleId::Two) => Some(TrackCallout::takeaway(
                "Temperature is like a \"creativity dial.\" Turn it down (0.0-0.3) when you need consistent, factual responses. \
                 Turn it up (0.7-1.0) when you want variety and creative ideas. There's no right answer; it depends on your task.",
            )),
            (Track::Foundation, ModuleId::Three) => Some(TrackCallout::takeaway(
                "CRISP is a checklist: Context (background), Role (who should the AI be), \
                 Instruction (what to do), Specs (constraints), Proof (examples). \
                 You don't need all five every time, but checking each one helps you write better prompts.",
            )),
            (Track::Foundation, _) => None,
            (Track::Advanced, ModuleId::One) => Some(TrackCallout::deep_dive(
                "Advanced: Tokenization Deep Dive",
                "Different models use different tokenizers. GPT-4 uses cl100k_base (~100k vocabulary), \
                 while Claude uses a custom BPE tokenizer. This means the same text can have different token counts across models. \
                 For precise cost estimation, use the provider's official tokenizer library (e.g., tiktoken for OpenAI). \
                 Context window management becomes critical when building RAG systems or multi-turn agents.",
            )),
            (Track::Advanced, ModuleId::Two) => Some(TrackCallout::deep_dive(
                "Advanced: Beyond Temperature",
                "Temperature is just one sampling parameter. Top-P (nucleus sampling) limits the token pool to the \
                 top probability mass. Top-K limits to the top K tokens. Frequency/Presence penalties reduce repetition. \
                 For production systems, consider using temperature=0 with \
                 seed parameters for reproducible outputs in testing and debugging.",
            )),
            (Track::Advanced, ModuleId::Three) => Some(TrackCallout::deep_dive(
                "Advanced: Prompt Chaining & Decomposition",
                "CRISP works for single prompts. For complex workflows, use prompt chaining: break tasks into \
                 sequential steps where each prompt's output feeds the next. This reduces hallucination and improves control. \
                 Consider meta-prompting: asking the model to generate its own prompts, then executing those. \
                 Tools like LangChain and DSPy formalize these patterns for production systems.",
            )),
            (Track::Advanced, ModuleId::Four) => Some(TrackCallout::deep_dive(
                "Advanced: RAG vs. Web Grounding",
                "Web grounding searches public internet. RAG (Retrieval-Augmented Generation) searches your own documents. \
                 Enterprise deployments often combine both: RAG for internal knowledge bases, web grounding for market/regulatory updates. \
                 The key is knowing which source of truth applies to your query.",
            )),
            (Track::Advanced, ModuleId::Five) => Some(TrackCallout::deep_dive(
                "Advanced: Data Classification Frameworks",
                "Enterprise AI policies typically define data tiers: Public (press releases), \
                 Internal (org charts), Confidential (financials), and \
                 Restricted (PII, M&A). Map each tier to permitted AI tools. \
                 Consider implementing prompt guardrails: automated scanning that blocks \
                 sensitive patterns (credit card regex, email formats) before they reach the model.",
            )),
        }
    }
}

/// A track-specific aside rendered with a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackCallout {
    pub heading: &'static str,
    pub body: &'static str,
}

impl TrackCallout {
    fn takeaway(body: &'static str) -> Self {
        Self {
            heading: "Key Takeaway",
            body,
        }
    }

    fn deep_dive(heading: &'static str, body: &'static str) -> Self {
        Self { heading, body }
    }
}

impl TryFrom<u8> for ModuleId {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ModuleId::One),
            2 => Ok(ModuleId::Two),
            3 => Ok(ModuleId::Three),
            4 => Ok(ModuleId::Four),
            5 => Ok(ModuleId::Five),
            other => Err(ValidationError::out_of_range("module_id", 1, 5, i32::from(other))),
        }
    }
}

impl From<ModuleId> for u8 {
    fn from(module: ModuleId) -> Self {
        module.number()
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MODULE 0{}", self.number())
    }
}
