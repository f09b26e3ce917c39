//! System prompt templates.
//!
//! Two fixed templates: tagged markup for writing and analysis work,
//! markdown for everything else. Rendering is a pure function of the profile.

use serde::Serialize;
use std::fmt;

use crate::domain::profile::{UserProfile, WorkStyle};

/// Temperature written into the prompt for precision-minded learners.
pub const PRECISION_TEMPERATURE: f64 = 0.3;

/// Temperature for creativity-minded learners.
pub const CREATIVE_TEMPERATURE: f64 = 0.8;

/// Temperature when neither preference is set.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Above this temperature the markdown template asks for high creativity.
pub const HIGH_CREATIVITY_ABOVE: f64 = 0.6;

/// Security scores above this add the redaction clauses.
pub const SECURITY_CLAUSE_ABOVE: f64 = 50.0;

/// Which template produced a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptFormat {
    /// `<system_instruction>` tagged block.
    StructuredMarkup,
    /// `### System Instruction` markdown document.
    Markdown,
}

/// Rendered system prompt ready for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemPrompt {
    pub format: PromptFormat,
    pub temperature: f64,
    pub text: String,
}

impl SystemPrompt {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SystemPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Temperature implied by the profile's preferences. Precision wins.
pub fn temperature(profile: &UserProfile) -> f64 {
    if profile.prefers_precision() {
        PRECISION_TEMPERATURE
    } else if profile.prefers_creativity() {
        CREATIVE_TEMPERATURE
    } else {
        DEFAULT_TEMPERATURE
    }
}

/// Renders the system prompt for a finished profile.
pub fn generate_system_prompt(profile: &UserProfile) -> SystemPrompt {
    let temp = temperature(profile);
    if profile.primary_use_case().prefers_structured_markup() {
        SystemPrompt {
            format: PromptFormat::StructuredMarkup,
            temperature: temp,
            text: render_markup(profile, temp),
        }
    } else {
        SystemPrompt {
            format: PromptFormat::Markdown,
            temperature: temp,
            text: render_markdown(profile, temp),
        }
    }
}

fn wants_security_clause(profile: &UserProfile) -> bool {
    profile.security_conscious().value() > SECURITY_CLAUSE_ABOVE
}

fn render_markup(profile: &UserProfile, temp: f64) -> String {
    let security = if wants_security_clause(profile) {
        "<security>NEVER output PII or internal identifiers. Use placeholders.</security>"
    } else {
        ""
    };
    let tone = if profile.work_style() == WorkStyle::Structured {
        "Formal, precise, and concise."
    } else {
        "Conversational and engaging."
    };

    format!(
        "<system_instruction>
  <user_profile>
    <name>{name}</name>
    <role>{role}</role>
    <style>{style}</style>
  </user_profile>

  <operational_parameters>
    <temperature>{temp}</temperature>
    <risk_tolerance>{risk}</risk_tolerance>
  </operational_parameters>

  <critical_instructions>
    {security}
    <format>Use clear markdown headers and bullet points.</format>
    <tone>{tone}</tone>
  </critical_instructions>
</system_instruction>",
        name = profile.name(),
        role = profile.primary_use_case().label(),
        style = profile.work_style(),
        temp = temp,
        risk = profile.risk_tolerance(),
        security = security,
        tone = tone,
    )
}

fn render_markdown(profile: &UserProfile, temp: f64) -> String {
    let tone = if profile.work_style() == WorkStyle::Structured {
        "Professional and brief"
    } else {
        "Friendly and expansive"
    };
    let creativity = if temp > HIGH_CREATIVITY_ABOVE {
        "High (Think outside the box)"
    } else {
        "Low (Stick to facts)"
    };
    let security = if wants_security_clause(profile) {
        "- REDACT all personal identifiable information.\n- Do not speculate on legal/medical advice."
    } else {
        "- Maintain standard safety protocols."
    };

    format!(
        "### System Instruction

**Role:** You are an expert assistant for {name}, specializing in {label}.

**Style Guide:**
- Tone: {tone}.
- Creativity Level: {creativity}.

**Security Protocols:**
{security}

**Output Preferences:**
- Always structure answers with clear headings.
- If unsure, ask clarifying questions before answering.",
        name = profile.name(),
        label = profile.primary_use_case().label(),
        tone = tone,
        creativity = creativity,
        security = security,
    )
}
