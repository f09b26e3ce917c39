//! Summary cards shown next to the generated prompt.

use serde::Serialize;

use crate::domain::profile::{UseCase, UserProfile};

/// Security scores above this are labelled "Strict".
pub const STRICT_SECURITY_ABOVE: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub model: &'static str,
    pub temperature_range: &'static str,
    pub security_level: &'static str,
}

impl Recommendations {
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self {
            model: if profile.primary_use_case() == UseCase::Coding {
                "GPT-4o / Claude 3.5 Sonnet"
            } else {
                "Claude 3.5 Sonnet"
            },
            temperature_range: if profile.prefers_precision() {
                "0.2 - 0.4"
            } else {
                "0.7 - 0.9"
            },
            security_level: if profile.security_conscious().value() > STRICT_SECURITY_ABOVE {
                "Strict"
            } else {
                "Standard"
            },
        }
    }
}
