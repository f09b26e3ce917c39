//! Temperature simulator (module 2).

use serde::Serialize;

use super::CaseStudy;
use crate::domain::foundation::ValidationError;

/// Which sample texts the simulator shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulatorMode {
    /// Generic product copy.
    #[default]
    Neutral,
    Case(CaseStudy),
}

/// Coarse band the temperature falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureTier {
    Low,
    Medium,
    High,
}

/// What the simulated model "says" at a given temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulatorOutput {
    pub tier: TemperatureTier,
    pub label: &'static str,
    pub description: &'static str,
    pub sample: &'static str,
}

const fn output(
    tier: TemperatureTier,
    label: &'static str,
    description: &'static str,
    sample: &'static str,
) -> SimulatorOutput {
    SimulatorOutput {
        tier,
        label,
        description,
        sample,
    }
}

const FINLEY_OUTPUTS: [SimulatorOutput; 3] = [
    output(
        TemperatureTier::Low,
        "SAFE (COMPLIANT)",
        "Ideal for Legal/Compliance",
        "Pursuant to Article 5 of the GDPR, personal data must be processed lawfully, fairly, and in a transparent manner. Non-compliance may result in fines.",
    ),
    output(
        TemperatureTier::Medium,
        "BALANCED",
        "Standard Business Writing",
        "GDPR Article 5 requires that we process data lawfully and transparently. We should ensure our systems are updated to reflect these standards.",
    ),
    output(
        TemperatureTier::High,
        "RISKY (HALLUCINATION)",
        "Unsafe for Compliance",
        "The GDPR suggests we should be pretty open with data. Article 5 is mostly about vibes and making sure customers feel good about their privacy.",
    ),
];

const BRIGHTCART_OUTPUTS: [SimulatorOutput; 3] = [
    output(
        TemperatureTier::Low,
        "BORING",
        "Too rigid for marketing",
        "This is a pair of socks. They are made of wool. They are blue. Buy them for $10.",
    ),
    output(
        TemperatureTier::Medium,
        "BALANCED",
        "Good Marketing Copy",
        "Step into comfort with our Merino Wool socks. Designed for the trail, built for durability.",
    ),
    output(
        TemperatureTier::High,
        "CREATIVE",
        "Viral/Unique",
        "Feet? Happy. Trail? Conquered. These aren't just socks, they're a hug for your toes on the road to glory.",
    ),
];

const NEUTRAL_OUTPUTS: [SimulatorOutput; 3] = [
    output(
        TemperatureTier::Low,
        "FACTUAL",
        "High Precision, Low Creativity",
        "These wireless earbuds feature active noise cancellation, 8-hour battery life, and Bluetooth 5.2 connectivity. Available in black and white.",
    ),
    output(
        TemperatureTier::Medium,
        "BALANCED",
        "Standard Mix",
        "Experience sound like never before with our new wireless earbuds. With 8 hours of play and silencing noise cancellation, your music comes first.",
    ),
    output(
        TemperatureTier::High,
        "CREATIVE",
        "High Randomness",
        "Freedom has a new sound. Slip into audio nirvana where the world fades away and only the rhythm remains. Pure, unadulterated sonic bliss.",
    ),
];

impl SimulatorMode {
    /// Upper bounds (exclusive) of the low and medium tiers.
    fn cutoffs(&self) -> (f64, f64) {
        match self {
            SimulatorMode::Neutral => (0.4, 0.8),
            SimulatorMode::Case(_) => (0.3, 0.7),
        }
    }

    fn outputs(&self) -> &'static [SimulatorOutput; 3] {
        match self {
            SimulatorMode::Neutral => &NEUTRAL_OUTPUTS,
            SimulatorMode::Case(CaseStudy::Finley) => &FINLEY_OUTPUTS,
            SimulatorMode::Case(CaseStudy::BrightCart) => &BRIGHTCART_OUTPUTS,
        }
    }

    /// Sample output for `temperature` in this mode.
    pub fn sample_at(&self, temperature: f64) -> SimulatorOutput {
        let (low, medium) = self.cutoffs();
        let outputs = self.outputs();
        if temperature < low {
            outputs[0]
        } else if temperature < medium {
            outputs[1]
        } else {
            outputs[2]
        }
    }
}

/// Slider plus scenario picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSimulator {
    temperature: f64,
    mode: SimulatorMode,
}

impl Default for TemperatureSimulator {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            mode: SimulatorMode::Neutral,
        }
    }
}

impl TemperatureSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn mode(&self) -> SimulatorMode {
        self.mode
    }

    /// Moves the slider. Values outside 0.0..=1.0 are rejected.
    pub fn set_temperature(&mut self, temperature: f64) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&temperature) {
            return Err(ValidationError::invalid_format(
                "temperature",
                format!("must be between 0.0 and 1.0, got {}", temperature),
            ));
        }
        self.temperature = temperature;
        Ok(())
    }

    /// Switches to a case study and jumps to its showcase temperature
    /// (0.1 for Finley, 0.8 for BrightCart).
    pub fn select_case(&mut self, case: CaseStudy) {
        self.mode = SimulatorMode::Case(case);
        self.temperature = match case {
            CaseStudy::Finley => 0.1,
            CaseStudy::BrightCart => 0.8,
        };
    }

    pub fn output(&self) -> SimulatorOutput {
        self.mode.sample_at(self.temperature)
    }
}
