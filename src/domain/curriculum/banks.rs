//! Static question banks for the diagnostic and each module quiz.

use once_cell::sync::Lazy;

use super::{AnswerOption, ModuleId, Question};

fn question(id: &str, text: &str, options: &[(&str, &str, bool)], feedback: &str) -> Question {
    Question::unchecked(
        id,
        text,
        options
            .iter()
            .map(|(oid, otext, correct)| AnswerOption::new(*oid, *otext, *correct))
            .collect(),
        feedback,
    )
}

/// Placement questions asked once, before the first module.
pub static DIAGNOSTIC_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        question(
            "d1",
            "What is a 'token' in the context of Large Language Models?",
            &[
                ("a", "A cryptocurrency used to pay for API calls", false),
                ("b", "A fundamental unit of text (part of a word) the model processes", true),
                ("c", "An authentication key for security", false),
            ],
            "Tokens are the building blocks of text for LLMs, roughly 4 characters or 0.75 words.",
        ),
        question(
            "d2",
            "Increasing the 'Temperature' parameter typically results in:",
            &[
                ("a", "Faster response times", false),
                ("b", "More predictable and deterministic outputs", false),
                ("c", "More random and creative outputs", true),
            ],
            "Higher temperature adds randomness, leading to more creative (but less deterministic) results.",
        ),
        question(
            "d3",
            "What is 'Hallucination' in AI?",
            &[
                ("a", "When the AI generates confident but factually incorrect information", true),
                ("b", "When the AI refuses to answer a question", false),
                ("c", "When the AI generates images instead of text", false),
            ],
            "Hallucinations occur when the model predicts tokens that look plausible but aren't factually grounded.",
        ),
        question(
            "d4",
            "Which approach helps most with ensuring specific output formats (like JSON)?",
            &[
                ("a", "Being polite to the model", false),
                ("b", "Providing few-shot examples or specific system instructions", true),
                ("c", "Lowering the context window", false),
            ],
            "Examples (few-shot) and clear schemas guide the model's structural capabilities effectively.",
        ),
        question(
            "d5",
            "Why is it risky to put client names into a public LLM?",
            &[
                ("a", "The model might misspell them", false),
                ("b", "Data may be used for training, potentially leaking confidentiality", true),
                ("c", "It costs more tokens", false),
            ],
            "Public models may use inputs for training, creating a risk of data leakage.",
        ),
    ]
});

static MODULE_1_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        question(
            "m1q1",
            "If you have a 10,000 word document, roughly how many tokens is that?",
            &[
                ("a", "~1,000 tokens", false),
                ("b", "~13,000 tokens", true),
                ("c", "~50,000 tokens", false),
            ],
            "1 word is approximately 1.3 tokens. 10,000 * 1.3 = 13,000.",
        ),
        question(
            "m1q2",
            "Why does 'context window' matter for business use cases?",
            &[
                ("a", "It determines how fast the model generates text", false),
                ("b", "It limits how much information (documents, history) the model can remember at once", true),
                ("c", "It determines the monthly cost of the subscription", false),
            ],
            "When the context window is full, the model 'forgets' the earliest parts of the conversation.",
        ),
        question(
            "m1q3",
            "Which generates more tokens?",
            &[
                ("a", "10 pages of complex legal code", true),
                ("b", "10 pages of simple children's story", false),
            ],
            "Actually, code and complex technical language often use more tokens per character due to unique syntax.",
        ),
    ]
});

static MODULE_2_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        question(
            "m2q1",
            "For a compliance report where accuracy is critical, what temperature should you use?",
            &[
                ("a", "High (0.8 - 1.0)", false),
                ("b", "Low (0.0 - 0.2)", true),
                ("c", "Medium (0.5)", false),
            ],
            "Low temperature minimizes randomness, ideal for tasks requiring precision.",
        ),
        question(
            "m2q2",
            "If you want the model to brainstorm 50 unique marketing slogans, you should:",
            &[
                ("a", "Increase temperature", true),
                ("b", "Decrease temperature", false),
            ],
            "High temperature encourages diversity in token selection, preventing repetitive or generic answers.",
        ),
        question(
            "m2q3",
            "What happens if Temperature is set to 0?",
            &[
                ("a", "The model stops working", false),
                ("b", "The model becomes almost fully deterministic (same input = same output)", true),
            ],
            "Zero temperature makes the model always choose the most likely next token.",
        ),
    ]
});

static MODULE_3_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        question(
            "m3q1",
            "In the CRISP framework, what does 'R' stand for?",
            &[
                ("a", "Reasoning", false),
                ("b", "Role", true),
                ("c", "Review", false),
            ],
            "R stands for Role - giving the AI a specific persona to adopt.",
        ),
        question(
            "m3q2",
            "Which prompt is better structured?",
            &[
                ("a", "Write an email about the project update.", false),
                ("b", "Act as a PM. Write a brief update email for the Client regarding Project X. Tone: Professional.", true),
            ],
            "The second prompt provides Role, Context, and Constraints (Tone/Length).",
        ),
        question(
            "m3q3",
            "What is 'Few-Shot' prompting?",
            &[
                ("a", "Asking the model only a few times", false),
                ("b", "Providing a few examples (shots) of the desired output in the prompt", true),
            ],
            "Examples are powerful 'shots' that guide the model's pattern matching.",
        ),
    ]
});

static MODULE_4_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        question(
            "m4q1",
            "Which task specifically requires 'Web-Grounding'?",
            &[
                ("a", "Summarizing a text you pasted", false),
                ("b", "Checking today's stock price", true),
                ("c", "Writing a poem about cats", false),
            ],
            "Models have a knowledge cutoff. Real-time data like stock prices requires web access.",
        ),
        question(
            "m4q2",
            "What is a potential downside of web-grounding?",
            &[
                ("a", "It makes the model less creative", false),
                ("b", "It can be slower and occasionally cite incorrect sources", true),
            ],
            "Retrieval takes time, and the model relies on the quality of search results found.",
        ),
        question(
            "m4q3",
            "If a model says 'I don't have access to real-time data', it means:",
            &[
                ("a", "It is broken", false),
                ("b", "It is relying solely on its training data", true),
            ],
            "Standard models are frozen in time based on when they were trained.",
        ),
    ]
});

static MODULE_5_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        question(
            "m5q1",
            "Is it safe to paste a customer's credit card number if you ask the AI to delete it after?",
            &[
                ("a", "Yes, if the prompt is secure", false),
                ("b", "No, never paste sensitive financial data", true),
                ("c", "Only if using a paid account", false),
            ],
            "Never share sensitive financial data. Once sent, you cannot guarantee it hasn't been logged.",
        ),
        question(
            "m5q2",
            "How should you handle client names in prompts?",
            &[
                ("a", "Use them freely", false),
                ("b", "Anonymize them (e.g., Client A, Company X)", true),
            ],
            "Anonymization protects confidentiality while still allowing the AI to do the work.",
        ),
        question(
            "m5q3",
            "Which data is generally safe to share with public AI?",
            &[
                ("a", "Internal salary spreadsheets", false),
                ("b", "Publicly available press releases", true),
            ],
            "Public data is already out there, so the risk of leakage is minimal.",
        ),
    ]
});

/// Returns the diagnostic question set.
pub fn diagnostic_questions() -> &'static [Question] {
    &DIAGNOSTIC_QUESTIONS
}

/// Returns the quiz for a module.
pub fn quiz_questions(module: ModuleId) -> &'static [Question] {
    match module {
        ModuleId::One => &MODULE_1_QUESTIONS,
        ModuleId::Two => &MODULE_2_QUESTIONS,
        ModuleId::Three => &MODULE_3_QUESTIONS,
        ModuleId::Four => &MODULE_4_QUESTIONS,
        ModuleId::Five => &MODULE_5_QUESTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_banks() -> Vec<&'static [Question]> {
        let mut banks = vec![diagnostic_questions()];
        banks.extend(ModuleId::all().iter().map(|m| quiz_questions(*m)));
        banks
    }

    #[test]
    fn every_bank_question_is_valid() {
        for bank in all_banks() {
            for q in bank {
                q.validate().unwrap_or_else(|e| panic!("{}: {}", q.id(), e));
            }
        }
    }

    #[test]
    fn question_ids_are_unique_across_banks() {
        let mut ids = HashSet::new();
        for bank in all_banks() {
            for q in bank {
                assert!(ids.insert(q.id().to_string()), "duplicate id {}", q.id());
            }
        }
    }

    #[test]
    fn bank_sizes() {
        assert_eq!(diagnostic_questions().len(), 5);
        for module in ModuleId::all() {
            assert_eq!(quiz_questions(*module).len(), 3);
        }
    }

    #[test]
    fn diagnostic_answer_key() {
        let key: Vec<_> = diagnostic_questions()
            .iter()
            .map(|q| q.correct_option().unwrap().id.as_str())
            .collect();
        assert_eq!(key, vec!["b", "c", "a", "b", "b"]);
    }

    #[test]
    fn module_answer_keys() {
        let key = |m: ModuleId| -> Vec<String> {
            quiz_questions(m)
                .iter()
                .map(|q| q.correct_option().unwrap().id.clone())
                .collect()
        };
        assert_eq!(key(ModuleId::One), ["b", "b", "a"]);
        assert_eq!(key(ModuleId::Two), ["b", "a", "b"]);
        assert_eq!(key(ModuleId::Three), ["b", "b", "b"]);
        assert_eq!(key(ModuleId::Four), ["b", "b", "b"]);
        assert_eq!(key(ModuleId::Five), ["b", "b", "b"]);
    }
}
