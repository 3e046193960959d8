//! Request text for description generation.

/// Persona and output format given to the model on every call.
pub const SYSTEM_INSTRUCTION: &str = "You are a highly skilled automotive copywriter specializing in Honda vehicles for the Indonesian market. \
Your task is to generate enthusiastic, persuasive, and informative promotional descriptions. \
Ensure the language is engaging, highlights unique selling points, and appeals to the likely target audience for each specific model. \
Focus on benefits rather than just listing features. Maintain a professional yet exciting tone. \
The response should be in Bahasa Indonesia. \
Format the output as a few paragraphs of text. Do not use markdown like headings or bullet points in your main description text, just flowing paragraphs.";

pub(crate) const TEMPERATURE: f32 = 0.7;
pub(crate) const TOP_K: u32 = 40;
pub(crate) const TOP_P: f32 = 0.95;

/// User turn for `subject_name` with its per-item instruction.
#[must_use]
pub fn description_prompt(subject_name: &str, instruction_prompt: &str) -> String {
    format!("Model: {subject_name}\n\nInstruction: {instruction_prompt}\n\nGenerate the description now:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_layout() {
        assert_eq!(
            description_prompt("Honda WR-V", "Tonjolkan ground clearance."),
            "Model: Honda WR-V\n\nInstruction: Tonjolkan ground clearance.\n\nGenerate the description now:"
        );
    }

    #[test]
    fn system_instruction_asks_for_plain_indonesian_paragraphs() {
        assert!(SYSTEM_INSTRUCTION.contains("Bahasa Indonesia"));
        assert!(SYSTEM_INSTRUCTION.contains("flowing paragraphs"));
        assert!(!SYSTEM_INSTRUCTION.contains('\n'));
    }
}
