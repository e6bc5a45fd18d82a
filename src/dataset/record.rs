#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRecord {
    pub category: String,
    pub difficulty: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub solution: String,
    pub played: bool,
}

impl QuestionRecord {
    pub fn new(
        category: String,
        difficulty: u32,
        prompt: String,
        options: Vec<String>,
        solution: String,
    ) -> Self {
        Self {
            category,
            difficulty,
            prompt,
            options,
            solution,
            played: false,
        }
    }

    /// Board-wide key. Two records sharing category and difficulty collide,
    /// which the parser resolves by keeping the later row.
    pub fn id(&self) -> String {
        format!("{}-{}", self.category, self.difficulty)
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, difficulty: u32) -> QuestionRecord {
        QuestionRecord::new(
            category.to_string(),
            difficulty,
            "prompt".to_string(),
            Vec::new(),
            "solution".to_string(),
        )
    }

    #[test]
    fn test_id_joins_category_and_difficulty() {
        assert_eq!(record("Geographie", 100).id(), "Geographie-100");
        assert_eq!(record("Sport", 400).id(), "Sport-400");
    }

    #[test]
    fn test_new_record_starts_unplayed() {
        assert!(!record("Musik", 200).played);
    }

    #[test]
    fn test_has_options() {
        let mut question = record("Musik", 200);
        assert!(!question.has_options());
        question.options.push("Mozart".to_string());
        assert!(question.has_options());
    }
}
