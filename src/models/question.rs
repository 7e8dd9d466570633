use serde::Deserialize;

pub const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// One multiple-choice trivia item as served by `/questions/random`.
///
/// Missing fields decode to empty strings. Anything else the API sends
/// (`id`, `correct_answer`, `tags`) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Question {
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
}

impl Question {
    /// The four options in display order A, B, C, D.
    pub fn options(&self) -> [&str; 4] {
        [
            self.option_a.as_str(),
            self.option_b.as_str(),
            self.option_c.as_str(),
            self.option_d.as_str(),
        ]
    }

    /// Options paired with their letter labels.
    pub fn labelled_options(&self) -> impl Iterator<Item = (char, &str)> {
        OPTION_LABELS.into_iter().zip(self.options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_api_record() {
        let json = r#"{
            "id": 7,
            "question": "Q1",
            "option_a": "A",
            "option_b": "B",
            "option_c": "C",
            "option_d": "D",
            "correct_answer": "B",
            "tags": "geo"
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.question, "Q1");
        assert_eq!(question.options(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let question: Question = serde_json::from_str(r#"{"question":"only text"}"#).unwrap();
        assert_eq!(question.question, "only text");
        assert_eq!(question.options(), ["", "", "", ""]);
    }

    #[test]
    fn test_labelled_options_order() {
        let question = Question {
            question: "q".to_string(),
            option_a: "one".to_string(),
            option_b: "two".to_string(),
            option_c: "three".to_string(),
            option_d: "four".to_string(),
        };
        let labelled: Vec<(char, &str)> = question.labelled_options().collect();
        assert_eq!(
            labelled,
            vec![('A', "one"), ('B', "two"), ('C', "three"), ('D', "four")]
        );
    }
}
