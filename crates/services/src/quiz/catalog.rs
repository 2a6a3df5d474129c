use prep_core::model::Question;

/// Canned "Quiz of the Day" question set.
///
/// Stands in for a content backend. The quiz engine takes any question list,
/// so a real source can replace this function without touching the session
/// types.
///
/// # Panics
///
/// Panics if the catalog data is internally inconsistent, which would be a
/// programming error in this module.
#[must_use]
pub fn quiz_of_the_day() -> Vec<Question> {
    vec![
        Question::new(
            "What is the output of len([1,2,3])?",
            ["2", "3", "Error", "None"],
            1,
        )
        .expect("catalog question should be valid"),
        Question::new(
            "Which data type is immutable?",
            ["List", "Dict", "Tuple", "Set"],
            2,
        )
        .expect("catalog question should be valid"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_marks_the_expected_answers() {
        let questions = quiz_of_the_day();
        assert_eq!(questions.len(), 2);
        assert!(questions[0].is_correct(1));
        assert!(questions[1].is_correct(2));
    }
}
