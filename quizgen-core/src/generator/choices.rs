use rand::seq::SliceRandom;
use rand::Rng;

/// Number of options in a multiple-choice question.
pub const CHOICE_COUNT: usize = 4;

/// Insertion-ordered set of answer options.
///
/// Duplicates are dropped on insert, so the final list never repeats an
/// option. Insertion order (not hash order) keeps the later shuffle
/// reproducible under a fixed seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceSet {
    options: Vec<String>,
}

impl ChoiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(answer: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.insert(answer);
        set
    }

    /// Returns `false` if the option was already present.
    pub fn insert(&mut self, option: impl Into<String>) -> bool {
        let option = option.into();
        if self.options.contains(&option) {
            return false;
        }
        self.options.push(option);
        true
    }

    pub fn contains(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.options.len() >= CHOICE_COUNT
    }

    /// Draw candidates until the set holds [`CHOICE_COUNT`] options.
    ///
    /// `candidate` must be able to produce enough distinct values, otherwise
    /// this never returns.
    pub fn fill_with<R, F>(&mut self, rng: &mut R, mut candidate: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> String,
    {
        while !self.is_full() {
            let option = candidate(rng);
            self.insert(option);
        }
    }

    /// Truncate to [`CHOICE_COUNT`] and shuffle.
    pub fn into_shuffled<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<String> {
        let mut options = self.options;
        options.truncate(CHOICE_COUNT);
        options.shuffle(rng);
        options
    }
}

impl Extend<String> for ChoiceSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for option in iter {
            self.insert(option);
        }
    }
}

/// Render `numerator / denominator` as an integer when exact, otherwise as a
/// decimal rounded to two places with trailing zeros removed.
pub fn format_quotient(numerator: i64, denominator: i64) -> String {
    if denominator != 0 && numerator % denominator == 0 {
        return (numerator / denominator).to_string();
    }

    let value = numerator as f64 / denominator as f64;
    let rendered = format!("{:.2}", value);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_insert_ignores_duplicates() {
        let mut set = ChoiceSet::with_answer("3");
        assert!(!set.insert("3"));
        assert!(set.insert("4"));
        assert_eq!(set.len(), 2);
        assert!(set.contains("4"));
    }

    #[test]
    fn test_fill_with_stops_at_choice_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut set = ChoiceSet::with_answer("0");
        set.fill_with(&mut rng, |rng| rng.gen_range(-3i64..=3).to_string());
        assert_eq!(set.len(), CHOICE_COUNT);
        assert!(set.contains("0"));
    }

    #[test]
    fn test_into_shuffled_truncates() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut set = ChoiceSet::new();
        set.extend((0..6).map(|i| i.to_string()));

        let options = set.into_shuffled(&mut rng);
        assert_eq!(options.len(), CHOICE_COUNT);
        for i in 0..4 {
            assert!(options.contains(&i.to_string()));
        }
    }

    #[test]
    fn test_format_quotient() {
        assert_eq!(format_quotient(12, 4), "3");
        assert_eq!(format_quotient(-12, 4), "-3");
        assert_eq!(format_quotient(0, 7), "0");
        assert_eq!(format_quotient(5, 2), "2.5");
        assert_eq!(format_quotient(1, 3), "0.33");
        assert_eq!(format_quotient(-7, 9), "-0.78");
    }
}
