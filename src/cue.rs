/// A single timed caption segment. Times are seconds from the start of the transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub(crate) start_time: f64,
    pub(crate) end_time: f64,
    pub(crate) text: String,
}

impl Cue {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// The cue text. Lines of a multi-line cue are separated by `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Whether `time` falls within this cue. Both bounds are inclusive.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let cue = Cue::new(2.0, 4.0, "Hello");

        assert!(cue.contains(2.0));
        assert!(cue.contains(3.0));
        assert!(cue.contains(4.0));
        assert!(!cue.contains(1.999));
        assert!(!cue.contains(4.001));
    }

    #[test]
    fn test_nan_bounds_contain_nothing() {
        let cue = Cue::new(f64::NAN, 4.0, "Hello");

        assert!(!cue.contains(0.0));
        assert!(!cue.contains(4.0));
    }

    #[test]
    fn test_lines() {
        let cue = Cue::new(0.0, 1.0, "first\nsecond");

        assert_eq!(cue.lines().collect::<Vec<_>>(), vec!["first", "second"]);
    }
}
