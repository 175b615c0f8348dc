use crate::cue::Cue;

/// Find the cue active at `time`. When cues overlap, the first one in sequence order wins.
pub fn current_cue(cues: &[Cue], time: f64) -> Option<&Cue> {
    cues.iter().find(|cue| cue.contains(time))
}

/// Join the text of every cue, separated by a blank line.
pub fn all_text(cues: &[Cue]) -> String {
    cues.iter()
        .map(Cue::text)
        .collect::<Vec<&str>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cues() -> Vec<Cue> {
        vec![
            Cue::new(0.0, 2.0, "Hello"),
            Cue::new(2.0, 4.0, "World"),
            Cue::new(3.0, 6.0, "Overlap"),
        ]
    }

    #[test]
    fn test_current_cue_bounds() {
        let cues = vec![Cue::new(2.0, 4.0, "Hello")];

        assert_eq!(current_cue(&cues, 2.0), Some(&cues[0]));
        assert_eq!(current_cue(&cues, 4.0), Some(&cues[0]));
        assert_eq!(current_cue(&cues, 1.999), None);
        assert_eq!(current_cue(&cues, 4.001), None);
    }

    #[test]
    fn test_current_cue_first_match_wins() {
        let cues = cues();

        assert_eq!(current_cue(&cues, 2.0).map(Cue::text), Some("Hello"));
        assert_eq!(current_cue(&cues, 3.5).map(Cue::text), Some("World"));
        assert_eq!(current_cue(&cues, 5.0).map(Cue::text), Some("Overlap"));
        assert_eq!(current_cue(&cues, 7.0), None);
    }

    #[test]
    fn test_current_cue_empty() {
        assert_eq!(current_cue(&[], 0.0), None);
    }

    #[test]
    fn test_all_text() {
        let cues = vec![Cue::new(0.0, 2.0, "Hello"), Cue::new(2.0, 4.0, "World")];

        assert_eq!(all_text(&cues), "Hello\n\nWorld");
    }

    #[test]
    fn test_all_text_keeps_line_breaks() {
        let cues = vec![Cue::new(0.0, 2.0, "one\ntwo"), Cue::new(2.0, 4.0, "three")];

        assert_eq!(all_text(&cues), "one\ntwo\n\nthree");
        assert_eq!(all_text(&[]), "");
    }
}
