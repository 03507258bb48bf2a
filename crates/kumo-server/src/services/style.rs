//! Style Selection - pick a tone, avoiding the previous one

use rand::Rng;

use kumo::domain::{RewriteState, Style};

/// Draw a style uniformly from [`Style::ALL`], redrawing from the
/// remaining styles when the first draw repeats the previously served one.
///
/// Excluding exactly one element from a set of two or more guarantees a
/// valid choice on the second draw, so no further retries are needed.
pub fn choose_style(history: &RewriteState, rng: &mut impl Rng) -> Style {
    let styles = Style::ALL;
    let mut chosen = styles[rng.gen_range(0..styles.len())];

    if let Some(last) = history.last_style {
        if styles.len() > 1 && chosen == last {
            let alternatives: Vec<Style> =
                styles.iter().copied().filter(|s| *s != last).collect();
            chosen = alternatives[rng.gen_range(0..alternatives.len())];
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_never_repeats_previous_style() {
        let history = RewriteState::new(None, Some(Style::Dry));
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = choose_style(&history, &mut rng);
            assert_ne!(chosen, Style::Dry, "repeated prior style at seed {}", seed);
        }
    }

    #[test]
    fn test_no_history_allows_any_style() {
        let history = RewriteState::default();
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            seen.insert(choose_style(&history, &mut rng));
        }
        assert_eq!(seen.len(), Style::ALL.len());
    }

    #[test]
    fn test_every_other_style_reachable_with_history() {
        let history = RewriteState::new(None, Some(Style::Playful));
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            seen.insert(choose_style(&history, &mut rng));
        }
        assert_eq!(seen.len(), Style::ALL.len() - 1);
        assert!(!seen.contains(&Style::Playful));
    }
}
