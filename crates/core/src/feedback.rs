//! End-of-quiz feedback messages, picked by fixed percentage-of-max cutoffs.

const STELLAR: &str =
    "Stellar performance — you're crushing it. Keep practicing to stay sharp!";
const SOLID: &str = "Nice job — solid knowledge. A little polish and you'll be top-tier.";
const EFFORT: &str = "Good effort — identify weak areas and revise. Consistency beats cramming.";
const TOUGH: &str = "Tough round — learn from it. Focus on fundamentals and try again with a plan.";

/// Map a final score to one of four canned messages.
///
/// Thresholds are fixed fractions of `max_score`: 75%, 50%, and zero.
/// Integer math keeps the cutoffs exact (a score of 30 out of 40 is 75%).
#[must_use]
pub fn feedback_for(score: i32, max_score: i32) -> &'static str {
    if score * 4 >= max_score * 3 {
        STELLAR
    } else if score * 2 >= max_score {
        SOLID
    } else if score >= 0 {
        EFFORT
    } else {
        TOUGH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundaries_are_exact() {
        // 30 of 40 is exactly 75%.
        assert_eq!(feedback_for(30, 40), STELLAR);
        assert_eq!(feedback_for(28, 40), SOLID);
        // 20 of 40 is exactly 50%.
        assert_eq!(feedback_for(20, 40), SOLID);
        assert_eq!(feedback_for(18, 40), EFFORT);
        assert_eq!(feedback_for(0, 40), EFFORT);
        assert_eq!(feedback_for(-2, 40), TOUGH);
    }

    #[test]
    fn twelve_right_eight_wrong_lands_in_effort_band() {
        // 20 questions at +2/-2: 12 correct and 8 wrong gives 8 of 40 (20%).
        assert_eq!(feedback_for(8, 40), EFFORT);
    }

    #[test]
    fn perfect_and_abysmal_scores() {
        assert_eq!(feedback_for(40, 40), STELLAR);
        assert_eq!(feedback_for(-40, 40), TOUGH);
    }
}
