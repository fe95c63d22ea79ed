use serde::{Deserialize, Serialize};

/// One row of the `Game1` table: best scores per user across the three metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScoreRecord {
    /// User identifier (the submitting machine's hostname)
    pub userid: String,
    pub highscore_p: i64,
    pub highscore_a: i64,
    pub highscore_gdp: i64,
}

/// Score submission from the client.
///
/// Every field is optional; a missing field counts as 0, so a partial (or empty)
/// body can never raise a score above what was actually submitted.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ScoreSubmission {
    #[serde(default)]
    pub highscore_p: i64,
    #[serde(default)]
    pub highscore_a: i64,
    #[serde(default)]
    pub highscore_gdp: i64,
}

impl ScoreRecord {
    /// Build a fresh record from a submission for a previously-unseen user
    pub fn from_submission(userid: String, submission: &ScoreSubmission) -> Self {
        Self {
            userid,
            highscore_p: submission.highscore_p,
            highscore_a: submission.highscore_a,
            highscore_gdp: submission.highscore_gdp,
        }
    }

    /// Field-wise max-merge: keep whichever of old and submitted is larger.
    ///
    /// This is what makes each score monotonically non-decreasing across
    /// submissions.
    pub fn max_merge(&mut self, submission: &ScoreSubmission) {
        self.highscore_p = self.highscore_p.max(submission.highscore_p);
        self.highscore_a = self.highscore_a.max(submission.highscore_a);
        self.highscore_gdp = self.highscore_gdp.max(submission.highscore_gdp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(p: i64, a: i64, gdp: i64) -> ScoreSubmission {
        ScoreSubmission {
            highscore_p: p,
            highscore_a: a,
            highscore_gdp: gdp,
        }
    }

    #[test]
    fn test_max_merge_keeps_larger_values_per_field() {
        let mut record = ScoreRecord::from_submission("h1".to_string(), &submission(10, 5, 0));
        record.max_merge(&submission(3, 20, 1));

        assert_eq!(record.highscore_p, 10);
        assert_eq!(record.highscore_a, 20);
        assert_eq!(record.highscore_gdp, 1);
    }

    #[test]
    fn test_max_merge_equal_values_unchanged() {
        let mut record = ScoreRecord::from_submission("h1".to_string(), &submission(7, 7, 7));
        record.max_merge(&submission(7, 7, 7));

        assert_eq!(record, ScoreRecord::from_submission("h1".to_string(), &submission(7, 7, 7)));
    }

    #[test]
    fn test_max_merge_is_monotonic_over_sequence() {
        let submissions = [
            submission(1, 9, 4),
            submission(8, 2, 4),
            submission(3, 3, 30),
            submission(0, 0, 0),
        ];

        let mut record = ScoreRecord::from_submission("h1".to_string(), &submissions[0]);
        for s in &submissions[1..] {
            record.max_merge(s);
        }

        assert_eq!(record.highscore_p, 8);
        assert_eq!(record.highscore_a, 9);
        assert_eq!(record.highscore_gdp, 30);
    }

    #[test]
    fn test_submission_missing_fields_default_to_zero() {
        let parsed: ScoreSubmission = serde_json::from_str(r#"{"highscore_a": 42}"#).unwrap();
        assert_eq!(parsed.highscore_p, 0);
        assert_eq!(parsed.highscore_a, 42);
        assert_eq!(parsed.highscore_gdp, 0);

        let empty: ScoreSubmission = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.highscore_p, 0);
        assert_eq!(empty.highscore_a, 0);
        assert_eq!(empty.highscore_gdp, 0);
    }
}
