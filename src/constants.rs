/// Fixed identifier for the sample row inserted by GET /add
pub const SAMPLE_USER_ID: &str = "user123";

/// Sample row scores (p / a / gdp)
pub const SAMPLE_HIGHSCORE_P: i64 = 100;
pub const SAMPLE_HIGHSCORE_A: i64 = 80;
pub const SAMPLE_HIGHSCORE_GDP: i64 = 60;

// =============================================================================
// Response Messages
// =============================================================================

/// Greeting returned by the home route
pub const MSG_HOME: &str = "High score server is running.";

/// Returned by GET /add on success
pub const MSG_SAMPLE_ADDED: &str = "New row added successfully!";

/// Returned by POST /save_score when an existing row was max-merged
pub const MSG_SCORES_UPDATED: &str = "High scores updated!";

/// Returned by POST /save_score when a new row was created
pub const MSG_SCORES_CREATED: &str = "New user and scores added!";

/// Returned by GET /save_score (informational, no write)
pub const MSG_SAVE_SCORE_USE_POST: &str =
    "Send a POST request with a JSON body of high scores to save them.";
