use sqlx::SqlitePool;

use crate::constants::{
    SAMPLE_HIGHSCORE_A, SAMPLE_HIGHSCORE_GDP, SAMPLE_HIGHSCORE_P, SAMPLE_USER_ID,
};
use crate::error::{AppError, Result};
use crate::models::{ScoreRecord, ScoreSubmission};

/// Data access layer for the `Game1` scores table.
///
/// Constructed once at startup and cloned into the application state, so
/// handlers never touch the pool directly.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    pool: SqlitePool,
}

impl ScoreStore {
    /// Open the database at the given URL and wrap it in a store
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = crate::db::open_database(database_url).await?;
        Ok(Self { pool })
    }

    /// Fetch every stored record, in store order
    pub async fn list_all(&self) -> Result<Vec<ScoreRecord>> {
        let records = sqlx::query_as::<_, ScoreRecord>(
            r#"SELECT userid, highscore_p, highscore_a, highscore_gdp FROM "Game1""#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Single-key lookup
    pub async fn get(&self, userid: &str) -> Result<Option<ScoreRecord>> {
        let record = sqlx::query_as::<_, ScoreRecord>(
            r#"SELECT userid, highscore_p, highscore_a, highscore_gdp FROM "Game1" WHERE userid = ?"#,
        )
        .bind(userid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Insert the fixed sample row (`user123`, 100/80/60)
    ///
    /// Fails with `DuplicateUser` if the row already exists. The existence read
    /// before the insert mirrors the original behavior; this route is a manual
    /// smoke test, so the check-then-act window is tolerated.
    pub async fn insert_sample(&self) -> Result<ScoreRecord> {
        if self.get(SAMPLE_USER_ID).await?.is_some() {
            tracing::info!("Sample row already present, refusing to insert again");
            return Err(AppError::DuplicateUser);
        }

        let record = ScoreRecord {
            userid: SAMPLE_USER_ID.to_string(),
            highscore_p: SAMPLE_HIGHSCORE_P,
            highscore_a: SAMPLE_HIGHSCORE_A,
            highscore_gdp: SAMPLE_HIGHSCORE_GDP,
        };
        self.insert(&record).await?;

        tracing::info!("Sample row inserted for {}", record.userid);
        Ok(record)
    }

    /// Max-merge upsert: create the row on first sight of `userid`, otherwise
    /// raise each score to the larger of stored and submitted.
    ///
    /// Returns the persisted record and whether it was newly created. The
    /// read-then-write sequence has no cross-request concurrency control; two
    /// simultaneous upserts for one userid can lose the smaller update, as in
    /// the original system.
    pub async fn upsert_max(
        &self,
        userid: &str,
        submission: &ScoreSubmission,
    ) -> Result<(ScoreRecord, bool)> {
        match self.get(userid).await? {
            Some(mut record) => {
                record.max_merge(submission);
                sqlx::query(
                    r#"UPDATE "Game1"
                       SET highscore_p = ?, highscore_a = ?, highscore_gdp = ?
                       WHERE userid = ?"#,
                )
                .bind(record.highscore_p)
                .bind(record.highscore_a)
                .bind(record.highscore_gdp)
                .bind(&record.userid)
                .execute(&self.pool)
                .await?;

                Ok((record, false))
            }
            None => {
                let record = ScoreRecord::from_submission(userid.to_string(), submission);
                self.insert(&record).await?;

                Ok((record, true))
            }
        }
    }

    async fn insert(&self, record: &ScoreRecord) -> Result<()> {
        sqlx::query(
            r#"INSERT INTO "Game1" (userid, highscore_p, highscore_a, highscore_gdp)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(&record.userid)
        .bind(record.highscore_p)
        .bind(record.highscore_a)
        .bind(record.highscore_gdp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> ScoreStore {
        ScoreStore::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory store")
    }

    fn submission(p: i64, a: i64, gdp: i64) -> ScoreSubmission {
        ScoreSubmission {
            highscore_p: p,
            highscore_a: a,
            highscore_gdp: gdp,
        }
    }

    #[tokio::test]
    async fn test_upsert_creates_record_with_submitted_values() {
        let store = test_store().await;

        let (record, created) = store
            .upsert_max("h1", &submission(10, 5, 0))
            .await
            .unwrap();

        assert!(created);
        assert_eq!(record.userid, "h1");
        assert_eq!(record.highscore_p, 10);
        assert_eq!(record.highscore_a, 5);
        assert_eq!(record.highscore_gdp, 0);
    }

    #[tokio::test]
    async fn test_upsert_max_merges_existing_record() {
        let store = test_store().await;

        store.upsert_max("h1", &submission(10, 5, 0)).await.unwrap();
        let (record, created) = store
            .upsert_max("h1", &submission(3, 20, 1))
            .await
            .unwrap();

        assert!(!created);
        assert_eq!(record.highscore_p, 10);
        assert_eq!(record.highscore_a, 20);
        assert_eq!(record.highscore_gdp, 1);

        // Persisted state matches the returned record
        let stored = store.get("h1").await.unwrap().unwrap();
        assert_eq!(stored, record);
    }

    #[tokio::test]
    async fn test_upsert_sequence_yields_per_field_maximum() {
        let store = test_store().await;

        for s in [
            submission(1, 9, 4),
            submission(8, 2, 4),
            submission(3, 3, 30),
            submission(0, 0, 0),
        ] {
            store.upsert_max("h1", &s).await.unwrap();
        }

        let stored = store.get("h1").await.unwrap().unwrap();
        assert_eq!(stored.highscore_p, 8);
        assert_eq!(stored.highscore_a, 9);
        assert_eq!(stored.highscore_gdp, 30);
    }

    #[tokio::test]
    async fn test_insert_sample_then_duplicate() {
        let store = test_store().await;

        let record = store.insert_sample().await.unwrap();
        assert_eq!(record.userid, "user123");
        assert_eq!(record.highscore_p, 100);
        assert_eq!(record.highscore_a, 80);
        assert_eq!(record.highscore_gdp, 60);

        let err = store.insert_sample().await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateUser));

        // The original row is untouched by the failed second insert
        let stored = store.get("user123").await.unwrap().unwrap();
        assert_eq!(stored, record);
    }

    #[tokio::test]
    async fn test_list_all_returns_one_record_per_identifier() {
        let store = test_store().await;

        store.upsert_max("h1", &submission(1, 2, 3)).await.unwrap();
        store.upsert_max("h2", &submission(4, 5, 6)).await.unwrap();
        store.upsert_max("h3", &submission(7, 8, 9)).await.unwrap();
        // Re-submitting must not add a row
        store.upsert_max("h2", &submission(9, 0, 0)).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 3);

        let h2 = all.iter().find(|r| r.userid == "h2").unwrap();
        assert_eq!(h2.highscore_p, 9);
        assert_eq!(h2.highscore_a, 5);
        assert_eq!(h2.highscore_gdp, 6);
    }

    #[tokio::test]
    async fn test_list_all_empty_store() {
        let store = test_store().await;
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
