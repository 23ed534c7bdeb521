use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::core::types::AggregatedVerdict;

/// Host-side cache of analysis verdicts keyed by URL.
///
/// The core analysis is stateless; this store only saves the host a
/// re-analysis when the same URL comes back within the freshness
/// window.
pub struct VerdictStore {
    conn: Connection,
}

impl VerdictStore {
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS verdicts (
              url TEXT PRIMARY KEY,
              is_phishing INTEGER NOT NULL,
              reasons_json TEXT NOT NULL,
              checked_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_verdicts_checked ON verdicts(checked_at);
            ",
        )?;
        Ok(())
    }

    /// Insert or replace the verdict for a URL, stamped with now.
    pub fn upsert(&mut self, url: &str, verdict: &AggregatedVerdict) -> Result<()> {
        let reasons_json = serde_json::to_string(&verdict.reasons)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO verdicts (url, is_phishing, reasons_json, checked_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                url,
                verdict.is_phishing as i64,
                reasons_json,
                Utc::now().to_rfc3339()
            ],
        )?;
        Ok(())
    }

    /// Return the stored verdict for a URL if it is younger than
    /// `max_age`, otherwise None (stale entries are left for purge).
    pub fn fresh(&self, url: &str, max_age: Duration) -> Result<Option<AggregatedVerdict>> {
        let row: Option<(i64, String, String)> = self
            .conn
            .query_row(
                "SELECT is_phishing, reasons_json, checked_at FROM verdicts WHERE url = ?1",
                params![url],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((is_phishing, reasons_json, checked_at)) = row else {
            return Ok(None);
        };

        let checked_at = DateTime::parse_from_rfc3339(&checked_at)?.with_timezone(&Utc);
        if Utc::now() - checked_at >= max_age {
            return Ok(None);
        }

        let reasons: Vec<String> = serde_json::from_str(&reasons_json)?;
        Ok(Some(AggregatedVerdict {
            is_phishing: is_phishing != 0,
            reasons,
        }))
    }

    /// Drop every verdict older than `max_age`.
    pub fn purge_stale(&mut self, max_age: Duration) -> Result<usize> {
        let cutoff = (Utc::now() - max_age).to_rfc3339();
        let removed = self.conn.execute(
            "DELETE FROM verdicts WHERE checked_at < ?1",
            params![cutoff],
        )?;
        Ok(removed)
    }
}
