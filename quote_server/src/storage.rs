//! Append-only SQLite log of served bids.
//!
//! The store owns a single connection behind a mutex; requests only ever append,
//! so inserts are simply serialized. Each insert runs on tokio's blocking pool
//! and is bounded by its own deadline:
//!
//! - if the deadline fires before the insert starts (e.g. while waiting for the
//!   connection), the insert is skipped entirely;
//! - if it fires while the statement runs, the statement is interrupted.
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::debug;
use quote_common::QuoteError;
use quote_common::Result;
use rusqlite::{Connection, InterruptHandle, params};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS cotacoes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cotacao TEXT NOT NULL
)";

const INSERT_QUOTE: &str = "INSERT INTO cotacoes (cotacao) VALUES (?1)";

/// Progress of one insert, shared between the waiting request and the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertState {
    Queued,
    Running,
    Finished,
    Abandoned,
}

/// Shared handle to the quote log.
#[derive(Clone)]
pub struct QuoteStore {
    conn: Arc<Mutex<Connection>>,
    interrupt: Arc<InterruptHandle>,
}

impl QuoteStore {
    /// Opens (or creates) the store at `path` and ensures the table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(storage_error)?;
        Self::with_connection(conn)
    }

    /// Opens a private in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(storage_error)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(CREATE_TABLE, []).map_err(storage_error)?;
        let interrupt = Arc::new(conn.get_interrupt_handle());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            interrupt,
        })
    }

    /// Appends `bid` and returns the id of the new row.
    pub async fn insert_bid(&self, bid: &str, deadline: Duration) -> Result<i64> {
        let state = Arc::new(Mutex::new(InsertState::Queued));
        let conn = Arc::clone(&self.conn);
        let worker_state = Arc::clone(&state);
        let bid = bid.to_owned();

        let insert = tokio::task::spawn_blocking(move || -> Result<i64> {
            let conn = conn.lock()?;
            {
                let mut state = worker_state.lock()?;
                if *state == InsertState::Abandoned {
                    return Err(QuoteError::StorageTimeout(deadline));
                }
                *state = InsertState::Running;
            }
            let outcome = conn
                .execute(INSERT_QUOTE, params![bid])
                .map(|_| conn.last_insert_rowid())
                .map_err(storage_error);
            // Set while the connection is still held so an interrupt can
            // never land on somebody else's statement.
            *worker_state.lock()? = InsertState::Finished;
            outcome
        });

        match tokio::time::timeout(deadline, insert).await {
            Ok(Ok(outcome)) => {
                if let Ok(id) = &outcome {
                    debug!("Recorded quote #{}", id);
                }
                outcome
            }
            Ok(Err(join_err)) => Err(QuoteError::Storage(join_err.to_string())),
            Err(_) => {
                let mut state = state.lock()?;
                if *state == InsertState::Running {
                    self.interrupt.interrupt();
                }
                *state = InsertState::Abandoned;
                Err(QuoteError::StorageTimeout(deadline))
            }
        }
    }
}

fn storage_error(err: rusqlite::Error) -> QuoteError {
    QuoteError::Storage(err.to_string())
}

#[cfg(test)]
impl QuoteStore {
    /// Every recorded row in id order.
    pub(crate) fn recorded(&self) -> Vec<(i64, String)> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT id, cotacao FROM cotacoes ORDER BY id")
            .unwrap();
        stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<rusqlite::Result<Vec<_>>>()
            .unwrap()
    }

    /// Runs arbitrary SQL against the store's connection.
    pub(crate) fn execute_batch(&self, sql: &str) {
        self.conn.lock().unwrap().execute_batch(sql).unwrap();
    }

    /// Drops the table so that every following insert fails.
    pub(crate) fn break_schema(&self) {
        self.execute_batch("DROP TABLE cotacoes;");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEADLINE: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn appends_with_increasing_ids() {
        let store = QuoteStore::open_in_memory().unwrap();

        let first = store.insert_bid("5.4321", DEADLINE).await.unwrap();
        let second = store.insert_bid("5.4321", DEADLINE).await.unwrap();
        let third = store.insert_bid("5.4400", DEADLINE).await.unwrap();

        assert!(first < second && second < third);
        assert_eq!(
            store.recorded(),
            vec![
                (first, "5.4321".to_string()),
                (second, "5.4321".to_string()),
                (third, "5.4400".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn reopening_keeps_rows_and_never_reuses_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.db");

        let last = {
            let store = QuoteStore::open(&path).unwrap();
            store.insert_bid("5.01", DEADLINE).await.unwrap();
            store.insert_bid("5.02", DEADLINE).await.unwrap()
        };

        let store = QuoteStore::open(&path).unwrap();
        let next = store.insert_bid("5.03", DEADLINE).await.unwrap();

        assert!(next > last);
        assert_eq!(store.recorded().len(), 3);
    }

    #[tokio::test]
    async fn a_failing_insert_is_a_storage_error() {
        let store = QuoteStore::open_in_memory().unwrap();
        store.break_schema();

        let err = store.insert_bid("5.43", DEADLINE).await.unwrap_err();
        assert!(matches!(err, QuoteError::Storage(_)), "{err:?}");
    }

    #[tokio::test]
    async fn an_insert_that_cannot_start_in_time_is_skipped() {
        let store = QuoteStore::open_in_memory().unwrap();
        let deadline = Duration::from_millis(10);

        let busy = store.conn.lock().unwrap();
        let err = store.insert_bid("5.43", deadline).await.unwrap_err();
        drop(busy);

        assert!(matches!(err, QuoteError::StorageTimeout(d) if d == deadline), "{err:?}");
        // Give the abandoned worker a chance to run.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(store.recorded().is_empty());
    }

    #[tokio::test]
    async fn a_running_insert_is_interrupted_at_its_deadline() {
        let store = QuoteStore::open_in_memory().unwrap();
        // Every insert fires a cross join of a billion rows.
        store.execute_batch(
            "CREATE TABLE digits (n INTEGER);
             WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < 1000)
             INSERT INTO digits SELECT n FROM seq;
             CREATE TRIGGER slow_insert AFTER INSERT ON cotacoes BEGIN
                 SELECT count(*) FROM digits a, digits b, digits c;
             END;",
        );
        let deadline = Duration::from_millis(50);

        let err = store.insert_bid("5.43", deadline).await.unwrap_err();
        assert!(matches!(err, QuoteError::StorageTimeout(d) if d == deadline), "{err:?}");

        // The connection only frees up this fast if the statement was cut short.
        let released = std::time::Instant::now();
        assert!(store.recorded().is_empty());
        assert!(released.elapsed() < Duration::from_secs(2), "{:?}", released.elapsed());

        store.execute_batch("DROP TRIGGER slow_insert;");
        let id = store.insert_bid("5.44", DEADLINE).await.unwrap();
        assert_eq!(store.recorded(), vec![(id, "5.44".to_string())]);
    }
}
