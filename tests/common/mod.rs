use bucketsql::{QueryResult, Result, ResultSet, Session, SessionConfig, run_sql};
use tempfile::TempDir;

/// A session rooted in its own temporary data directory.
pub struct TestSession {
    pub session: Session,
    pub dir: TempDir,
}

impl TestSession {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::new(SessionConfig::new(dir.path()));
        Self { session, dir }
    }

    /// A fresh session over the same data directory, as after a restart.
    #[allow(dead_code)]
    pub fn restart(self) -> Self {
        let TestSession { session, dir } = self;
        drop(session);
        let session = Session::new(SessionConfig::new(dir.path()));
        Self { session, dir }
    }

    pub fn run(&mut self, sql: &str) -> Vec<Result<QueryResult>> {
        run_sql(&mut self.session, sql)
    }

    /// Runs `sql`, asserting every statement succeeded.
    #[allow(dead_code)]
    pub fn run_ok(&mut self, sql: &str) -> Vec<QueryResult> {
        self.run(sql)
            .into_iter()
            .map(|result| result.unwrap())
            .collect()
    }

    /// Runs a single SELECT and returns its rows.
    #[allow(dead_code)]
    pub fn select(&mut self, sql: &str) -> ResultSet {
        let mut results = self.run_ok(sql);
        assert_eq!(1, results.len());
        match results.pop() {
            Some(QueryResult::Rows(result_set)) => result_set,
            other => panic!("expected rows, got {:?}", other),
        }
    }
}

#[allow(dead_code)]
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[allow(dead_code)]
pub fn message(result: &Result<QueryResult>) -> &str {
    match result {
        Ok(QueryResult::Message(message)) => message,
        other => panic!("expected a message, got {:?}", other),
    }
}
