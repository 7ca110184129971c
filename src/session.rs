//! State of one verification session.
//!
//! Mirrors what a single page view holds: the text being edited, the last
//! outcome, the model accuracy fetched on open, and the search history.

use crate::client::PredictionService;
use crate::data_models::{SearchRecord, Verdict};
use crate::error::{Result, VerifierError};
use crate::history::SearchHistory;
use crate::storage::KeyValueStore;

pub const ANALYZE_ERROR_MESSAGE: &str = "Error analyzing news. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Result(Verdict),
    Error(&'static str),
}

pub struct Session<P: PredictionService, S: KeyValueStore> {
    service: P,
    history: SearchHistory<S>,
    content: String,
    outcome: Option<Outcome>,
    accuracy: Option<f64>,
}

impl<P: PredictionService, S: KeyValueStore> Session<P, S> {
    /// Fetch the accuracy and read the stored history side by side.
    /// A failed accuracy fetch is logged and leaves the accuracy unset.
    pub async fn open(service: P, store: S) -> Result<Self> {
        let (accuracy, history) = tokio::join!(service.fetch_accuracy(), async {
            SearchHistory::load(store)
        });

        let accuracy = match accuracy {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("error fetching accuracy: {:#}", e);
                None
            }
        };

        Ok(Self {
            service,
            history: history?,
            content: String::new(),
            outcome: None,
            accuracy,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn clear_content(&mut self) {
        self.content.clear();
    }

    pub fn can_analyze(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn result(&self) -> Option<Verdict> {
        match self.outcome {
            Some(Outcome::Result(verdict)) => Some(verdict),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        match self.outcome {
            Some(Outcome::Error(message)) => Some(message),
            _ => None,
        }
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    pub fn history(&self) -> &SearchHistory<S> {
        &self.history
    }

    /// Submit the current text. Prediction failures leave the static error
    /// message in place of a result and add nothing to the history.
    pub async fn analyze(&mut self) -> Result<Verdict> {
        if !self.can_analyze() {
            return Err(VerifierError::EmptyContent);
        }
        self.outcome = None;

        let verdict = match self.service.predict(&self.content).await {
            Ok(verdict) => verdict,
            Err(e) => {
                log::error!("error analyzing news: {:#}", e);
                self.outcome = Some(Outcome::Error(ANALYZE_ERROR_MESSAGE));
                return Err(e);
            }
        };
        self.outcome = Some(Outcome::Result(verdict));

        let record = SearchRecord::new(self.content.clone(), verdict);
        if let Err(e) = self.history.push(record) {
            log::error!("error saving search history: {:#}", e);
        }
        Ok(verdict)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear()
    }

    pub fn into_history(self) -> SearchHistory<S> {
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HISTORY_KEY;
    use crate::storage::MemoryStore;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    struct FakeService {
        accuracy: Option<f64>,
        verdict: Option<Verdict>,
        seen: Mutex<Vec<String>>,
    }

    impl FakeService {
        fn new(accuracy: Option<f64>, verdict: Option<Verdict>) -> Self {
            Self {
                accuracy,
                verdict,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    fn unavailable(endpoint: &str) -> VerifierError {
        VerifierError::Status {
            endpoint: endpoint.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    impl PredictionService for FakeService {
        async fn fetch_accuracy(&self) -> Result<f64> {
            self.accuracy.ok_or_else(|| unavailable("accuracy"))
        }

        async fn predict(&self, text: &str) -> Result<Verdict> {
            self.seen.lock().unwrap().push(text.to_string());
            self.verdict.ok_or_else(|| unavailable("predict"))
        }
    }

    #[tokio::test]
    async fn open_reads_accuracy_and_history() {
        let mut store = MemoryStore::new();
        store
            .set(HISTORY_KEY, r#"[{"content":"x","result":"Real News"}]"#.to_string())
            .unwrap();
        let session = Session::open(FakeService::new(Some(0.93), None), store)
            .await
            .unwrap();
        assert_eq!(session.accuracy(), Some(0.93));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.outcome(), None);
    }

    #[tokio::test]
    async fn failed_accuracy_is_swallowed() {
        let session = Session::open(FakeService::new(None, None), MemoryStore::new())
            .await
            .unwrap();
        assert_eq!(session.accuracy(), None);
    }

    #[tokio::test]
    async fn empty_text_cannot_be_analyzed() {
        let mut session = Session::open(
            FakeService::new(Some(0.9), Some(Verdict::Real)),
            MemoryStore::new(),
        )
        .await
        .unwrap();
        assert!(!session.can_analyze());
        let err = session.analyze().await.unwrap_err();
        assert!(matches!(err, VerifierError::EmptyContent));
        assert!(session.service.seen.lock().unwrap().is_empty());
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn successful_analysis_records_history() {
        let mut session = Session::open(
            FakeService::new(Some(0.9), Some(Verdict::Fake)),
            MemoryStore::new(),
        )
        .await
        .unwrap();
        session.set_content("Celebrity is secretly a lizard");
        assert!(session.can_analyze());

        let verdict = session.analyze().await.unwrap();
        assert_eq!(verdict, Verdict::Fake);
        assert_eq!(session.result(), Some(Verdict::Fake));
        assert_eq!(session.error(), None);
        assert_eq!(
            session.history().records()[0],
            SearchRecord::new("Celebrity is secretly a lizard".to_string(), Verdict::Fake)
        );
    }

    #[tokio::test]
    async fn failed_analysis_shows_message_without_history() {
        let mut session = Session::open(FakeService::new(Some(0.9), None), MemoryStore::new())
            .await
            .unwrap();
        session.set_content("Some article");
        assert!(session.analyze().await.is_err());
        assert_eq!(session.error(), Some(ANALYZE_ERROR_MESSAGE));
        assert_eq!(session.result(), None);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn clear_content_disables_analysis() {
        let mut session = Session::open(FakeService::new(None, None), MemoryStore::new())
            .await
            .unwrap();
        session.set_content("text");
        session.clear_content();
        assert_eq!(session.content(), "");
        assert!(!session.can_analyze());
    }

    #[tokio::test]
    async fn clear_history_empties_session_and_store() {
        let mut session = Session::open(
            FakeService::new(None, Some(Verdict::Real)),
            MemoryStore::new(),
        )
        .await
        .unwrap();
        session.set_content("one");
        session.analyze().await.unwrap();
        session.clear_history().unwrap();

        let history = session.into_history();
        assert!(history.is_empty());
        assert_eq!(history.store().get(HISTORY_KEY).unwrap(), None);
    }
}
