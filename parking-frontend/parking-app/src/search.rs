use async_trait::async_trait;
use parking_api_types::SearchResponse;

use crate::{
    error::{AppError, AppResult},
    query::SearchQuery,
    sequence::RequestSequence,
};

/// Whatever can answer `GET /search?q=`.
#[async_trait(?Send)]
pub trait SearchTransport {
    async fn search(&self, url: &str) -> AppResult<SearchResponse>;
}

/// Talks to the backend that served the page.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl SearchTransport for GlooTransport {
    async fn search(&self, url: &str) -> AppResult<SearchResponse> {
        // the status is ignored on purpose, a 500 still carries a usable envelope
        let json = gloo_net::http::Request::get(url)
            .send()
            .await?
            .text()
            .await?;
        serde_json::from_str(&json).map_err(|e| {
            log::error!("{e} {url} returned: json text {json}");
            e.into()
        })
    }
}

#[derive(Debug)]
pub enum SearchOutcome {
    Results(SearchResponse),
    Failed(AppError),
    /// A newer search on the same input was issued while this one was in flight.
    Superseded,
}

/// Runs searches for a single input. Blank input never gets this far, it is
/// rejected by [`SearchQuery::parse`] without issuing a ticket.
#[derive(Debug)]
pub struct SearchDispatcher<T> {
    transport: T,
    sequence: RequestSequence,
    discard_stale: bool,
}

impl<T: SearchTransport> SearchDispatcher<T> {
    pub fn new(transport: T, discard_stale: bool) -> Self {
        Self {
            transport,
            sequence: RequestSequence::default(),
            discard_stale,
        }
    }

    pub async fn send(&self, query: &SearchQuery) -> SearchOutcome {
        let ticket = self.sequence.issue();
        let url = query.url();
        log::debug!("searching {url}");
        let result = self.transport.search(&url).await;
        if self.discard_stale && !self.sequence.is_current(ticket) {
            log::debug!("dropping stale response for {url}");
            return SearchOutcome::Superseded;
        }
        match result {
            Ok(response) => SearchOutcome::Results(response),
            Err(e) => SearchOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque};

    use futures::{channel::oneshot, executor::block_on, join};
    use parking_api_types::{Scalar, Vehicle};

    use super::*;
    use crate::error::SystemError;

    #[derive(Default)]
    struct Recording {
        urls: RefCell<Vec<String>>,
        reply: Option<AppError>,
    }

    #[async_trait(?Send)]
    impl SearchTransport for Recording {
        async fn search(&self, url: &str) -> AppResult<SearchResponse> {
            self.urls.borrow_mut().push(url.to_string());
            match &self.reply {
                Some(error) => Err(error.clone()),
                None => Ok(SearchResponse::default()),
            }
        }
    }

    /// Each request waits until the test hands it a response.
    #[derive(Default)]
    struct Gated {
        gates: RefCell<VecDeque<oneshot::Receiver<SearchResponse>>>,
    }

    #[async_trait(?Send)]
    impl SearchTransport for Gated {
        async fn search(&self, _url: &str) -> AppResult<SearchResponse> {
            let gate = self.gates.borrow_mut().pop_front().expect("unexpected request");
            gate.await
                .map_err(|_| SystemError::Message("gate dropped".to_string()).into())
        }
    }

    fn query(raw: &str) -> SearchQuery {
        SearchQuery::parse(raw).unwrap()
    }

    fn plate(plate: &str) -> SearchResponse {
        SearchResponse {
            vehicles: Some(vec![Vehicle {
                plate_number: Some(plate.into()),
                ..Default::default()
            }]),
            ..Default::default()
        }
    }

    #[test]
    fn one_request_per_trigger() {
        let dispatcher = SearchDispatcher::new(Recording::default(), true);
        let outcome = block_on(dispatcher.send(&query("ABC123")));
        assert!(matches!(outcome, SearchOutcome::Results(ref r) if r.is_empty()));
        assert_eq!(*dispatcher.transport.urls.borrow(), vec!["/search?q=ABC123"]);
    }

    #[test]
    fn input_is_trimmed_before_encoding() {
        let dispatcher = SearchDispatcher::new(Recording::default(), true);
        block_on(dispatcher.send(&query("  Jane Doe \n")));
        assert_eq!(*dispatcher.transport.urls.borrow(), vec!["/search?q=Jane%20Doe"]);
    }

    #[test]
    fn transport_failures_are_reported() {
        let transport = Recording {
            reply: Some(AppError::Json("expected value at line 1 column 1".to_string())),
            ..Default::default()
        };
        let dispatcher = SearchDispatcher::new(transport, true);
        let outcome = block_on(dispatcher.send(&query("Q1")));
        assert!(matches!(outcome, SearchOutcome::Failed(AppError::Json(_))));
        // no retry
        assert_eq!(dispatcher.transport.urls.borrow().len(), 1);
    }

    #[test]
    fn stale_responses_are_dropped() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let transport = Gated {
            gates: RefCell::new(VecDeque::from([first_rx, second_rx])),
        };
        let dispatcher = SearchDispatcher::new(transport, true);
        let (ab, abc) = (query("AB"), query("ABC"));

        let (first, second, _) = block_on(async {
            join!(dispatcher.send(&ab), dispatcher.send(&abc), async {
                // the newer request resolves before the older one
                second_tx.send(plate("ABC1")).unwrap();
                first_tx.send(plate("AB9")).unwrap();
            })
        });
        assert!(matches!(first, SearchOutcome::Superseded));
        match second {
            SearchOutcome::Results(response) => {
                assert_eq!(response.vehicles()[0].plate_number, Some(Scalar::from("ABC1")))
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn last_response_wins_without_the_guard() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let transport = Gated {
            gates: RefCell::new(VecDeque::from([first_rx, second_rx])),
        };
        let dispatcher = SearchDispatcher::new(transport, false);
        let (ab, abc) = (query("AB"), query("ABC"));

        let (first, second, _) = block_on(async {
            join!(dispatcher.send(&ab), dispatcher.send(&abc), async {
                second_tx.send(plate("ABC1")).unwrap();
                first_tx.send(plate("AB9")).unwrap();
            })
        });
        assert!(matches!(first, SearchOutcome::Results(_)));
        assert!(matches!(second, SearchOutcome::Results(_)));
    }
}
