//! Expectation-based mock for testing typed clients in isolation.
//!
//! Spinning up a real [`ResourceActor`](crate::framework::ResourceActor) in a
//! client test drags in the whole entity plus its context. [`MockClient`]
//! replaces the actor with a scripted responder: queue expectations, hand the
//! client to the code under test, then [`MockClient::verify`] that everything
//! queued was consumed.
//!
//! ```ignore
//! let mut mock = MockClient::<Cart>::new();
//! mock.expect_create().return_ok("cart_1".to_string());
//! mock.expect_action()
//!     .return_ok(CartActionResult::Totals(summary));
//!
//! let client = CartClient::new(mock.client());
//! // exercise the client...
//! mock.verify();
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};

/// A scripted request/response pair held in the mock's queue.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        response: Result<T, FrameworkError>,
    },
    Delete {
        response: Result<(), FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// Request tag for panic messages. Kept free of `Debug` bounds so the mock
/// works for any `ActorEntity`.
fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
    }
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get { .. } => "Get",
            Expectation::Create { .. } => "Create",
            Expectation::Update { .. } => "Update",
            Expectation::Delete { .. } => "Delete",
            Expectation::Action { .. } => "Action",
        }
    }
}

/// A mock actor client with ordered expectation tracking.
///
/// Expectations are consumed front-to-back; a request that does not match the
/// next queued expectation panics the responder task, which surfaces in the
/// test as a closed-channel error.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Create a mock with an empty expectation queue.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { respond_to, .. }, Some(Expectation::Update { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { respond_to, .. }, Some(Expectation::Delete { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { respond_to, .. }, Some(Expectation::Action { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        panic!(
                            "mock received {} but next expectation was {}",
                            request_kind(&request),
                            expectation.map(|e| e.kind()).unwrap_or("<none>")
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<'_, T, Option<T>> {
        ExpectationBuilder { mock: self, wrap: |response| Expectation::Get { response } }
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<'_, T, T::Id> {
        ExpectationBuilder { mock: self, wrap: |response| Expectation::Create { response } }
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<'_, T, T> {
        ExpectationBuilder { mock: self, wrap: |response| Expectation::Update { response } }
    }

    pub fn expect_delete(&mut self) -> ExpectationBuilder<'_, T, ()> {
        ExpectationBuilder { mock: self, wrap: |response| Expectation::Delete { response } }
    }

    pub fn expect_action(&mut self) -> ExpectationBuilder<'_, T, T::ActionResult> {
        ExpectationBuilder { mock: self, wrap: |response| Expectation::Action { response } }
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("not all expectations were met, {} remaining", remaining);
        }
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal step of queuing an expectation: choose the scripted outcome.
pub struct ExpectationBuilder<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<'a, T: ActorEntity, R> ExpectationBuilder<'a, T, R> {
    pub fn return_ok(self, value: R) {
        self.mock.push((self.wrap)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.wrap)(Err(error)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Review, ReviewCreate};

    fn review_create() -> ReviewCreate {
        ReviewCreate {
            user_name: "Dana".into(),
            review_title: "Great".into(),
            review_text: "Loved the fried rice".into(),
            rating: 5,
            dishes_ordered: "Fried Rice".into(),
            date_of_visit: "2026-08-01".into(),
            would_recommend: crate::model::Recommend::Yes,
        }
    }

    #[tokio::test]
    async fn scripted_create_then_get() {
        let mut mock = MockClient::<Review>::new();
        mock.expect_create().return_ok("review_1".to_string());
        mock.expect_get().return_ok(Some(
            Review::from_create("review_1".into(), review_create()).unwrap(),
        ));

        let client = mock.client();
        let id = client.create(review_create()).await.unwrap();
        assert_eq!(id, "review_1");

        let fetched = client.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.user_name, "Dana");

        mock.verify();
    }

    #[tokio::test]
    async fn mismatched_request_kills_the_responder() {
        let mut mock = MockClient::<Review>::new();
        mock.expect_get().return_ok(None);

        // a Create against a queued Get panics the responder task, which
        // reaches the caller as a dropped response channel
        let err = mock.client().create(review_create()).await.unwrap_err();
        assert!(matches!(
            err,
            FrameworkError::ActorDropped | FrameworkError::ActorClosed
        ));
    }

    #[tokio::test]
    async fn scripted_error_propagates() {
        let mut mock = MockClient::<Review>::new();
        mock.expect_get()
            .return_err(FrameworkError::NotFound("review_9".into()));

        let err = mock.client().get("review_9".to_string()).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("review_9".into()));
        mock.verify();
    }
}
