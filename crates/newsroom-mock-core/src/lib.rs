//! Core library for the Newsroom newsletter mock.
//!
//! A stateful test double for the Newsroom subscription API: it matches
//! intercepted requests by host and path prefix, dispatches the three
//! mocked operations (list subscriptions, subscribe, unsubscribe), and
//! keeps subscription state in an injected key-value store so integration
//! tests of Newsroom clients run without network access.
//!
//! ```
//! use newsroom_mock_core::types::request::MockRequest;
//! use newsroom_mock_core::{InMemoryStore, NewsroomMock};
//! use serde_json::json;
//!
//! let mut mock = NewsroomMock::new(InMemoryStore::new());
//!
//! let request = MockRequest::new("ec.europa.eu", "/newsroom/api/v1/subscribe")
//!     .with_payload(json!({
//!         "subscription": {
//!             "universeAcronym": "DIGIT",
//!             "topicExtWebsite": "myapp",
//!             "email": "a@example.com",
//!             "sv_id": "5",
//!         }
//!     }));
//! assert!(mock.applies(&request));
//!
//! let response = mock.get_response(&request).unwrap();
//! assert_eq!(response.status, 200);
//! ```

pub mod config;
pub mod feedback;
pub mod handler;
pub mod matching;
pub mod state;
pub mod types;

pub use handler::{HandlerError, NewsroomMock};
pub use state::{InMemoryStore, StateStore};
