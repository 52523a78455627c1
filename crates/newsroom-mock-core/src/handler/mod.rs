//! The mock API handler.
//!
//! [`NewsroomMock`] answers the two questions the interception layer asks:
//! whether a request targets the mocked API at all, and what response a
//! matching request gets.

pub mod error;
pub mod newsroom;

pub use error::HandlerError;
pub use newsroom::NewsroomMock;
