//! Resource descriptors: one value per API operation.
//!
//! A descriptor says everything about a request except where it goes on the
//! wire: the path, the content type it decodes to, an optional write body,
//! and any query filters or method override it applies during construction.
//! Hand one to [`Client::send`](crate::Client::send) or
//! [`Client::paginate`](crate::Client::paginate).
//!
//! Listing descriptors follow a builder style:
//!
//! ```no_run
//! use wanikit::resources::assignments;
//!
//! let burned_kanji = assignments::List::new()
//!     .burned(true)
//!     .subject_types(&[wanikit::models::SubjectKind::Kanji]);
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::request::{ApiRequest, CachePolicy};

pub mod assignments;
pub mod level_progressions;
pub mod resets;
pub mod reviews;
pub mod review_statistics;
pub mod spaced_repetition_systems;
pub mod study_materials;
pub mod subjects;
pub mod summary;
pub mod user;
pub mod voice_actors;

/// Describes one API operation.
///
/// Implementations are plain values; constructing one performs no I/O.
pub trait Resource {
    /// What a successful response decodes to.
    type Content: DeserializeOwned;
    /// The write body type. `()` for read-only operations.
    type Body: Serialize;

    /// Path relative to the versioned API base, without a leading slash.
    /// An empty path addresses the base itself.
    fn path(&self) -> String;

    /// The write body, if this operation sends one.
    fn body(&self) -> Option<&Self::Body> {
        None
    }

    /// Cache hint for transports that keep a response cache.
    fn cache_policy(&self) -> CachePolicy {
        CachePolicy::default()
    }

    /// Final adjustment of the built request: query filters, method
    /// override. Runs after the standard headers are applied.
    fn transform_request(&self, request: &mut ApiRequest) {
        let _ = request;
    }
}
