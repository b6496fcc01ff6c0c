//! An async client library for the [WaniKani] REST API.
//!
//! WaniKani teaches Japanese kanji and vocabulary through spaced
//! repetition; its API exposes the subjects being studied, the user's
//! progress through them, and the review mechanics that drive the system.
//! This crate models each endpoint as a typed [resource
//! descriptor](resources) and each payload as a typed [model](models).
//!
//! [WaniKani]: https://www.wanikani.com
//!
//! # Quick Start
//!
//! ```no_run
//! use futures::TryStreamExt;
//! use wanikit::Client;
//! use wanikit::resources::{assignments, user};
//!
//! # async fn example() -> wanikit::Result<()> {
//! let client = Client::builder().token("api-token").build();
//!
//! // Singular resources are one send.
//! let me = client.send(&user::Me, None).await?;
//! println!("level {}", me.data.data.level);
//!
//! // Collections stream page by page, waiting out rate limits.
//! let mut pages = std::pin::pin!(client.pages(assignments::List::new().in_review()));
//! while let Some(page) = pages.try_next().await? {
//!     for assignment in &page.data {
//!         println!("subject {} at stage {}", assignment.data.subject_id, assignment.data.srs_stage);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! Most endpoints require a [personal access token]. Pass it to the builder
//! with [`ClientBuilder::token`]; it is sent as a bearer credential and
//! redacted from debug output.
//!
//! [personal access token]: https://www.wanikani.com/settings/personal_access_tokens
//!
//! # Rate Limiting
//!
//! WaniKani budgets requests per minute and reports the budget in response
//! headers. A plain [`Client::send`] surfaces an exhausted budget as
//! [`Error::RateLimitExceeded`]; the pagination stream can instead sleep
//! until the reported reset and retry, so a full collection walk needs no
//! caller-side retry logic.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod request;
pub mod resources;
pub mod response;
mod timestamp;
pub mod transport;

pub use client::{Client, ClientBuilder};
pub use config::{ApiVersion, Configuration};
pub use error::{Error, Result};
pub use pagination::{Page, PageOptions, Paginated};
pub use request::{ApiRequest, CachePolicy};
pub use resources::Resource;
pub use response::{RateLimit, Response, StatusCode};
pub use transport::{ApiResponse, ReqwestTransport, Transport};
