//! Summary report operations.

use crate::models::Summary;
use crate::resources::Resource;

/// Fetch the summary report of available and upcoming lessons and reviews.
#[derive(Debug, Clone, Copy)]
pub struct Get;

impl Resource for Get {
    type Content = Summary;
    type Body = ();

    fn path(&self) -> String {
        "summary".to_string()
    }
}
