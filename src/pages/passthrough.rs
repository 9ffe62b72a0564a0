//! Token-passthrough page, for tokens arriving on an external link.
//!
//! Same contract as [`super::verify::VERIFY`], but reads `verifyToken` and
//! mounts the widget only once the browser has confirmed it can host custom
//! elements.

use super::verify::VerificationPage;
use crate::widget::ScriptLoading;

/// Query parameter used by external links.
pub const QUERY_PARAM: &str = "verifyToken";

/// The passthrough variant.
pub const PASSTHROUGH: VerificationPage = VerificationPage {
    name: "passthrough",
    query_param: QUERY_PARAM,
    loading: ScriptLoading::Deferred,
};
