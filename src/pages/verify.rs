//! Verification pages: read a token from the query string, mount the widget.

use crate::{
    extract::request_context::RequestContext, html, settings, token::VerificationToken,
    widget::{IProovWidget, ScriptLoading},
};

/// One flavour of the verification page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerificationPage {
    /// Short name used in logs.
    pub name: &'static str,
    /// Query parameter carrying the token.
    pub query_param: &'static str,
    /// How the SDK script is brought into the page.
    pub loading: ScriptLoading,
}

/// Reached from the token-entry form; reads `value` and loads the SDK inline.
pub const VERIFY: VerificationPage = VerificationPage {
    name: "verify",
    query_param: super::token_entry::FIELD,
    loading: ScriptLoading::Inline,
};

impl VerificationPage {
    /// The token this page was asked to verify. Absent means empty.
    pub fn token(&self, ctx: &RequestContext) -> VerificationToken {
        VerificationToken::from_query(ctx.query_param(self.query_param))
    }

    /// Render the page for `token`.
    pub fn render(&self, token: &VerificationToken, settings: &settings::IProov) -> String {
        let widget = IProovWidget::new(token, settings);
        let (head, widget_body) = widget.render(self.loading, &settings.sdk_script_url);
        let body = format!("<main>\n{widget_body}</main>\n");

        html::document("iProov verification", &head, &body)
    }
}
