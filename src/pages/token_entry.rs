//! The token-entry page: one text field, one button.

use crate::{html, token::VerificationToken};
use serde::Deserialize;
use url::form_urlencoded;

/// Query parameter the verification page reads the forwarded token from.
pub const FIELD: &str = "value";

/// Name of the text input on the token-entry form.
pub const INPUT: &str = "tokenValue";

const TITLE: &str = "Wultra Enrollment Server - iProov demo";
const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@4.6.0/dist/css/bootstrap.min.css";
const WEBSITE: &str = "https://wultra.com";

/// Body of a token-entry submission.
///
/// A submission without the field is treated as an empty token. The bare
/// `value` name is accepted too, so a hand-written POST mirrors the redirect.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenEntryForm {
    #[serde(default, rename = "tokenValue", alias = "value")]
    value: String,
}

impl TokenEntryForm {
    /// The typed token, unchanged.
    pub fn into_token(self) -> VerificationToken {
        VerificationToken::typed(self.value)
    }
}

/// Render the form. It posts back to `action` and opens the result in a new tab.
pub fn render(action: &str) -> String {
    let head = format!(
        "<meta name=\"description\" content=\"iProov demo\">\n\
         <link href=\"{BOOTSTRAP_CSS}\" rel=\"stylesheet\" crossorigin=\"anonymous\">\n"
    );

    let body = format!(
        "<div class=\"container\">\n\
         <nav class=\"navbar navbar-expand-lg navbar-dark bg-dark mt-3 rounded\">\n\
         <a class=\"navbar-brand\" href=\"#\"><strong class=\"ml-2\">Wultra Enrollment Server - iProov</strong></a>\n\
         </nav>\n\
         <div class=\"row mt-3\">\n\
         <div class=\"col-sm-7\">\n\
         <div class=\"card mb-3\">\n\
         <h5 class=\"card-header\">iProov demo</h5>\n\
         <div class=\"card-body\">\n\
         <div class=\"card-text\">\n\
         <form method=\"post\" action=\"{action}\" target=\"_blank\">\n\
         <label for=\"{INPUT}\">Token value </label>\n\
         <input class=\"ml-1\" id=\"{INPUT}\" name=\"{INPUT}\" type=\"text\" autocomplete=\"off\" required>\n\
         <button class=\"ml-1\" type=\"submit\">Verify</button>\n\
         </form>\n\
         </div>\n\
         </div>\n\
         </div>\n\
         </div>\n\
         <div class=\"col-sm-5\">\n\
         <div class=\"card mb-3\">\n\
         <h5 class=\"card-header\">Contact Us</h5>\n\
         <ul class=\"list-group list-group-flush\">\n\
         <li class=\"list-group-item\"><a target=\"_blank\" rel=\"noreferrer\" href=\"{WEBSITE}\">\u{1f517} Website</a></li>\n\
         <li class=\"list-group-item\"><a href=\"mailto:hello@wultra.com\">\u{2709}\u{fe0f} E-mail</a></li>\n\
         </ul>\n\
         </div>\n\
         </div>\n\
         </div>\n\
         </div>\n\
         <footer class=\"container mt-3\">\n\
         <p>&copy; <span>2021</span> <a target=\"_blank\" rel=\"noreferrer\" href=\"{WEBSITE}\">Wultra s.r.o.</a></p>\n\
         </footer>\n",
        action = html::escape(action),
    );

    html::document(TITLE, &head, &body)
}

/// Where a submitted token navigates to: `path?value=<url-encoded token>`.
pub fn verification_location(path: &str, token: &VerificationToken) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(FIELD, token.as_str())
        .finish();

    format!("{path}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::request_context::RequestContext;
    use pretty_assertions::assert_eq;

    fn round_trip(raw: &str) -> String {
        let location = verification_location("/verify", &VerificationToken::typed(raw));
        let (path, query) = location.split_once('?').unwrap();
        let ctx = RequestContext::new(path, Some(query));
        ctx.query_param(FIELD).unwrap().to_string()
    }

    #[test]
    fn test_form_markup() {
        let page = render("/");

        assert!(page.contains("<form method=\"post\" action=\"/\" target=\"_blank\">"));
        assert!(page.contains("<label for=\"tokenValue\">Token value </label>"));
        assert!(page.contains(
            r#"<input class="ml-1" id="tokenValue" name="tokenValue" type="text" autocomplete="off" required>"#
        ));
        assert!(page.contains("<button class=\"ml-1\" type=\"submit\">Verify</button>"));
    }

    #[test]
    fn test_page_chrome() {
        let page = render("/");

        assert!(page.contains("<title>Wultra Enrollment Server - iProov demo</title>"));
        assert!(page.contains(r#"<meta name="description" content="iProov demo">"#));
        assert!(page.contains(
            r#"<link href="https://cdn.jsdelivr.net/npm/bootstrap@4.6.0/dist/css/bootstrap.min.css" rel="stylesheet""#
        ));
        assert!(page.contains(r#"<nav class="navbar navbar-expand-lg navbar-dark bg-dark mt-3 rounded">"#));
        assert!(page.contains(r#"<strong class="ml-2">Wultra Enrollment Server - iProov</strong>"#));
        assert!(page.contains(r#"<h5 class="card-header">iProov demo</h5>"#));
        assert!(page.contains(r#"<h5 class="card-header">Contact Us</h5>"#));
        assert!(page.contains(
            r#"<a target="_blank" rel="noreferrer" href="https://wultra.com">🔗 Website</a>"#
        ));
        assert!(page.contains(r#"<a href="mailto:hello@wultra.com">✉️ E-mail</a>"#));
        assert!(page.contains(
            r#"<p>&copy; <span>2021</span> <a target="_blank" rel="noreferrer" href="https://wultra.com">Wultra s.r.o.</a></p>"#
        ));
    }

    #[test]
    fn test_location_for_plain_token() {
        assert_eq!(
            verification_location("/verify", &VerificationToken::typed("xyz")),
            "/verify?value=xyz"
        );
    }

    #[test]
    fn test_empty_token_is_forwarded() {
        assert_eq!(
            verification_location("/verify", &VerificationToken::typed("")),
            "/verify?value="
        );
        assert_eq!(round_trip(""), "");
    }

    #[test]
    fn test_printable_ascii_round_trips() {
        let printable: String = (0x20u8..=0x7e).map(char::from).collect();
        assert_eq!(round_trip(&printable), printable);

        let long: String = printable.chars().cycle().take(256).collect();
        assert_eq!(round_trip(&long), long);
    }

    #[test]
    fn test_missing_field_is_empty_token() {
        let form: TokenEntryForm = serde_json::from_str("{}").unwrap();

        assert!(form.into_token().is_empty());
    }

    #[test]
    fn test_form_field_and_alias() {
        let form: TokenEntryForm = serde_json::from_str(r#"{"tokenValue":"abc"}"#).unwrap();
        assert_eq!(form.into_token().as_str(), "abc");

        let form: TokenEntryForm = serde_json::from_str(r#"{"value":"def"}"#).unwrap();
        assert_eq!(form.into_token().as_str(), "def");
    }
}
