//! The embedded `iproov-me` web component.
//!
//! The component itself runs in the browser and owns camera capture, the
//! handshake with the verification service and the success/failure UI. This
//! module only decides which attributes it receives and how the SDK script
//! reaches the page.

use crate::{html, settings, token::VerificationToken};
use url::Url;

/// Tag name registered by the iProov web SDK.
pub const ELEMENT: &str = "iproov-me";

const TEMPLATE_ID: &str = "iproov-widget";
const MOUNT_ID: &str = "iproov-mount";

/// How the SDK script and the widget get into the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptLoading {
    /// A plain `<script>` tag in the head; the element is part of the initial markup.
    Inline,
    /// The element sits in an inert `<template>` and is mounted by a bootstrap
    /// script only when the environment supports custom elements. The SDK is
    /// fetched asynchronously at that point.
    Deferred,
}

/// Attributes for one widget instance.
///
/// `debug` is not configurable; the element always renders `debug="false"`.
#[derive(Clone, Debug)]
pub struct IProovWidget<'a> {
    token: &'a VerificationToken,
    settings: &'a settings::IProov,
}

impl<'a> IProovWidget<'a> {
    /// Configure a widget for `token` against the configured service.
    pub fn new(token: &'a VerificationToken, settings: &'a settings::IProov) -> Self {
        Self { token, settings }
    }

    /// The element markup.
    pub fn element(&self) -> String {
        format!(
            "<{ELEMENT} token=\"{token}\" base_url=\"{base_url}\" debug=\"false\"></{ELEMENT}>",
            token = html::escape(self.token.as_str()),
            base_url = html::escape(self.settings.widget_base_url()),
        )
    }

    /// Split into `(head, body)` fragments for the given loading strategy.
    pub fn render(&self, loading: ScriptLoading, sdk_script_url: &Url) -> (String, String) {
        match loading {
            ScriptLoading::Inline => (
                format!(
                    "<script src=\"{}\"></script>\n",
                    html::escape(sdk_script_url.as_str())
                ),
                format!("{}\n", self.element()),
            ),
            ScriptLoading::Deferred => (String::new(), self.deferred_body(sdk_script_url)),
        }
    }

    fn deferred_body(&self, sdk_script_url: &Url) -> String {
        format!(
            "<template id=\"{TEMPLATE_ID}\">{element}</template>\n\
             <div id=\"{MOUNT_ID}\"></div>\n\
             <script>\n\
             (function () {{\n\
             \x20 if (!(\"customElements\" in window)) {{ return; }}\n\
             \x20 var template = document.getElementById(\"{TEMPLATE_ID}\");\n\
             \x20 var mount = document.getElementById(\"{MOUNT_ID}\");\n\
             \x20 var sdk = document.createElement(\"script\");\n\
             \x20 sdk.src = {src};\n\
             \x20 sdk.async = true;\n\
             \x20 sdk.onload = function () {{ mount.appendChild(template.content.cloneNode(true)); }};\n\
             \x20 document.head.appendChild(sdk);\n\
             }})();\n\
             </script>\n",
            element = self.element(),
            src = script_string(sdk_script_url.as_str()),
        )
    }
}

/// Quote `value` as a JavaScript string literal that is safe inside `<script>`.
fn script_string(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace("</", "<\\/")
}
