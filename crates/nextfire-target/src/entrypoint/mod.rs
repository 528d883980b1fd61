//! Generated server entry point (`server.js`).
//!
//! The script is assembled from fixed fragments chosen by explicit branching
//! on the functions generation and on whether client options are configured.
//! Nothing here executes the emitted code; identical inputs always render
//! byte-identical output.

mod fragments;

use std::borrow::Cow;

use nextfire_config::{ClientOptions, FunctionTarget};

/// Path the session-bridging server reserves for cookie exchange.
pub const COOKIE_ENDPOINT: &str = "/__next/cookie";

/// Name of the session cookie. Firebase Hosting only forwards `__session`.
pub const SESSION_COOKIE: &str = "__session";

/// An ordered list of source fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerScript {
    fragments: Vec<Cow<'static, str>>,
}

impl ServerScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose the server for `target`, bridging sessions when `client` is set.
    pub fn for_target(target: &FunctionTarget, client: Option<&ClientOptions>) -> Self {
        let mut script = Self::new();
        script
            .push(fragments::PREAMBLE)
            .push(fragments::trigger_import(target.generation));

        if client.is_some() {
            script.push(fragments::SESSION_IMPORTS);
        }

        script.push(fragments::FRAMEWORK_IMPORT);

        match client {
            Some(client) => {
                script
                    .push(fragments::session_constants(client))
                    .push(fragments::SESSION_BRIDGE)
                    .push(fragments::SESSION_HANDLER);
            }
            None => {
                script.push(fragments::PLAIN_HANDLER);
            }
        }

        script.push(fragments::trigger_export(target));
        script
    }

    pub fn push(&mut self, fragment: impl Into<Cow<'static, str>>) -> &mut Self {
        self.fragments.push(fragment.into());
        self
    }

    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(|fragment| fragment.trim_matches('\n'))
    }

    /// Join fragments with one blank line between them and a trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.fragments().collect::<Vec<_>>().join("\n\n");
        out.push('\n');
        out
    }
}

/// Render the server entry point for `target`.
///
/// With `client` present the script also bridges Firebase Auth sessions:
/// it serves [`COOKIE_ENDPOINT`] and hands a per-user client app to the
/// framework handler.
pub fn build_server_entrypoint(target: &FunctionTarget, client: Option<&ClientOptions>) -> String {
    ServerScript::for_target(target, client).render()
}
