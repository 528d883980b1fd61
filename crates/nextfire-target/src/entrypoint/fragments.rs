//! Source fragments of the generated `server.js`.
//!
//! Every fragment is a self-contained block of CommonJS. Fragments that depend
//! on configuration are functions; the rest are constants.

use std::fmt::Write as _;

use nextfire_config::{ClientOptions, FunctionTarget, Generation};
use serde_json::Value;

use super::{COOKIE_ENDPOINT, SESSION_COOKIE};

pub(crate) const PREAMBLE: &str = r#"
// Generated by nextfire. Do not edit.
'use strict';
"#;

pub(crate) fn trigger_import(generation: Generation) -> &'static str {
    match generation {
        Generation::V1 => "const functions = require('firebase-functions');",
        Generation::V2 => "const { onRequest } = require('firebase-functions/v2/https');",
    }
}

pub(crate) const FRAMEWORK_IMPORT: &str = "const server = import('firebase-frameworks');";

pub(crate) const SESSION_IMPORTS: &str = r#"
const { parse: parseCookies } = require('cookie');
const LRU = require('lru-cache');
const { initializeApp: initializeAdminApp } = require('firebase-admin/app');
const { getAuth: getAdminAuth } = require('firebase-admin/auth');
const { initializeApp, deleteApp, getApps } = require('firebase/app');
const { getAuth, signInWithCustomToken } = require('firebase/auth');
"#;

pub(crate) fn session_constants(client: &ClientOptions) -> String {
    let options = Value::Object(client.as_map().clone());
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "const FIREBASE_OPTIONS = {options:#};");
    let _ = writeln!(out, "const COOKIE_ENDPOINT = {};", js_string(COOKIE_ENDPOINT));
    let _ = writeln!(out, "const SESSION_COOKIE = {};", js_string(SESSION_COOKIE));
    out.push_str("const SESSION_EXPIRES_IN = 1000 * 60 * 60 * 24 * 5;");
    out
}

pub(crate) const SESSION_BRIDGE: &str = r#"
const adminApp = initializeAdminApp();
const adminAuth = getAdminAuth(adminApp);

const firebaseApps = new LRU({
  max: 100,
  ttl: 1000 * 60 * 5,
  allowStale: true,
  updateAgeOnGet: true,
  dispose: (app) => {
    deleteApp(app).catch(() => undefined);
  },
});

const verifySessionCookie = (sessionCookie) =>
  sessionCookie
    ? adminAuth.verifySessionCookie(sessionCookie, true).catch(() => null)
    : Promise.resolve(null);

const handleCookieRequest = async (req, res, cookies) => {
  const authorization = req.get('Authorization') || '';
  const idToken = authorization.startsWith('Bearer ')
    ? authorization.slice('Bearer '.length)
    : '';

  if (req.method === 'DELETE' || !idToken) {
    res.clearCookie(SESSION_COOKIE, { httpOnly: true, secure: true });
    res.status(200).end();
    return;
  }

  const decodedIdToken = await adminAuth.verifyIdToken(idToken, true).catch(() => null);
  if (!decodedIdToken) {
    res.status(401).end();
    return;
  }

  const session = await verifySessionCookie(cookies[SESSION_COOKIE]);
  if (session && session.uid === decodedIdToken.uid) {
    res.status(200).end();
    return;
  }

  const sessionCookie = await adminAuth.createSessionCookie(idToken, {
    expiresIn: SESSION_EXPIRES_IN,
  });
  res.cookie(SESSION_COOKIE, sessionCookie, {
    maxAge: SESSION_EXPIRES_IN,
    httpOnly: true,
    secure: true,
  });
  res.status(201).end();
};

const firebaseAppFor = async ({ uid }) => {
  let app = firebaseApps.get(uid);
  if (!app) {
    app = getApps().find((it) => it.name === uid) || initializeApp(FIREBASE_OPTIONS, uid);
    firebaseApps.set(uid, app);
  }

  const auth = getAuth(app);
  if (auth.currentUser?.uid !== uid) {
    const customToken = await adminAuth.createCustomToken(uid);
    await signInWithCustomToken(auth, customToken);
  }

  return app;
};
"#;

pub(crate) const PLAIN_HANDLER: &str =
    "const handle = (req, res) => server.then((framework) => framework.handle(req, res));";

pub(crate) const SESSION_HANDLER: &str = r#"
const handle = async (req, res) => {
  const cookies = parseCookies(req.headers.cookie || '');

  if (req.path === COOKIE_ENDPOINT) {
    await handleCookieRequest(req, res, cookies);
    return;
  }

  const session = await verifySessionCookie(cookies[SESSION_COOKIE]);
  const firebaseApp = session ? await firebaseAppFor(session) : undefined;
  const framework = await server;
  return framework.handle(req, res, firebaseApp);
};
"#;

pub(crate) fn trigger_export(target: &FunctionTarget) -> String {
    let region = js_string(&target.region);
    match target.generation {
        Generation::V1 => format!(
            "exports.{} = functions.region({region}).https.onRequest(handle);",
            target.name
        ),
        Generation::V2 => format!(
            "exports.{} = onRequest({{ region: {region} }}, handle);",
            target.name
        ),
    }
}

/// Quote `value` as a single-quoted JavaScript string literal.
pub(crate) fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
