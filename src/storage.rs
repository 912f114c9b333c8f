use crate::constants::{COOKIE_PATH, COOKIE_SAME_SITE, SECONDS_PER_DAY};
use crate::input;
use orbit_quiz_core::constants::PREFERENCE_MAX_AGE_DAYS;
use orbit_quiz_core::KeyValueStore;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `document.cookie` backed store. Values are URI-encoded and live for
/// [`PREFERENCE_MAX_AGE_DAYS`].
#[derive(Clone)]
pub struct CookieStore {
    document: web::HtmlDocument,
    max_age_secs: u32,
}

impl CookieStore {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let document = document
            .clone()
            .dyn_into::<web::HtmlDocument>()
            .map_err(|_| anyhow::anyhow!("document has no cookie jar"))?;
        Ok(Self {
            document,
            max_age_secs: PREFERENCE_MAX_AGE_DAYS * SECONDS_PER_DAY,
        })
    }

    fn write(&self, assignment: &str) {
        if let Err(e) = self.document.set_cookie(assignment) {
            log::warn!("[storage] cookie write failed: {:?}", e);
        }
    }
}

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        let cookies = self.document.cookie().ok()?;
        let raw = input::cookie_value(&cookies, key)?;
        match js_sys::decode_uri_component(raw) {
            Ok(decoded) => Some(String::from(decoded)),
            Err(_) => {
                log::warn!("[storage] undecodable cookie '{}'", key);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let encoded = String::from(js_sys::encode_uri_component(value));
        self.write(&input::cookie_assignment(
            key,
            &encoded,
            self.max_age_secs,
            COOKIE_PATH,
            COOKIE_SAME_SITE,
        ));
    }

    fn remove(&mut self, key: &str) {
        self.write(&input::cookie_removal(key, COOKIE_PATH));
    }
}
