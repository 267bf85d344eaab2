//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::{PageConfig, Role};
use crate::i18n::Lang;
use crate::upload::UploadPolicy;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload collections from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload collections from backend - write
    set_reload_trigger: WriteSignal<u32>,
    pub role: Role,
    pub lang: Lang,
    api: StoredValue<HttpApi, LocalStorage>,
    upload_policy: StoredValue<UploadPolicy>,
}

impl AppContext {
    pub fn new(config: &PageConfig, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            role: config.role,
            lang: config.lang,
            api: StoredValue::new_local(HttpApi::new(config.api_base.clone(), config.upload_policy.clone())),
            upload_policy: StoredValue::new(config.upload_policy.clone()),
        }
    }

    /// Trigger a reload of every mounted collection
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        self.upload_policy.get_value()
    }
}
