//! Attachment Panel
//!
//! Documents attached to one owning item. A panel lives as long as the
//! modal showing it; its owner never changes.

use std::cell::RefCell;

use tracing::{debug, info, warn};

use super::{FileSource, UploadPolicy};
use crate::api::{self, ApiClient, IdArgs};
use crate::collection::RequestSequencer;
use crate::error::{ApiError, ApiResult};
use crate::i18n::{t, Lang};
use crate::models::Attachment;
use crate::prompt::Prompter;

/// Outcome of one upload batch, per file name
#[derive(Debug, Default, PartialEq)]
pub struct UploadReport {
    pub uploaded: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<(String, ApiError)>,
}

pub struct AttachmentPanel<A, P> {
    api: A,
    prompt: P,
    lang: Lang,
    policy: UploadPolicy,
    owner_id: u32,
    attachments: RefCell<Vec<Attachment>>,
    sequencer: RequestSequencer,
}

impl<A: ApiClient, P: Prompter> AttachmentPanel<A, P> {
    pub fn new(api: A, prompt: P, lang: Lang, policy: UploadPolicy, owner_id: u32) -> Self {
        Self {
            api,
            prompt,
            lang,
            policy,
            owner_id,
            attachments: RefCell::new(Vec::new()),
            sequencer: RequestSequencer::default(),
        }
    }

    pub fn owner_id(&self) -> u32 {
        self.owner_id
    }

    pub fn attachments(&self) -> Vec<Attachment> {
        self.attachments.borrow().clone()
    }

    /// Re-fetch the attachment list. `Ok(false)` when a newer load won.
    pub async fn load(&self) -> ApiResult<bool> {
        let ticket = self.sequencer.issue();
        let fetched = self.api.fetch_json(&api::attachments_of(self.owner_id)).await;
        if !self.sequencer.is_current(ticket) {
            debug!(owner_id = self.owner_id, "discarding stale attachment list");
            return Ok(false);
        }
        let list: Vec<Attachment> = serde_json::from_value(fetched?)?;
        *self.attachments.borrow_mut() = list;
        Ok(true)
    }

    /// Upload matching files one after another, skip the rest,
    /// then refresh the list whatever happened
    pub async fn upload_batch<F: FileSource>(&self, files: Vec<F>) -> UploadReport {
        let mut report = UploadReport::default();

        for file in files {
            let name = file.name();
            if !self.policy.accepts(&file.declared_type()) {
                warn!(file = %name, declared = %file.declared_type(), "skipping file of wrong type");
                self.prompt.alert(t(self.lang, "warn_only_pdf"));
                report.skipped.push(name);
                continue;
            }
            let result = match file.into_upload().await {
                Ok(upload) => self.api.upload_file(api::UPLOAD_PDF, upload, self.owner_id).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    info!(file = %name, owner_id = self.owner_id, "uploaded");
                    report.uploaded.push(name);
                }
                Err(e) => {
                    warn!(file = %name, error = %e, "upload failed");
                    report.failed.push((name, e));
                }
            }
        }

        if !report.failed.is_empty() {
            let lines: Vec<String> = report
                .failed
                .iter()
                .map(|(name, e)| format!("{}: {}", name, e.user_message()))
                .collect();
            self.prompt.alert(&format!("{}\n{}", t(self.lang, "err_upload_failed"), lines.join("\n")));
        }
        self.refresh().await;
        report
    }

    /// Confirm, delete, reload
    pub async fn delete_attachment(&self, id: u32) -> ApiResult<()> {
        if !self.prompt.confirm(t(self.lang, "confirm_delete_pdf")) {
            return Err(ApiError::UserAbort);
        }
        let payload = serde_json::to_value(IdArgs { id })?;
        let result = self.api.mutate(api::DELETE_PDF, payload).await;
        if let Err(e) = &result {
            self.prompt.alert(&format!("{}{}", t(self.lang, "err_prefix"), e.user_message()));
        }
        self.refresh().await;
        result
    }

    /// Load, surfacing a failure instead of returning it
    pub async fn refresh(&self) {
        if let Err(e) = self.load().await {
            warn!(owner_id = self.owner_id, error = %e, "could not load attachments");
            self.prompt.alert(&format!("{}{}", t(self.lang, "err_prefix"), e.user_message()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::prompt::ScriptedPrompter;
    use crate::upload::source::MemoryFile;
    use serde_json::json;

    fn pdf(name: &'static str) -> MemoryFile {
        MemoryFile { name, mime: "application/pdf", bytes: b"%PDF-1.4" }
    }

    fn panel(api: &MockApi, prompt: &ScriptedPrompter, owner: u32) -> AttachmentPanel<MockApi, ScriptedPrompter> {
        AttachmentPanel::new(api.clone(), prompt.clone(), Lang::En, UploadPolicy::default(), owner)
    }

    #[tokio::test]
    async fn test_wrong_type_is_skipped_with_warning() {
        let api = MockApi::new();
        let prompt = ScriptedPrompter::default();
        let panel = panel(&api, &prompt, 7);

        let report = panel
            .upload_batch(vec![MemoryFile { name: "photo.png", mime: "image/png", bytes: b"png" }])
            .await;

        assert!(api.uploads().is_empty());
        assert_eq!(report.skipped, vec!["photo.png".to_string()]);
        assert_eq!(prompt.alerts(), vec!["Only PDFs allowed!".to_string()]);
    }

    #[tokio::test]
    async fn test_matching_file_uploads_once_with_owner() {
        let api = MockApi::new();
        let prompt = ScriptedPrompter::default();
        let panel = panel(&api, &prompt, 7);

        let report = panel.upload_batch(vec![pdf("manual.pdf")]).await;

        assert_eq!(api.uploads(), vec![(api::UPLOAD_PDF.to_string(), "manual.pdf".to_string(), 7)]);
        assert_eq!(report.uploaded, vec!["manual.pdf".to_string()]);
        // List re-fetched after the batch
        assert_eq!(panel.attachments().len(), 1);
        assert_eq!(panel.attachments()[0].filename, "manual.pdf");
    }

    #[tokio::test]
    async fn test_mixed_batch_keeps_order_and_reports_failures() {
        let api = MockApi::new();
        api.reject(api::UPLOAD_PDF, "Nur PDFs erlaubt");
        let prompt = ScriptedPrompter::default();
        let panel = panel(&api, &prompt, 3);

        let report = panel
            .upload_batch(vec![
                pdf("a.pdf"),
                MemoryFile { name: "b.txt", mime: "text/plain", bytes: b"b" },
                pdf("c.pdf"),
            ])
            .await;

        let names: Vec<String> = api.uploads().into_iter().map(|(_, n, _)| n).collect();
        assert_eq!(names, vec!["a.pdf".to_string(), "c.pdf".to_string()]);
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.skipped, vec!["b.txt".to_string()]);
        // One warning for the skipped file, one summary for the failures
        assert_eq!(prompt.alerts().len(), 2);
        assert!(prompt.alerts()[1].contains("a.pdf: Nur PDFs erlaubt"));
    }

    #[tokio::test]
    async fn test_delete_attachment_confirms_then_reloads() {
        let api = MockApi::new().with_rows(
            &api::attachments_of(2),
            json!([{"id": 11, "inventory_id": 2, "filename": "x.pdf", "filepath": "static/manuals/2_x.pdf"}]),
        );
        let prompt = ScriptedPrompter::default();
        let panel = panel(&api, &prompt, 2);
        panel.load().await.unwrap();
        assert_eq!(panel.attachments().len(), 1);

        panel.delete_attachment(11).await.unwrap();

        assert_eq!(prompt.questions(), vec!["Delete PDF?".to_string()]);
        assert!(panel.attachments().is_empty());
    }

    #[tokio::test]
    async fn test_superseded_failed_load_is_dropped() {
        let owner = api::attachments_of(2);
        let api = MockApi::new().with_rows(
            &owner,
            json!([{"id": 11, "inventory_id": 2, "filename": "x.pdf", "filepath": "static/manuals/2_x.pdf"}]),
        );
        api.reject(&owner, "offline");
        let prompt = ScriptedPrompter::default();
        let panel = panel(&api, &prompt, 2);
        let release = api.hold_next_fetch();

        let (first, second) = tokio::join!(panel.load(), async {
            api.accept(&owner);
            let applied = panel.load().await;
            let _ = release.send(());
            applied
        });

        assert_eq!(first, Ok(false));
        assert_eq!(second, Ok(true));
        assert_eq!(panel.attachments().len(), 1);
    }

    #[tokio::test]
    async fn test_declined_delete_issues_no_call() {
        let api = MockApi::new();
        let prompt = ScriptedPrompter::declining();
        let panel = panel(&api, &prompt, 2);

        let err = panel.delete_attachment(11).await.unwrap_err();

        assert!(err.is_abort());
        assert!(api.mutations().is_empty());
    }
}
