//! Document Uploads
//!
//! Attaching files to collection items: the declared-type policy, file
//! sources (browser `File` or in-memory), and the attachment panel logic.

mod panel;
mod policy;
mod source;

pub use panel::AttachmentPanel;
pub use policy::UploadPolicy;
pub use source::FileSource;
