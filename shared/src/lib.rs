pub mod config;
pub mod detection;
pub mod error;
pub mod export;
pub mod notice;
pub mod preview;
pub mod session;
pub mod upload;

pub use config::{ClientConfig, ConfigError, ConfigOverrides};
pub use detection::{
    CountMismatch, DetectionReport, DetectionResponse, HealthStatus, TargetId, TargetRecord,
};
pub use error::{ErrorKind, SubmitError};
pub use export::{CoordinateExport, EXPORT_FILE_NAME};
pub use notice::{Notice, NoticeBoard, NoticeId, NoticeLevel};
pub use preview::{Preview, PreviewState, ReadId};
pub use session::{Completion, RequestId, SubmissionState, UploadSession};
pub use upload::{validate_upload, UploadCandidate};
