use crate::error::{ErrorKind, SubmitError};
use strum::AsRefStr;

pub type NoticeId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A dismissible, non-blocking message shown in the notification area.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub level: NoticeLevel,
    pub kind: Option<ErrorKind>,
    pub message: String,
}

impl Notice {
    pub fn css_class(&self) -> String {
        format!("notice notice-{}", self.level.as_ref())
    }
}

fn level_for(kind: ErrorKind) -> NoticeLevel {
    match kind {
        ErrorKind::Cancelled => NoticeLevel::Info,
        ErrorKind::Input => NoticeLevel::Warning,
        ErrorKind::Server | ErrorKind::Transport | ErrorKind::Timeout => NoticeLevel::Error,
    }
}

#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    last_id: NoticeId,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> NoticeId {
        self.insert(level, None, message.into())
    }

    pub fn push_error(&mut self, error: &SubmitError) -> NoticeId {
        let kind = error.kind();
        self.insert(level_for(kind), Some(kind), error.to_string())
    }

    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    fn insert(&mut self, level: NoticeLevel, kind: Option<ErrorKind>, message: String) -> NoticeId {
        self.last_id += 1;
        self.notices.push(Notice {
            id: self.last_id,
            level,
            kind,
            message,
        });
        self.last_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notice_carries_kind_and_text() {
        let mut board = NoticeBoard::new();

        let id = board.push_error(&SubmitError::Rejected("No file selected".into()));

        let notice = &board.notices()[0];
        assert_eq!(notice.id, id);
        assert_eq!(notice.kind, Some(ErrorKind::Server));
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("No file selected"));
        assert_eq!(notice.css_class(), "notice notice-error");
    }

    #[test]
    fn test_levels() {
        let mut board = NoticeBoard::new();
        board.push_error(&SubmitError::NoFileSelected);
        board.push_error(&SubmitError::Cancelled);
        board.push(NoticeLevel::Warning, "Model not loaded");

        let levels: Vec<NoticeLevel> = board.notices().iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![NoticeLevel::Warning, NoticeLevel::Info, NoticeLevel::Warning]);
        assert_eq!(board.notices()[2].kind, None);
    }

    #[test]
    fn test_dismiss() {
        let mut board = NoticeBoard::new();
        let first = board.push(NoticeLevel::Info, "one");
        let second = board.push(NoticeLevel::Info, "two");

        assert!(board.dismiss(first));
        assert!(!board.dismiss(first));
        assert_eq!(board.notices().len(), 1);
        assert_eq!(board.notices()[0].id, second);
    }
}
