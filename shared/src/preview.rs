/// What the preview container shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PreviewState {
    #[default]
    Empty,
    Loading { file_name: String },
    Loaded { file_name: String, data_url: String },
    Failed { file_name: String, reason: String },
}

pub type ReadId = u64;

/// Tracks file reads so only the newest selection reaches the screen.
#[derive(Debug, Default)]
pub struct Preview {
    state: PreviewState,
    current_read: ReadId,
}

impl Preview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Starts a read for a newly selected file and supersedes any read
    /// still in progress.
    pub fn begin(&mut self, file_name: impl Into<String>) -> ReadId {
        self.current_read += 1;
        self.state = PreviewState::Loading {
            file_name: file_name.into(),
        };
        self.current_read
    }

    /// Returns false when the read was superseded and ignored.
    pub fn finish(&mut self, read_id: ReadId, outcome: Result<String, String>) -> bool {
        if read_id != self.current_read {
            return false;
        }
        let file_name = match &self.state {
            PreviewState::Loading { file_name } => file_name.clone(),
            _ => return false,
        };

        self.state = match outcome {
            Ok(data_url) => PreviewState::Loaded { file_name, data_url },
            Err(reason) => PreviewState::Failed { file_name, reason },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_preview_uses_read_data() {
        let mut preview = Preview::new();
        let id = preview.begin("row1.png");
        assert_eq!(
            preview.state(),
            &PreviewState::Loading { file_name: "row1.png".into() }
        );

        assert!(preview.finish(id, Ok("data:image/png;base64,iVBO".into())));
        assert_eq!(
            preview.state(),
            &PreviewState::Loaded {
                file_name: "row1.png".into(),
                data_url: "data:image/png;base64,iVBO".into()
            }
        );
    }

    #[test]
    fn test_new_selection_replaces_previous_preview() {
        let mut preview = Preview::new();
        let first = preview.begin("a.png");
        preview.finish(first, Ok("data:a".into()));

        let second = preview.begin("b.png");
        preview.finish(second, Ok("data:b".into()));

        assert_eq!(
            preview.state(),
            &PreviewState::Loaded { file_name: "b.png".into(), data_url: "data:b".into() }
        );
    }

    #[test]
    fn test_superseded_read_is_ignored() {
        let mut preview = Preview::new();
        let slow = preview.begin("slow.png");
        let fast = preview.begin("fast.png");

        assert!(preview.finish(fast, Ok("data:fast".into())));
        assert!(!preview.finish(slow, Ok("data:slow".into())));
        assert_eq!(
            preview.state(),
            &PreviewState::Loaded { file_name: "fast.png".into(), data_url: "data:fast".into() }
        );
    }

    #[test]
    fn test_failed_read_has_fallback_state() {
        let mut preview = Preview::new();
        let id = preview.begin("broken.jpg");

        preview.finish(id, Err("NotReadableError".into()));

        assert_eq!(
            preview.state(),
            &PreviewState::Failed { file_name: "broken.jpg".into(), reason: "NotReadableError".into() }
        );
        assert!(!preview.finish(id, Ok("data:late".into())));
    }
}
