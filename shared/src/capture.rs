/// A user-picked file as the capture widget sees it. The browser build
/// implements this for `gloo_file::File`.
pub trait ImageBlob {
    fn mime_type(&self) -> String;
    fn name(&self) -> String;
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// Identifies one pending preview read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket(u64);

/// Local state of the image picker: the preview shown for the current
/// selection, if its data URL has been read yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureState {
    preview: Option<String>,
    generation: u64,
}

impl CaptureState {
    /// Accepts an image file and starts a new preview generation. Non-image
    /// files return `None` and leave the state untouched; the caller must not
    /// notify its parent in that case.
    pub fn offer<F: ImageBlob>(&mut self, file: &F) -> Option<PreviewTicket> {
        if !is_image_mime(&file.mime_type()) {
            log::warn!("Skipping non-image file: {}", file.name());
            return None;
        }
        self.generation += 1;
        Some(PreviewTicket(self.generation))
    }

    /// Stores a finished preview. Reads belonging to an older selection, or
    /// finishing after `clear`, are dropped.
    pub fn preview_ready(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        if ticket.0 != self.generation {
            log::debug!("Dropping stale preview {:?}", ticket);
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    pub fn clear(&mut self) {
        self.preview = None;
        self.generation += 1;
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn has_selection(&self) -> bool {
        self.preview.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestFile(&'static str, &'static str);

    impl ImageBlob for TestFile {
        fn mime_type(&self) -> String {
            self.1.to_string()
        }

        fn name(&self) -> String {
            self.0.to_string()
        }
    }

    const LEAF: TestFile = TestFile("leaf.jpg", "image/jpeg");

    #[test]
    fn image_mime_prefix() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/webp"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
        assert!(!is_image_mime("text/image/png"));
    }

    #[test]
    fn image_selection_shows_preview_once_read() {
        let mut state = CaptureState::default();
        let ticket = state.offer(&LEAF).unwrap();
        assert!(!state.has_selection());

        assert!(state.preview_ready(ticket, "data:image/jpeg;base64,AAAA".into()));
        assert_eq!(state.preview(), Some("data:image/jpeg;base64,AAAA"));
    }

    #[test]
    fn non_image_selection_is_a_no_op() {
        let mut state = CaptureState::default();
        let ticket = state.offer(&LEAF).unwrap();
        state.preview_ready(ticket, "data:image/jpeg;base64,AAAA".into());
        let before = state.clone();

        assert_eq!(state.offer(&TestFile("notes.pdf", "application/pdf")), None);
        assert_eq!(state, before);
    }

    #[test]
    fn late_preview_of_replaced_file_is_dropped() {
        let mut state = CaptureState::default();
        let first = state.offer(&LEAF).unwrap();
        let second = state.offer(&TestFile("leaf2.png", "image/png")).unwrap();

        assert!(state.preview_ready(second, "data:image/png;base64,BBBB".into()));
        assert!(!state.preview_ready(first, "data:image/jpeg;base64,AAAA".into()));
        assert_eq!(state.preview(), Some("data:image/png;base64,BBBB"));
    }

    #[test]
    fn clear_drops_preview_and_pending_reads() {
        let mut state = CaptureState::default();
        let ticket = state.offer(&LEAF).unwrap();
        state.clear();

        assert!(!state.preview_ready(ticket, "data:image/jpeg;base64,AAAA".into()));
        assert_eq!(state.preview(), None);
    }
}
