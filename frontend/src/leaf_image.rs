use gloo_file::File as GlooFile;
use shared::capture::ImageBlob;

/// The photo the user picked, as held by the shell and uploaded to `/predict`.
#[derive(Clone)]
pub struct LeafImage {
    file: GlooFile,
}

impl LeafImage {
    pub fn file(&self) -> &GlooFile {
        &self.file
    }
}

impl From<GlooFile> for LeafImage {
    fn from(file: GlooFile) -> Self {
        Self { file }
    }
}

impl From<web_sys::File> for LeafImage {
    fn from(file: web_sys::File) -> Self {
        Self {
            file: GlooFile::from(file),
        }
    }
}

impl ImageBlob for LeafImage {
    fn mime_type(&self) -> String {
        self.file.raw_mime_type()
    }

    fn name(&self) -> String {
        self.file.name()
    }
}
