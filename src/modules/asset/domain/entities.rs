//
// ──────────────────────────────────────────────────────────
// Asset Entities
// ──────────────────────────────────────────────────────────
//

/// The two optional files the portfolio serves from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Resume,
    ProfileImage,
}

impl AssetKind {
    /// Fixed file name looked up inside the asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Resume => "resume.pdf",
            AssetKind::ProfileImage => "person.jpg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            AssetKind::Resume => "application/pdf",
            AssetKind::ProfileImage => "image/jpeg",
        }
    }
}

/// An asset read from disk, ready to serve.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredAsset {
    pub kind: AssetKind,
    pub bytes: Vec<u8>,
}

/// Metadata of a file received through an upload control. The bytes
/// themselves are drained and dropped by the route; uploads are
/// acknowledged, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_kinds_map_to_their_fixed_files() {
        assert_eq!(AssetKind::Resume.file_name(), "resume.pdf");
        assert_eq!(AssetKind::Resume.content_type(), "application/pdf");
        assert_eq!(AssetKind::ProfileImage.file_name(), "person.jpg");
        assert_eq!(AssetKind::ProfileImage.content_type(), "image/jpeg");
    }
}
