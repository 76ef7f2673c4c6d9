//! Mock asset uploads for the UI customization section.

use chrono::NaiveDateTime;

pub const UPLOAD_DELAY_MS: u32 = 1500;
pub const ACCEPTED_TYPES: &str = "image/*,video/*,.svg";

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human-readable size in base 1024 with at most two decimals.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    /// Object URL for previews; revoked when the file is removed.
    pub preview_url: String,
    pub uploaded_at: NaiveDateTime,
}

impl UploadedFile {
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    #[must_use]
    pub fn size_label(&self) -> String {
        format_file_size(self.size)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadList {
    files: Vec<UploadedFile>,
}

impl UploadList {
    #[must_use]
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn extend(&mut self, files: impl IntoIterator<Item = UploadedFile>) {
        self.files.extend(files);
    }

    /// Remove by id, returning the removed file so its preview can be released.
    pub fn remove(&mut self, id: &str) -> Option<UploadedFile> {
        let pos = self.files.iter().position(|f| f.id == id)?;
        Some(self.files.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn sizes_format_like_a_file_browser() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_258_291), "1.2 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn list_removes_by_id() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let file = |id: &str| UploadedFile {
            id: id.into(),
            name: format!("{id}.png"),
            mime_type: "image/png".into(),
            size: 2048,
            preview_url: format!("blob:{id}"),
            uploaded_at: at,
        };
        let mut list = UploadList::default();
        list.extend([file("a"), file("b")]);
        assert_eq!(list.remove("a").map(|f| f.preview_url), Some("blob:a".into()));
        assert!(list.remove("a").is_none());
        assert_eq!(list.files().len(), 1);
        assert!(list.files()[0].is_image());
        assert_eq!(list.files()[0].size_label(), "2 KB");
    }
}
