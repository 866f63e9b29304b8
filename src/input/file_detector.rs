//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Text,
    Markdown,
    Unknown,
}

/// Extensions accepted for resumes and job descriptions
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileType::from_extension("TXT"), FileType::Text);
        assert_eq!(FileType::from_extension("markdown"), FileType::Markdown);
        assert_eq!(FileType::from_extension("pdf"), FileType::Unknown);
    }
}
