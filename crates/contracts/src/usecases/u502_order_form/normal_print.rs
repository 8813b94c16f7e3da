use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File types accepted by the upload field.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["docx", "pdf", "xls", "xlsx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A3,
    Letter,
}

impl PaperSize {
    pub const ALL: [PaperSize; 3] = [PaperSize::A4, PaperSize::A3, PaperSize::Letter];

    pub fn label(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A3 => "A3",
            PaperSize::Letter => "Letter",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorOption {
    #[default]
    #[serde(rename = "Black & White")]
    BlackAndWhite,
    Colored,
}

impl ColorOption {
    pub const ALL: [ColorOption; 2] = [ColorOption::BlackAndWhite, ColorOption::Colored];

    pub fn label(&self) -> &'static str {
        match self {
            ColorOption::BlackAndWhite => "Black & White",
            ColorOption::Colored => "Colored",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalPrintError {
    #[error("Please choose a paper size.")]
    MissingPaperSize,
    #[error("Number of copies must be at least 1.")]
    InvalidCopies,
    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),
}

/// Details collected by the Normal Print dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalPrintDetails {
    pub paper_size: Option<PaperSize>,
    pub copies: i64,
    pub color_option: ColorOption,
    pub notes: String,
    /// Names of the attached files.
    pub files: Vec<String>,
}

impl Default for NormalPrintDetails {
    fn default() -> Self {
        Self {
            paper_size: None,
            copies: 1,
            color_option: ColorOption::default(),
            notes: String::new(),
            files: Vec::new(),
        }
    }
}

pub fn is_accepted_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

impl NormalPrintDetails {
    pub fn validate(&self) -> Result<(), NormalPrintError> {
        if self.paper_size.is_none() {
            return Err(NormalPrintError::MissingPaperSize);
        }
        if self.copies < 1 {
            return Err(NormalPrintError::InvalidCopies);
        }
        if let Some(bad) = self.files.iter().find(|name| !is_accepted_file(name)) {
            return Err(NormalPrintError::UnsupportedFile(bad.clone()));
        }
        Ok(())
    }

    pub fn files_summary(&self) -> Option<String> {
        (!self.files.is_empty()).then(|| format!("{} file(s) selected.", self.files.len()))
    }
}
