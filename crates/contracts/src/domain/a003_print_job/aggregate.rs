use serde::{Deserialize, Serialize};

/// What happens when a customer orders a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum JobKind {
    #[default]
    Standard,
    /// Document printing; ordering opens the extended details form.
    NormalPrint,
}

impl JobKind {
    pub fn requires_extended_form(&self) -> bool {
        matches!(self, JobKind::NormalPrint)
    }
}

/// Service offered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    pub title: String,
    pub description: String,
    pub price: f64,
    /// CSS color of the card badge
    pub color: String,
    pub available: bool,
    #[serde(default)]
    pub kind: JobKind,
}

impl PrintJob {
    pub fn new(title: &str, description: &str, price: f64, color: &str, kind: JobKind) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            price,
            color: color.to_string(),
            available: true,
            kind,
        }
    }

    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Unavailable"
        }
    }
}

pub fn sample_print_jobs() -> Vec<PrintJob> {
    vec![
        PrintJob::new(
            "Business Cards",
            "Premium quality business cards",
            25.00,
            "#1976d2",
            JobKind::Standard,
        ),
        PrintJob::new(
            "Flyers",
            "High-quality flyer printing services",
            15.00,
            "#d32f2f",
            JobKind::Standard,
        ),
        PrintJob::new(
            "Posters",
            "Custom posters for advertising",
            35.00,
            "#388e3c",
            JobKind::Standard,
        ),
        PrintJob::new(
            "Normal Print",
            "Document printing from DOCX, PDF or Excel files",
            5.00,
            "#f57c00",
            JobKind::NormalPrint,
        ),
    ]
}
