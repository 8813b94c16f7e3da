//! Customer-facing order form reached through the shared link.

pub mod greeting;
pub mod normal_print;

pub use greeting::{load_greeting, remember_customer, Greeting, NAME_TTL_MS};
pub use normal_print::{ColorOption, NormalPrintDetails, NormalPrintError, PaperSize};

use crate::domain::a003_print_job::aggregate::PrintJob;
use crate::domain::a003_print_job::catalog::Catalog;
use crate::system::storage::KeyValueStore;
use crate::usecases::common::UseCaseMetadata;

pub struct OrderForm;

impl UseCaseMetadata for OrderForm {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "order_form"
    }

    fn display_name() -> &'static str {
        "Services We Offer"
    }
}

/// What pressing "Order Now" on a card leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    OpenNormalPrintForm,
    Ordered(String),
}

/// Cards shown to the customer. Only the stored catalog counts here: with
/// nothing saved by the admin, the page is empty.
pub fn offered_jobs(store: &dyn KeyValueStore) -> Vec<PrintJob> {
    Catalog::load_stored(store).available_jobs().cloned().collect()
}

pub fn order(job: &PrintJob) -> OrderOutcome {
    if job.kind.requires_extended_form() {
        OrderOutcome::OpenNormalPrintForm
    } else {
        OrderOutcome::Ordered(job.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_print_job::aggregate::sample_print_jobs;

    #[test]
    fn only_available_stored_jobs_are_offered() {
        let store = crate::system::storage::MemoryStore::new();
        assert!(offered_jobs(&store).is_empty());

        let mut catalog = Catalog::default();
        catalog.toggle_availability(0, &store).unwrap();
        let titles: Vec<String> = offered_jobs(&store).into_iter().map(|j| j.title).collect();
        assert_eq!(titles, vec!["Flyers", "Posters", "Normal Print"]);
    }

    #[test]
    fn dispatch_by_kind() {
        let jobs = sample_print_jobs();
        assert_eq!(order(&jobs[1]), OrderOutcome::Ordered("Flyers".into()));
        assert_eq!(order(&jobs[3]), OrderOutcome::OpenNormalPrintForm);
        assert_eq!(OrderForm::full_name(), "u502_order_form");
    }
}
