/// Identity of a use case: index, technical name and the title its page shows.
pub trait UseCaseMetadata {
    /// e.g. "u501"
    fn usecase_index() -> &'static str;

    fn usecase_name() -> &'static str;

    fn display_name() -> &'static str;

    /// "u501_order_link"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
