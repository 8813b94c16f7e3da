use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::system::auth::storage::LocalStore;
use contracts::domain::a003_print_job::aggregate::PrintJob;
use contracts::domain::a003_print_job::catalog::{Catalog, CatalogSource};
use leptos::prelude::*;
use thaw::*;

fn load_catalog() -> Catalog {
    let (catalog, source) = Catalog::load(&LocalStore);
    if source == CatalogSource::Seed {
        log::info!("services: no stored catalog, using built-in entries");
    }
    catalog
}

#[component]
fn ServiceCard(
    job: PrintJob,
    index: usize,
    expanded: bool,
    on_expand: Callback<usize>,
    on_toggle: Callback<usize>,
) -> impl IntoView {
    let available = job.available;
    let price = job.formatted_price();

    view! {
        <CardAnimated delay_ms=(index as u32) * 60>
            <div class="service-card">
                <div class="service-card__badge" style=format!("background: {};", job.color)></div>
                <h3
                    class="service-card__title"
                    style="cursor: pointer;"
                    on:click=move |_| on_expand.run(index)
                >
                    {job.title.clone()}
                </h3>
                <p class="service-card__description">{job.description.clone()}</p>
                {expanded.then(|| view! { <div class="service-card__price">{price}</div> })}
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <Badge
                        appearance=BadgeAppearance::Tint
                        color=if available { BadgeColor::Success } else { BadgeColor::Danger }
                    >
                        {job.availability_label()}
                    </Badge>
                    <Button
                        appearance=if available {
                            ButtonAppearance::Secondary
                        } else {
                            ButtonAppearance::Primary
                        }
                        on_click=move |_| on_toggle.run(index)
                    >
                        {if available { "Mark Unavailable" } else { "Mark Available" }}
                    </Button>
                </Flex>
            </div>
        </CardAnimated>
    }
}

#[component]
pub fn ServicesList() -> impl IntoView {
    let catalog = RwSignal::new(load_catalog());

    let on_toggle = Callback::new(move |index: usize| {
        catalog.update(|c| match c.toggle_availability(index, &LocalStore) {
            Ok(Some(available)) => {
                log::info!("services: entry {} available={}", index, available)
            }
            Ok(None) => log::warn!("services: no entry at {}", index),
            Err(e) => log::error!("services: {}", e),
        });
    });

    let on_expand = Callback::new(move |index: usize| {
        catalog.update(|c| c.toggle_expanded(index));
    });

    view! {
        <div class="page">
            <PageHeader title="Printing Services" subtitle="Toggle what customers can order" />
            <div class="page-content services-grid">
                {move || {
                    catalog.with(|c| {
                        c.jobs()
                            .iter()
                            .cloned()
                            .enumerate()
                            .map(|(index, job)| {
                                let expanded = c.is_expanded(index);
                                view! { <ServiceCard job index expanded on_expand on_toggle /> }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}
