use super::normal_print_form::NormalPrintForm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::now_millis;
use crate::system::auth::storage::LocalStore;
use contracts::domain::a003_print_job::aggregate::PrintJob;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_order_form::{
    load_greeting, offered_jobs, order, remember_customer, Greeting, NormalPrintDetails,
    OrderForm, OrderOutcome,
};
use leptos::prelude::*;
use thaw::*;

#[component]
fn CustomerNameDialog(open: RwSignal<bool>, on_submit: Callback<String>) -> impl IntoView {
    let name = RwSignal::new(String::new());

    let submit = move |_| {
        let value = name.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        on_submit.run(value);
        name.set(String::new());
        open.set(false);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Enter Your Name"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Customer Name"</Label>
                            <Input value=name placeholder="Customer Name" />
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || name.get().trim().is_empty())
                            on_click=submit
                        >
                            "Submit"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[component]
pub fn OrderFormPage() -> impl IntoView {
    let greeting = RwSignal::new(load_greeting(&LocalStore, now_millis()));
    let name_dialog_open = RwSignal::new(greeting.get_untracked() == Greeting::AskName);
    let normal_print_open = RwSignal::new(false);
    let jobs = offered_jobs(&LocalStore);

    let on_name = Callback::new(move |name: String| {
        match remember_customer(&LocalStore, &name, now_millis()) {
            Ok(g) => greeting.set(g),
            Err(e) => {
                log::error!("{}: {}", OrderForm::full_name(), e);
                greeting.set(Greeting::Known(name));
            }
        }
    });

    let on_normal_print = Callback::new(move |details: NormalPrintDetails| {
        log::info!("{}: normal print order {:?}", OrderForm::full_name(), details);
    });

    let on_order = move |job: &PrintJob| match order(job) {
        OrderOutcome::OpenNormalPrintForm => normal_print_open.set(true),
        OrderOutcome::Ordered(title) => log::info!("Ordered: {}", title),
    };

    let cards = jobs
        .into_iter()
        .enumerate()
        .map(|(index, job)| {
            let ordered = job.clone();
            view! {
                <CardAnimated delay_ms=(index as u32) * 80>
                    <div class="service-card">
                        <div class="service-card__badge" style=format!("background: {};", job.color)></div>
                        <h3 class="service-card__title">{job.title.clone()}</h3>
                        <p class="service-card__description">{job.description.clone()}</p>
                        <div class="service-card__price">{job.formatted_price()}</div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_order(&ordered)
                        >
                            "Order Now"
                        </Button>
                    </div>
                </CardAnimated>
            }
        })
        .collect_view();

    view! {
        <div class="order-form">
            <header class="order-form__header">
                <h1>{OrderForm::display_name()}</h1>
                {move || greeting.get().header().map(|text| view! {
                    <div class="order-form__greeting">{text}</div>
                })}
            </header>
            <div class="services-grid">{cards}</div>
            <CustomerNameDialog open=name_dialog_open on_submit=on_name />
            <NormalPrintForm open=normal_print_open on_submit=on_normal_print />
        </div>
    }
}
