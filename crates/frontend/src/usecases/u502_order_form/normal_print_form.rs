use contracts::usecases::u502_order_form::normal_print::ACCEPTED_EXTENSIONS;
use contracts::usecases::u502_order_form::{ColorOption, NormalPrintDetails, PaperSize};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

fn accept_attr() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Names of the files picked in an `<input type="file">`.
fn selected_file_names(ev: &leptos::ev::Event) -> Vec<String> {
    let Some(files) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
    else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| file.name())
        .collect()
}

/// Extended order dialog for document printing.
#[component]
pub fn NormalPrintForm(open: RwSignal<bool>, on_submit: Callback<NormalPrintDetails>) -> impl IntoView {
    let paper_size = RwSignal::new(String::new());
    let copies = RwSignal::new("1".to_string());
    let color_option = RwSignal::new(ColorOption::default().label().to_string());
    let notes = RwSignal::new(String::new());
    let files = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(Option::<String>::None);

    let reset = move || {
        paper_size.set(String::new());
        copies.set("1".to_string());
        color_option.set(ColorOption::default().label().to_string());
        notes.set(String::new());
        files.set(Vec::new());
        error.set(None);
    };

    let details = move || NormalPrintDetails {
        paper_size: PaperSize::from_label(&paper_size.get_untracked()),
        // Unparseable input fails validation as zero copies
        copies: copies.get_untracked().trim().parse().unwrap_or(0),
        color_option: ColorOption::from_label(&color_option.get_untracked()).unwrap_or_default(),
        notes: notes.get_untracked(),
        files: files.get_untracked(),
    };

    let on_cancel = move |_| {
        reset();
        open.set(false);
    };

    let on_confirm = move |_| {
        let details = details();
        match details.validate() {
            Ok(()) => {
                on_submit.run(details);
                reset();
                open.set(false);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let files_summary = move || {
        NormalPrintDetails {
            files: files.get(),
            ..Default::default()
        }
        .files_summary()
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Normal Print Details"</DialogTitle>
                    <DialogContent>
                        <p class="dialog__help">
                            "Please enter the details for your Normal Print order and upload any relevant files (DOCX, PDF, Excel)."
                        </p>
                        <Flex vertical=true gap=FlexGap::Medium>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Paper Size"</Label>
                                <Select value=paper_size>
                                    <option value="" disabled=true>"Select paper size"</option>
                                    {PaperSize::ALL
                                        .into_iter()
                                        .map(|size| view! { <option value=size.label()>{size.label()}</option> })
                                        .collect_view()}
                                </Select>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Number of Copies"</Label>
                                <input
                                    type="number"
                                    min="1"
                                    class="dialog__number"
                                    prop:value=move || copies.get()
                                    on:input=move |ev| copies.set(event_target_value(&ev))
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Color Option"</Label>
                                <Select value=color_option>
                                    {ColorOption::ALL
                                        .into_iter()
                                        .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                                        .collect_view()}
                                </Select>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Additional Notes"</Label>
                                <Textarea value=notes attr:rows=3 />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Upload Files (DOCX, PDF, Excel)"</Label>
                                <input
                                    type="file"
                                    multiple=true
                                    accept=accept_attr()
                                    on:change=move |ev| files.set(selected_file_names(&ev))
                                />
                                {move || files_summary().map(|text| view! {
                                    <span class="dialog__files">{text}</span>
                                })}
                            </Flex>
                            {move || error.get().map(|text| view! {
                                <div class="dialog__error">{text}</div>
                            })}
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_confirm>
                            "Submit"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
