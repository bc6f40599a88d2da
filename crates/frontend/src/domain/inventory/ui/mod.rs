use contracts::enums::stock_status::StockStatus;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use super::accept::{is_allowed_upload, UPLOAD_REJECTED_MESSAGE};
use super::api;
use super::csv::{parse_inventory_csv, ParsedRow};
use super::template;
use super::upload::{UploadSession, UploadStatus, PROGRESS_TICK_MS};
use crate::domain::activity::log::{self as activity_log, NewActivityEntry};
use crate::system::auth::{cookie_token_provider, TokenProvider};

fn stock_status_for(row: &ParsedRow) -> StockStatus {
    match row.quantity {
        0 => StockStatus::OutOfStock,
        1..=9 => StockStatus::LowStock,
        _ => StockStatus::InStock,
    }
}

fn record_upload_activity(rows: &[ParsedRow]) {
    let entries = rows
        .iter()
        .map(|row| NewActivityEntry {
            medicine_name: row.medicine_name.clone(),
            action: "Added via bulk upload".to_string(),
            status: stock_status_for(row),
        })
        .collect();
    activity_log::append(entries);
}

/// Bulk inventory upload: file selection, client-side CSV validation,
/// simulated progress and the multipart submission of the original file.
#[component]
pub fn BulkUploadWidget(
    /// Returns the bearer token for the backend call; defaults to the
    /// `auth_token` cookie.
    #[prop(optional)]
    token_provider: Option<TokenProvider>,
) -> impl IntoView {
    let session = RwSignal::new(UploadSession::default());
    let selected_file = RwSignal::new_local(None::<web_sys::File>);
    let token_provider_sv = StoredValue::new_local(
        token_provider.unwrap_or_else(cookie_token_provider),
    );

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let file = input.and_then(|input| input.files()).and_then(|files| files.get(0));
        let Some(file) = file else {
            return;
        };

        if is_allowed_upload(&file.name(), &file.type_()) {
            selected_file.set(Some(file));
            session.update(|s| s.file_selected());
        } else {
            selected_file.set(None);
            session.update(|s| {
                s.file_selected();
                s.error = Some(UPLOAD_REJECTED_MESSAGE.to_string());
            });
        }
    };

    let on_start_upload = move |_| {
        let Some(file) = selected_file.get_untracked() else {
            return;
        };
        if !session.get_untracked().can_begin() {
            return;
        }
        session.update(|s| s.begin());
        let token = token_provider_sv.with_value(|provider| provider());

        spawn_local(async move {
            let text = match wasm_bindgen_futures::JsFuture::from(file.text()).await {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(_) => {
                    session.try_update(|s| s.fail("Unable to read the selected file.".to_string()));
                    return;
                }
            };

            let rows = match parse_inventory_csv(&text) {
                Ok(rows) => rows,
                Err(message) => {
                    session.try_update(|s| s.fail(message));
                    return;
                }
            };
            session.try_update(|s| s.rows_validated(rows.len()));

            // Cosmetic ticker; capped below 100 so it cannot finish before
            // the request resolves. `try_update` returns None once the page
            // is unmounted and the signal disposed, which stops the loop.
            spawn_local(async move {
                loop {
                    TimeoutFuture::new(PROGRESS_TICK_MS).await;
                    let still_uploading = session.try_update(|s| {
                        let uploading = s.status == UploadStatus::Uploading;
                        if uploading {
                            s.tick_progress();
                        }
                        uploading
                    });
                    if still_uploading != Some(true) {
                        break;
                    }
                }
            });

            match api::upload_inventory(&file, token).await {
                Ok(_) => {
                    record_upload_activity(&rows);
                    session.try_update(|s| s.complete());
                }
                Err(message) => {
                    session.try_update(|s| s.fail(message));
                }
            }
        });
    };

    let on_download_template = move |_| {
        if let Err(e) = template::download_template() {
            log::warn!("template download failed: {}", e);
        }
    };

    let on_reset = move |_| {
        selected_file.set(None);
        session.update(|s| s.reset());
    };

    let is_uploading = Signal::derive(move || session.get().status == UploadStatus::Uploading);
    let start_disabled =
        Signal::derive(move || is_uploading.get() || selected_file.with(|f| f.is_none()));

    view! {
        <div class="card bulk-upload">
            <div class="card__body">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h2 class="section-title">"Bulk inventory upload"</h2>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_download_template>
                        "Download template"
                    </Button>
                </Flex>

                <div class="bulk-upload__filebar">
                    <label class="button button--primary bulk-upload__file-btn" for="inventory-file-input">
                        "Choose CSV or TXT file"
                    </label>
                    <input
                        id="inventory-file-input"
                        type="file"
                        accept=".csv,.txt"
                        on:change=handle_file_select
                        class="hidden"
                    />
                    {move || match selected_file.with(|f| f.as_ref().map(|f| (f.name(), f.size()))) {
                        Some((name, size)) => view! {
                            <span class="bulk-upload__fileinfo">
                                <strong>{name}</strong>
                                {format!(" ({:.2} KB)", size / 1024.0)}
                            </span>
                        }.into_any(),
                        None => view! {
                            <span class="bulk-upload__filehint">"No file selected"</span>
                        }.into_any(),
                    }}
                </div>

                {move || session.get().error.map(|message| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{message}</span>
                    </div>
                })}

                <Show when=move || is_uploading.get()>
                    <div class="bulk-upload__progress">
                        <div class="bulk-upload__progress-track">
                            <div
                                class="bulk-upload__progress-fill"
                                style=move || format!("width: {}%;", session.get().progress)
                            ></div>
                        </div>
                        <Space gap=SpaceGap::Small>
                            <Spinner />
                            <span>{move || format!("Uploading... {}%", session.get().progress)}</span>
                        </Space>
                    </div>
                </Show>

                {move || {
                    let s = session.get();
                    (s.status == UploadStatus::Success).then(|| view! {
                        <div class="info-box">
                            {match s.row_count {
                                Some(count) if count == 1 => "Uploaded 1 row.".to_string(),
                                Some(count) => format!("Uploaded {} rows.", count),
                                None => "Upload complete.".to_string(),
                            }}
                        </div>
                    })
                }}

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_start_upload
                        disabled=start_disabled
                    >
                        {move || if is_uploading.get() { "Uploading..." } else { "Upload inventory" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_reset>
                        "Reset"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
