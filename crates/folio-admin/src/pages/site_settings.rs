use web_sys::HtmlInputElement;
use yew::prelude::*;

use folio::async_callback;
use folio::data::SettingEntry;
use folio::log::info;

use crate::components::{ErrorBanner, Spinner};
use crate::forms::settings_to_save;
use crate::providers::api;

#[derive(Clone, Copy, PartialEq)]
enum Column {
    Key,
    Value,
}

#[function_component(SiteSettingsPage)]
pub fn site_settings_page() -> Html {
    let api = use_memo((), |_| api::create());
    let rows = use_state(|| None::<Vec<SettingEntry>>);
    let saving = use_state(|| false);
    let notice = use_state(|| None::<String>);
    let error_msg = use_state(|| None::<String>);

    let reload = async_callback!([api, rows, error_msg] {
        match api.fetch_site_settings().await.into_result("Failed to load site settings.") {
            Ok(list) => rows.set(Some(list.settings.iter().map(SettingEntry::from).collect())),
            Err(message) => {
                rows.set(Some(Vec::new()));
                error_msg.set(Some(message));
            }
        }
    });

    {
        let reload = reload.clone();
        use_effect_with((), move |_| reload.emit(()));
    }

    let on_edit = {
        let rows = rows.clone();
        Callback::from(move |(index, column, text): (usize, Column, String)| {
            let mut next = (*rows).clone().unwrap_or_default();
            if let Some(row) = next.get_mut(index) {
                match column {
                    Column::Key => row.key = text,
                    Column::Value => row.value = text,
                }
            }
            rows.set(Some(next));
        })
    };

    let on_add = {
        let rows = rows.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*rows).clone().unwrap_or_default();
            next.push(SettingEntry::default());
            rows.set(Some(next));
        })
    };

    let on_remove = {
        let rows = rows.clone();
        Callback::from(move |index: usize| {
            let mut next = (*rows).clone().unwrap_or_default();
            if index < next.len() {
                next.remove(index);
            }
            rows.set(Some(next));
        })
    };

    let on_save = async_callback!([api, rows, saving, notice, error_msg, reload] {
        let entries = settings_to_save(rows.as_deref().unwrap_or_default());
        saving.set(true);
        notice.set(None);
        error_msg.set(None);

        let envelope = api.upsert_site_settings(&entries).await;
        saving.set(false);
        if envelope.ok {
            info!("Saved {} site settings", entries.len());
            notice.set(Some("Site settings saved.".to_string()));
            reload.emit(());
        } else {
            error_msg.set(Some(envelope.first_error_or("Failed to save site settings.")));
        }
    });

    let input = |index: usize, column: Column, value: &str, placeholder: &'static str| {
        let on_edit = on_edit.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_edit.emit((index, column, input.value()));
            }
        });
        html! {
            <input
                type="text"
                class="w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder={placeholder}
                value={value.to_string()}
                {oninput}
            />
        }
    };

    let table = match rows.as_ref() {
        None => html! { <Spinner /> },
        Some(rows) => html! {
            <table class="w-full mb-4">
                <thead>
                    <tr class="text-left text-sm text-gray-500">
                        <th class="pb-2 w-1/3">{ "Key" }</th>
                        <th class="pb-2">{ "Value" }</th>
                        <th class="pb-2 w-20"></th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().enumerate().map(|(index, row)| {
                        let on_remove = on_remove.clone();
                        html! {
                            <tr>
                                <td class="pr-2 pb-2">{ input(index, Column::Key, &row.key, "site_title") }</td>
                                <td class="pr-2 pb-2">{ input(index, Column::Value, &row.value, "") }</td>
                                <td class="pb-2">
                                    <button
                                        class="text-red-600 hover:underline cursor-pointer"
                                        onclick={Callback::from(move |_: MouseEvent| on_remove.emit(index))}
                                    >
                                        { "Remove" }
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{ "Site settings" }</h1>
            <ErrorBanner message={(*error_msg).clone()} />
            if let Some(message) = notice.as_ref() {
                <div class="mb-4 p-4 bg-green-100 text-green-800 rounded">{ message }</div>
            }

            <div class="p-4 bg-white border border-gray-200 rounded">
                { table }
                <div class="space-x-2">
                    <button
                        class="bg-gray-200 text-gray-800 px-4 py-2 rounded hover:bg-gray-300 cursor-pointer"
                        onclick={on_add}
                    >
                        { "Add setting" }
                    </button>
                    <button
                        class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 disabled:opacity-50 cursor-pointer"
                        onclick={on_save}
                        disabled={*saving || rows.is_none()}
                    >
                        { if *saving { "Saving..." } else { "Save all" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
