//! List, create, edit and delete screen shared by every content kind.

use yew::prelude::*;

use folio::AdminClient;
use folio::id::Id;
use folio::log::info;
use folio::async_callback;

use crate::components::{ErrorBanner, FormField, Spinner};
use crate::forms::{Form, FormSchema};
use crate::providers::api;

async fn load<R: FormSchema>(api: &AdminClient) -> Result<Vec<R>, String> {
    api.list::<R>()
        .await
        .into_result(&format!("Failed to load {}.", R::PLURAL))
        .map(R::records)
}

/// Creates or updates, depending on whether a record is being edited.
async fn submit<R: FormSchema>(
    api: &AdminClient,
    editing: Option<Id<R>>,
    form: &Form,
) -> Result<(), String> {
    let (ok, message) = match editing {
        Some(id) => {
            let envelope = api.update(id, &R::patch(form)?).await;
            let message = envelope.first_error_or(&format!("Failed to update {}.", R::SINGULAR));
            (envelope.ok, message)
        }
        None => {
            let envelope = api.create::<R>(&R::draft(form)?).await;
            let message = envelope.first_error_or(&format!("Failed to create {}.", R::SINGULAR));
            (envelope.ok, message)
        }
    };
    if ok { Ok(()) } else { Err(message) }
}

#[function_component(CrudPage)]
pub fn crud_page<R>() -> Html
where
    R: FormSchema,
{
    let api = use_memo((), |_| api::create());
    let items = use_state(|| None::<Vec<R>>);
    let form = use_state(|| Form::blank(R::FIELDS));
    let editing = use_state(|| None::<Id<R>>);
    let saving = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let reload = async_callback!([api, items, error_msg] {
        match load::<R>(&api).await {
            Ok(records) => items.set(Some(records)),
            Err(message) => {
                items.set(Some(Vec::new()));
                error_msg.set(Some(message));
            }
        }
    });

    {
        let reload = reload.clone();
        use_effect_with((), move |_| reload.emit(()));
    }

    let reset = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            form.set(Form::blank(R::FIELDS));
            editing.set(None);
        })
    };

    let save = async_callback!([api, form, editing, saving, error_msg, reload, reset] {
        if *saving {
            return;
        }
        saving.set(true);
        error_msg.set(None);

        match submit::<R>(&api, *editing, &form).await {
            Ok(()) => {
                info!("Saved {}", R::SINGULAR);
                reset.emit(());
                reload.emit(());
            }
            Err(message) => error_msg.set(Some(message)),
        }
        saving.set(false);
    });

    let on_submit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        save.emit(());
    });

    let on_field = {
        let form = form.clone();
        Callback::from(move |(name, value): (&'static str, String)| {
            let mut next = (*form).clone();
            next.set(name, value);
            form.set(next);
        })
    };

    let on_edit = {
        let form = form.clone();
        let editing = editing.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |record: R| {
            form.set(record.form());
            editing.set(Some(record.id()));
            error_msg.set(None);
        })
    };

    let delete = async_callback!([api, error_msg, reload, editing, reset] |id: Id<R>| {
        error_msg.set(None);
        let envelope = api.remove(id).await;
        if !envelope.ok {
            let fallback = format!("Failed to delete {}.", R::SINGULAR);
            error_msg.set(Some(envelope.first_error_or(&fallback)));
            return;
        }
        if *editing == Some(id) {
            reset.emit(());
        }
        reload.emit(());
    });

    let on_delete = Callback::from(move |id: Id<R>| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete this {}?", R::SINGULAR)).ok())
            .unwrap_or(false);
        if confirmed {
            delete.emit(id);
        }
    });

    let on_cancel = {
        let reset = reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    let list = match items.as_ref() {
        None => html! { <Spinner /> },
        Some(records) if records.is_empty() => html! {
            <p class="text-gray-500">{ format!("No {} yet.", R::PLURAL) }</p>
        },
        Some(records) => html! {
            <ul class="divide-y divide-gray-200 bg-white border border-gray-200 rounded">
                { for records.iter().map(|record| {
                    let id = record.id();
                    let on_edit = {
                        let on_edit = on_edit.clone();
                        let record = record.clone();
                        Callback::from(move |_: MouseEvent| on_edit.emit(record.clone()))
                    };
                    let on_delete = {
                        let on_delete = on_delete.clone();
                        Callback::from(move |_: MouseEvent| on_delete.emit(id))
                    };
                    html! {
                        <li key={id.get()} class="p-4 flex items-center justify-between">
                            <div>
                                <div class="font-medium text-gray-900">{ record.title() }</div>
                                <div class="text-sm text-gray-500">{ record.subtitle() }</div>
                            </div>
                            <div class="space-x-2">
                                <button class="text-blue-600 hover:underline cursor-pointer" onclick={on_edit}>{ "Edit" }</button>
                                <button class="text-red-600 hover:underline cursor-pointer" onclick={on_delete}>{ "Delete" }</button>
                            </div>
                        </li>
                    }
                }) }
            </ul>
        },
    };

    let heading = match *editing {
        Some(id) => format!("Edit {} #{id}", R::SINGULAR),
        None => format!("New {}", R::SINGULAR),
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{ R::TITLE }</h1>
            <ErrorBanner message={(*error_msg).clone()} />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <section>{ list }</section>

                <form class="p-4 bg-white border border-gray-200 rounded" onsubmit={on_submit}>
                    <h2 class="text-xl font-semibold mb-4">{ heading }</h2>
                    { for R::FIELDS.iter().map(|field| html! {
                        <FormField
                            field={*field}
                            value={AttrValue::from(form.get(field.name).to_string())}
                            on_change={on_field.clone()}
                            disabled={*saving}
                        />
                    }) }
                    <div class="space-x-2">
                        <button
                            type="submit"
                            class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 disabled:opacity-50 cursor-pointer"
                            disabled={*saving}
                        >
                            { if *saving { "Saving..." } else if editing.is_some() { "Save changes" } else { "Create" } }
                        </button>
                        if editing.is_some() {
                            <button
                                type="button"
                                class="bg-gray-200 text-gray-800 px-4 py-2 rounded hover:bg-gray-300 cursor-pointer"
                                onclick={on_cancel}
                            >
                                { "Cancel" }
                            </button>
                        }
                    </div>
                </form>
            </div>
        </div>
    }
}
