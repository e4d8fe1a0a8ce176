#[macro_export]
/// Builds a Yew `Callback` that clones the listed handles and runs an async
/// block on the browser's executor.
///
/// Every admin screen needs the same dance for its load, save and delete
/// buttons: clone each state handle into the closure, clone again per
/// invocation, then `spawn_local`. The macro does the cloning for you.
///
/// 1. Without an event parameter:
/// ```compile_fail
/// let reload = async_callback!([client, items, error] {
///     match client.fetch_skills().await.into_result("Failed to load skills.") {
///         Ok(list) => items.set(list.skills),
///         Err(message) => error.set(Some(message)),
///     }
/// });
/// ```
///
/// 2. With a parameter, typed or inferred from the `Callback` it feeds:
/// ```compile_fail
/// let on_delete = async_callback!([client, error, reload] |id: Id<Skill>| {
///     let envelope = client.delete_skill(id).await;
///     if !envelope.ok {
///         error.set(Some(envelope.first_error_or("Failed to delete skill.")));
///     }
///     reload.emit(());
/// });
/// ```
///
/// The body runs after the callback returns, so anything that must happen
/// synchronously (such as `prevent_default` on a submit event) belongs in a
/// plain callback that then emits this one.
macro_rules! async_callback {
    // The event form must come first: a closure is also a valid `expr`.
    ([$($var:ident),* $(,)?] |$event:ident $(: $event_ty:ty)?| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event $(: $event_ty)?| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}

#[macro_export]
/// Runs an async block once with cloned handles, outside of any callback.
/// Used from `use_effect_with` bodies that load data on mount.
///
/// ```compile_fail
/// use_effect_with((), move |_| {
///     spawn_with!([client, session] {
///         session.set(client.fetch_session().await.data);
///     });
/// });
/// ```
macro_rules! spawn_with {
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            wasm_bindgen_futures::spawn_local(async move {
                $body
            });
        }
    };
}
