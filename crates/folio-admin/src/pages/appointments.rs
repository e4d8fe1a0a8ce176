use chrono::{DateTime, Utc};
use yew::prelude::*;

use folio::data::Appointment;
use folio::spawn_with;

use crate::components::{ErrorBanner, Spinner};
use crate::providers::api;

fn when(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn notifications(appointment: &Appointment) -> String {
    match (appointment.notify_email, appointment.notify_sms) {
        (true, true) => "email, sms".to_string(),
        (true, false) => "email".to_string(),
        (false, true) => "sms".to_string(),
        (false, false) => "none".to_string(),
    }
}

#[function_component(AppointmentsPage)]
pub fn appointments_page() -> Html {
    let api = use_memo((), |_| api::create());
    let appointments = use_state(|| None::<Vec<Appointment>>);
    let error_msg = use_state(|| None::<String>);

    {
        let api = api.clone();
        let appointments = appointments.clone();
        let error_msg = error_msg.clone();
        use_effect_with((), move |_| {
            spawn_with!([api, appointments, error_msg] {
                let envelope = api.fetch_appointments(None).await;
                match envelope.into_result("Failed to load appointments.") {
                    Ok(list) => appointments.set(Some(list.appointments)),
                    Err(message) => {
                        appointments.set(Some(Vec::new()));
                        error_msg.set(Some(message));
                    }
                }
            });
        });
    }

    let body = match appointments.as_ref() {
        None => html! { <Spinner /> },
        Some(list) if list.is_empty() => html! {
            <p class="text-gray-500">{ "No appointments yet." }</p>
        },
        Some(list) => html! {
            <table class="w-full bg-white border border-gray-200 rounded text-sm">
                <thead>
                    <tr class="text-left text-gray-500 border-b border-gray-200">
                        <th class="p-2">{ "Event" }</th>
                        <th class="p-2">{ "Start" }</th>
                        <th class="p-2">{ "End" }</th>
                        <th class="p-2">{ "Email" }</th>
                        <th class="p-2">{ "Phone" }</th>
                        <th class="p-2">{ "Notify" }</th>
                        <th class="p-2">{ "Received" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for list.iter().map(|appointment| html! {
                        <tr key={appointment.id.get()} class="border-b border-gray-100">
                            <td class="p-2">{ &appointment.event_type }</td>
                            <td class="p-2">{ when(&appointment.start_time) }</td>
                            <td class="p-2">{ when(&appointment.end_time) }</td>
                            <td class="p-2">{ &appointment.email }</td>
                            <td class="p-2">{ &appointment.phone_e164 }</td>
                            <td class="p-2">{ notifications(appointment) }</td>
                            <td class="p-2">{ appointment.received_at.as_ref().map(when).unwrap_or_default() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{ "Appointments" }</h1>
            <ErrorBanner message={(*error_msg).clone()} />
            { body }
        </div>
    }
}
