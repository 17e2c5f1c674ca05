use yew::html::Scope;
use yew::prelude::*;

use common::table::{SevaRow, TableBody};

use super::messages::Msg;
use super::state::{FetchState, TrashComponent};

pub fn view(component: &TrashComponent, ctx: &Context<TrashComponent>) -> Html {
    let link = ctx.link();
    html! {
        <table class="trash-table">
            <thead>
                <tr>
                    <th scope="col">{ "पुनः जोड़ें" }</th>
                    <th scope="col">{ "स्थाई हटाएं" }</th>
                    <th scope="col">{ "पाठ का नाम" }</th>
                    <th scope="col">{ "व्यक्ति का नाम" }</th>
                    <th scope="col">{ "गोत्र" }</th>
                    <th scope="col">{ "आरंभ तिथि" }</th>
                    <th scope="col">{ "समाप्ति तिथि" }</th>
                </tr>
            </thead>
            <tbody>
                { build_body(component, link) }
            </tbody>
        </table>
    }
}

fn build_body(component: &TrashComponent, link: &Scope<TrashComponent>) -> Html {
    match component.fetch {
        FetchState::Loading => placeholder_row("लोड हो रहा है..."),
        FetchState::Failed => placeholder_row("ट्रैश लोड करने में त्रुटि"),
        FetchState::Loaded => match TableBody::from_entries(&component.entries) {
            TableBody::Empty => placeholder_row("कोई सेवा नहीं मिली"),
            TableBody::Rows(rows) => rows.iter().map(|row| data_row(row, link)).collect::<Html>(),
        },
    }
}

fn placeholder_row(message: &'static str) -> Html {
    html! {
        <tr>
            <td colspan="7" class="placeholder">{ message }</td>
        </tr>
    }
}

fn data_row(row: &SevaRow, link: &Scope<TrashComponent>) -> Html {
    let id = row.id;
    html! {
        <tr key={id.to_string()}>
            <td>
                <input
                    type="checkbox"
                    class="restore-checkbox"
                    data-id={id.to_string()}
                    onchange={link.callback(move |_: Event| Msg::Restore(id))}
                />
            </td>
            <td>
                <input
                    type="checkbox"
                    class="delete-checkbox"
                    data-id={id.to_string()}
                    onchange={link.callback(move |_: Event| Msg::Purge(id))}
                />
            </td>
            <td>{ row.paath_name.clone() }</td>
            <td>{ row.person_name.clone() }</td>
            <td>{ row.gotra_name.clone() }</td>
            <td>{ row.start_date.clone() }</td>
            <td>{ row.end_date.clone() }</td>
        </tr>
    }
}
