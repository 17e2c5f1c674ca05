//! Entries table: list, search, sort, and per-row soft delete.
//!
//! The component holds the last fetched set and recomputes the visible order
//! client-side, so sort changes never hit the network. Search and date
//! lookups replace the held set wholesale with the service's answer.

use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::SevaTableComponent;

impl Component for SevaTableComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        SevaTableComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            load_entries(ctx.link().clone());
        }
    }
}

/// Refetches the full listing and feeds the outcome back as a message.
pub(super) fn load_entries(link: Scope<SevaTableComponent>) {
    spawn_local(async move {
        match api::fetch_entries().await {
            Ok(entries) => link.send_message(Msg::EntriesLoaded(entries)),
            Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
        }
    });
}
