//! Trash view: soft-deleted entries with per-row restore and permanent
//! delete. Restore moves an entry back to the primary listing; a purge is
//! final.

use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::TrashComponent;

impl Component for TrashComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TrashComponent::new()
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
            load_trash(ctx.link().clone());
        }
    }
}

fn load_trash(link: Scope<TrashComponent>) {
    spawn_local(async move {
        match api::fetch_trash().await {
            Ok(entries) => link.send_message(Msg::TrashLoaded(entries)),
            Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
        }
    });
}
