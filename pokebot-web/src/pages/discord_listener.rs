use crate::components::daisy_ui::{Badge, Button, Card, DaisyColor, DaisySize, Select, SelectOption};
use crate::dom;
use crate::hooks::use_cancel_token;
use pokebot_core::catalog::mock_channels;
use pokebot_core::feed::{
    ALL_CHANNELS, ALL_CHANNELS_LABEL, FEED_INTERVAL_MS, FeedEntry, FeedGenerator, FeedKind,
    FeedLog,
};
use pokebot_core::pokedex::CancelToken;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FeedItemProps {
    pub entry: FeedEntry,
}

#[function_component(FeedItem)]
pub fn feed_item(p: &FeedItemProps) -> Html {
    let entry = &p.entry;
    let tone = match entry.kind {
        FeedKind::UserMessage { .. } => "",
        FeedKind::BotAction { .. } => "bg-primary/10",
        FeedKind::SystemNotification { .. } => "bg-warning/10 italic",
    };
    html! {
        <li class={classes!("feed-entry", "flex", "gap-3", "rounded", "p-2", tone)}>
            if let Some(avatar) = entry.avatar() {
                <img class="h-8 w-8 rounded-full" src={avatar.to_string()} alt={entry.author().to_string()} />
            } else {
                <div class="flex h-8 w-8 items-center justify-center rounded-full bg-warning">{"!"}</div>
            }
            <div class="min-w-0 flex-1">
                <div class="flex flex-wrap items-baseline gap-2 text-sm">
                    <span class="font-semibold">{ entry.author().to_string() }</span>
                    <Badge size={DaisySize::Xs} outline={true} label={entry.channel_name.clone()} />
                    <span class="text-xs opacity-60">{ entry.timestamp.clone() }</span>
                </div>
                <p class="break-words">{ entry.text().to_string() }</p>
            </div>
        </li>
    }
}

fn channel_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL_CHANNELS, ALL_CHANNELS_LABEL))
        .chain(
            mock_channels()
                .into_iter()
                .map(|c| SelectOption::new(c.id, format!("#{}", c.name))),
        )
        .collect()
}

#[function_component(DiscordListenerPage)]
pub fn discord_listener_page() -> Html {
    let generator = use_mut_ref(|| FeedGenerator::new(0));
    let feed = use_mut_ref(FeedLog::default);
    let redraw = use_force_update();
    let page_cancel = use_cancel_token();
    let paused = use_state(|| false);
    let filter = use_state(|| ALL_CHANNELS.to_string());
    let log_ref = use_node_ref();

    {
        let generator = generator.clone();
        use_effect_with((), move |()| {
            *generator.borrow_mut() = FeedGenerator::new(dom::random_seed());
            || {}
        });
    }

    // Restart the timer whenever pause or the channel filter changes.
    {
        let (generator, feed, redraw) = (generator.clone(), feed.clone(), redraw.clone());
        use_effect_with(((*paused), (*filter).clone()), move |(paused, filter)| {
            let token = CancelToken::new();
            if !*paused {
                let token = token.clone();
                let filter = filter.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    loop {
                        if let Err(err) = dom::sleep_ms(FEED_INTERVAL_MS).await {
                            log::warn!("Feed timer failed: {}", dom::js_error_message(&err));
                            break;
                        }
                        if token.is_cancelled() || page_cancel.is_cancelled() {
                            break;
                        }
                        let entry = generator.borrow_mut().tick(&filter, dom::local_time());
                        if let Some(entry) = entry {
                            feed.borrow_mut().push(entry);
                            redraw.force_update();
                        }
                    }
                });
            }
            move || token.cancel()
        });
    }

    let newest = feed.borrow().entries().last().map(|e| e.id);
    {
        let log_ref = log_ref.clone();
        use_effect_with(newest, move |_| {
            if let Some(el) = log_ref.cast::<web_sys::Element>() {
                dom::scroll_to_bottom(&el);
            }
            || {}
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |value: AttrValue| filter.set(value.to_string()))
    };
    let on_pause = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(!*paused))
    };
    let on_clear = {
        let (feed, redraw) = (feed.clone(), redraw.clone());
        Callback::from(move |_: MouseEvent| {
            feed.borrow_mut().clear();
            redraw.force_update();
        })
    };

    let entries: Vec<FeedEntry> = feed.borrow().entries().cloned().collect();
    html! {
        <Card
            id="discord-listener"
            title="Live Discord Feed"
            subtitle={if *paused { "Paused" } else { "Listening for activity..." }}
            header_actions={html! {
                <div class="flex flex-wrap items-center gap-2">
                    <Select
                        id="feed-channel"
                        class="select-sm"
                        options={channel_options()}
                        value={AttrValue::from((*filter).clone())}
                        on_change={on_filter}
                    />
                    <Button
                        id="feed-pause"
                        size={DaisySize::Sm}
                        variant={if *paused { DaisyColor::Success } else { DaisyColor::Warning }}
                        label={if *paused { "Resume" } else { "Pause" }}
                        onclick={on_pause}
                    />
                    <Button size={DaisySize::Sm} variant={DaisyColor::Ghost} label="Clear" onclick={on_clear} />
                </div>
            }}
        >
            <ul
                ref={log_ref}
                id="feed-log"
                class="h-[28rem] space-y-1 overflow-y-auto"
                role="log"
                aria-live="polite"
            >
                if entries.is_empty() {
                    <li class="p-4 text-center opacity-60">{"Waiting for messages..."}</li>
                }
                { for entries.into_iter().map(|entry| { let id = entry.id; html! { <FeedItem key={id} entry={entry} /> } }) }
            </ul>
        </Card>
    }
}
