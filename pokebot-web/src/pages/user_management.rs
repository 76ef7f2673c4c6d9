use crate::components::daisy_ui::{Badge, Card, DaisyColor, DaisySize, Input, Table};
use pokebot_core::users::{MOCK_USERS, search_users};
use yew::prelude::*;

const HEADERS: [&str; 5] = ["User", "Pokémon", "Items", "Gold", "Status"];

#[function_component(UserManagementPage)]
pub fn user_management_page() -> Html {
    let query = use_state(String::new);
    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let rows: Vec<Vec<Html>> = search_users(&MOCK_USERS, &query)
        .into_iter()
        .map(|user| {
            vec![
                html! {
                    <div>
                        <div class="font-semibold">{ user.discord_name }</div>
                        <div class="text-xs opacity-60">{ user.id }</div>
                    </div>
                },
                html! { <>{ user.pokemon_count }</> },
                html! { <>{ user.items_count }</> },
                html! { <span class="font-mono">{ user.gold }</span> },
                if user.is_shiny_hunter {
                    html! {
                        <Badge
                            variant={DaisyColor::Warning}
                            size={DaisySize::Sm}
                            label="Shiny Hunter"
                        />
                    }
                } else {
                    html! { <span class="opacity-60">{"Trainer"}</span> }
                },
            ]
        })
        .collect();

    html! {
        <Card
            title="Registered Users"
            subtitle="Users who have interacted with the bot"
            header_actions={html! {
                <Input
                    id="user-search"
                    class="w-64"
                    placeholder="Search by name or ID"
                    value={AttrValue::from((*query).clone())}
                    oninput={on_search}
                />
            }}
        >
            <Table
                headers={HEADERS.iter().map(|h| AttrValue::from(*h)).collect::<Vec<_>>()}
                rows={rows}
                empty_message="No users match your search."
            />
        </Card>
    }
}
