use crate::components::daisy_ui::foundation::width_style;
use crate::components::daisy_ui::{Card, Stat, StatItem};
use pokebot_core::users::{COMMANDS_PER_MONTH, ChartPoint, MOCK_USERS, POPULAR_SPAWNS, bar_percent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BarListProps {
    pub title: AttrValue,
    pub points: &'static [ChartPoint],
    #[prop_or_else(|| AttrValue::from("bg-primary"))]
    pub bar_class: AttrValue,
}

/// Horizontal bars scaled against the largest value.
#[function_component(BarList)]
pub fn bar_list(p: &BarListProps) -> Html {
    html! {
        <Card title={p.title.clone()}>
            <ul class="bar-list space-y-3">
                { for p.points.iter().map(|point| {
                    let percent = bar_percent(p.points, point.value);
                    html! {
                        <li class="space-y-1">
                            <div class="flex justify-between text-sm">
                                <span>{ point.label }</span>
                                <span class="font-mono">{ point.value }</span>
                            </div>
                            <div class="h-3 w-full rounded bg-base-300">
                                <div
                                    class={classes!("h-3", "rounded", p.bar_class.to_string())}
                                    style={width_style(f64::from(percent))}
                                />
                            </div>
                        </li>
                    }
                }) }
            </ul>
        </Card>
    }
}

static COMMANDS: &[ChartPoint] = &COMMANDS_PER_MONTH;
static SPAWNS: &[ChartPoint] = &POPULAR_SPAWNS;

#[function_component(OverviewPage)]
pub fn overview_page() -> Html {
    let total_commands: u32 = COMMANDS_PER_MONTH.iter().map(|p| p.value).sum();
    let total_gold: u32 = MOCK_USERS.iter().map(|u| u.gold).sum();
    let shiny_hunters = MOCK_USERS.iter().filter(|u| u.is_shiny_hunter).count();
    let stats = vec![
        StatItem::new("Registered Users", MOCK_USERS.len().to_string())
            .with_description(format!("{shiny_hunters} shiny hunter(s)")),
        StatItem::new("Commands (6 months)", total_commands.to_string())
            .with_description("Across all servers"),
        StatItem::new("Gold in Circulation", total_gold.to_string()),
    ];

    html! {
        <div class="space-y-6" id="overview">
            <Stat items={stats} class="w-full shadow" />
            <div class="grid gap-6 lg:grid-cols-2">
                <BarList title="Commands per Month" points={COMMANDS} />
                <BarList
                    title="Popular Spawns"
                    points={SPAWNS}
                    bar_class="bg-secondary"
                />
            </div>
        </div>
    }
}
