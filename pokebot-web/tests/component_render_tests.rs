use futures::executor::block_on;
use pokebot_core::catalog::{Channel, mock_channels};
use pokebot_core::SaveStatus;
use pokebot_web::components::daisy_ui::{
    Avatar, Badge, DaisyColor, Progress, StepIndicator, Tab, TabItem, Table, Textarea, Toggle,
};
use pokebot_web::components::{
    ChannelPicker, Header, SaveBanner, Sidebar, TypeBadge, WizardNav, channel_picker, header,
    save_banner, wizard_nav,
};
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

fn render<C: BaseComponent>(props: C::Properties) -> String {
    block_on(LocalServerRenderer::<C>::with_props(props).render())
}

fn banner(status: SaveStatus) -> String {
    render::<SaveBanner>(save_banner::Props {
        status,
        saving_label: None,
        on_dismiss: None,
    })
}

#[test]
fn save_banner_reflects_each_status() {
    assert!(!banner(SaveStatus::Idle).contains("alert"));
    assert!(banner(SaveStatus::Saving).contains("Saving..."));

    let saved = banner(SaveStatus::Saved("Spawn configuration saved successfully!".into()));
    assert!(saved.contains("alert-success"));
    assert!(saved.contains("Spawn configuration saved successfully!"));

    let failed = banner(SaveStatus::Failed("Error saving: boom".into()));
    assert!(failed.contains("alert-error"));
    assert!(failed.contains("Save failed"));
    assert!(failed.contains("Error saving: boom"));
}

#[test]
fn save_banner_uses_custom_saving_label() {
    let html = render::<SaveBanner>(save_banner::Props {
        status: SaveStatus::Saving,
        saving_label: Some("Saving shop items...".into()),
        on_dismiss: None,
    });
    assert!(html.contains("Saving shop items..."));
}

fn nav(is_first: bool, is_last: bool, step_valid: bool) -> wizard_nav::Props {
    wizard_nav::Props {
        is_first,
        is_last,
        step_valid,
        saving: false,
        issue: Some("Select at least one channel".into()),
        save_label: "Save Configuration".into(),
        on_back: Callback::noop(),
        on_next: Callback::noop(),
        on_save: Callback::noop(),
    }
}

#[test]
fn wizard_nav_switches_next_for_save_on_last_step() {
    let first = render::<WizardNav>(nav(true, false, true));
    assert!(first.contains("id=\"wizard-next\""));
    assert!(first.contains("Next"));
    assert!(!first.contains("Save Configuration"));

    let last = render::<WizardNav>(nav(false, true, true));
    assert!(last.contains("id=\"wizard-save\""));
    assert!(last.contains("Save Configuration"));
}

#[test]
fn wizard_nav_shows_issue_only_for_invalid_steps() {
    let invalid = render::<WizardNav>(nav(false, false, false));
    assert!(invalid.contains("Select at least one channel"));
    assert!(invalid.contains("role=\"alert\""));

    let valid = render::<WizardNav>(nav(false, false, true));
    assert!(!valid.contains("Select at least one channel"));
}

#[test]
fn step_indicator_marks_completed_and_current_steps() {
    let html = render::<StepIndicator>(yew::props!(<StepIndicator as BaseComponent>::Properties {
        steps: vec![
            AttrValue::from("Channels"),
            AttrValue::from("Timing"),
            AttrValue::from("Finalize"),
        ],
        current: 1,
    }));
    assert!(html.contains("step-completed"));
    assert!(html.contains("step-current"));
    assert!(html.contains("step-upcoming"));
    assert!(html.contains("aria-current=\"step\""));
    assert!(html.contains("✓"));
    assert_eq!(html.matches("step-connector").count(), 2);
}

fn picker(channels: Vec<Channel>, selected: Vec<String>, loading: bool) -> String {
    render::<ChannelPicker>(channel_picker::Props {
        channels,
        selected,
        loading,
        error: None,
        on_retry: None,
        on_toggle: Callback::noop(),
    })
}

#[test]
fn channel_picker_covers_loading_empty_and_selection() {
    assert!(picker(Vec::new(), Vec::new(), true).contains("Loading channels..."));
    assert!(picker(Vec::new(), Vec::new(), false).contains("No channels available."));

    let channels = mock_channels();
    let first = channels[0].id.clone();
    let html = picker(channels.clone(), vec![first], false);
    assert!(html.contains(&format!("#{}", channels[0].name)));
    assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
    assert_eq!(
        html.matches("aria-pressed=\"false\"").count(),
        channels.len() - 1
    );
}

#[test]
fn channel_picker_reports_a_failed_load_instead_of_spinning() {
    let html = render::<ChannelPicker>(channel_picker::Props {
        channels: Vec::new(),
        selected: Vec::new(),
        loading: true,
        error: Some("Could not load channels: Request rejected: gateway down".into()),
        on_retry: Some(Callback::noop()),
        on_toggle: Callback::noop(),
    });
    assert!(html.contains("channel-error"));
    assert!(html.contains("alert-error"));
    assert!(html.contains("Could not load channels: Request rejected: gateway down"));
    assert!(html.contains("retry-channels"));
    assert!(!html.contains("Loading channels..."));
}

#[test]
fn table_shows_empty_message_without_rows() {
    let html = render::<Table>(yew::props!(<Table as BaseComponent>::Properties {
        headers: vec![AttrValue::from("User"), AttrValue::from("Gold")],
        rows: Vec::new(),
        empty_message: Some(AttrValue::from("No users match your search.")),
    }));
    assert!(html.contains("No users match your search."));
    assert!(html.contains("colspan=\"2\""));
}

#[test]
fn table_renders_each_cell() {
    let html = render::<Table>(yew::props!(<Table as BaseComponent>::Properties {
        headers: vec![AttrValue::from("User")],
        rows: vec![vec![html! { "TrainerAsh" }], vec![html! { "MistyFan_01" }]],
    }));
    assert!(html.contains("TrainerAsh"));
    assert!(html.contains("MistyFan_01"));
    assert!(!html.contains("Nothing to show."));
}

#[test]
fn header_toggles_theme_label() {
    let props = |dark| header::Props {
        title: "Pokedex".into(),
        dark,
        on_toggle_theme: Callback::noop(),
        on_toggle_sidebar: Callback::noop(),
    };
    let light = render::<Header>(props(false));
    assert!(light.contains("Pokedex"));
    assert!(light.contains("Switch to dark mode"));
    let dark = render::<Header>(props(true));
    assert!(dark.contains("Switch to light mode"));
    assert!(dark.contains("aria-pressed=\"true\""));
}

#[derive(Properties, PartialEq)]
struct SidebarAtProps {
    path: AttrValue,
    expanded: Vec<&'static str>,
}

#[function_component(SidebarAt)]
fn sidebar_at(props: &SidebarAtProps) -> Html {
    let history = use_memo(props.path.clone(), |path| {
        AnyHistory::from(MemoryHistory::with_entries(vec![path.to_string()]))
    });
    html! {
        <Router history={(*history).clone()}>
            <Sidebar
                path={props.path.clone()}
                open={false}
                expanded={props.expanded.clone()}
                on_toggle_group={Callback::noop()}
            />
        </Router>
    }
}

#[test]
fn sidebar_opens_the_group_holding_the_active_page() {
    let html = render::<SidebarAt>(SidebarAtProps {
        path: "/pokemon/shop-setup".into(),
        expanded: Vec::new(),
    });
    assert!(html.contains("Shop Setup"));
    assert!(html.contains("Event Scheduler"));
    assert!(!html.contains("Colorfy"));
    assert_eq!(html.matches("gap-3 active").count(), 1);
}

#[test]
fn sidebar_keeps_hand_expanded_groups_open() {
    let html = render::<SidebarAt>(SidebarAtProps {
        path: "/dashboard".into(),
        expanded: vec!["ui"],
    });
    assert!(html.contains("Colorfy"));
    assert!(html.contains("Control Terminal"));
    assert!(!html.contains("Shop Setup"));
}

#[test]
fn type_badge_uses_type_colour() {
    let html = render::<TypeBadge>(yew::props!(<TypeBadge as BaseComponent>::Properties {
        name: AttrValue::from("fire"),
    }));
    assert!(html.contains("fire"));
    assert!(html.contains("capitalize"));
    assert!(html.contains("background-color"));
}

#[test]
fn tab_mounts_only_the_active_panel() {
    let tabs = vec![
        TabItem {
            id: "Battle UI".into(),
            label: "Battle UI".into(),
            disabled: false,
            content: Some(html! { <p>{"battle panel"}</p> }),
        },
        TabItem {
            id: "AI Battlers".into(),
            label: "AI Battlers".into(),
            disabled: false,
            content: Some(html! { <p>{"roster panel"}</p> }),
        },
    ];
    let html = render::<Tab>(yew::props!(<Tab as BaseComponent>::Properties { tabs: tabs.clone() }));
    assert!(html.contains("battle panel"));
    assert!(!html.contains("roster panel"));
    assert!(html.contains("id=\"tab-battle-ui\""));

    let second = render::<Tab>(yew::props!(<Tab as BaseComponent>::Properties {
        tabs,
        active_id: Some(AttrValue::from("AI Battlers")),
    }));
    assert!(second.contains("roster panel"));
}

#[test]
fn avatar_falls_back_to_initials() {
    let html = render::<Avatar>(yew::props!(<Avatar as BaseComponent>::Properties {
        src: Some(AttrValue::from("")),
        alt: Some(AttrValue::from("Champion Cynthia")),
        initials: Some(AttrValue::from("CC")),
    }));
    assert!(html.contains("avatar-placeholder"));
    assert!(html.contains("CC"));
    assert!(!html.contains("<img"));
}

#[test]
fn textarea_counts_characters_against_limit() {
    let html = render::<Textarea>(yew::props!(<Textarea as BaseComponent>::Properties {
        value: AttrValue::from("Welcome!"),
        max_length: Some(2000),
    }));
    assert!(html.contains("8 / 2000"));
    assert!(html.contains("maxlength=\"2000\""));
}

#[test]
fn toggle_renders_label_and_hint() {
    let html = render::<Toggle>(yew::props!(<Toggle as BaseComponent>::Properties {
        checked: true,
        label: Some(AttrValue::from("Development Mode")),
        hint: Some(AttrValue::from("Use the test API key")),
    }));
    assert!(html.contains("Development Mode"));
    assert!(html.contains("Use the test API key"));
    assert!(html.contains("role=\"switch\""));
}

#[test]
fn progress_and_badge_render_variants() {
    let progress = render::<Progress>(yew::props!(<Progress as BaseComponent>::Properties {
        value: 40.0,
        variant: Some(DaisyColor::Primary),
        label: Some(AttrValue::from("40 / 100")),
    }));
    assert!(progress.contains("progress-primary"));
    assert!(progress.contains("40 / 100"));

    let badge = render::<Badge>(yew::props!(<Badge as BaseComponent>::Properties {
        label: Some(AttrValue::from("Admin")),
        variant: Some(DaisyColor::Warning),
    }));
    assert!(badge.contains("badge-warning"));
    assert!(badge.contains("Admin"));
}
