use crate::components::daisy_ui::foundation as f;
use pokebot_core::steps::{StepNavigator, StepState};

#[derive(f::Properties, PartialEq, Clone)]
pub struct StepIndicatorProps {
    pub steps: Vec<f::AttrValue>,
    #[prop_or_default]
    pub current: usize,
    #[prop_or_default]
    pub class: f::Classes,
    /// Receives the clicked step index.
    #[prop_or_default]
    pub on_select: f::Callback<usize>,
}

/// Horizontal step rail: completed steps carry a check, the current one
/// `aria-current="step"`, and every step other than the current is clickable.
#[f::function_component(StepIndicator)]
pub fn step_indicator(props: &StepIndicatorProps) -> f::Html {
    let navigator = StepNavigator::with_initial(props.steps.len(), props.current);
    let class = f::class_list(&["flex", "w-full", "items-center"], &props.class);
    let last = props.steps.len().saturating_sub(1);
    f::html! {
        <nav aria-label="Progress">
            <ol class={class}>
                { for props.steps.iter().enumerate().map(|(idx, label)| {
                    let state = navigator.step_state(idx);
                    let onclick = {
                        let cb = props.on_select.clone();
                        f::Callback::from(move |_: f::MouseEvent| cb.emit(idx))
                    };
                    let (circle, marker, current) = match state {
                        StepState::Completed => ("bg-primary text-primary-content", f::html! { {"✓"} }, None),
                        StepState::Current => (
                            "border-2 border-primary text-primary",
                            f::html! { { idx + 1 } },
                            Some("step"),
                        ),
                        StepState::Upcoming => (
                            "border-2 border-base-300 text-base-content/60",
                            f::html! { { idx + 1 } },
                            None,
                        ),
                    };
                    let state_class = match state {
                        StepState::Completed => "step-completed",
                        StepState::Current => "step-current",
                        StepState::Upcoming => "step-upcoming",
                    };
                    let connector = if idx < last {
                        let color = if state == StepState::Completed { "bg-primary" } else { "bg-base-300" };
                        f::html! { <div class={f::classes!("step-connector", "mx-2", "h-0.5", "flex-1", color)} aria-hidden="true"></div> }
                    } else {
                        f::Html::default()
                    };
                    f::html! {
                        <li class={f::classes!("flex", "items-center", (idx < last).then_some("flex-1"), state_class)}>
                            <button
                                type="button"
                                class="flex items-center gap-2"
                                aria-current={current}
                                disabled={state == StepState::Current}
                                onclick={onclick}
                            >
                                <span class={f::classes!("flex", "h-8", "w-8", "items-center", "justify-center", "rounded-full", "text-sm", "font-semibold", circle)}>
                                    { marker }
                                </span>
                                <span class="hidden text-sm font-medium sm:inline">{ label.clone() }</span>
                            </button>
                            { connector }
                        </li>
                    }
                }) }
            </ol>
        </nav>
    }
}
