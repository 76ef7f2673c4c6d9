use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq, Debug)]
pub struct StatItem {
    pub title: f::AttrValue,
    pub value: f::AttrValue,
    pub description: Option<f::AttrValue>,
    pub icon: Option<f::AttrValue>,
}

impl StatItem {
    #[must_use]
    pub fn new(title: impl Into<f::AttrValue>, value: impl Into<f::AttrValue>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            description: None,
            icon: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<f::AttrValue>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<f::AttrValue>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct StatProps {
    pub items: Vec<StatItem>,
    #[prop_or_default]
    pub vertical: bool,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Stat)]
pub fn stat(props: &StatProps) -> f::Html {
    let mut class = f::class_list(&["stats", "shadow", "bg-base-100"], &props.class);
    if props.vertical {
        class.push("stats-vertical");
    } else {
        class.push("stats-vertical lg:stats-horizontal");
    }
    f::html! {
        <div class={class}>
            { for props.items.iter().map(|item| f::html!{
                <div class="stat">
                    { item.icon.as_ref().map(|icon| f::html!{ <div class="stat-figure text-3xl" aria-hidden="true">{ icon.clone() }</div> }).unwrap_or_default() }
                    <div class="stat-title">{ item.title.clone() }</div>
                    <div class="stat-value">{ item.value.clone() }</div>
                    { item.description.as_ref().map(|d| f::html!{ <div class="stat-desc">{ d.clone() }</div> }).unwrap_or_default() }
                </div>
            }) }
        </div>
    }
}
