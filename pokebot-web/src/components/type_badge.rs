use crate::components::daisy_ui::Badge;
use pokebot_core::pokedex::detail::type_color;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Type name in any case.
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypeBadge)]
pub fn type_badge(p: &Props) -> Html {
    let color = type_color(&p.name);
    html! {
        <Badge
            class={classes!("border-0", "capitalize", p.class.clone())}
            color={AttrValue::from(color)}
            label={p.name.clone()}
        />
    }
}
