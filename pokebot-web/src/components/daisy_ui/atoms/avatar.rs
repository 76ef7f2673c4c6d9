use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct AvatarProps {
    /// Image URL; an empty or missing source falls back to `initials`.
    #[prop_or_default]
    pub src: Option<f::AttrValue>,
    #[prop_or_default]
    pub alt: Option<f::AttrValue>,
    #[prop_or_default]
    pub initials: Option<f::AttrValue>,
    #[prop_or_default]
    pub size: Option<f::DaisySize>,
    #[prop_or_default]
    pub class: f::Classes,
}

const fn width_class(size: Option<f::DaisySize>) -> &'static str {
    match size {
        Some(f::DaisySize::Xs) => "w-8",
        Some(f::DaisySize::Sm) => "w-10",
        Some(f::DaisySize::Lg) => "w-16",
        Some(f::DaisySize::Md) | None => "w-12",
    }
}

/// Round portrait for battlers and users.
#[f::function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> f::Html {
    let alt = props.alt.clone().unwrap_or_else(|| "avatar".into());
    let src = props.src.clone().filter(|src| !src.trim().is_empty());
    let frame = f::classes!("rounded-full", width_class(props.size));
    match src {
        Some(src) => f::html! {
            <div class={f::class_list(&["avatar"], &props.class)}>
                <div class={frame}>
                    <img src={src} alt={alt} loading="lazy" />
                </div>
            </div>
        },
        None => {
            let text = props.initials.clone().unwrap_or_else(|| "?".into());
            f::html! {
                <div class={f::class_list(&["avatar", "avatar-placeholder"], &props.class)}>
                    <div class={f::classes!(frame, "bg-neutral", "text-neutral-content")}>
                        <span role="img" aria-label={alt}>{ text }</span>
                    </div>
                </div>
            }
        }
    }
}
