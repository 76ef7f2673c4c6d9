use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ModalProps {
    pub open: bool,
    pub title: f::AttrValue,
    #[prop_or_default]
    pub description: Option<f::AttrValue>,
    #[prop_or_default]
    pub actions: Option<f::Html>,
    /// Wider box for multi-column forms.
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_close: f::Callback<()>,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Modal)]
pub fn modal(props: &ModalProps) -> f::Html {
    if !props.open {
        return f::Html::default();
    }
    let class = f::class_list(&["modal", "modal-open"], &props.class);
    let box_class = if props.wide {
        "modal-box w-11/12 max-w-3xl"
    } else {
        "modal-box"
    };
    let close = {
        let cb = props.on_close.clone();
        f::Callback::from(move |_: f::MouseEvent| cb.emit(()))
    };
    f::html! {
        <div class={class} role="dialog" aria-modal="true" aria-label={props.title.clone()}>
            <div class={box_class}>
                <div class="flex items-start justify-between">
                    <h3 class="text-lg font-bold">{ props.title.clone() }</h3>
                    <button type="button" class="btn btn-ghost btn-sm" aria-label="Close" onclick={close.clone()}>{"✕"}</button>
                </div>
                { props.description.as_ref().map(|d| f::html!{ <p class="py-2 text-base-content/70">{ d.clone() }</p> }).unwrap_or_default() }
                <div class="max-h-[70vh] overflow-y-auto py-2">
                    { for props.children.iter() }
                </div>
                { props.actions.clone().map(|actions| f::html!{
                    <div class="modal-action">{ actions }</div>
                }).unwrap_or_default() }
            </div>
            <div class="modal-backdrop" onclick={close}></div>
        </div>
    }
}
