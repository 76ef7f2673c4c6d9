use crate::components::daisy_ui::foundation as f;
#[cfg(target_arch = "wasm32")]
use f::TargetCast;

/// Metadata of one file chosen in the picker.
#[derive(Clone, PartialEq, Debug)]
pub struct PickedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    /// Object URL for previews; empty when one could not be created.
    pub preview_url: String,
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct FileInputProps {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub accept: Option<f::AttrValue>,
    #[prop_or_default]
    pub multiple: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<Vec<PickedFile>>,
}

#[cfg(target_arch = "wasm32")]
fn picked_files(input: &f::HtmlInputElement) -> Vec<PickedFile> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|idx| files.item(idx))
        .map(|file| {
            let preview_url = web_sys::Url::create_object_url_with_blob(&file)
                .map_err(|err| {
                    log::warn!(
                        "No preview for {}: {}",
                        file.name(),
                        crate::dom::js_error_message(&err)
                    );
                })
                .unwrap_or_default();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            PickedFile {
                name: file.name(),
                mime_type: file.type_(),
                size,
                preview_url,
            }
        })
        .collect()
}

#[f::function_component(FileInput)]
pub fn file_input(props: &FileInputProps) -> f::Html {
    let on_change = {
        let on_change = props.on_change.clone();
        #[cfg(target_arch = "wasm32")]
        {
            f::Callback::from(move |e: f::Event| {
                if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                    let files = picked_files(&input);
                    // Clear so picking the same file again fires another change.
                    input.set_value("");
                    if !files.is_empty() {
                        on_change.emit(files);
                    }
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = on_change;
            f::Callback::from(|_e: f::Event| {})
        }
    };
    let class = f::class_list(&["file-input", "file-input-bordered", "w-full"], &props.class);
    f::html! {
        <label class="form-control w-full gap-2">
            { props.label.as_ref().map(|l| f::html! { <span class="label-text">{ l.clone() }</span> }).unwrap_or_default() }
            <input
                id={f::attr_value(&props.id)}
                class={class}
                type="file"
                accept={f::attr_value(&props.accept)}
                multiple={props.multiple}
                disabled={props.disabled}
                onchange={on_change}
            />
        </label>
    }
}
