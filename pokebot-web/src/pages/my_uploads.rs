use crate::components::daisy_ui::{
    Button, Card, DaisyColor, DaisySize, FileInput, Loading, PickedFile,
};
use crate::dom;
use crate::hooks::use_cancel_token;
use pokebot_core::uploads::{ACCEPTED_TYPES, UPLOAD_DELAY_MS, UploadList, UploadedFile};
use std::rc::Rc;
use yew::prelude::*;

const UPLOADED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

enum UploadAction {
    Add(Vec<UploadedFile>),
    Remove(String),
}

#[derive(Default, PartialEq)]
struct Uploads(UploadList);

impl Reducible for Uploads {
    type Action = UploadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut list = self.0.clone();
        match action {
            UploadAction::Add(files) => list.extend(files),
            UploadAction::Remove(id) => {
                if let Some(file) = list.remove(&id) {
                    release_preview(&file.preview_url);
                }
            }
        }
        Rc::new(Self(list))
    }
}

fn release_preview(url: &str) {
    if !url.is_empty()
        && let Err(err) = web_sys::Url::revoke_object_url(url)
    {
        log::warn!("Could not release preview: {}", dom::js_error_message(&err));
    }
}

fn to_uploaded(picked: Vec<PickedFile>) -> Vec<UploadedFile> {
    let stamp = dom::now_ms();
    let uploaded_at = dom::local_now();
    picked
        .into_iter()
        .enumerate()
        .map(|(index, file)| UploadedFile {
            id: format!("file-{stamp}-{index}"),
            name: file.name,
            mime_type: file.mime_type,
            size: file.size,
            preview_url: file.preview_url,
            uploaded_at,
        })
        .collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct UploadCardProps {
    pub file: UploadedFile,
    pub on_delete: Callback<String>,
}

#[function_component(UploadCard)]
pub fn upload_card(p: &UploadCardProps) -> Html {
    let file = &p.file;
    let on_delete = {
        let cb = p.on_delete.clone();
        let id = file.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let preview = if file.is_image() && !file.preview_url.is_empty() {
        html! { <img class="h-32 w-full rounded object-cover" src={file.preview_url.clone()} alt={file.name.clone()} /> }
    } else {
        html! {
            <div class="flex h-32 items-center justify-center rounded bg-base-200 text-sm opacity-70">
                { file.mime_type.clone() }
            </div>
        }
    };
    html! {
        <li class="upload-card card bg-base-100 shadow">
            <div class="card-body gap-2 p-3">
                { preview }
                <div class="truncate font-semibold" title={file.name.clone()}>{ file.name.clone() }</div>
                <div class="flex justify-between text-xs opacity-70">
                    <span>{ file.size_label() }</span>
                    <span>{ file.uploaded_at.format(UPLOADED_AT_FORMAT).to_string() }</span>
                </div>
                <Button
                    size={DaisySize::Sm}
                    variant={DaisyColor::Error}
                    outline={true}
                    label="Delete"
                    aria_label={format!("Delete {}", file.name)}
                    onclick={on_delete}
                />
            </div>
        </li>
    }
}

#[function_component(MyUploadsPage)]
pub fn my_uploads_page() -> Html {
    let uploads = use_reducer(Uploads::default);
    let uploading = use_state(|| false);
    let cancel = use_cancel_token();

    let on_pick = {
        let uploads = uploads.dispatcher();
        let uploading = uploading.clone();
        Callback::from(move |picked: Vec<PickedFile>| {
            if picked.is_empty() {
                return;
            }
            uploading.set(true);
            let uploads = uploads.clone();
            let uploading = uploading.clone();
            let cancel = cancel.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = dom::sleep_ms(UPLOAD_DELAY_MS).await {
                    log::warn!("Upload timer failed: {}", dom::js_error_message(&err));
                }
                if cancel.is_cancelled() {
                    for file in &picked {
                        release_preview(&file.preview_url);
                    }
                    return;
                }
                log::info!("Uploaded {} file(s)", picked.len());
                uploads.dispatch(UploadAction::Add(to_uploaded(picked)));
                uploading.set(false);
            });
        })
    };
    let on_delete = {
        let uploads = uploads.dispatcher();
        Callback::from(move |id: String| uploads.dispatch(UploadAction::Remove(id)))
    };

    html! {
        <div class="space-y-6" id="my-uploads">
            <Card title="Upload Files" subtitle="Images, videos and SVGs for bot embeds">
                <FileInput
                    id="upload-input"
                    accept={ACCEPTED_TYPES}
                    multiple={true}
                    disabled={*uploading}
                    on_change={on_pick}
                />
                if *uploading {
                    <Loading label="Uploading..." />
                }
            </Card>
            <Card title="My Files">
                if uploads.0.is_empty() {
                    <p class="opacity-60">{"No files uploaded yet."}</p>
                } else {
                    <ul class="grid grid-cols-2 gap-4 md:grid-cols-3 lg:grid-cols-4">
                        { for uploads.0.files().iter().map(|file| html! {
                            <UploadCard key={file.id.clone()} file={file.clone()} on_delete={on_delete.clone()} />
                        }) }
                    </ul>
                }
            </Card>
        </div>
    }
}
