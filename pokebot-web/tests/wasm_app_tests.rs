#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use wasm_bindgen::JsCast;
use yew::Renderer;

use pokebot_web::app::App;
use pokebot_web::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    dom::sleep_ms(50).await.expect("settle");
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    render_app().await;
    let doc = dom::document().expect("document");
    assert!(
        doc.query_selector("a[href='#main']")
            .expect("query skip link")
            .is_some()
    );
    assert!(doc.get_element_by_id("main").is_some());
}

#[wasm_bindgen_test]
async fn theme_toggle_flips_dark_class() {
    render_app().await;
    let doc = dom::document().expect("document");
    let root = dom::root_element().expect("html element");
    let was_dark = root.class_list().contains("dark");
    let toggle = doc
        .get_element_by_id("theme-toggle")
        .expect("theme toggle")
        .dyn_into::<HtmlElement>()
        .expect("button element");
    toggle.click();
    dom::sleep_ms(50).await.expect("settle");
    assert_ne!(root.class_list().contains("dark"), was_dark);
}

#[wasm_bindgen_test]
async fn dashboard_home_renders_overview() {
    render_app().await;
    let doc = dom::document().expect("document");
    assert!(doc.get_element_by_id("page-title").is_some());
    assert!(doc.get_element_by_id("overview").is_some());
}
