#![cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;
use yew::Renderer;

use wanderwheel_web::app::App;
use wanderwheel_web::app::bootstrap::catalog_requests;
use wanderwheel_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

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
    dom::sleep_ms(0).await.expect("yield to renderer");
}

#[wasm_bindgen_test]
async fn app_renders_main_landmark_and_pick_button() {
    render_app().await;
    let doc = dom::document().expect("document");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    let text = main.text_content().unwrap_or_default();
    assert!(text.contains("Pick Our Trip!"));
}

#[wasm_bindgen_test]
async fn picking_with_empty_selection_raises_notice() {
    render_app().await;
    let doc = dom::document().expect("document");
    let button = doc
        .query_selector("button.btn-primary")
        .expect("query pick button")
        .expect("pick button exists");
    let button: web_sys::HtmlElement = wasm_bindgen::JsCast::dyn_into(button).expect("html element");
    button.click();
    dom::sleep_ms(50).await.expect("wait for notice");
    let tray = doc
        .query_selector(".notice-tray")
        .expect("query tray")
        .expect("tray exists");
    assert!(
        tray.text_content()
            .unwrap_or_default()
            .contains("You need to select at least 2 countries!")
    );
}

#[wasm_bindgen_test]
async fn catalog_is_requested_once_across_rerenders() {
    let before = catalog_requests();
    render_app().await;
    dom::sleep_ms(20).await.expect("let effects run");
    assert_eq!(catalog_requests(), before + 1);

    let doc = dom::document().expect("document");
    for _ in 0..3 {
        let button = doc
            .query_selector("button.btn-primary")
            .expect("query pick button")
            .expect("pick button exists");
        let button: web_sys::HtmlElement =
            wasm_bindgen::JsCast::dyn_into(button).expect("html element");
        button.click();
        dom::sleep_ms(20).await.expect("let the app re-render");
    }
    assert_eq!(catalog_requests(), before + 1);
}
