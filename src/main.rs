use math_challenge::QuizApp;

const APP_NAME: &str = "30-Day Math Challenge";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 720.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    log::info!("Arrancando {APP_NAME} en el navegador");

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No hay documento en el que pintar");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("No se encontró el canvas 'the_canvas_id'");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(QuizApp::new(cc)))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("No se pudo arrancar la app: {e:?}");
        }
    });
}
