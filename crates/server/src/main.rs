use englishquiz_server::run_app;

#[actix_web::main]
async fn main() {
    log::info!("Starting English Quiz API...");

    run_app().await;
}
