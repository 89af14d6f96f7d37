#[actix_web::main]
async fn main() -> std::io::Result<()> {
    sewercide_web::run().await
}
