#[tokio::main]
async fn main() {
    baumate_backend::run().await;
}
