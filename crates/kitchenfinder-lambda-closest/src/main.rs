use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    kitchenfinder_lambda_closest::run().await
}
