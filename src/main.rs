use lingafriq::app::App;
use lingafriq::error::user_friendly_message;
use lingafriq::Result;

#[tokio::main]
async fn main() -> Result<()> {
    lingafriq::logging::init()?;

    let mut app = App::new().map_err(|e| {
        eprintln!("{}", user_friendly_message(&e));
        e
    })?;
    app.init()?;
    app.run().await
}
