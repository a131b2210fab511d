use accountapi::{Account, Attributes, Client};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let client = Client::from_env()?;

    let account = Account::new(
        "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc",
        "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
        Attributes {
            country: "GB".into(),
            base_currency: "GBP".into(),
            bank_id: "400300".into(),
            bank_id_code: "GBDSC".into(),
            bic: "NWBKGB22".into(),
            ..Attributes::default()
        },
    );

    let created = client.create(&account).await?;
    println!("{created:#?}");

    Ok(())
}
