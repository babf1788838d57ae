use sheets::{SheetName, SheetsClient, SheetsURL};
use std::collections::HashMap;
use std::error::Error;
use std::env;

struct ClientInfo {
    rows: usize,
    agreed_total: f64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::from_filename("./sheets/.env.local").ok();

    let sheet: SheetName = env::args()
        .nth(1)
        .unwrap_or_else(|| "All".to_string())
        .parse()?;

    let client = SheetsClient::new(SheetsURL::from_env()?);
    let rows = client.fetch_rows(sheet).await?;

    // Group rows by client name, whichever header the sheet uses for it
    let mut clients: HashMap<String, ClientInfo> = HashMap::new();
    for row in &rows {
        let name = row
            .first_text(&["client", "clientName"])
            .unwrap_or_else(|| "(unknown)".to_string());
        let agreed = row.first_number(&["agreedPrice", "totalPrice"]).unwrap_or(0.0);

        clients
            .entry(name)
            .and_modify(|info| {
                info.rows += 1;
                info.agreed_total += agreed;
            })
            .or_insert(ClientInfo {
                rows: 1,
                agreed_total: agreed,
            });
    }

    // Sort clients by agreed total (descending)
    let mut clients: Vec<_> = clients.into_iter().collect();
    clients.sort_by(|a, b| {
        b.1.agreed_total
            .partial_cmp(&a.1.agreed_total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    println!("{} rows in {}:", rows.len(), sheet);
    for (name, ClientInfo { rows, agreed_total }) in clients {
        println!("{} | {} rows | {:.2} CHF", name, rows, agreed_total);
    }

    Ok(())
}
