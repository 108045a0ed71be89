//! List the projects visible to an API key.
//!
//! Usage:
//!   TEAMWORK_SITE=https://yoursite.teamwork.com \
//!   TEAMWORK_API_KEY=your-key \
//!   cargo run --example list_projects

use serde_json::json;
use teamwork_api::TeamworkClient;

#[tokio::main]
async fn main() -> teamwork_api::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let site = std::env::var("TEAMWORK_SITE").expect("TEAMWORK_SITE must be set");
    let key = std::env::var("TEAMWORK_API_KEY").expect("TEAMWORK_API_KEY must be set");

    // Teamwork uses the API key as the username with a dummy password.
    let client = TeamworkClient::new(site, key, "x")?;

    let params = json!({"status": "active"}).as_object().cloned().unwrap();
    let projects = client.projects().list(params).await?;

    if let Some(list) = projects.get("projects").and_then(|p| p.as_array()) {
        println!("{} project(s)", list.len());
        for project in list {
            println!(
                "  {} {}",
                project.get("id").unwrap_or(&json!("?")),
                project.get("name").and_then(|n| n.as_str()).unwrap_or("?")
            );
        }
    } else {
        println!("{projects:#}");
    }

    Ok(())
}
