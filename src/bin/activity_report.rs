// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Example report against the authenticated athlete's Strava data:
//! profile, recent activity summaries, detail and streams of the most
//! recent activity, and all-time run totals.

use anyhow::Result;
use clap::Parser;
use strava_client::client::StravaClient;
use strava_client::config::Config;
use strava_client::summary::format_activity_summary;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file with client_id, client_secret and
    /// refresh_token
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    strava_client::logging::init_from_env()?;

    let args = Args::parse();

    let config = Config::load(args.config)?;
    let client = StravaClient::new(config.into_credentials());

    println!("Obteniendo información del atleta...");
    let athlete = client.get_athlete().await?;
    println!(
        "Atleta: {} {}",
        athlete["firstname"].as_str().unwrap_or("N/A"),
        athlete["lastname"].as_str().unwrap_or("N/A")
    );
    println!("ID: {}", athlete["id"]);
    println!();

    println!("Obteniendo las últimas 10 actividades...");
    let activities = client.get_activities(Some(10), None).await?;

    for (i, activity) in activities.iter().enumerate() {
        println!("\n--- Actividad {} ---", i + 1);
        println!("{}", format_activity_summary(activity));
    }

    if let Some(first_id) = activities.first().and_then(|a| a["id"].as_u64()) {
        println!("\nObteniendo detalles de la actividad {first_id}...");
        let detail = client.get_activity_by_id(first_id).await?;

        println!(
            "Descripción: {}",
            detail["description"].as_str().unwrap_or("Sin descripción")
        );
        let calories = detail["calories"]
            .as_f64()
            .map_or_else(|| "N/A".to_string(), |c| c.to_string());
        println!("Calorías: {calories}");
        println!(
            "Velocidad promedio: {:.2} km/h",
            detail["average_speed"].as_f64().unwrap_or(0.0) * 3.6
        );

        println!("\nObteniendo streams de la actividad {first_id}...");
        match client
            .get_activity_streams(first_id, Some(&["latlng", "distance", "altitude", "time"]))
            .await
        {
            Ok(streams) => {
                for stream in &streams {
                    let stream_type = stream["type"].as_str().unwrap_or("unknown");
                    let samples = stream["data"].as_array().map_or(0, Vec::len);
                    println!("Stream '{stream_type}': {samples} puntos de datos");
                }
            }
            Err(e) => println!("No se pudieron obtener los streams: {e}"),
        }
    }

    println!("\nObteniendo estadísticas del atleta...");
    if let Some(athlete_id) = athlete["id"].as_u64() {
        let stats = client.get_athlete_stats(athlete_id).await?;

        let all_run = &stats["all_run_totals"];
        if all_run.is_object() {
            println!("\nEstadísticas de carrera (todo el tiempo):");
            println!(
                "Distancia total: {:.2} km",
                all_run["distance"].as_f64().unwrap_or(0.0) / 1000.0
            );
            println!("Número de actividades: {}", all_run["count"].as_u64().unwrap_or(0));
            println!(
                "Tiempo total: {:.2} horas",
                all_run["moving_time"].as_f64().unwrap_or(0.0) / 3600.0
            );
        }
    }

    Ok(())
}
