use crate::infra::build_vehicle_service;
use carlot::error::AppError;
use carlot::vehicles::{
    Condition, Details, Location, Manufacturer, RepositoryError, Vehicle, VehicleServiceError,
};
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Latitude for the demo vehicle
    #[arg(long, default_value_t = 38.0)]
    pub(crate) lat: f64,
    /// Longitude for the demo vehicle
    #[arg(long, default_value_t = -104.0)]
    pub(crate) lon: f64,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { lat, lon } = args;

    println!("Vehicle inventory demo");

    let pricing_url = spawn_collaborator(carlot_pricing::router()).await?;
    let maps_url = spawn_collaborator(carlot_maps::router()).await?;
    println!("Collaborators: pricing at {pricing_url}, maps at {maps_url}");

    let service = build_vehicle_service(&pricing_url, &maps_url);

    println!("\nCreating a used Toyota Camry at ({lat}, {lon})");
    let saved = match service.save(demo_vehicle(lat, lon)).await {
        Ok(vehicle) => vehicle,
        Err(err) => {
            println!("  Create failed: {err}");
            return Ok(());
        }
    };
    let id = match saved.id {
        Some(id) => id,
        None => {
            println!("  Store returned a record without an identifier");
            return Ok(());
        }
    };
    println!("- Assigned identifier {id}");
    if let Some(price) = &saved.price {
        println!("- Priced at {price}");
    }
    describe_location(&saved.location);

    println!("\nFetching vehicle {id} (price and address recomputed)");
    match service.find_by_id(id).await {
        Ok(vehicle) => match serde_json::to_string_pretty(&vehicle) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("  Payload unavailable: {err}"),
        },
        Err(err) => {
            println!("  Fetch failed: {err}");
            return Ok(());
        }
    }

    println!("\nUpdating mileage and color for vehicle {id}");
    let mut replacement = demo_vehicle(lat, lon);
    replacement.id = Some(id);
    replacement.details.mileage += 1_200;
    replacement.details.external_color = "silver".to_string();
    match service.save(replacement).await {
        Ok(vehicle) => println!(
            "- Now {} with {} miles, priced {}",
            vehicle.details.external_color,
            vehicle.details.mileage,
            vehicle.price.as_deref().unwrap_or("(no quote)")
        ),
        Err(err) => {
            println!("  Update failed: {err}");
            return Ok(());
        }
    }

    println!("\nListing the inventory (stored form, no enrichment)");
    match service.list() {
        Ok(vehicles) => {
            for vehicle in vehicles {
                let id_label = vehicle
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "unassigned".to_string());
                println!(
                    "- #{id_label} {} {} | stored price: {}",
                    vehicle.details.manufacturer.name,
                    vehicle.details.model,
                    vehicle.price.as_deref().unwrap_or("none")
                );
            }
        }
        Err(err) => {
            println!("  List failed: {err}");
            return Ok(());
        }
    }

    println!("\nDeleting vehicle {id}");
    if let Err(err) = service.delete(id) {
        println!("  Delete failed: {err}");
        return Ok(());
    }
    match service.find_by_id(id).await {
        Err(VehicleServiceError::Repository(RepositoryError::NotFound)) => {
            println!("- Fetch after delete reports: vehicle not found");
        }
        Ok(_) => println!("- Unexpected: record still present"),
        Err(err) => println!("- Fetch after delete failed: {err}"),
    }

    Ok(())
}

async fn spawn_collaborator(router: axum::Router) -> Result<String, AppError> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router).await {
            eprintln!("collaborator error: {err}");
        }
    });
    Ok(format!("http://{addr}"))
}

fn describe_location(location: &Location) {
    match (&location.address, &location.city, &location.state) {
        (Some(address), Some(city), Some(state)) => {
            println!("- Located near {address}, {city}, {state}");
        }
        _ => println!("- Address unresolved"),
    }
}

fn demo_vehicle(lat: f64, lon: f64) -> Vehicle {
    Vehicle {
        id: None,
        condition: Condition::Used,
        details: Details {
            body: "sedan".to_string(),
            model: "Camry".to_string(),
            manufacturer: Manufacturer {
                code: 105,
                name: "Toyota".to_string(),
            },
            number_of_doors: 4,
            fuel_type: "Gasoline".to_string(),
            engine: "2.5L I4".to_string(),
            mileage: 42_500,
            model_year: 2021,
            production_year: 2020,
            external_color: "white".to_string(),
        },
        location: Location::coordinate(lat, lon),
        price: None,
        created_at: None,
        modified_at: None,
    }
}
