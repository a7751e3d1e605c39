use clap::{Parser, Subcommand};

use dockyard::{
    config::Config,
    model::build::remaining_seconds,
    service::{CommanderService, LedgerService},
    startup, Error,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Commander ledger administration")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply pending database migrations.
    Migrate,
    /// Print a commander's balances, ships and builds.
    Show { commander_id: i32 },
    /// Overwrite a resource balance.
    SetResource {
        commander_id: i32,
        resource_id: i32,
        amount: u32,
    },
    /// Overwrite a stackable item count.
    SetItem {
        commander_id: i32,
        item_id: i32,
        amount: u32,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    startup::init_tracing(&config);

    if let Err(e) = run(&config, args.command).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config, command: Command) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;

    match command {
        Command::Migrate => {}
        Command::Show { commander_id } => {
            let commander = CommanderService::new(&db)
                .load_commander(commander_id)
                .await?;
            let now = chrono::Utc::now().naive_utc();

            println!(
                "Commander {} ({}) level {}, exchange count {}",
                commander.id(),
                commander.row.name,
                commander.row.level,
                commander.row.exchange_count
            );
            for resource in commander.resources.iter() {
                println!("  resource {:>6}: {}", resource.resource_id, resource.amount);
            }
            for item in commander.items.iter() {
                println!("  item     {:>6}: {}", item.item_id, item.count);
            }
            for item in commander.misc_items.iter() {
                println!("  misc     {:>6}: {}", item.item_id, item.data);
            }
            for entry in commander.ships.iter() {
                let name = entry
                    .template
                    .as_ref()
                    .map(|t| t.name.as_str())
                    .unwrap_or("<no template>");
                println!(
                    "  ship     {:>6}: template {} {}",
                    entry.ship.id, entry.ship.ship_id, name
                );
            }
            for build in commander.builds.iter() {
                println!(
                    "  build    {:>6}: template {} ready in {}s",
                    build.id,
                    build.ship_id,
                    remaining_seconds(build, now)
                );
            }
        }
        Command::SetResource {
            commander_id,
            resource_id,
            amount,
        } => {
            let mut commander = CommanderService::new(&db)
                .load_commander(commander_id)
                .await?;
            LedgerService::new(&db)
                .set_resource(&mut commander, resource_id, amount)
                .await?;
            tracing::info!(
                "Resource {} of commander {} set to {}",
                resource_id,
                commander_id,
                amount
            );
        }
        Command::SetItem {
            commander_id,
            item_id,
            amount,
        } => {
            let mut commander = CommanderService::new(&db)
                .load_commander(commander_id)
                .await?;
            LedgerService::new(&db)
                .set_item(&mut commander, item_id, amount)
                .await?;
            tracing::info!(
                "Item {} of commander {} set to {}",
                item_id,
                commander_id,
                amount
            );
        }
    }

    Ok(())
}
