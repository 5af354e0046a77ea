use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use villes_admin::models::{Authority, Joueur, Region, Resource, Ville};
use villes_admin::services::editor::delete_all;
use villes_admin::services::resolver::{resolve, Resolution};
use villes_admin::{ApplicationConfig, ClientError, EntityRepository, EntityService, QueryOptions, Sort};

/// Administration des régions, villes, joueurs et authorities
#[derive(Parser)]
#[command(name = "villes-admin", version)]
struct Cli {
    /// URL de base de l'API (sinon SERVER_API_URL / .env)
    #[arg(long, env = "SERVER_API_URL")]
    server_url: Option<String>,

    #[command(subcommand)]
    entity: EntityCommand,
}

#[derive(Subcommand)]
enum EntityCommand {
    #[command(subcommand)]
    Regions(Action),
    #[command(subcommand)]
    Villes(Action),
    #[command(subcommand)]
    Joueurs(Action),
    #[command(subcommand)]
    Authorities(Action),
}

#[derive(Subcommand)]
enum Action {
    /// Liste la collection (ordre du serveur)
    List(ListArgs),
    /// Affiche une entité
    Get { id: String },
    /// Supprime une ou plusieurs entités
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Args)]
struct ListArgs {
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    size: Option<u32>,
    /// "champ,asc" ou "champ,desc", répétable
    #[arg(long)]
    sort: Vec<Sort>,
    /// "clé=valeur", répétable
    #[arg(long, value_parser = parse_filter)]
    filter: Vec<(String, String)>,
}

impl ListArgs {
    fn into_options(self) -> QueryOptions {
        let mut options = QueryOptions {
            page: self.page,
            size: self.size,
            sort: self.sort,
            ..QueryOptions::default()
        };
        for (key, value) in self.filter {
            options = options.filter(key, value);
        }
        options
    }
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("Invalid filter '{}' (expected key=value)", raw))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, ClientError> {
    let config = match cli.server_url {
        Some(url) => ApplicationConfig::new(&url)?,
        None => ApplicationConfig::from_env()?,
    };

    match cli.entity {
        EntityCommand::Regions(action) => execute::<Region>(&config, action).await,
        EntityCommand::Villes(action) => execute::<Ville>(&config, action).await,
        EntityCommand::Joueurs(action) => execute::<Joueur>(&config, action).await,
        EntityCommand::Authorities(action) => execute::<Authority>(&config, action).await,
    }
}

async fn execute<E: Resource>(config: &ApplicationConfig, action: Action) -> Result<ExitCode, ClientError> {
    let service = EntityService::<E>::new(config)?;

    match action {
        Action::List(args) => {
            let entities = service.query(&args.into_options()).await?;
            println!("{}", serde_json::to_string_pretty(&entities)?);
            Ok(ExitCode::SUCCESS)
        }
        Action::Get { id } => match resolve::<E, _>(&service, Some(id.as_str())).await? {
            Resolution::Found(entity) => {
                println!("{}", serde_json::to_string_pretty(&entity)?);
                Ok(ExitCode::SUCCESS)
            }
            _ => {
                eprintln!("⚠️  {} '{}' not found", E::ENTITY_NAME, id);
                Ok(ExitCode::from(2))
            }
        },
        Action::Delete { ids } => {
            let mut parsed = Vec::with_capacity(ids.len());
            for raw in &ids {
                match E::parse_id(raw) {
                    Some(id) => parsed.push(id),
                    None => {
                        eprintln!("⚠️  Invalid {} id: {}", E::ENTITY_NAME, raw);
                        return Ok(ExitCode::from(2));
                    }
                }
            }

            // un échec n'empêche pas d'afficher les autres résultats
            let results = delete_all::<E, _>(&service, &parsed).await;

            let mut failed = false;
            for (id, result) in parsed.iter().zip(results) {
                match result {
                    Ok(true) => println!("✅ {} {} deleted", E::ENTITY_NAME, id),
                    Ok(false) => println!("⚠️  {} {} not deleted", E::ENTITY_NAME, id),
                    Err(e) => {
                        failed = true;
                        eprintln!("❌ {} {}: {}", E::ENTITY_NAME, id, e);
                    }
                }
            }
            Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("a=b"), Ok(("a".to_string(), "b".to_string())));
        assert_eq!(parse_filter(" nom =Vannes=56"), Ok(("nom".to_string(), "Vannes=56".to_string())));
        assert_eq!(parse_filter("a="), Ok(("a".to_string(), String::new())));
    }

    #[test]
    fn test_parse_filter_rejects_missing_key() {
        assert!(parse_filter("=b").is_err());
        assert!(parse_filter("ab").is_err());
    }

    #[test]
    fn test_into_options_param_order() {
        let args = ListArgs {
            page: Some(2),
            size: Some(20),
            sort: vec![Sort::desc("nom"), Sort::asc("id")],
            filter: vec![
                ("region.equals".to_string(), "3".to_string()),
                ("nom.contains".to_string(), "an".to_string()),
                ("region.equals".to_string(), "4".to_string()),
            ],
        };

        let params = args.into_options().to_params();

        let expected = [
            ("page", "2"),
            ("size", "20"),
            ("nom.contains", "an"),
            ("region.equals", "3"),
            ("region.equals", "4"),
            ("sort", "nom,desc"),
            ("sort", "id,asc"),
        ];
        let expected: Vec<(String, String)> =
            expected.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn test_cli_parses_list_and_delete() {
        let cli = Cli::try_parse_from([
            "villes-admin", "--server-url", "http://localhost:9000/", "villes", "list",
            "--page", "1", "--sort", "nom,asc", "--filter", "nom.contains=an",
        ])
        .unwrap();
        assert_eq!(cli.server_url.as_deref(), Some("http://localhost:9000/"));
        match cli.entity {
            EntityCommand::Villes(Action::List(args)) => {
                assert_eq!(args.page, Some(1));
                assert_eq!(args.sort, vec![Sort::asc("nom")]);
                assert_eq!(args.filter, vec![("nom.contains".to_string(), "an".to_string())]);
            }
            _ => panic!("expected villes list"),
        }

        let cli = Cli::try_parse_from(["villes-admin", "joueurs", "delete", "1", "2"]).unwrap();
        assert!(matches!(
            cli.entity,
            EntityCommand::Joueurs(Action::Delete { ref ids }) if ids == &["1", "2"]
        ));

        assert!(Cli::try_parse_from(["villes-admin", "regions", "delete"]).is_err());
        assert!(Cli::try_parse_from(["villes-admin", "villes", "list", "--filter", "=x"]).is_err());
    }
}
