//! Cafe Desk CLI - one-shot maintenance tasks against the platform database.
//!
//! # Usage
//!
//! ```bash
//! # Connectivity and schema checks
//! cafe-cli db ping
//! cafe-cli db tables
//! cafe-cli db columns users
//!
//! # Apply migrations
//! cafe-cli migrate
//!
//! # Seed a test shop and its owner
//! cafe-cli shops create --name "Blue Door" --slug blue-door --currency EUR
//! cafe-cli users create --name "Asha" --role cafe_owner --email asha@example.com \
//!     --password 'flat-white-42' --shop blue-door
//!
//! # Reset every café owner's password to one value
//! cafe-cli users reset-passwords --role cafe_owner --password 'flat-white-42'
//!
//! # Exercise the registration endpoint
//! cafe-cli register --email owner@example.com
//! ```
//!
//! Every run logs either the task's result lines or its error, never both,
//! and exits 0 or 1 accordingly.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string (database tasks)
//! - `REGISTRATION_BASE_URL` - Base URL of the registration API
//! - `RUST_LOG`, `LOG_FORMAT` - Log filter and format

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use cafe_desk_admin::tasks::TaskReport;
use cafe_desk_admin::telemetry;
use cafe_desk_core::{CurrencyCode, MenuCategoryId, UserRole};

mod commands;

use commands::TaskResult;

#[derive(Parser)]
#[command(name = "cafe-cli")]
#[command(author, version, about = "Cafe Desk maintenance tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connectivity and schema introspection
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
    /// Apply pending database migrations
    Migrate,
    /// Manage shops
    Shops {
        #[command(subcommand)]
        action: ShopsAction,
    },
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Manage shop menus
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Send one registration request to the registration API
    Register {
        /// Contact email (this or --phone is required)
        #[arg(long)]
        email: Option<String>,

        /// Contact phone (this or --email is required)
        #[arg(long)]
        phone: Option<String>,

        #[arg(long, default_value = "Test Owner")]
        name: String,

        #[arg(long, default_value = "password123")]
        password: String,

        #[arg(long, default_value = "Test Cafe")]
        shop_name: String,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Run `SELECT version()`
    Ping,
    /// List tables in the public schema
    Tables,
    /// List the columns of one table
    Columns {
        /// Table name
        table: String,
    },
}

#[derive(Subcommand)]
enum ShopsAction {
    /// List all shops
    List,
    /// Insert a shop
    Create {
        #[arg(short, long)]
        name: String,

        /// Lowercase kebab-case identifier
        #[arg(short, long)]
        slug: String,

        /// ISO 4217 code (USD, EUR, GBP, CAD, AUD, INR, JPY)
        #[arg(short, long, default_value = "USD")]
        currency: CurrencyCode,
    },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List users
    List {
        /// Only users with this role
        #[arg(short, long)]
        role: Option<UserRole>,
    },
    /// Insert a user with a bcrypt password hash
    Create {
        #[arg(short, long)]
        name: String,

        /// `super_admin`, `affiliate`, `cafe_owner` or `staff`
        #[arg(short, long)]
        role: UserRole,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(short, long)]
        password: String,

        /// Slug of the shop the user belongs to
        #[arg(long)]
        shop: Option<String>,
    },
    /// Set the same password on every user with a role
    ResetPasswords {
        #[arg(short, long)]
        role: UserRole,

        #[arg(short, long)]
        password: String,
    },
    /// Check a password against every stored hash for a role
    VerifyPasswords {
        #[arg(short, long)]
        role: UserRole,

        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// Print a shop's menu
    List {
        /// Shop slug
        #[arg(short, long)]
        shop: String,
    },
    /// Insert a category
    AddCategory {
        /// Shop slug
        #[arg(short, long)]
        shop: String,

        #[arg(short, long)]
        name: String,

        #[arg(long, default_value_t = 0)]
        sort_order: i32,
    },
    /// Insert an item into a category
    AddItem {
        /// Category ID
        #[arg(short, long)]
        category: MenuCategoryId,

        #[arg(short, long)]
        name: String,

        /// Price in the shop currency, e.g. 4.50
        #[arg(short, long)]
        price: Decimal,
    },
    /// Seed categories and items from a YAML file
    Import {
        /// Shop slug
        #[arg(short, long)]
        shop: String,

        /// Path to the YAML file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing("info");

    let cli = Cli::parse();

    let (task, result) = run(cli).await;
    let report = TaskReport::from_result(task, result);
    report.emit();
    report.exit_code()
}

async fn run(cli: Cli) -> (&'static str, TaskResult) {
    match cli.command {
        Commands::Db { action } => match action {
            DbAction::Ping => ("db ping", commands::database::ping().await),
            DbAction::Tables => ("db tables", commands::database::tables().await),
            DbAction::Columns { table } => {
                ("db columns", commands::database::columns(&table).await)
            }
        },
        Commands::Migrate => ("migrate", commands::migrate::run().await),
        Commands::Shops { action } => match action {
            ShopsAction::List => ("shops list", commands::shops::list().await),
            ShopsAction::Create {
                name,
                slug,
                currency,
            } => (
                "shops create",
                commands::shops::create(&name, &slug, currency).await,
            ),
        },
        Commands::Users { action } => match action {
            UsersAction::List { role } => ("users list", commands::users::list(role).await),
            UsersAction::Create {
                name,
                role,
                email,
                phone,
                password,
                shop,
            } => (
                "users create",
                commands::users::create(commands::users::CreateUser {
                    name,
                    role,
                    email,
                    phone,
                    password: password.into(),
                    shop,
                })
                .await,
            ),
            UsersAction::ResetPasswords { role, password } => (
                "users reset-passwords",
                commands::users::reset_passwords(role, password.into()).await,
            ),
            UsersAction::VerifyPasswords { role, password } => (
                "users verify-passwords",
                commands::users::verify_passwords(role, password.into()).await,
            ),
        },
        Commands::Menu { action } => match action {
            MenuAction::List { shop } => ("menu list", commands::menu::list(&shop).await),
            MenuAction::AddCategory {
                shop,
                name,
                sort_order,
            } => (
                "menu add-category",
                commands::menu::add_category(&shop, &name, sort_order).await,
            ),
            MenuAction::AddItem {
                category,
                name,
                price,
            } => (
                "menu add-item",
                commands::menu::add_item(category, &name, price).await,
            ),
            MenuAction::Import { shop, file } => {
                ("menu import", commands::menu::import(&shop, &file).await)
            }
        },
        Commands::Register {
            email,
            phone,
            name,
            password,
            shop_name,
        } => (
            "register",
            commands::register::run(commands::register::RegisterArgs {
                name,
                email,
                phone,
                password: password.into(),
                shop_name,
            })
            .await,
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_role_and_currency_arguments() {
        let cli = Cli::try_parse_from([
            "cafe-cli",
            "users",
            "reset-passwords",
            "--role",
            "cafe-owner",
            "--password",
            "secret",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Users {
                action: UsersAction::ResetPasswords {
                    role: UserRole::CafeOwner,
                    ..
                }
            }
        ));

        let cli = Cli::try_parse_from([
            "cafe-cli", "shops", "create", "--name", "Blue Door", "--slug", "blue-door",
            "--currency", "eur",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Shops {
                action: ShopsAction::Create {
                    currency: CurrencyCode::EUR,
                    ..
                }
            }
        ));
    }

    #[test]
    fn test_register_with_phone_only_has_no_email() {
        let cli = Cli::try_parse_from(["cafe-cli", "register", "--phone", "9841000000"]).unwrap();
        let Commands::Register {
            email,
            phone,
            name,
            ..
        } = cli.command
        else {
            panic!("expected register");
        };
        assert_eq!(email, None);
        assert_eq!(phone.as_deref(), Some("9841000000"));
        assert_eq!(name, "Test Owner");
    }

    #[test]
    fn test_rejects_unknown_role() {
        assert!(
            Cli::try_parse_from(["cafe-cli", "users", "list", "--role", "barista"]).is_err()
        );
    }

    #[test]
    fn test_rejects_non_positive_category_id() {
        assert!(
            Cli::try_parse_from([
                "cafe-cli", "menu", "add-item", "--category", "0", "--name", "Latte", "--price",
                "4.50",
            ])
            .is_err()
        );
    }
}
