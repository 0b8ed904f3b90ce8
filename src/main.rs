//! org-admin - terminal driver for the admin console
//!
//! Boots the console against a live admin server and runs one flow per
//! invocation: list and filter, the dependent team dropdown, create forms
//! and status toggles.

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use org_admin_rs::HttpAdminClient;
use org_admin_rs::config::Config;
use org_admin_rs::ui::forms::{Field, Form, SubmitButton};
use org_admin_rs::ui::notifications::Severity;
use org_admin_rs::ui::render::{role_badge_label, team_label};
use org_admin_rs::ui::{ActionArgs, AdminConsole, Document, Element, Host, UiEvent, actions};
use org_admin_rs::utils::logging::init_logging;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "org-admin", version, about = "Organization admin console driver")]
struct Cli {
    /// YAML configuration file; environment variables are used otherwise
    #[arg(long, env = "ORG_ADMIN_CONFIG")]
    config: Option<PathBuf>,

    /// Override the admin server base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the filtered collections
    List {
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Teams offered for a department
    Teams {
        #[arg(long)]
        department: String,
    },
    /// Submit the create-team form
    CreateTeam {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        department: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Submit the create-role form
    CreateRole {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Checked permission, repeatable
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },
    /// Flip a team's active flag
    ToggleTeam {
        id: i64,
        /// Whether the team is currently active
        #[arg(long, action = clap::ArgAction::Set)]
        active: bool,
    },
    /// Flip a role's active flag
    ToggleRole {
        id: i64,
        /// Whether the role is currently active
        #[arg(long, action = clap::ArgAction::Set)]
        active: bool,
    },
}

/// Host backed by the terminal
struct TerminalHost {
    assume_yes: bool,
}

impl Host for TerminalHost {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn navigate(&mut self, url: &str) {
        println!("-> {}", url);
    }

    fn navigate_after(&mut self, url: &str, delay: Duration) {
        println!("-> {} (after {} ms)", url, delay.as_millis());
    }

    fn reload(&mut self) {
        println!("-> reload");
    }

    fn submit_native(&mut self, form_id: &str) {
        println!("-> native submit of {}", form_id);
    }
}

async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    if let Some(base_url) = &cli.base_url {
        config.api = config.api.with_base_url(base_url.as_str());
        config.validate()?;
    }
    Ok(config)
}

fn filter_page() -> Document {
    let mut doc = Document::new("/admin/assignments");
    let body = doc.body();
    for id in ["departmentSelect", "teamSelect", "roleSelect", "userSelect"] {
        doc.append(body, Element::new("select").with_id(id));
    }
    doc.append(body, Element::new("input").with_id("searchInput"));
    doc.append(body, Element::new("div").with_id("rolePermissions"));
    doc.append(body, Element::new("div").with_id("userAssignments"));
    doc
}

fn team_loader_page(department: &str) -> Document {
    let mut doc = Document::new("/admin/users/create");
    let body = doc.body();
    doc.append(
        body,
        Element::new("select").with_id("department").with_value(department),
    );
    doc.append(body, Element::new("select").with_id("team"));
    doc
}

fn create_page(form: Form) -> Document {
    let mut doc = Document::new("/admin/create");
    doc.add_form(form);
    doc
}

fn print_listing(console: &AdminConsole<TerminalHost>) {
    let views = console.views();

    println!("Departments:");
    for department in &views.departments {
        println!("  {:>4}  {}", department.id, department.name);
    }
    println!("Teams:");
    for team in &views.teams {
        let status = if team.is_active() { "" } else { " (inactive)" };
        println!("  {:>4}  {}{}", team.id, team_label(team), status);
    }
    println!("Roles:");
    for role in &views.roles {
        let permissions = role.permissions.as_deref().unwrap_or_default().join(", ");
        println!("  {:>4}  {} [{}]", role.id, role.name, permissions);
    }
    println!("Users:");
    for user in &views.users {
        println!("  {:>4}  {} ({})", user.id, user.full_name(), user.email);
    }

    let assignments = console.cache().assignments(console.filter());
    println!("Assignments: {}", assignments.len());
    for user in assignments {
        let roles: Vec<String> = user
            .roles()
            .iter()
            .map(role_badge_label)
            .collect();
        let roles = if roles.is_empty() {
            "No roles assigned".to_string()
        } else {
            roles.join("; ")
        };
        println!("  {}  {}", user.full_name(), roles);
    }
}

/// Print the notification, if any; `false` when it reports an error
fn report(console: &AdminConsole<TerminalHost>) -> bool {
    match console.notifications().current() {
        Some(n) => {
            println!("[{}] {}", n.severity, n.message);
            n.severity != Severity::Error
        }
        None => true,
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = load_config(&cli).await.context("Failed to load configuration")?;
    init_logging(&config.logging)?;
    info!("Using admin server at {}", config.api.base_url);

    let api = Arc::new(HttpAdminClient::new(config.api())?);
    let host = TerminalHost {
        assume_yes: cli.yes,
    };
    let ui = config.ui().clone();

    match cli.command {
        Command::List {
            department,
            team,
            role,
            search,
        } => {
            let mut console = AdminConsole::new(ui, api, host, filter_page());
            console.start().await;
            if let Some(value) = department {
                console.dispatch(UiEvent::change("departmentSelect", &value)).await?;
            }
            if let Some(value) = team {
                console.dispatch(UiEvent::change("teamSelect", &value)).await?;
            }
            if let Some(value) = role {
                console.dispatch(UiEvent::change("roleSelect", &value)).await?;
            }
            if let Some(value) = search {
                console.dispatch(UiEvent::input("searchInput", &value)).await?;
            }
            print_listing(&console);
            Ok(report(&console))
        }
        Command::Teams { department } => {
            let mut console = AdminConsole::new(ui, api, host, team_loader_page(&department));
            console.dispatch(UiEvent::change("department", &department)).await?;

            let doc = console.document();
            if let Some(team) = doc.get_element_by_id("team") {
                for option in &doc.element(team).options {
                    println!("  {:>4}  {}", option.value, option.label);
                }
            }
            Ok(true)
        }
        Command::CreateTeam {
            name,
            department,
            description,
        } => {
            let form = Form::new("teamForm")
                .with_field(Field::text("name").required().with_value(&name))
                .with_field(Field::select("departmentId").required().with_value(&department))
                .with_field(Field::text("description").with_value(&description))
                .with_submit(SubmitButton::new("Create Team"));
            let mut console = AdminConsole::new(ui, api, host, create_page(form));
            console.dispatch(UiEvent::submit("teamForm")).await?;
            Ok(report(&console))
        }
        Command::CreateRole {
            name,
            description,
            permissions,
        } => {
            let mut form = Form::new("roleForm")
                .with_field(Field::text("name").required().with_value(&name))
                .with_field(Field::text("description").with_value(&description));
            for permission in &permissions {
                form = form.with_field(Field::checkbox("permissions", permission).checked());
            }
            let form = form.with_submit(SubmitButton::new("Create Role"));
            let mut console = AdminConsole::new(ui, api, host, create_page(form));
            console.dispatch(UiEvent::submit("roleForm")).await?;
            Ok(report(&console))
        }
        Command::ToggleTeam { id, active } => {
            let mut console = AdminConsole::new(ui, api, host, Document::default());
            let event = UiEvent::action(actions::TOGGLE_TEAM_STATUS, ActionArgs::toggle(id, active));
            console.dispatch(event).await?;
            Ok(true)
        }
        Command::ToggleRole { id, active } => {
            let mut console = AdminConsole::new(ui, api, host, Document::default());
            let event = UiEvent::action(actions::TOGGLE_ROLE_STATUS, ActionArgs::toggle(id, active));
            console.dispatch(event).await?;
            Ok(true)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
