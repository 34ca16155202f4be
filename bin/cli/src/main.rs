//! Command-line client for the copper-hornet organization directory.
//!
//! Every invocation signs in with the provided identity assertion, then
//! runs one command against the directory service and prints the response
//! as JSON.

use clap::{Parser, Subcommand};
use copper_hornet_core::{InvitationId, OrganizationId};
use copper_hornet_directory::{DirectoryClient, DirectoryConfig, DirectoryError, ProfileUpdate};
use copper_hornet_session::IdentityAssertion;
use rootcause::Report;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "copper-hornet")]
#[command(about = "Client for the copper-hornet organization directory")]
#[command(version)]
struct Args {
    /// Identity assertion from the external provider's sign-in callback
    #[arg(short, long, env = "HORNET_ASSERTION")]
    assertion: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Profile operations
    Me {
        #[command(subcommand)]
        action: MeCommands,
    },
    /// Organization operations
    Org {
        #[command(subcommand)]
        action: OrgCommands,
    },
    /// Invitation operations
    Invitation {
        #[command(subcommand)]
        action: InvitationCommands,
    },
}

#[derive(Subcommand, Debug)]
enum MeCommands {
    /// Show the authenticated user's profile
    Show,
    /// Update the authenticated user's profile
    Update {
        #[arg(long)]
        firstname: String,
        #[arg(long)]
        lastname: String,
        #[arg(long)]
        email: String,
    },
    /// Deactivate the authenticated user's account
    Delete,
}

#[derive(Subcommand, Debug)]
enum OrgCommands {
    /// List organizations the user belongs to
    List,
    /// Create an organization
    Create {
        /// Organization name
        name: String,
    },
    /// Show organization details
    Show {
        /// Organization ID
        id: OrganizationId,
    },
    /// Rename an organization
    Rename {
        /// Organization ID
        id: OrganizationId,
        /// New name
        name: String,
    },
    /// Remove an organization
    Remove {
        /// Organization ID
        id: OrganizationId,
    },
    /// List an organization's members
    Members {
        /// Organization ID
        id: OrganizationId,
    },
    /// List an organization's invitations
    Invitations {
        /// Organization ID
        id: OrganizationId,
    },
    /// Invite a user to an organization
    Invite {
        /// Organization ID
        id: OrganizationId,
        /// Email address to invite
        email: String,
    },
}

#[derive(Subcommand, Debug)]
enum InvitationCommands {
    /// Show invitation details
    Show {
        /// Invitation ID
        id: InvitationId,
    },
    /// Resend a pending invitation
    Resend {
        /// Invitation ID
        id: InvitationId,
    },
    /// Accept an invitation by its code
    Accept {
        /// Invitation code
        code: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = DirectoryConfig::from_env().expect("failed to load configuration");
    let mut client = DirectoryClient::new(&config).expect("failed to build client");

    client
        .sign_in(IdentityAssertion::new(args.assertion))
        .await
        .expect("sign-in failed");
    tracing::debug!("signed in");

    run(&client, args.command).await.expect("request failed");
}

async fn run(client: &DirectoryClient, command: Commands) -> Result<(), Report<DirectoryError>> {
    match command {
        Commands::Me { action } => match action {
            MeCommands::Show => print_json(&client.me().await?),
            MeCommands::Update {
                firstname,
                lastname,
                email,
            } => {
                let update = ProfileUpdate {
                    firstname,
                    lastname,
                    email,
                };
                print_json(&client.update_me(&update).await?);
            }
            MeCommands::Delete => client.delete_me().await?,
        },
        Commands::Org { action } => match action {
            OrgCommands::List => print_json(&client.organizations().await?),
            OrgCommands::Create { name } => print_json(&client.create_organization(&name).await?),
            OrgCommands::Show { id } => print_json(&client.organization(id).await?),
            OrgCommands::Rename { id, name } => {
                print_json(&client.rename_organization(id, &name).await?);
            }
            OrgCommands::Remove { id } => client.delete_organization(id).await?,
            OrgCommands::Members { id } => print_json(&client.members(id).await?),
            OrgCommands::Invitations { id } => print_json(&client.invitations(id).await?),
            OrgCommands::Invite { id, email } => print_json(&client.invite(id, &email).await?),
        },
        Commands::Invitation { action } => match action {
            InvitationCommands::Show { id } => print_json(&client.invitation(id).await?),
            InvitationCommands::Resend { id } => print_json(&client.resend_invitation(id).await?),
            InvitationCommands::Accept { code } => {
                print_json(&client.accept_invitation(&code).await?);
            }
        },
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("response serializes")
    );
}
