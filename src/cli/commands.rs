// CLI command definitions

use super::display;
use crate::{
    DEFAULT_PORT, HttpScheme, ProxmoxClient, ProxmoxResult, SessionStore, Transport, VmAction,
    ValidationError,
};
use clap::{Args, Subcommand};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in to a Proxmox server and store the session
    Login(LoginCommand),

    /// Renew the stored ticket and report whether the session is still valid
    Validate(ValidateCommand),

    /// Manage Proxmox cluster nodes
    #[command(subcommand)]
    Nodes(NodeCommand),

    /// Manage Proxmox virtual machines (QEMU)
    #[command(subcommand)]
    Vm(VmCommand),

    /// Manage Proxmox storage
    #[command(subcommand)]
    Storage(StorageCommand),

    /// Inspect the Proxmox cluster
    #[command(subcommand)]
    Cluster(ClusterCommand),
}

#[derive(Args, Debug)]
pub struct LoginCommand {
    /// Proxmox server hostname or IP address
    #[arg(short = 's', long)]
    pub server: String,

    /// Username for Proxmox (PAM realm)
    #[arg(short = 'u', long)]
    pub username: String,

    /// Proxmox server port
    #[arg(short = 'P', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// HTTP scheme (http or https)
    #[arg(short = 'S', long = "http-scheme", alias = "httpScheme", default_value = "https")]
    pub scheme: HttpScheme,

    /// Password; read from stdin when omitted
    #[arg(short = 'p', long, env = "PROXMOX_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Trust SSL certificates (skip certificate validation)
    #[arg(short = 't', long = "trust")]
    pub trust: bool,
}

#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Trust SSL certificates (skip certificate validation)
    #[arg(short = 't', long = "trust")]
    pub trust: bool,
}

#[derive(Args, Debug)]
pub struct NodeName {
    /// Name of the node
    #[arg(short = 'n', long = "name")]
    pub name: String,
}

#[derive(Subcommand, Debug)]
pub enum NodeCommand {
    /// List all cluster nodes
    List,
    /// Show a single node from the node list
    Show(NodeName),
    /// Get detailed status for a specific node
    Status(NodeName),
    /// Get version information for a specific node
    Version(NodeName),
}

#[derive(Args, Debug)]
pub struct VmTarget {
    /// Name of the node
    #[arg(short = 'n', long)]
    pub node: String,

    /// VM ID
    #[arg(short = 'i', long)]
    pub vmid: u64,
}

#[derive(Subcommand, Debug)]
pub enum VmCommand {
    /// List all virtual machines on a node
    List {
        /// Name of the node
        #[arg(short = 'n', long)]
        node: String,
    },
    /// Get the status of a specific VM
    Status(VmTarget),
    /// Get the configuration of a specific VM
    Config(VmTarget),
    /// Start a virtual machine
    Start(VmTarget),
    /// Stop a virtual machine immediately
    Stop(VmTarget),
    /// Shut down a virtual machine gracefully
    Shutdown(VmTarget),
    /// Reboot a virtual machine
    Reboot(VmTarget),
    /// Reset a virtual machine
    Reset(VmTarget),
    /// Suspend a virtual machine
    Suspend(VmTarget),
    /// Resume a suspended virtual machine
    Resume(VmTarget),
    /// Delete a virtual machine
    Delete(VmTarget),
}

#[derive(Subcommand, Debug)]
pub enum StorageCommand {
    /// List all storage
    List,
    /// List content of a specific storage
    Content {
        /// Name of the node
        #[arg(short = 'n', long)]
        node: String,
        /// Name of the storage
        #[arg(short = 's', long)]
        storage: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClusterCommand {
    /// List all cluster resources
    Resources {
        /// Filter by resource type (qemu, lxc, node, storage, ...)
        #[arg(short = 't', long = "type")]
        resource_type: Option<String>,
    },
    /// Get cluster status
    Status,
}

impl Commands {
    /// Whether the subcommand itself asked to skip certificate validation.
    pub fn trusts_invalid_certs(&self) -> bool {
        match self {
            Commands::Login(cmd) => cmd.trust,
            Commands::Validate(cmd) => cmd.trust,
            _ => false,
        }
    }

    /// Runs the command, printing its output to stdout.
    pub async fn execute<T, S>(self, client: &ProxmoxClient<T, S>) -> ProxmoxResult<ExitCode>
    where
        T: Transport,
        S: SessionStore,
    {
        match self {
            Commands::Login(cmd) => cmd.execute(client).await,
            Commands::Validate(_) => {
                if client.validate().await {
                    println!("Session is valid.");
                    Ok(ExitCode::SUCCESS)
                } else {
                    println!("Session is invalid.");
                    Ok(ExitCode::FAILURE)
                }
            }
            Commands::Nodes(cmd) => cmd.execute(client).await,
            Commands::Vm(cmd) => cmd.execute(client).await,
            Commands::Storage(cmd) => cmd.execute(client).await,
            Commands::Cluster(cmd) => cmd.execute(client).await,
        }
    }
}

impl LoginCommand {
    async fn execute<T, S>(self, client: &ProxmoxClient<T, S>) -> ProxmoxResult<ExitCode>
    where
        T: Transport,
        S: SessionStore,
    {
        let password = match self.password {
            Some(password) => password,
            None => prompt_password()?,
        };
        let session = client
            .login(&self.server, self.port, self.scheme, &self.username, &password)
            .await?;
        println!(
            "Logged in to {} as {}. Session saved to {}",
            session.server(),
            session.auth().username(),
            client.session_path().display()
        );
        Ok(ExitCode::SUCCESS)
    }
}

impl NodeCommand {
    async fn execute<T, S>(self, client: &ProxmoxClient<T, S>) -> ProxmoxResult<ExitCode>
    where
        T: Transport,
        S: SessionStore,
    {
        let output = match self {
            NodeCommand::List => display::render_nodes(&client.nodes().await?),
            NodeCommand::Show(NodeName { name }) => display::render_node(&client.node(&name).await?),
            NodeCommand::Status(NodeName { name }) => {
                display::render_node_status(&name, &client.node_status(&name).await?)
            }
            NodeCommand::Version(NodeName { name }) => {
                display::render_node_version(&name, &client.node_version(&name).await?)
            }
        };
        println!("{}", output.trim_end());
        Ok(ExitCode::SUCCESS)
    }
}

impl VmCommand {
    async fn execute<T, S>(self, client: &ProxmoxClient<T, S>) -> ProxmoxResult<ExitCode>
    where
        T: Transport,
        S: SessionStore,
    {
        let (target, action) = match self {
            VmCommand::List { node } => {
                println!("{}", display::render_vms(&node, &client.vms(&node).await?));
                return Ok(ExitCode::SUCCESS);
            }
            VmCommand::Status(t) => {
                let status = client.vm_status(&t.node, t.vmid).await?;
                println!("{}", display::render_vm_status(t.vmid, &status).trim_end());
                return Ok(ExitCode::SUCCESS);
            }
            VmCommand::Config(t) => {
                let config = client.vm_config(&t.node, t.vmid).await?;
                println!("{}", display::render_vm_config(t.vmid, &config).trim_end());
                return Ok(ExitCode::SUCCESS);
            }
            VmCommand::Delete(t) => {
                let task = client.delete_vm(&t.node, t.vmid).await?;
                println!("VM {} delete initiated. Task ID: {}", t.vmid, task);
                return Ok(ExitCode::SUCCESS);
            }
            VmCommand::Start(t) => (t, VmAction::Start),
            VmCommand::Stop(t) => (t, VmAction::Stop),
            VmCommand::Shutdown(t) => (t, VmAction::Shutdown),
            VmCommand::Reboot(t) => (t, VmAction::Reboot),
            VmCommand::Reset(t) => (t, VmAction::Reset),
            VmCommand::Suspend(t) => (t, VmAction::Suspend),
            VmCommand::Resume(t) => (t, VmAction::Resume),
        };

        let task = client.vm_action(&target.node, target.vmid, action).await?;
        println!("VM {} {} initiated. Task ID: {}", target.vmid, action, task);
        Ok(ExitCode::SUCCESS)
    }
}

impl StorageCommand {
    async fn execute<T, S>(self, client: &ProxmoxClient<T, S>) -> ProxmoxResult<ExitCode>
    where
        T: Transport,
        S: SessionStore,
    {
        let output = match self {
            StorageCommand::List => display::render_storages(&client.storages().await?),
            StorageCommand::Content { node, storage } => display::render_storage_content(
                &storage,
                &client.storage_content(&node, &storage).await?,
            ),
        };
        println!("{}", output);
        Ok(ExitCode::SUCCESS)
    }
}

impl ClusterCommand {
    async fn execute<T, S>(self, client: &ProxmoxClient<T, S>) -> ProxmoxResult<ExitCode>
    where
        T: Transport,
        S: SessionStore,
    {
        let output = match self {
            ClusterCommand::Resources { resource_type } => display::render_cluster_resources(
                &client.cluster_resources().await?,
                resource_type.as_deref(),
            ),
            ClusterCommand::Status => display::render_cluster_status(&client.cluster_status().await?),
        };
        println!("{}", output.trim_end());
        Ok(ExitCode::SUCCESS)
    }
}

/// Reads a password line from stdin. Input is not masked.
fn prompt_password() -> ProxmoxResult<String> {
    eprint!("Enter Password: ");
    io::stderr().flush().ok();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| ValidationError::Field {
            field: "password".to_string(),
            message: format!("could not be read: {}", e),
        })?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "must not be empty".to_string(),
        }
        .into());
    }
    Ok(password)
}
