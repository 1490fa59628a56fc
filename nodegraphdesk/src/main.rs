use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use argh::FromArgs;
use nodegraphdesk::app::{self, Dispatcher, HostContext};
use nodegraphdesk::paths::default_config_path;
use nodegraphdesk::platform::{PaneInfo, StdoutManipulator, TerminalHost};
use nodegraphdesk::store::{JsonFileStore, MappingStore};
use nodegraphdesk_proto::{Choice, UiEvent};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// nodegraphdesk - bind node-graph contexts to desktops
#[derive(FromArgs)]
struct Cli {
    /// configuration document (default: $NODEGRAPHDESK/nodegraphdesk_config.json)
    #[argh(option)]
    config: Option<PathBuf>,

    #[argh(subcommand)]
    command: Option<SubCommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Init(InitCmd),
    Show(ShowCmd),
    List(ListCmd),
    Assign(AssignCmd),
    Clear(ClearCmd),
    ContextChanged(ContextChangedCmd),
    Key(KeyCmd),
    Alias(AliasCmd),
    Unalias(UnaliasCmd),
    Version(VersionCmd),
}

/// Write a default configuration document if none exists
#[derive(FromArgs)]
#[argh(subcommand, name = "init")]
struct InitCmd {}

/// Print the configuration document
#[derive(FromArgs)]
#[argh(subcommand, name = "show")]
struct ShowCmd {}

/// List desktop bindings in order
#[derive(FromArgs)]
#[argh(subcommand, name = "list")]
struct ListCmd {}

/// Assign the pane's context to a desktop (reassign or remove if bound)
#[derive(FromArgs)]
#[argh(subcommand, name = "assign")]
struct AssignCmd {
    /// current desktop
    #[argh(option)]
    desktop: String,
    /// pane under the cursor
    #[argh(option)]
    pane: String,
    /// context type of the pane's network
    #[argh(option)]
    context: Option<String>,
    /// network path shown by the pane
    #[argh(option)]
    path: Option<String>,
    /// answer for the dialog: reassign, remove, cancel
    #[argh(option)]
    choice: Option<String>,
}

/// Remove every desktop binding
#[derive(FromArgs)]
#[argh(subcommand, name = "clear")]
struct ClearCmd {
    /// do not ask for confirmation
    #[argh(switch)]
    yes: bool,
}

/// Report a pane's context change; prints host commands as JSON lines
#[derive(FromArgs)]
#[argh(subcommand, name = "context-changed")]
struct ContextChangedCmd {
    /// current desktop
    #[argh(option)]
    desktop: String,
    /// pane whose context changed
    #[argh(option)]
    pane: String,
    /// previous network path
    #[argh(option)]
    old: String,
    /// new network path
    #[argh(option)]
    new: String,
    /// node type of the new network (default: derived from the path)
    #[argh(option)]
    node_type: Option<String>,
    /// comma-separated desktops that exist in the host
    #[argh(option)]
    desktops: Option<String>,
}

/// Deliver a key press to the hotkey handlers
#[derive(FromArgs)]
#[argh(subcommand, name = "key")]
struct KeyCmd {
    /// key identifier
    #[argh(positional)]
    key: String,
    /// current desktop
    #[argh(option)]
    desktop: String,
    /// pane under the cursor
    #[argh(option)]
    pane: Option<String>,
    /// network path shown by the pane
    #[argh(option)]
    path: Option<String>,
    /// context type of the pane's network
    #[argh(option)]
    context: Option<String>,
    /// answer for the assign dialog: reassign, remove, cancel
    #[argh(option)]
    choice: Option<String>,
    /// confirm clearing without asking
    #[argh(switch)]
    yes: bool,
}

/// Declare two context types interchangeable
#[derive(FromArgs)]
#[argh(subcommand, name = "alias")]
struct AliasCmd {
    /// canonical type name
    #[argh(positional)]
    canonical: String,
    /// alias type name
    #[argh(positional)]
    alias: String,
}

/// Remove the alias pair a type name belongs to
#[derive(FromArgs)]
#[argh(subcommand, name = "unalias")]
struct UnaliasCmd {
    /// canonical or alias type name
    #[argh(positional)]
    name: String,
}

/// Show version information
#[derive(FromArgs)]
#[argh(subcommand, name = "version")]
struct VersionCmd {}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    let Some(command) = cli.command else {
        let args: Vec<&str> = vec!["nodegraphdesk", "--help"];
        if let Err(e) = Cli::from_args(&args[..1], &args[1..]) {
            println!("{}", e.output);
        }
        return Ok(());
    };

    // stdout carries host commands
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let store = JsonFileStore::new(path);
    tracing::debug!("Using configuration {}", store.path().display());

    run(command, &store)
}

fn run(command: SubCommand, store: &JsonFileStore) -> Result<()> {
    let manipulator = StdoutManipulator;

    match command {
        SubCommand::Version(_) => {
            println!("nodegraphdesk {}", VERSION);
        }
        SubCommand::Init(_) => {
            if store.ensure_exists()? {
                println!("Created {}", store.path().display());
            } else {
                println!("{} already exists", store.path().display());
            }
        }
        SubCommand::Show(_) => {
            let config = store.load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        SubCommand::List(_) => {
            let config = store.load()?;
            for (desktop, binding) in config.nodegraphdesk_map.iter() {
                println!("{} -> {} [{}]", desktop, binding.context_type, binding.pane_name);
            }
        }
        SubCommand::Assign(cmd) => {
            if cmd.context.is_none() && cmd.path.is_none() {
                bail!("assign requires --context or --path");
            }
            let host = TerminalHost::new(cmd.desktop)
                .with_pane(Some(PaneInfo::new(cmd.pane, cmd.path.unwrap_or_default())))
                .with_node_type(cmd.context)
                .with_choice(parse_choice(cmd.choice.as_deref())?);
            app::assign_under_cursor(&context(&host, &manipulator, store))?;
        }
        SubCommand::Clear(cmd) => {
            let host = TerminalHost::new("").with_confirm(cmd.yes.then_some(true));
            app::clear_all(&context(&host, &manipulator, store))?;
        }
        SubCommand::ContextChanged(cmd) => {
            let desktops = cmd
                .desktops
                .as_deref()
                .map(parse_list)
                .unwrap_or_default();
            let host = TerminalHost::new(cmd.desktop)
                .with_desktops(desktops)
                .with_node_type(cmd.node_type);
            let event = UiEvent::context_changed(cmd.pane, cmd.old, cmd.new);
            Dispatcher::with_default_handlers().dispatch(&event, &context(&host, &manipulator, store));
        }
        SubCommand::Key(cmd) => {
            let pane = cmd
                .pane
                .map(|name| PaneInfo::new(name, cmd.path.unwrap_or_default()));
            let host = TerminalHost::new(cmd.desktop)
                .with_pane(pane)
                .with_node_type(cmd.context)
                .with_choice(parse_choice(cmd.choice.as_deref())?)
                .with_confirm(cmd.yes.then_some(true));
            let event = UiEvent::key_press(cmd.key);
            Dispatcher::with_default_handlers().dispatch(&event, &context(&host, &manipulator, store));
        }
        SubCommand::Alias(cmd) => {
            let mut config = store.load()?;
            config.set_alias(&cmd.canonical, &cmd.alias);
            store.save(&config)?;
            tracing::info!("Aliased {} <-> {}", cmd.canonical, cmd.alias);
        }
        SubCommand::Unalias(cmd) => {
            let mut config = store.load()?;
            if !config.remove_alias(&cmd.name) {
                bail!("No alias involves {}", cmd.name);
            }
            store.save(&config)?;
            tracing::info!("Removed alias for {}", cmd.name);
        }
    }

    Ok(())
}

fn context<'a>(
    host: &'a TerminalHost,
    manipulator: &'a StdoutManipulator,
    store: &'a JsonFileStore,
) -> HostContext<'a> {
    HostContext {
        system: host,
        dialogs: host,
        manipulator,
        store,
    }
}

fn parse_choice(s: Option<&str>) -> Result<Option<Choice>> {
    s.map(|s| {
        Choice::parse(s)
            .with_context(|| format!("Unknown choice: {} (use reassign, remove, cancel)", s))
    })
    .transpose()
}

fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}
