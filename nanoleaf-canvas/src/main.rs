use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::info;

use nanoleaf_canvas_lib::animation::pattern::Pattern;
use nanoleaf_canvas_lib::animation::{
    ColorData, CommandType, CustomAnimation, EffectType, PaletteColor,
};
use nanoleaf_canvas_lib::control_interface::NanoLeafClient;
use nanoleaf_canvas_lib::layout::Layout;
use nanoleaf_canvas_lib::util::config::{DeviceConfig, Scheme};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    handle_cli(cli).await
}

/// This struct defines the command line interface of the application
#[derive(Parser)]
#[clap(
    name = "nanoleaf_canvas",
    about = "Drives Nanoleaf light panels with custom animations",
    version
)]
pub struct Cli {
    /// YAML file with the device address, port, scheme and auth file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Sets the IP address or host name of the device
    #[clap(long, global = true)]
    address: Option<String>,

    /// Sets the port of the device API
    #[clap(long, global = true)]
    port: Option<u16>,

    /// Sets the URL scheme
    #[clap(long, value_enum, global = true)]
    scheme: Option<Scheme>,

    /// Sets the file holding the auth token
    #[clap(long, global = true)]
    auth_path: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Subcommands available for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Requests a new auth token and prints it as the contents of an auth file.
    ///
    /// Hold the power button for 5-7 seconds before running this.
    #[clap(name = "pair")]
    Pair,
    /// Prints the device information.
    #[clap(name = "info")]
    Info,
    /// Prints the panel layout with logical names.
    #[clap(name = "layout")]
    Layout,
    /// Translates a logical panel name to the device panel id.
    #[clap(name = "translate")]
    Translate { name: String },
    /// Writes a random animation across all panels.
    #[clap(name = "random-animation")]
    RandomAnimation {
        /// The colors to pick frames from
        #[clap(long, value_enum, use_value_delimiter = true, default_values_t = [PaletteColor::Green, PaletteColor::Blue, PaletteColor::Purple])]
        colors: Vec<PaletteColor>,

        /// The maximum number of frames per panel
        #[clap(long, default_value_t = 5)]
        max_frames: usize,

        /// The effect type to write
        #[clap(long, value_enum, default_value_t = EffectType::Custom)]
        anim_type: EffectType,

        /// Whether the device stores the effect or only displays it
        #[clap(long, value_enum, default_value_t = CommandType::Display)]
        command: CommandType,

        /// Whether the animation loops
        #[clap(long = "loop", action = ArgAction::Set, default_value_t = true)]
        looping: bool,
    },
    /// Gets the on/off state.
    #[clap(name = "get-state")]
    GetState,
    /// Turns the panels on or off.
    #[clap(name = "set-state")]
    SetState {
        #[clap(action = ArgAction::Set)]
        on: bool,
    },
    /// Gets the brightness.
    #[clap(name = "get-brightness")]
    GetBrightness,
    /// Sets the brightness (0-100).
    #[clap(name = "set-brightness")]
    SetBrightness {
        #[clap(value_parser = clap::value_parser!(u8).range(0..=100))]
        value: u8,

        /// Seconds over which to fade to the new brightness
        #[clap(long)]
        duration: Option<u32>,
    },
    /// Gets the hue.
    #[clap(name = "get-hue")]
    GetHue,
    /// Sets the hue (0-360).
    #[clap(name = "set-hue")]
    SetHue {
        #[clap(value_parser = clap::value_parser!(u16).range(0..=360))]
        value: u16,
    },
    /// Gets the color temperature.
    #[clap(name = "get-ct")]
    GetCt,
    /// Sets the color temperature in Kelvin (1200-6500).
    #[clap(name = "set-ct")]
    SetCt {
        #[clap(value_parser = clap::value_parser!(u16).range(1200..=6500))]
        value: u16,
    },
    /// Gets the effect currently playing.
    #[clap(name = "get-effect")]
    GetEffect,
    /// Lists the effects stored on the device.
    #[clap(name = "list-effects")]
    ListEffects,
    /// Plays a stored effect.
    #[clap(name = "select-effect")]
    SelectEffect { name: String },
    /// Deletes a stored effect.
    #[clap(name = "delete-effect")]
    DeleteEffect { name: String },
}

impl Cli {
    /// Builds the device configuration, with flags taking precedence over the config file.
    fn device_config(&self) -> Result<DeviceConfig> {
        let mut config = match (&self.config, &self.address) {
            (Some(path), _) => DeviceConfig::from_yaml_file(path)?,
            (None, Some(address)) => DeviceConfig::new(address.as_str()),
            (None, None) => return Err(anyhow!("Either --config or --address is required")),
        };
        if let Some(address) = &self.address {
            config.address = address.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(scheme) = self.scheme {
            config.scheme = scheme;
        }
        if let Some(auth_path) = &self.auth_path {
            config.auth_path = auth_path.clone();
        }
        Ok(config)
    }
}

async fn handle_cli(cli: Cli) -> Result<()> {
    let config = cli.device_config()?;

    match cli.command {
        Commands::Pair => {
            let token = NanoLeafClient::request_token(&config).await?;
            println!("{}", token.to_json()?);
            Ok(())
        }
        command => handle_device_call(NanoLeafClient::new(config)?, command).await,
    }
}

/// Runs a command that needs the auth token.
async fn handle_device_call(client: NanoLeafClient, command: Commands) -> Result<()> {
    match command {
        Commands::Pair => return Err(anyhow!("Pairing does not use an existing token")),
        Commands::Info => {
            let device_info = client.get_info_raw().await?;
            println!("{}", serde_json::to_string_pretty(&device_info)?);
        }
        Commands::Layout => {
            let layout = Layout::detect(&client).await?;
            layout.print_layout();
        }
        Commands::Translate { name } => {
            let layout = Layout::detect(&client).await?;
            println!("{}", layout.translate(&name)?);
        }
        Commands::RandomAnimation {
            colors,
            max_frames,
            anim_type,
            command,
            looping,
        } => {
            let palette: Vec<ColorData> = colors.into_iter().map(Into::into).collect();
            let layout = Layout::detect(&client).await?;
            layout.print_layout();

            let anim_data =
                Pattern::random_animation(&layout, &palette, max_frames, &mut rand::thread_rng())?;
            let animation = CustomAnimation::new(anim_data)
                .with_command(command)
                .with_anim_type(anim_type)
                .with_loop(looping);
            let payload = animation.payload();
            info!("Payload: {}", serde_json::to_string(&payload)?);

            println!("{}", client.write_effect(&payload).await?);
        }
        Commands::GetState => {
            let state = client.get_state().await?;
            println!("On: {}", state.value);
        }
        Commands::SetState { on } => {
            println!("{}", client.put_state(on).await?);
        }
        Commands::GetBrightness => {
            let brightness = client.get_brightness().await?;
            println!("Brightness: {:?}", brightness);
        }
        Commands::SetBrightness { value, duration } => {
            println!("{}", client.put_brightness(value, duration).await?);
        }
        Commands::GetHue => {
            let hue = client.get_hue().await?;
            println!("Hue: {:?}", hue);
        }
        Commands::SetHue { value } => {
            println!("{}", client.put_hue(value).await?);
        }
        Commands::GetCt => {
            let ct = client.get_ct().await?;
            println!("Color temperature: {:?}", ct);
        }
        Commands::SetCt { value } => {
            println!("{}", client.put_ct(value).await?);
        }
        Commands::GetEffect => {
            println!("Current effect: {}", client.get_effect().await?);
        }
        Commands::ListEffects => {
            for effect in client.get_effects().await? {
                println!("{}", effect);
            }
        }
        Commands::SelectEffect { name } => {
            println!("{}", client.select_effect(&name).await?);
        }
        Commands::DeleteEffect { name } => {
            println!("{}", client.delete_effect(&name).await?);
        }
    }

    Ok(())
}
