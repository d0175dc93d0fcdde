//! Config subcommand handlers.

use dialoguer::{Confirm, Input, Select};

use prtgdash_config::{self as config, KEYRING_SERVICE, Profile, SensorConfig};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{active_profile_name, available_profiles};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

const REDACTED: &str = "********";

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(),

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let mut cfg = config::load_config_or_default();
            for profile in cfg.profiles.values_mut() {
                if profile.passhash.is_some() {
                    profile.passhash = Some(REDACTED.into());
                }
            }
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_else(|_| format!("{c:#?}")),
                |c| c.default_profile.clone().unwrap_or_default(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: prtgdash config init");
                return Ok(());
            }

            let color = output::should_color(&global.color);
            let mut names: Vec<_> = cfg.profiles.keys().collect();
            names.sort();
            for name in names {
                let line = if name == default {
                    output::highlight(&format!("{name} *"), color)
                } else {
                    name.clone()
                };
                println!("{line}");
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: available_profiles(&cfg),
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }

        // ── SetPasshash ─────────────────────────────────────────────
        ConfigCommand::SetPasshash { profile } => {
            let cfg = config::load_config_or_default();
            let profile_name = profile.unwrap_or_else(|| active_profile_name(global, &cfg));

            if !cfg.profiles.contains_key(&profile_name) {
                return Err(CliError::ProfileNotFound {
                    available: available_profiles(&cfg),
                    name: profile_name,
                });
            }

            let passhash = rpassword::prompt_password("Passhash: ").map_err(prompt_err)?;
            if passhash.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "passhash".into(),
                    reason: "value cannot be empty".into(),
                });
            }

            store_in_keyring(&profile_name, passhash.trim())?;
            eprintln!("✓ Passhash stored in system keyring for profile '{profile_name}'");
            Ok(())
        }
    }
}

// ── Init: interactive wizard ────────────────────────────────────────

fn init() -> Result<(), CliError> {
    let config_path = config::config_path();
    eprintln!("prtgdash configuration wizard");
    eprintln!("   Config path: {}\n", config_path.display());

    let mut cfg = config::load_config_or_default();

    // 1. Profile name
    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default("default".into())
        .interact_text()
        .map_err(prompt_err)?;

    // 2. Server URL
    let server: String = Input::new()
        .with_prompt("PRTG server URL")
        .default("https://prtg.example.net".into())
        .validate_with(|s: &String| config::parse_server_url(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(prompt_err)?;

    // 3. Credentials
    let username: String = Input::new()
        .with_prompt("API user name")
        .interact_text()
        .map_err(prompt_err)?;

    let passhash = rpassword::prompt_password("Passhash: ").map_err(prompt_err)?;
    if username.trim().is_empty() || passhash.trim().is_empty() {
        return Err(CliError::Validation {
            field: "credentials".into(),
            reason: "user name and passhash cannot be empty".into(),
        });
    }

    let store_choices = &[
        "Store passhash in system keyring (recommended)",
        "Save to config file (plaintext)",
    ];
    let store_selection = Select::new()
        .with_prompt("Where to store the passhash?")
        .items(store_choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    let passhash_field = if store_selection == 0 {
        store_in_keyring(&profile_name, passhash.trim())?;
        eprintln!("   ✓ Passhash stored in system keyring");
        None
    } else {
        Some(passhash.trim().to_owned())
    };

    // 4. Sensors, in display order
    let mut sensors = Vec::new();
    while Confirm::new()
        .with_prompt("Add a sensor?")
        .default(sensors.is_empty())
        .interact()
        .map_err(prompt_err)?
    {
        let name: String = Input::new()
            .with_prompt("  Display name")
            .interact_text()
            .map_err(prompt_err)?;
        let id: String = Input::new()
            .with_prompt("  Sensor ID")
            .validate_with(|s: &String| {
                if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err("sensor IDs are numeric")
                }
            })
            .interact_text()
            .map_err(prompt_err)?;
        sensors.push(SensorConfig { name, id });
    }

    // 5. Build profile and write config
    let mut profile = Profile::new(server);
    profile.username = Some(username.trim().to_owned());
    profile.passhash = passhash_field;
    profile.sensors = sensors;

    cfg.profiles.insert(profile_name.clone(), profile);
    cfg.default_profile = Some(profile_name.clone());
    config::save_config(&cfg)?;

    eprintln!("\n✓ Configuration written to {}", config_path.display());
    eprintln!("  Active profile: {profile_name}");
    eprintln!("\n  Test it: prtgdash summary");
    Ok(())
}

fn store_in_keyring(profile_name: &str, passhash: &str) -> Result<(), CliError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &config::keyring_user(profile_name)).map_err(
        |e| CliError::Validation {
            field: "keyring".into(),
            reason: format!("failed to access keyring: {e}"),
        },
    )?;
    entry.set_password(passhash).map_err(|e| CliError::Validation {
        field: "keyring".into(),
        reason: format!("failed to store passhash in keyring: {e}"),
    })
}
