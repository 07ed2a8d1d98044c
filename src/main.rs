mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use filterscript::config;
use filterscript::filter::{library, load_file, ActionType, FilterDefinition, Key};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    // Load config: explicit --config path, or auto-detect filterscript.toml / user config
    let mut cfg = match cli.config.clone().or_else(config::find_config) {
        Some(path) => match config::load_config(&path) {
            Some(cfg) => {
                log::info!("Loaded config from {}", path.display());
                cfg
            }
            None => {
                log::warn!("Failed to load config from {}", path.display());
                config::Config::default()
            }
        },
        None => config::Config::default(),
    };

    cfg.apply_cli(&cli.dir, &cli.ext);

    if cli.list {
        let mut dirs = cfg.filters.dirs.clone();
        dirs.push(library::find_filters_dir());
        return list_filters(&dirs, &cfg.filters.extensions);
    }

    if cli.files.is_empty() {
        anyhow::bail!("No filter files given (use --list to browse the filter directories)");
    }

    let keys = cli
        .press
        .iter()
        .map(|k| {
            k.parse::<Key>()
                .map_err(|_| anyhow::anyhow!("Unknown key '{}'", k))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut failed = 0;
    for path in &cli.files {
        let def = match load_file(path) {
            Ok(def) => def,
            Err(err) => {
                log::error!("{}: {}", path.display(), err);
                failed += 1;
                continue;
            }
        };

        if cli.json {
            let json = serde_json::to_string_pretty(&def)
                .with_context(|| format!("Failed to serialize {}", path.display()))?;
            println!("{}", json);
        } else {
            print_summary(&def);
        }
        if cli.source {
            println!("{}", def.source);
        }
        if !keys.is_empty() {
            print_key_presses(&def, &keys);
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} filters failed to load", failed, cli.files.len());
    }
    Ok(())
}

fn list_filters(dirs: &[std::path::PathBuf], extensions: &[String]) -> Result<()> {
    let files = library::list_filters(dirs, extensions)?;
    if files.is_empty() {
        println!("No filters found in {:?}", dirs);
        return Ok(());
    }

    println!("Available filters:");
    for (path, result) in library::load_all(&files) {
        match result {
            Ok(def) => println!("  {:<24} {}", def.name, def.description),
            Err(err) => println!("  {:<24} ({})", path.display(), err),
        }
    }
    Ok(())
}

fn print_summary(def: &FilterDefinition) {
    println!("{}", def.name);
    if !def.description.is_empty() {
        println!("  {}", def.description);
    }
    println!(
        "  separable: {}, single invocation: {}",
        def.is_separable, def.is_single_invocation
    );

    for param in &def.parameters {
        let (min, max) = param.bounds();
        println!(
            "  param {:<16} {:<5} location {:<3} default {} [{}, {}]",
            param.name,
            param.value_kind(),
            param.location,
            param.default_value(),
            min,
            max
        );
        for slot in [ActionType::OnAdd, ActionType::OnSubtract] {
            if let Some(next) = param.trigger(slot, param.default_value()) {
                println!("    {:?}: {} -> {}", slot, param.default_value(), next);
            }
        }
        let keys = param.keys();
        if !keys.is_empty() {
            let names: Vec<&str> = keys.iter().map(|k| k.name()).collect();
            println!("    keys: {}", names.join(", "));
        }
    }

    for (name, binding) in def.texture_bindings() {
        println!("  texture {:<14} binding {}", name, binding);
    }
}

fn print_key_presses(def: &FilterDefinition, keys: &[Key]) {
    for param in &def.parameters {
        let mut value = param.default_value();
        let mut touched = false;
        for &key in keys {
            if let Some(next) = param.press(key, value) {
                value = next;
                touched = true;
            }
        }
        if touched {
            println!("  {} = {}", param.name, value);
        }
    }
}
