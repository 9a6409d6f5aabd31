use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asset_core::{to_canonical_json, UuidNodeIdentity, DEFAULT_NAMESPACE};
use asset_domain::{build_asset_record, compute_breakpoints, AssetRecordInput, PluginOptions, UploadResult};
use clap::{Parser, Subcommand};
use cloudinary_assets::config;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "cloudinary-asset", about = "Construye nodos CloudinaryAsset a partir de resultados de upload")]
struct Cli {
    /// Archivo JSON con las opciones del plugin. Sin él se leen variables
    /// CLOUDINARY_* del entorno (.env incluido).
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Construye el record de un upload y lo imprime como JSON canónico.
    Node {
        /// Respuesta JSON del upload.
        #[arg(long)]
        upload: PathBuf,
        /// Id del nodo padre.
        #[arg(long)]
        parent: String,
        /// Namespace para los ids v5.
        #[arg(long, default_value = DEFAULT_NAMESPACE)]
        namespace: String,
        /// JSON indentado en lugar de canónico.
        #[arg(long)]
        pretty: bool,
    },
    /// Imprime los breakpoints por defecto para un ancho.
    Breakpoints {
        #[arg(long)]
        width: u32,
    },
}

fn load_options(path: Option<&Path>) -> Result<PluginOptions> {
    let opts = match path {
        Some(p) => config::load_options_file(p)?,
        None => config::options_from_env()?,
    };
    Ok(opts)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let options = load_options(cli.options.as_deref()).context("cargando opciones del plugin")?;

    match cli.command {
        Commands::Node { upload, parent, namespace, pretty } => {
            let raw = fs::read_to_string(&upload).with_context(|| format!("leyendo {}", upload.display()))?;
            let result = UploadResult::from_json_str(&raw)?;
            let identity = UuidNodeIdentity::new(&namespace);
            let record = build_asset_record(AssetRecordInput { upload: &result,
                                                               parent_id: &parent,
                                                               options: &options,
                                                               identity: &identity })?;
            info!("node {} ({} breakpoints)", record.id, record.breakpoints.len());
            let value = serde_json::to_value(&record)?;
            if pretty {
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", to_canonical_json(&value));
            }
        }
        Commands::Breakpoints { width } => {
            let bps: Vec<String> = compute_breakpoints(width, &options).iter().map(u32::to_string).collect();
            println!("{}", bps.join(","));
        }
    }
    Ok(())
}
