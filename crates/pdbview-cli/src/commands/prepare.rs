use crate::cli::PrepareArgs;
use crate::error::{CliError, Result};
use crate::fetch;
use pdbview::core::models::atom::AtomRecord;
use pdbview::core::utils::elements::element_color;
use pdbview::workflows::prepare::{PreparedStructure, prepare_structure};
use serde_json::{Value, json};
use std::io::Read;
use std::path::Path;
use tracing::info;

pub async fn run(args: PrepareArgs) -> Result<()> {
    let text = load_input(&args).await?;

    let prepared = prepare_structure(&text);
    info!(
        "Prepared {} atom records and {} heteroatom records.",
        prepared.atoms.len(),
        prepared.hetatms.len()
    );

    let document = render_document(&prepared);
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Wrote render document to {:?}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

async fn load_input(args: &PrepareArgs) -> Result<String> {
    if let Some(id) = &args.id {
        return fetch::fetch_pdb(id).await;
    }

    let path = args
        .input
        .as_deref()
        .ok_or_else(|| CliError::Argument("either an input path or --id is required".into()))?;

    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes a prepared structure into the JSON document viewers consume.
///
/// Each record carries its normalized position, identity fields, and a CPK
/// display color derived from the element symbol.
fn render_document(prepared: &PreparedStructure) -> Value {
    json!({
        "atoms": group_values(&prepared.atoms),
        "hetatms": group_values(&prepared.hetatms),
    })
}

fn group_values(records: &[AtomRecord]) -> Vec<Value> {
    records.iter().map(record_value).collect()
}

fn record_value(record: &AtomRecord) -> Value {
    json!({
        "position": [record.position.x, record.position.y, record.position.z],
        "element": record.element,
        "atom_name": record.atom_name,
        "residue_name": record.residue_name,
        "chain_id": record.chain_id,
        "residue_seq": record.residue_seq,
        "color": element_color(&record.element),
    })
}
