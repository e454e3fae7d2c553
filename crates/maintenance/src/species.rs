//! The update-species maintenance routine.

use sgbirds_db::models::species::CreateSpecies;
use sgbirds_db::repositories::SpeciesRepo;
use sgbirds_db::DbPool;

/// Populate the species lookup table from `allbirds`, filtered down to the
/// codes in the given regional list file.
///
/// The list file is a JSON array of species codes; codes are lowercased
/// before matching, as `allbirds` stores them.
pub async fn update_species_table(pool: &DbPool, list_path: &str) -> anyhow::Result<()> {
    let codes = load_code_list(list_path)?;
    tracing::info!(count = codes.len(), list = %list_path, "Loaded species code list");

    let rows = SpeciesRepo::codes_in_allbirds(pool, &codes).await?;
    if rows.is_empty() {
        tracing::warn!("No matching rows in allbirds; nothing to insert");
        return Ok(());
    }

    if rows.len() < codes.len() {
        tracing::warn!(
            matched = rows.len(),
            requested = codes.len(),
            "Some codes from the list are missing from allbirds"
        );
    }

    let to_insert: Vec<CreateSpecies> = rows.into_iter().map(CreateSpecies::from).collect();
    let inserted = SpeciesRepo::insert_batch(pool, &to_insert).await?;

    tracing::info!(inserted, "Species table updated");
    Ok(())
}

/// Read and normalize the regional species-code list.
fn load_code_list(path: &str) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read species list {path}: {e}"))?;
    let codes: Vec<String> = serde_json::from_str(&text)
        .map_err(|e| anyhow::anyhow!("Species list {path} is not a JSON string array: {e}"))?;
    Ok(codes.into_iter().map(|c| c.to_lowercase()).collect())
}
