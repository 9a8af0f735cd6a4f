use std::path::Path;

use anyhow::Context;

use crate::package::SensorPackage;

/// Leser pakker fra disk (JSON-liste med `{ "workout_type", "data" }`).
/// Feilmeldingen peker på elementet som ikke lot seg lese, f.eks. `[2].data`.
pub fn load_packages(path: impl AsRef<Path>) -> anyhow::Result<Vec<SensorPackage>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("kunne ikke lese {}", path.display()))?;

    let de = &mut serde_json::Deserializer::from_str(&contents);
    let packages: Vec<SensorPackage> = serde_path_to_error::deserialize(de)
        .with_context(|| format!("ugyldig pakkefil {}", path.display()))?;

    log::info!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// Lagrer pakker til disk som JSON (pretty-print).
pub fn save_packages(packages: &[SensorPackage], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(packages)?;
    std::fs::write(path, json)
        .with_context(|| format!("kunne ikke skrive {}", path.display()))?;
    log::info!("saved {} packages to {}", packages.len(), path.display());
    Ok(())
}
