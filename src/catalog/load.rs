use super::Catalog;
use anyhow::{bail, Result};
use tracing::{info, warn};

/// Returns the process-wide catalog after running the integrity checks and
/// logging any findings. Fatal problems (duplicate names within a category)
/// abort the load; everything else is reported and tolerated.
pub fn load_catalog() -> Result<&'static Catalog> {
    let catalog = Catalog::get();

    if cfg!(feature = "no_checks") {
        info!("Catalog integrity checks skipped (no_checks).");
        return Ok(catalog);
    }

    let problems = catalog.check();
    if !problems.is_empty() {
        warn!("Found {} catalog problems:", problems.len());
        for problem in problems.iter() {
            warn!("- {:?}", problem);
        }
    }

    if problems.iter().any(|problem| problem.is_fatal()) {
        bail!("Catalog has fatal problems, refusing to use it.");
    }

    info!(
        "Catalog checked, {} garments across {} categories.",
        catalog.garments_count(),
        super::Category::ALL.len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = load_catalog().unwrap();
        assert!(catalog.garments_count() > 0);
    }
}
