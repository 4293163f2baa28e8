use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::catalog::InMemoryCatalog;
use crate::error::Result;
use crate::models::{FoodId, Macros, ReferenceFood};

/// One catalog row as it appears in an export file.
///
/// Accepts both the canonical English column names and the Portuguese ones
/// used by the food-composition exports. This is the only place that mapping
/// happens.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(alias = "codigo")]
    id: String,

    #[serde(alias = "nome")]
    name: String,

    #[serde(alias = "porcao_referencia", default)]
    reference_portion_label: String,

    #[serde(alias = "peso_referencia_g")]
    reference_weight_grams: f64,

    #[serde(alias = "kcal_por_referencia")]
    energy_kcal: f64,

    #[serde(alias = "proteina_g")]
    protein_grams: f64,

    #[serde(alias = "carboidrato_g")]
    carb_grams: f64,

    #[serde(alias = "gordura_g")]
    fat_grams: f64,

    #[serde(alias = "fibra_g", default)]
    fiber_grams: Option<f64>,

    #[serde(alias = "sodio_mg", default)]
    sodium_milligrams: Option<f64>,
}

impl From<CatalogRecord> for ReferenceFood {
    fn from(r: CatalogRecord) -> Self {
        ReferenceFood {
            id: FoodId(r.id),
            name: r.name,
            reference_portion_label: r.reference_portion_label,
            reference_weight_grams: r.reference_weight_grams,
            reference_macros: Macros::new(r.energy_kcal, r.protein_grams, r.carb_grams, r.fat_grams),
            fiber_grams: r.fiber_grams,
            sodium_milligrams: r.sodium_milligrams,
        }
    }
}

/// Rows are kept as-is; the planner rejects invalid foods when they are used.
fn into_catalog(records: Vec<CatalogRecord>) -> InMemoryCatalog {
    let foods: Vec<ReferenceFood> = records.into_iter().map(ReferenceFood::from).collect();
    for food in &foods {
        if let Err(e) = food.validate() {
            warn!("catalog entry will be rejected on use: {}", e);
        }
    }
    InMemoryCatalog::new(foods)
}

/// Parse a JSON array of catalog rows.
pub fn parse_catalog_json(content: &str) -> Result<InMemoryCatalog> {
    let records: Vec<CatalogRecord> = serde_json::from_str(content)?;
    Ok(into_catalog(records))
}

/// Read catalog rows from CSV with a header line.
pub fn read_catalog_csv<R: Read>(reader: R) -> Result<InMemoryCatalog> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let records = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<CatalogRecord>, csv::Error>>()?;
    Ok(into_catalog(records))
}

/// Load a catalog file, choosing CSV or JSON by extension.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<InMemoryCatalog> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let catalog = if is_csv {
        read_catalog_csv(fs::File::open(path)?)?
    } else {
        parse_catalog_json(&fs::read_to_string(path)?)?
    };

    info!(path = %path.display(), foods = catalog.len(), "loaded food catalog");
    Ok(catalog)
}
